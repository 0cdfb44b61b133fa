//! Shared fixtures: a family tree of `Person` records with a pet `Cat`.

#![allow(dead_code)]

use std::{collections::HashMap, time::Duration};

use fieldfilter::Record;

#[derive(Record, Clone, Debug, Default, PartialEq)]
pub struct Person {
    #[record(rename = "Age")]
    pub age: i64,
    #[record(rename = "Height", acl = "tester")]
    pub height: i32,
    #[record(rename = "Groups", acl = "tester")]
    pub groups: HashMap<String, bool>,
    #[record(rename = "FullName", acl = "tester")]
    pub full_name: Vec<String>,
    #[record(rename = "Nickname", acl = "*")]
    pub nickname: String,
    #[record(rename = "Mother", acl = "tester")]
    pub mother: Option<Box<Person>>,
    #[record(rename = "Father")]
    pub father: Option<Box<Person>>,
    #[record(rename = "Children")]
    pub children: Vec<Box<Person>>,
    #[record(rename = "PetCat", acl = "tester")]
    pub pet_cat: Cat,
    #[record(rename = "Friends")]
    pub friends: HashMap<String, Box<Person>>,
    #[record(rename = "Created")]
    pub created: Duration,
    #[record(rename = "Birthdate", acl = "tester")]
    pub birthdate: Duration,
}

#[derive(Record, Clone, Debug, Default, PartialEq)]
pub struct Cat {
    #[record(rename = "Name", acl = "root,account")]
    pub name: String,
    #[record(rename = "Type", acl = "root")]
    pub kind: String,
}

fn relative(age: i64, height: i32, full_name: &[&str], nickname: &str) -> Person {
    Person {
        age,
        height,
        full_name: full_name.iter().map(|part| (*part).to_owned()).collect(),
        nickname: nickname.to_owned(),
        ..Person::default()
    }
}

pub fn person() -> Person {
    Person {
        age: 21,
        height: 68,
        groups: HashMap::from([("chessclub".to_owned(), true), ("pianoleague".to_owned(), false)]),
        full_name: vec!["John".into(), "Smith".into(), "Doe".into()],
        nickname: "John".into(),
        mother: Some(Box::new(relative(78, 64, &["Penny", "Angela", "Smith"], "Penny"))),
        father: Some(Box::new(relative(82, 71, &["Anthony", "Smith", "Sr"], "Tony"))),
        children: vec![
            Box::new(relative(7, 45, &["Johnny", "Knox", "Jr"], "Johnny Boy")),
            Box::new(relative(11, 49, &["Cindy", "Lou"], "Sin")),
        ],
        pet_cat: Cat {
            name: "Fluffy".into(),
            kind: "furry".into(),
        },
        friends: HashMap::from([
            (
                "best".to_owned(),
                Box::new(relative(34, 68, &["Philarmon", "Carter"], "Phil")),
            ),
            (
                "sweetheart".to_owned(),
                Box::new(relative(34, 68, &["Becky", "Hair"], "Becks")),
            ),
        ]),
        created: Duration::from_secs(1_700_000_000),
        birthdate: Duration::from_secs(1_480_000_000),
    }
}

/// A chain of `len` fathers above a single person.
pub fn lineage(len: usize) -> Person {
    let mut person = relative(0, 1, &["Root"], "root");
    for generation in 1..=len {
        let height = i32::try_from(generation).unwrap_or(i32::MAX) + 1;
        person = Person {
            father: Some(Box::new(person)),
            ..relative(0, height, &["Heir"], "heir")
        };
    }
    person
}
