//! End-to-end tests for the deny-list policy, and how it mirrors `retain`.

mod support;

use fieldfilter::{Error, Filterable, Selection, clear, retain};
use support::{Cat, Person, person};

fn selection(text: &str) -> Selection {
    text.parse().unwrap()
}

#[test]
fn resets_selected_fields_and_keeps_the_rest() {
    let mut item = person();
    clear(&mut item, &selection("Height,FullName,Mother")).unwrap();

    assert_eq!(item.height, 0);
    assert!(item.full_name.is_empty());
    assert!(item.mother.is_none());
    assert_eq!(item.age, 21);
    assert_eq!(item.nickname, "John");
    assert_eq!(item.father, person().father);
    assert_eq!(item.children, person().children);
}

#[test]
fn names_match_case_insensitively() {
    let mut item = person();
    clear(&mut item, &selection("height,NICKNAME")).unwrap();
    assert_eq!(item.height, 0);
    assert!(item.nickname.is_empty());
}

#[test]
fn wildcard_first_child_resets_the_field() {
    let mut item = person();
    clear(&mut item, &selection("Friends(*),Father(*,Age)")).unwrap();
    assert!(item.friends.is_empty());
    assert!(item.father.is_none());
    assert_eq!(item.age, 21);
}

#[test]
fn children_scope_the_descent() {
    let mut item = person();
    clear(&mut item, &selection("Children(Height,FullName),PetCat(Type)")).unwrap();

    assert_eq!(item.height, 68);
    assert_eq!(item.children.len(), 2);
    for child in &item.children {
        assert_eq!(child.height, 0);
        assert!(child.full_name.is_empty());
        assert!(child.age > 0);
    }
    assert_eq!(
        item.pet_cat,
        Cat {
            name: "Fluffy".into(),
            kind: String::new(),
        }
    );
}

#[test]
fn unmatched_fields_are_left_alone_all_the_way_down() {
    let mut item = person();
    clear(&mut item, &selection("Age")).unwrap();

    assert_eq!(item.age, 0);
    // Nested people keep their own `Age`: the scope below an unmatched
    // field is empty.
    assert_eq!(item.father.as_ref().unwrap().age, 82);
    assert_eq!(item.children[0].age, 7);
}

#[test]
fn top_level_wildcard_resets_everything() {
    let mut item = person();
    item.clear_fields(&selection("*")).unwrap();
    assert_eq!(item, Person::default());
}

#[test]
fn empty_selection_changes_nothing() {
    let mut item = person();
    clear(&mut item, &Selection::new()).unwrap();
    assert_eq!(item, person());
}

#[test]
fn clear_complements_retain_for_flat_selectors() {
    let fields = selection("Age,Nickname,Height");

    let mut kept = person();
    retain(&mut kept, &fields).unwrap();
    let mut cleared = person();
    clear(&mut cleared, &fields).unwrap();

    assert_eq!(kept.age, 21);
    assert_eq!(cleared.age, 0);
    assert_eq!(kept.nickname, "John");
    assert!(cleared.nickname.is_empty());
    assert_eq!(kept.height, 68);
    assert_eq!(cleared.height, 0);

    assert!(kept.full_name.is_empty());
    assert_eq!(cleared.full_name, person().full_name);
    assert!(kept.father.is_none());
    assert_eq!(cleared.father, person().father);
}

#[test]
fn sequence_of_primitives_is_rejected() {
    let mut names = vec![String::from("a")];
    assert!(matches!(
        clear(&mut names, &selection("Age")),
        Err(Error::UnsupportedRootCategory { .. })
    ));
    assert_eq!(names, ["a"]);
}
