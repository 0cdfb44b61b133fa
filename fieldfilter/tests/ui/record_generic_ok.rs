use std::{collections::HashMap, marker::PhantomData};

use fieldfilter::{Record, Walk, redact};

#[derive(Record, Default)]
struct Page<T> {
    items: Vec<T>,
    #[record(acl = "admin")]
    cursor: Option<String>,
}

#[derive(Record, Default)]
struct Index<K: std::hash::Hash + Eq, V> {
    entries: HashMap<K, V>,
}

#[derive(Record)]
struct TypedId<T> {
    id: u64,
    _marker: PhantomData<T>,
}

#[derive(Record, Default)]
struct Item {
    #[record(acl = "admin")]
    secret: String,
}

struct NotWalkable;

fn main() {
    let mut page = Page {
        items: vec![Item { secret: "s".into() }],
        cursor: Some("c".into()),
    };
    redact(&mut page, &["support"]).unwrap();
    assert!(page.cursor.is_none());
    assert!(page.items[0].secret.is_empty());

    let mut index: Index<String, Item> = Index::default();
    redact(&mut index, &["admin"]).unwrap();

    let mut id = TypedId::<NotWalkable> {
        id: 7,
        _marker: PhantomData,
    };
    id.reset();
    assert_eq!(id.id, 0);
}
