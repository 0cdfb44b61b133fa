use fieldfilter::{Record, descriptor_of};

struct Foreign(u8);

#[derive(Record)]
struct Account {
    #[record(rename = "ID")]
    id: u64,
    #[record(acl = "admin, support", rename = "Email")]
    email: String,
    #[record(acl = "*")]
    r#type: String,
    #[record(skip)]
    handle: Foreign,
}

#[derive(Record)]
struct Pair(u8, #[record(acl = "admin")] String);

#[derive(Record)]
struct Unit;

fn main() {
    let account = descriptor_of::<Account>();
    let names: Vec<_> = account.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["ID", "Email", "type"]);
    assert_eq!(account.fields()[1].tags(), ["admin", "support"]);
    assert_eq!(account.key().name(), "Account");

    let pair = descriptor_of::<Pair>();
    assert_eq!(pair.fields()[1].name(), "1");

    assert!(descriptor_of::<Unit>().fields().is_empty());

    let mut account = Account {
        id: 1,
        email: String::new(),
        r#type: String::new(),
        handle: Foreign(3),
    };
    fieldfilter::Walk::reset(&mut account);
    assert_eq!(account.handle.0, 3);
}
