use fieldfilter::Record;

#[derive(Record)]
#[record(acl = "admin")]
struct Account {
    id: u64,
}

fn main() {}
