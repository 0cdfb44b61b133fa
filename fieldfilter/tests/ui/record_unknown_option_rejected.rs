use fieldfilter::Record;

#[derive(Record)]
struct Account {
    #[record(secret)]
    id: u64,
}

fn main() {}
