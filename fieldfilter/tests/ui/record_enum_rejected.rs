use fieldfilter::Record;

#[derive(Record)]
enum Shape {
    Circle,
    Square,
}

fn main() {}
