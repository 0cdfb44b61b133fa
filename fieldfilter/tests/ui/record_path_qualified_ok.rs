use fieldfilter as ff;

#[derive(ff::Record, Default)]
struct Profile {
    #[record(acl = "owner")]
    phone: String,
}

fn main() {
    let mut profile = Profile {
        phone: "555".into(),
    };
    ff::redact(&mut profile, &["guest"]).unwrap();
    assert!(profile.phone.is_empty());
}
