//! Leaf types: `Opaque<T>` for foreign values and the feature-gated date,
//! time and id types.

use std::{net::IpAddr, path::PathBuf};

use fieldfilter::{Category, Opaque, Record, descriptor_of, redact, retain};

#[derive(Record, Default)]
struct Upload {
    name: String,
    #[record(acl = "admin")]
    path: Opaque<PathBuf>,
    #[record(acl = "admin")]
    origin: Option<Opaque<Option<IpAddr>>>,
}

#[test]
fn opaque_fields_are_primitive_leaves() {
    let descriptor = descriptor_of::<Upload>();
    assert_eq!(descriptor.fields()[1].category(), Category::Primitive);
    assert_eq!(descriptor.fields()[2].category(), Category::Pointer);
}

#[test]
fn opaque_fields_reset_to_default() {
    let mut upload = Upload {
        name: "report.pdf".into(),
        path: Opaque::new(PathBuf::from("/srv/uploads/report.pdf")),
        origin: Some(Opaque::new(Some("10.0.0.1".parse().unwrap()))),
    };
    redact(&mut upload, &["viewer"]).unwrap();

    assert_eq!(upload.name, "report.pdf");
    assert!(upload.path.as_os_str().is_empty());
    assert!(upload.origin.is_none());
}

#[test]
fn opaque_values_survive_when_unlocked() {
    let mut upload = Upload {
        name: "a".into(),
        path: PathBuf::from("/a").into(),
        origin: None,
    };
    redact(&mut upload, &["admin"]).unwrap();
    assert_eq!(upload.path.into_inner(), PathBuf::from("/a"));
}

#[cfg(feature = "chrono")]
#[test]
fn chrono_values_reset_to_epoch() {
    use chrono::{DateTime, NaiveDate, Utc};

    #[derive(Record)]
    struct Event {
        #[record(acl = "audit")]
        at: DateTime<Utc>,
        day: NaiveDate,
    }

    let mut event = Event {
        at: Utc::now(),
        day: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
    };
    retain(&mut event, &"day".parse::<fieldfilter::Selection>().unwrap()).unwrap();
    assert_eq!(event.at, DateTime::<Utc>::default());
    assert_eq!(event.day, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[cfg(feature = "time")]
#[test]
fn time_values_reset_to_epoch() {
    use fieldfilter::Walk;

    let mut at = time::OffsetDateTime::now_utc();
    at.reset();
    assert_eq!(at, time::OffsetDateTime::UNIX_EPOCH);
}

#[cfg(feature = "uuid")]
#[test]
fn uuids_reset_to_nil() {
    use fieldfilter::Walk;

    let mut id = uuid::Uuid::from_u128(0x1234);
    id.reset();
    assert!(id.is_nil());
}

#[test]
fn retain_keeps_selected_opaque_field() {
    let mut upload = Upload {
        name: "a".into(),
        path: PathBuf::from("/a").into(),
        origin: None,
    };
    retain(&mut upload, &"path".parse::<fieldfilter::Selection>().unwrap()).unwrap();
    assert!(upload.name.is_empty());
    assert_eq!(*upload.path, PathBuf::from("/a"));
}
