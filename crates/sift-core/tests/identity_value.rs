use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use sift_core::{
    identity::{identity_value, identity_value_is_null, init_identity_value},
    schema::{Entity, EntityState, ModelBuilder},
};
use uuid::Uuid;

#[derive(Default)]
struct Serial {
    id: i64,
    state: EntityState,
}

impl Entity for Serial {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("id", |s| &s.id, |s| &mut s.id).key();
    }

    fn state(&self) -> Option<&EntityState> {
        Some(&self.state)
    }

    fn state_mut(&mut self) -> Option<&mut EntityState> {
        Some(&mut self.state)
    }
}

#[derive(Default)]
struct Small {
    id: i16,
}

impl Entity for Small {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("id", |s| &s.id, |s| &mut s.id).key();
    }
}

#[derive(Default)]
struct Keyed {
    uuid: Uuid,
    at: Option<DateTime<Utc>>,
    code: String,
    amount: Decimal,
}

impl Entity for Keyed {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("uuid", |k| &k.uuid, |k| &mut k.uuid).key();
        model.field("at", |k| &k.at, |k| &mut k.at).key();
        model.field("code", |k| &k.code, |k| &mut k.code).key();
        model.field("amount", |k| &k.amount, |k| &mut k.amount).key();
    }
}

#[derive(Default)]
struct Composite {
    region: String,
    number: i64,
}

impl Entity for Composite {
    fn describe(model: &mut ModelBuilder<Self>) {
        model
            .field("region", |c| &c.region, |c| &mut c.region)
            .key();
        model
            .field("number", |c| &c.number, |c| &mut c.number)
            .key();
    }
}

#[derive(Default)]
struct Keyless {
    label: String,
}

impl Entity for Keyless {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("label", |k| &k.label, |k| &mut k.label);
    }
}

#[derive(Default)]
struct Flagged {
    id: bool,
}

impl Entity for Flagged {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("id", |f| &f.id, |f| &mut f.id).key();
    }
}

#[derive(Default)]
struct Mixed {
    number: i64,
    flag: bool,
}

impl Entity for Mixed {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("number", |m| &m.number, |m| &mut m.number).key();
        model.field("flag", |m| &m.flag, |m| &mut m.flag).key();
    }
}

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

#[test]
fn presence_by_type() {
    assert!(identity_value_is_null(&Serial::default()).unwrap());
    assert!(!identity_value_is_null(&Serial {
        id: 9,
        ..Default::default()
    })
    .unwrap());
    assert!(identity_value_is_null(&Serial {
        id: -3,
        ..Default::default()
    })
    .unwrap());

    assert!(identity_value_is_null(&Keyless::default()).unwrap());

    let mut keyed = Keyed {
        uuid: Uuid::new_v4(),
        at: Some(Utc::now()),
        code: "a".into(),
        amount: Decimal::ONE,
    };
    assert!(!identity_value_is_null(&keyed).unwrap());

    keyed.code = "   ".into();
    assert!(identity_value_is_null(&keyed).unwrap());
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

#[test]
fn serial_keys_increase() {
    let mut a = Serial::default();
    let mut b = Serial::default();
    init_identity_value(&mut a).unwrap();
    init_identity_value(&mut b).unwrap();
    assert!(a.id > 0);
    assert!(b.id > a.id);
}

#[test]
fn set_keys_are_kept() {
    let mut serial = Serial {
        id: 77,
        ..Default::default()
    };
    init_identity_value(&mut serial).unwrap();
    assert_eq!(serial.id, 77);
}

#[test]
fn small_keys_are_random_and_positive() {
    for _ in 0..50 {
        let mut small = Small::default();
        init_identity_value(&mut small).unwrap();
        assert!(small.id >= 1);
    }
}

#[test]
fn every_supported_type() {
    let mut keyed = Keyed::default();
    init_identity_value(&mut keyed).unwrap();

    assert!(!keyed.uuid.is_nil());
    assert!(keyed.at.is_some());
    assert!(keyed.code.parse::<i64>().unwrap() > 0);
    assert!(keyed.amount > Decimal::ZERO);
    assert!(!identity_value_is_null(&keyed).unwrap());
}

#[test]
fn unsupported_key_type() {
    let err = init_identity_value(&mut Flagged::default()).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "configuration error: Flagged: cannot synthesize a `bool` value for primary key `id`"
    );
}

#[test]
fn unsupported_key_type_is_rejected_whatever_its_value() {
    for id in [false, true] {
        let err = init_identity_value(&mut Flagged { id }).unwrap_err();
        assert!(err.is_configuration());
    }
}

#[test]
fn unsupported_key_leaves_other_keys_untouched() {
    let mut mixed = Mixed::default();
    let err = init_identity_value(&mut mixed).unwrap_err();
    assert_eq!(
        err.to_string(),
        "configuration error: Mixed: cannot synthesize a `bool` value for primary key `flag`"
    );
    assert_eq!(mixed.number, 0);
}

// ---------------------------------------------------------------------------
// Identity keys
// ---------------------------------------------------------------------------

#[test]
fn composite_key_is_sorted_and_joined() {
    let composite = Composite {
        region: "eu".into(),
        number: 42,
    };
    assert_eq!(identity_value(&composite).unwrap(), "42_eu");
}

#[test]
fn identity_is_memoized_until_key_written() {
    let mut serial = Serial {
        id: 5,
        ..Default::default()
    };
    assert_eq!(serial.state.identity(), None);
    assert_eq!(identity_value(&serial).unwrap(), "5");
    assert_eq!(serial.state.identity(), Some("5"));

    // A direct write is not seen
    serial.id = 6;
    assert_eq!(identity_value(&serial).unwrap(), "5");

    Serial::metadata()
        .unwrap()
        .set_value(&mut serial, "id", 7_i64.into())
        .unwrap();
    assert_eq!(serial.state.identity(), None);
    assert_eq!(identity_value(&serial).unwrap(), "7");
}

#[test]
fn keyless_identity_is_fresh() {
    let keyless = Keyless::default();
    let a = identity_value(&keyless).unwrap();
    let b = identity_value(&keyless).unwrap();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
}
