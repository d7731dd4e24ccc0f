use rusty_darts::model::{INNER_BULL, Multiplier, OUTER_BULL, ThrowCode, ThrowCodeError};
use std::collections::HashSet;

#[test]
fn codes_carry_board_labels_and_points() {
    let s5 = ThrowCode::try_from(5).unwrap();
    assert_eq!(s5.label(), "S5");
    assert_eq!(s5.points(), 5);

    let d20 = ThrowCode::try_from(40).unwrap();
    assert_eq!(d20.label(), "D20");
    assert_eq!(d20.points(), 40);

    let t19 = ThrowCode::try_from(59).unwrap();
    assert_eq!(t19.label(), "T19");
    assert_eq!(t19.points(), 57);

    assert_eq!(OUTER_BULL.value(), 61);
    assert_eq!(OUTER_BULL.label(), "25");
    assert_eq!(OUTER_BULL.points(), 25);

    assert_eq!(INNER_BULL.value(), 62);
    assert_eq!(INNER_BULL.label(), "Bull");
    assert_eq!(INNER_BULL.points(), 50);
}

#[test]
fn points_follow_multiplier_times_sector() {
    for n in 1..=20u8 {
        assert_eq!(ThrowCode::try_from(n).unwrap().points(), u32::from(n));
        assert_eq!(
            ThrowCode::try_from(20 + n).unwrap().points(),
            2 * u32::from(n)
        );
        assert_eq!(
            ThrowCode::try_from(40 + n).unwrap().points(),
            3 * u32::from(n)
        );
    }
}

#[test]
fn labels_are_distinct_across_all_codes() {
    let labels: HashSet<&str> = ThrowCode::all().map(ThrowCode::label).collect();
    assert_eq!(labels.len(), 62);
}

#[test]
fn from_target_builds_ring_codes() {
    let single = ThrowCode::from_target(Multiplier::Single, 7).unwrap();
    let double = ThrowCode::from_target(Multiplier::Double, 7).unwrap();
    let triple = ThrowCode::from_target(Multiplier::Triple, 7).unwrap();
    assert_eq!(single.value(), 7);
    assert_eq!(double.value(), 27);
    assert_eq!(triple.value(), 47);

    assert_eq!(
        ThrowCode::from_target(Multiplier::Triple, 0),
        Err(ThrowCodeError::BadSector(0))
    );
    assert_eq!(
        ThrowCode::from_target(Multiplier::Single, 21),
        Err(ThrowCodeError::BadSector(21))
    );
}

#[test]
fn out_of_range_codes_are_rejected() {
    assert_eq!(ThrowCode::try_from(0), Err(ThrowCodeError::OutOfRange(0)));
    assert_eq!(ThrowCode::try_from(63), Err(ThrowCodeError::OutOfRange(63)));
    assert!(ThrowCode::try_from(62).is_ok());
}

#[test]
fn codes_serialize_as_bare_numbers() {
    let code = ThrowCode::try_from(41).unwrap();
    assert_eq!(serde_json::to_string(&code).unwrap(), "41");

    let back: ThrowCode = serde_json::from_str("62").unwrap();
    assert_eq!(back, INNER_BULL);

    let bad: Result<ThrowCode, _> = serde_json::from_str("63");
    assert!(bad.is_err());
}
