//! Host-level tests for pin and pin table primitives.

use std::collections::HashSet;

use led_matrix_pins::{Error, LED_MATRIX, Pin, PinKind, PinTable, Role};

#[test]
fn pin_kinds_follow_board_ranges() {
    assert_eq!(Pin::new(14).kind(), Some(PinKind::Analog));
    assert_eq!(Pin::new(25).kind(), Some(PinKind::Analog));
    assert_eq!(Pin::new(3).kind(), Some(PinKind::Digital));
    assert_eq!(Pin::new(33).kind(), Some(PinKind::Digital));
    assert_eq!(Pin::new(0).kind(), None);
    assert_eq!(Pin::new(10).kind(), None);
    assert_eq!(Pin::new(27).kind(), None);
}

#[test]
fn pin_try_new_rejects_out_of_range() {
    assert_eq!(Pin::try_new(34), Err(Error::PinOutOfRange(34)));
    assert_eq!(Pin::try_from(33).map(u8::from), Ok(33));
}

#[test]
fn roles_require_matching_kind() {
    assert_eq!(Role::Positive.required_kind(), PinKind::Analog);
    assert_eq!(Role::Negative.required_kind(), PinKind::Digital);
    assert!(Pin::new(16).suits(Role::Positive));
    assert!(!Pin::new(16).suits(Role::Negative));
    assert!(Pin::new(31).suits(Role::Negative));
}

#[test]
fn try_new_accepts_valid_table() {
    const EXPECTED: PinTable<2, 2> = PinTable::new([16, 17], [3, 4]);
    let table = PinTable::try_new([16, 17], [3, 4]);
    assert_eq!(table, Ok(EXPECTED));
}

#[test]
fn try_new_reports_each_violation() {
    assert_eq!(
        PinTable::<1, 1>::try_new([40], [3]),
        Err(Error::PinOutOfRange(40))
    );
    assert_eq!(
        PinTable::<2, 1>::try_new([16, 16], [3]),
        Err(Error::DuplicatePin(16))
    );
    assert_eq!(
        PinTable::<1, 2>::try_new([16], [3, 3]),
        Err(Error::DuplicatePin(3))
    );
    assert_eq!(
        PinTable::<1, 1>::try_new([16], [16]),
        Err(Error::SharedPin(16))
    );
    assert_eq!(
        PinTable::<1, 1>::try_new([4], [3]),
        Err(Error::WrongPinKind {
            pin: 4,
            role: Role::Positive
        })
    );
    assert_eq!(
        PinTable::<1, 1>::try_new([16], [20]),
        Err(Error::WrongPinKind {
            pin: 20,
            role: Role::Negative
        })
    );
}

#[test]
fn error_messages_name_the_pin() {
    let message = Error::WrongPinKind {
        pin: 20,
        role: Role::Negative,
    }
    .to_string();
    assert_eq!(message, "Pin 20 cannot serve as a negative pin");
    assert_eq!(
        Error::SharedPin(16).to_string(),
        "Pin 16 is assigned as both positive and negative"
    );
    assert_eq!(Error::IndexOutOfBounds.to_string(), "Index out of bounds");
}

#[test]
fn pair_looks_up_both_sides() {
    let pair = LED_MATRIX.pair(3, 0).expect("indices in range");
    assert_eq!(pair.positive, Pin::new(23));
    assert_eq!(pair.negative, Pin::new(31));
    assert_eq!((pair.positive_index, pair.negative_index), (3, 0));
}

#[test]
fn pair_rejects_out_of_range_indices() {
    assert_eq!(LED_MATRIX.pair(7, 0), Err(Error::IndexOutOfBounds));
    assert_eq!(LED_MATRIX.pair(0, 10), Err(Error::IndexOutOfBounds));
    assert!(LED_MATRIX.pair(6, 9).is_ok());
}

#[test]
fn pairs_cover_every_led_once_positive_major() {
    let pairs: Vec<_> = LED_MATRIX.pairs().collect();
    assert_eq!(pairs.len(), LED_MATRIX.led_count());

    let unique: HashSet<_> = pairs
        .iter()
        .map(|pair| (pair.positive, pair.negative))
        .collect();
    assert_eq!(unique.len(), pairs.len());

    assert_eq!(pairs[0], LED_MATRIX.pair(0, 0).expect("first pair"));
    assert_eq!(pairs[1], LED_MATRIX.pair(0, 1).expect("second pair"));
    assert_eq!(pairs[10], LED_MATRIX.pair(1, 0).expect("eleventh pair"));
    assert_eq!(pairs[69], LED_MATRIX.pair(6, 9).expect("last pair"));
}

#[test]
fn role_of_finds_set_and_index() {
    assert_eq!(LED_MATRIX.role_of(Pin::new(21)), Some((Role::Positive, 2)));
    assert_eq!(LED_MATRIX.role_of(Pin::new(33)), Some((Role::Negative, 9)));
    // Only in the ten-entry positive list.
    assert_eq!(LED_MATRIX.role_of(Pin::new(24)), None);
    assert!(LED_MATRIX.contains(Pin::new(6)));
    assert!(!LED_MATRIX.contains(Pin::new(0)));
}

#[test]
fn accessors_preserve_order() {
    let positive: Vec<u8> = LED_MATRIX.positive().iter().map(|pin| pin.number()).collect();
    assert_eq!(positive, [16, 17, 21, 23, 15, 19, 18]);
    let negative: Vec<u8> = LED_MATRIX.negative().iter().copied().map(u8::from).collect();
    assert_eq!(negative, [31, 6, 3, 7, 29, 4, 5, 30, 32, 33]);
}
