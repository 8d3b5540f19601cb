//! The example calculations of RFC 1982, section 5, and date serials.

mod common;

use rfc1982::{sna_max, AddError, DateSna, Sna};
use rstest::rstest;

fn sna2(value: i32) -> Sna {
    Sna::with_bits(value, 2)
}

fn sna8(value: i32) -> Sna {
    Sna::with_bits(value, 8)
}

/// Asserts that none of the comparison operators hold for the pair.
#[allow(clippy::nonminimal_bool, clippy::neg_cmp_op_on_partial_ord)]
fn assert_undefined(s1: Sna, s2: Sna) {
    assert!(!(s1 == s2), "{s1} == {s2}");
    assert!(!(s1 <= s2), "{s1} <= {s2}");
    assert!(!(s1 < s2), "{s1} < {s2}");
    assert!(!(s1 > s2), "{s1} > {s2}");
    assert!(!(s1 >= s2), "{s1} >= {s2}");
}

//------------ Basics --------------------------------------------------------

#[test]
fn default_bits() {
    assert_eq!(Sna::new(1).serial_bits(), 32);
    assert_eq!(Sna::default(), Sna::new(0));
}

#[test]
fn relations() {
    assert!(Sna::new(1) <= Sna::new(1));
    assert!(Sna::new(1) <= Sna::new(2));
    assert!(Sna::new(1) >= Sna::new(1));
    assert!(Sna::new(2) >= Sna::new(1));
    assert!(Sna::new(1) < Sna::new(2));
    assert!(Sna::new(2) > Sna::new(1));
    assert_eq!(Sna::new(1).checked_add(Sna::new(1)), Ok(Sna::new(2)));
}

#[rstest]
#[case(1)]
#[case(8)]
#[case(32)]
#[case(63)]
#[case(64)]
fn exactly_one_relation(#[case] bits: u8) {
    let half_ring = Sna::with_bits(0, bits).half_ring();
    let values = [0, 1, half_ring - 1, half_ring, half_ring + 1, u64::MAX];
    for i1 in values {
        for i2 in values {
            let s1 = Sna::with_bits(i1, bits);
            let s2 = Sna::with_bits(i2, bits);
            let distance = s1.into_int().abs_diff(s2.into_int());
            if distance == half_ring {
                assert_undefined(s1, s2);
            } else {
                let held = [s1 < s2, s1 == s2, s1 > s2];
                assert_eq!(held.iter().filter(|held| **held).count(), 1);
            }
        }
    }
}

#[test]
fn add_max_add() {
    common::init_logging();

    let sna = Sna::with_bits(5, 8);
    assert_eq!(
        sna.checked_add(Sna::with_bits(sna.max_add(), 8)),
        Ok(Sna::with_bits(132, 8))
    );
    assert_eq!(
        sna.checked_add(Sna::with_bits(sna.max_add() + 1, 8)),
        Err(AddError::AddendTooLarge)
    );
}

//------------ RFC 1982, section 5.1 ----------------------------------------

#[test]
fn two_bit_max_add() {
    assert_eq!(sna2(0).max_add(), 1);
}

#[rstest]
#[case(0, 1, 1)]
#[case(1, 1, 2)]
#[case(2, 1, 3)]
#[case(3, 1, 0)]
fn two_bit_add(#[case] left: i32, #[case] right: i32, #[case] sum: i32) {
    assert_eq!(sna2(left).checked_add(sna2(right)), Ok(sna2(sum)));
}

#[test]
fn two_bit_chained_add() {
    let mut sna = sna2(0);
    for expected in [1, 2, 3, 0] {
        sna = sna.checked_add(sna2(1)).unwrap();
        assert_eq!(sna, sna2(expected));
    }
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
#[case(3, 2)]
#[case(0, 3)]
fn two_bit_greater(#[case] greater: i32, #[case] less: i32) {
    assert!(sna2(greater) > sna2(less));
    assert!(sna2(less) < sna2(greater));
}

#[rstest]
#[case(2, 0)]
#[case(0, 2)]
#[case(1, 3)]
#[case(3, 1)]
fn two_bit_undefined(#[case] s1: i32, #[case] s2: i32) {
    assert_undefined(sna2(s1), sna2(s2));
}

//------------ RFC 1982, section 5.2 ----------------------------------------

#[test]
fn eight_bit_max_add() {
    assert_eq!(sna8(0).max_add(), 127);
}

#[rstest]
#[case(255, 1, 0)]
#[case(100, 100, 200)]
#[case(200, 100, 44)]
fn eight_bit_add(#[case] left: i32, #[case] right: i32, #[case] sum: i32) {
    assert_eq!(sna8(left).checked_add(sna8(right)), Ok(sna8(sum)));
}

#[rstest]
#[case(1, 0)]
#[case(44, 0)]
#[case(100, 0)]
#[case(100, 44)]
#[case(200, 100)]
#[case(255, 200)]
#[case(0, 255)]
#[case(100, 255)]
#[case(0, 200)]
#[case(44, 200)]
fn eight_bit_greater(#[case] greater: i32, #[case] less: i32) {
    assert!(sna8(greater) > sna8(less));
}

#[test]
fn eight_bit_surprising_addition() {
    common::init_logging();

    let sum = sna8(100).checked_add(sna8(100)).unwrap();
    assert!(sum > sna8(100));

    // A chain of additions may not carry past the end of the space.
    let res = sum.checked_add(sna8(100));
    assert_eq!(res, Err(AddError::ChainOverflow));
    assert!(res.unwrap_err().is_out_of_range());

    // Starting afresh, the value becomes "smaller".
    assert!(sum.rebased().checked_add(sna8(100)).unwrap() < sna8(100));
}

#[rstest]
#[case(0, 128)]
#[case(1, 129)]
#[case(2, 130)]
#[case(127, 255)]
fn eight_bit_undefined(#[case] s1: i32, #[case] s2: i32) {
    assert_undefined(sna8(s1), sna8(s2));
    assert_undefined(sna8(s2), sna8(s1));
}

//------------ sna_max -------------------------------------------------------

#[test]
fn max_of_empty() {
    assert_eq!(sna_max(Vec::<Option<Sna>>::new()), None);
}

#[test]
fn max_of_list() {
    assert_eq!(
        sna_max(vec![Some(Sna::new(1)), Some(Sna::new(2))]),
        Some(Sna::new(2))
    );
    assert_eq!(sna_max(vec![None, Some(Sna::new(1))]), Some(Sna::new(1)));
    assert_eq!(sna_max(vec![Some(Sna::new(1)), None]), Some(Sna::new(1)));
}

#[test]
fn max_of_dates() {
    let dates = ["20120101000000", "20380301000000", "20130101000000"]
        .iter()
        .map(|src| src.parse::<DateSna>().ok());
    assert_eq!(
        sna_max(dates).map(|date| date.to_string()),
        Some(String::from("20380301000000"))
    );
}

//------------ DateSna -------------------------------------------------------

#[test]
fn date_string() {
    let date = DateSna::from_date("20120101000000").unwrap();
    assert_eq!(date, Sna::new(1_325_376_000));
    assert_eq!(date.to_string(), "20120101000000");
}

#[cfg(feature = "std")]
#[test]
fn date_as_date() {
    let date = DateSna::from_date("20120101000000").unwrap();
    assert_eq!(date.as_date(), "20120101000000");
}

#[test]
fn date_less_than() {
    let date1 = DateSna::from_date("20120101000000").unwrap();
    let date2 = DateSna::from_date("20130101000000").unwrap();
    assert!(date1 < date2);
}

#[test]
fn date_add() {
    let date3 = DateSna::from_date("20370101000000").unwrap();
    let sna1 = Sna::new(365 * 24 * 60 * 60);
    let date4 = date3.checked_add(sna1).unwrap();
    assert_eq!(
        u64::from(date4.into_int()),
        u64::from(date3.into_int()) + sna1.into_int()
    );
}

#[test]
fn date_add_yearly() {
    let year = Sna::new(365 * 24 * 60 * 60);
    let mut date = DateSna::from_date("20000101000000").unwrap();
    for _ in 0..100 {
        let next = date.checked_add(year).unwrap();
        assert!(next > date);
        date = next;
    }
    assert_eq!(date.to_string(), "20991207000000");
}

#[test]
fn date_add_too_far() {
    common::init_logging();

    assert_eq!(
        DateSna::default()
            .checked_add(Sna::new((1u32 << 31) - 1))
            .unwrap()
            .to_string(),
        "20380119031407"
    );
    assert_eq!(
        DateSna::default().checked_add(Sna::new(1u32 << 31)),
        Err(AddError::AddendTooLarge)
    );
}

#[test]
fn date_round_trip() {
    let date = DateSna::from_date("20370101000000").unwrap();
    let int = date.into_int();
    assert_eq!(DateSna::from_sna(Sna::new(int)), date);
    assert_eq!(DateSna::from_int(int), date);
}

//------------ Logging -------------------------------------------------------

#[cfg(feature = "tracing")]
#[test]
fn rejected_addition_is_logged() {
    let logs = common::capture_logs(|| {
        assert_eq!(
            sna8(0).checked_add(sna8(128)),
            Err(AddError::AddendTooLarge)
        );
    });
    assert!(logs.contains("rejected serial number addition"), "{logs}");
    assert!(logs.contains("addend=128"), "{logs}");
    assert!(logs.contains("serial_bits=8"), "{logs}");
}
