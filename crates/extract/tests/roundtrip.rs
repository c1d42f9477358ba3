//! Round-trip properties: `extract(decompose(x)) == x` for every supported
//! type, plus the intentional `Absent`/`Null` asymmetry of `Option`.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use json_morph_extract::{Decompose, Extract, JsonValue};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip_string(x in any::<String>()) {
        prop_assert_eq!(String::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_bool(x in any::<bool>()) {
        prop_assert_eq!(bool::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_i32(x in any::<i32>()) {
        prop_assert_eq!(i32::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_i64(x in any::<i64>()) {
        prop_assert_eq!(i64::extract(&x.decompose()).unwrap(), x);
    }

    // f32 widens to f64 on decomposition; narrowing back is exact for
    // every f32, so the round-trip holds. (The lossy direction, f64 to
    // f32, is not a round-trip the contract covers.)
    #[test]
    fn roundtrip_f32(
        x in proptest::num::f32::POSITIVE
            | proptest::num::f32::NEGATIVE
            | proptest::num::f32::NORMAL
            | proptest::num::f32::ZERO
    ) {
        prop_assert_eq!(f32::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_f64(
        x in proptest::num::f64::POSITIVE
            | proptest::num::f64::NEGATIVE
            | proptest::num::f64::NORMAL
            | proptest::num::f64::ZERO
    ) {
        prop_assert_eq!(f64::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_option(x in any::<Option<String>>()) {
        prop_assert_eq!(Option::<String>::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_pair(x in any::<(i32, String)>()) {
        prop_assert_eq!(<(i32, String)>::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_triple(x in any::<(bool, i64, String)>()) {
        prop_assert_eq!(<(bool, i64, String)>::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_vec(x in any::<Vec<i64>>()) {
        prop_assert_eq!(Vec::<i64>::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_hashset(x in any::<HashSet<String>>()) {
        prop_assert_eq!(HashSet::<String>::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_btreeset(x in any::<BTreeSet<i64>>()) {
        prop_assert_eq!(BTreeSet::<i64>::extract(&x.decompose()).unwrap(), x);
    }

    #[test]
    fn roundtrip_string_map(x in any::<BTreeMap<String, i64>>()) {
        prop_assert_eq!(BTreeMap::<String, i64>::extract(&x.decompose()).unwrap(), x);
    }
}

#[test]
fn option_none_roundtrips() {
    let none: Option<i64> = None;
    assert_eq!(Option::<i64>::extract(&none.decompose()).unwrap(), None);
}

#[test]
fn absent_collapses_to_null_on_decomposition() {
    // Extraction accepts both states as empty...
    let from_absent = Option::<i64>::extract(&JsonValue::Absent).unwrap();
    let from_null = Option::<i64>::extract(&JsonValue::Null).unwrap();
    assert_eq!(from_absent, None);
    assert_eq!(from_null, None);

    // ...but decomposition only ever emits Null. The Absent origin is not
    // recoverable: decompose(extract(Absent)) != Absent.
    assert_eq!(from_absent.decompose(), JsonValue::Null);
    assert_eq!(from_null.decompose(), JsonValue::Null);
}

#[test]
fn null_roundtrips_through_option() {
    let extracted = Option::<String>::extract(&JsonValue::Null).unwrap();
    assert_eq!(extracted.decompose(), JsonValue::Null);
}
