use null_int32::{ErrorKind, Int32};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 1000;

fn int32_strategy() -> impl Strategy<Value = Int32> {
    (any::<i32>(), any::<bool>()).prop_map(|(v, valid)| Int32::new(v, valid))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROPTEST_CASES,
        .. ProptestConfig::default()
    })]

    #[test]
    fn json_round_trip(v in any::<i32>()) {
        let original = Int32::from_value(v);
        let mut decoded = Int32::null();
        decoded.unmarshal_json(original.marshal_json()).unwrap();
        prop_assert_eq!(decoded, original);

        let via_serde: Int32 = serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        prop_assert_eq!(via_serde, original);
    }

    #[test]
    fn text_round_trip(v in any::<i32>()) {
        let original = Int32::from_value(v);
        let mut decoded = Int32::null();
        decoded.unmarshal_text(original.marshal_text()).unwrap();
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn quoted_decimal_matches_bare_number(v in any::<i32>()) {
        let mut bare = Int32::null();
        bare.unmarshal_json(v.to_string()).unwrap();
        let mut quoted = Int32::null();
        quoted.unmarshal_json(format!("\"{}\"", v)).unwrap();
        prop_assert_eq!(bare, quoted);
    }

    #[test]
    fn null_inputs_reset_any_prior_state(prior in int32_strategy(), other in any::<i32>()) {
        let invalid = Int32::new(other, false);

        let mut from_json = prior;
        from_json.unmarshal_json("null").unwrap();
        prop_assert!(from_json.is_zero());
        prop_assert_eq!(from_json, invalid);

        for text in ["", "null"] {
            let mut from_text = prior;
            from_text.unmarshal_text(text).unwrap();
            prop_assert!(from_text.is_zero());
            prop_assert_eq!(from_text, invalid);
        }
    }

    #[test]
    fn equality_is_symmetric(a in int32_strategy(), b in int32_strategy()) {
        prop_assert_eq!(a == b, b == a);
        if !a.valid && !b.valid {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn out_of_range_integers_are_rejected(v in prop_oneof![
        (i64::from(i32::MAX) + 1)..=i64::MAX,
        i64::MIN..i64::from(i32::MIN),
    ]) {
        let mut i = Int32::from_value(1);
        let err = i.unmarshal_json(v.to_string()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::RangeOrType);
        prop_assert!(!i.valid);
    }

    #[test]
    fn integral_floats_are_accepted(v in any::<i32>()) {
        let mut i = Int32::null();
        i.unmarshal_json(format!("{}.0", v)).unwrap();
        prop_assert_eq!(i, Int32::from_value(v));
    }
}

#[test]
fn test_overflow_boundary() {
    let mut i = Int32::null();
    assert!(i.unmarshal_json("2147483647").is_ok());
    assert_eq!(i.value, i32::MAX);

    let err = i.unmarshal_json("2147483648").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RangeOrType);
}

#[test]
fn test_invalid_collapse_rule() {
    assert_eq!(Int32::new(10, false), Int32::new(20, false));
    assert_ne!(Int32::new(10, true), Int32::new(10, false));
}
