//! Property-based tests for GF(2^233) arithmetic

use nbfield_algorithms::Onb233Element;
use nbfield_tests::fixtures::ONB233;
use proptest::prelude::*;

/// A GF(2^233) element from 233 arbitrary coefficients
fn element() -> impl Strategy<Value = Onb233Element> {
    prop::collection::vec(any::<bool>(), 233).prop_map(|bits| {
        let mut array = [false; 233];
        array.copy_from_slice(&bits);
        Onb233Element::from_bits(array)
    })
}

/// Text of length 0..=233 over {'0', '1'}
fn short_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('0'), Just('1')], 0..=233)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn addition_commutes(a in element(), b in element()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn addition_is_an_involution(a in element()) {
        prop_assert!((a + a).is_zero());
        prop_assert_eq!(a + a, Onb233Element::zero());
    }

    #[test]
    fn multiplication_commutes(a in element(), b in element()) {
        prop_assert_eq!(ONB233.mul(&a, &b), ONB233.mul(&b, &a));
    }

    #[test]
    fn square_matches_self_product(a in element()) {
        prop_assert_eq!(a.square(), ONB233.mul(&a, &a));
    }

    #[test]
    fn exponent_one_is_identity(a in element()) {
        prop_assert_eq!(ONB233.pow(&a, &[true]), a);
    }

    #[test]
    fn one_is_multiplicative_identity(a in element()) {
        prop_assert_eq!(ONB233.mul(&a, &ONB233.one()), a);
    }

    #[test]
    fn multiplication_distributes(a in element(), b in element(), c in element()) {
        prop_assert_eq!(
            ONB233.mul(&a, &(b + c)),
            ONB233.mul(&a, &b) + ONB233.mul(&a, &c)
        );
    }

    #[test]
    fn text_round_trip_pads_left(s in short_text()) {
        let padded = format!("{:0>233}", s);
        let e = Onb233Element::from_text(&s).unwrap();
        prop_assert_eq!(e.to_text(), padded);
    }
}
