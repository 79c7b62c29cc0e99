//! GF(2^233) known-answer tests

use nbfield_algorithms::{exponent_from_text, Onb233Element};
use nbfield_params::ONB233_DEGREE;
use nbfield_tests::fixtures::ONB233;
use nbfield_tests::vectors::ONB233_SUITE;

fn element(text: &str) -> Onb233Element {
    Onb233Element::from_text(text).unwrap()
}

#[test]
fn test_suite_metadata() {
    assert_eq!(ONB233_SUITE.degree, ONB233_DEGREE);
    assert_eq!(ONB233_SUITE.field, "GF(2^233)");
    assert!(!ONB233_SUITE.cases.is_empty());
}

#[test]
fn test_reference_sum() {
    for case in &ONB233_SUITE.cases {
        let sum = element(&case.a) + element(&case.b);
        assert_eq!(sum.to_text(), case.sum, "sum mismatch in case '{}'", case.name);
    }
}

#[test]
fn test_reference_mul() {
    for case in &ONB233_SUITE.cases {
        let product = ONB233.mul(&element(&case.a), &element(&case.b));
        assert_eq!(product.to_text(), case.mul, "mul mismatch in case '{}'", case.name);
    }
}

#[test]
fn test_reference_sqr() {
    for case in &ONB233_SUITE.cases {
        let square = element(&case.a).square();
        assert_eq!(square.to_text(), case.sqr, "sqr mismatch in case '{}'", case.name);
        assert_eq!(ONB233.mul(&element(&case.a), &element(&case.a)), element(&case.sqr));
    }
}

#[test]
fn test_reference_pow() {
    for case in &ONB233_SUITE.cases {
        let exponent = exponent_from_text(&case.exponent);
        let power = ONB233.pow(&element(&case.a), &exponent);
        assert_eq!(power.to_text(), case.pow, "pow mismatch in case '{}'", case.name);
    }
}

#[test]
fn test_reference_driver_case() {
    let case = ONB233_SUITE
        .cases
        .iter()
        .find(|c| c.name == "reference driver")
        .unwrap();
    let a = element(&case.a);
    let b = element(&case.b);

    assert!(a + b == element(&case.sum));
    assert!(ONB233.mul(&a, &b) == element(&case.mul));
    assert!(a.square() == element(&case.sqr));
    assert!(ONB233.pow(&a, &exponent_from_text(&case.exponent)) == element(&case.pow));
}
