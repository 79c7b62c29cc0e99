//! Facade-level integration tests

use nbfield::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_prelude_arithmetic() {
    let field = Onb233Field::new().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let a = Onb233Element::random(&mut rng);
    let b = Onb233Element::random(&mut rng);

    let inv_b = field.invert(&b).unwrap();
    assert_eq!(field.mul(&field.mul(&a, &b), &inv_b), a);
    assert_eq!(field.square(&(a + b)), a.square() + b.square());
}

#[test]
fn test_table_is_shareable() {
    let field = std::sync::Arc::new(Onb233Field::new().unwrap());
    let handles: Vec<_> = (0..2u64)
        .map(|seed| {
            let field = field.clone();
            std::thread::spawn(move || {
                let a = Onb233Element::random(&mut ChaCha20Rng::seed_from_u64(seed));
                field.mul(&a, &a) == a.square()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_api_error_mapping() {
    let long = "0".repeat(240);
    match Onb233Element::decode_text(&long) {
        Err(Error::InvalidLength { expected, actual, .. }) => {
            assert_eq!(expected, 233);
            assert_eq!(actual, 240);
        }
        other => panic!("Expected InvalidLength error, got {:?}", other),
    }

    let err: Error = nbfield::algorithms::NormalBasisField::<4>::new()
        .unwrap_err()
        .into();
    assert!(matches!(err, Error::InvalidFieldSize { degree: 4, .. }));

    let field = Onb233Field::new().unwrap();
    let err = field
        .invert(&Onb233Element::zero())
        .with_context("inverting zero")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { context: "inverting zero", .. }));
}

#[test]
fn test_serde_json_encoding() {
    let e = Onb233Element::from_text("1101").unwrap();
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(json.len(), 233 + 2);
    let back: Onb233Element = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
}
