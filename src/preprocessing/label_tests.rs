use super::*;

fn pets() -> Vec<&'static str> {
    vec!["cat", "dog", "bird", "cat", "dog"]
}

#[test]
fn test_label_new_unfitted() {
    let encoder: LabelEncoder<String> = LabelEncoder::new();
    assert!(!encoder.is_fitted());
    assert!(encoder.classes().is_none());
    assert!(encoder.n_classes().is_none());
}

#[test]
fn test_label_fit_sorts_classes() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&pets()).expect("fit should succeed");

    assert_eq!(encoder.classes(), Some(&["bird", "cat", "dog"][..]));
    assert_eq!(encoder.n_classes(), Some(3));
}

#[test]
fn test_label_transform_codes() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&pets()).expect("fit should succeed");

    let codes = encoder.transform(&pets()).expect("encoder is fitted");
    assert_eq!(codes, vec![1, 2, 0, 1, 2]);
}

#[test]
fn test_label_unseen_maps_to_sentinel() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&pets()).expect("fit should succeed");

    let codes = encoder
        .transform(&["fish", "dog", "cat"])
        .expect("unseen labels are not an error");
    assert_eq!(codes, vec![UNSEEN_LABEL, 2, 1]);
}

#[test]
fn test_label_numeric_fit_transform() {
    let mut encoder = LabelEncoder::new();
    let codes = encoder
        .fit_transform(&[1, 2, 3, 1, 2, 3, 4])
        .expect("fit_transform should succeed");

    assert_eq!(codes, vec![0, 1, 2, 0, 1, 2, 3]);
    assert_eq!(encoder.classes(), Some(&[1, 2, 3, 4][..]));
}

#[test]
fn test_label_numeric_order_not_lexicographic() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&[10_i64, 9, 100]).expect("fit");
    assert_eq!(encoder.classes(), Some(&[9, 10, 100][..]));
}

#[test]
fn test_label_owned_strings() {
    let labels: Vec<String> = ["b", "a", "b"].iter().map(ToString::to_string).collect();
    let mut encoder = LabelEncoder::new();
    let codes = encoder.fit_transform(&labels).expect("fit_transform");
    assert_eq!(codes, vec![1, 0, 1]);
}

#[test]
fn test_label_transform_not_fitted() {
    let encoder: LabelEncoder<&str> = LabelEncoder::new();
    let err = encoder.transform(&["cat"]).expect_err("unfitted");
    assert!(matches!(
        err,
        PrepkitError::NotFitted {
            transformer: "LabelEncoder"
        }
    ));
}

#[test]
fn test_label_fit_empty() {
    let mut encoder: LabelEncoder<u32> = LabelEncoder::new();
    let err = encoder.fit(&[]).expect_err("no labels");
    assert!(matches!(err, PrepkitError::EmptyInput { .. }));
    assert!(!encoder.is_fitted());
}

#[test]
fn test_label_transform_empty() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&[1_u8, 2]).expect("fit");
    let codes = encoder.transform(&[]).expect("empty transform");
    assert!(codes.is_empty());
}

#[test]
fn test_label_refit_overwrites() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&pets()).expect("first fit");
    encoder.fit(&["zebra", "ant"]).expect("second fit");

    assert_eq!(encoder.classes(), Some(&["ant", "zebra"][..]));
    let codes = encoder.transform(&["cat", "zebra"]).expect("transform");
    assert_eq!(codes, vec![UNSEEN_LABEL, 1]);
}

#[test]
fn test_label_transform_is_idempotent() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&pets()).expect("fit");
    let first = encoder.transform(&pets()).expect("transform");
    let second = encoder.transform(&pets()).expect("transform");
    assert_eq!(first, second);
}

#[test]
fn test_label_inverse_transform() {
    let mut encoder = LabelEncoder::new();
    let codes = encoder.fit_transform(&pets()).expect("fit_transform");
    let labels = encoder.inverse_transform(&codes).expect("known codes");
    assert_eq!(labels, pets());
}

#[test]
fn test_label_inverse_unknown_code() {
    let mut encoder = LabelEncoder::new();
    encoder.fit(&pets()).expect("fit");

    let err = encoder
        .inverse_transform(&[0, UNSEEN_LABEL])
        .expect_err("sentinel has no label");
    assert!(matches!(
        err,
        PrepkitError::UnknownCode {
            code: -1,
            n_classes: 3
        }
    ));

    assert!(encoder.inverse_transform(&[3]).is_err());
}

#[test]
fn test_label_inverse_not_fitted() {
    let encoder: LabelEncoder<i32> = LabelEncoder::new();
    assert!(encoder.inverse_transform(&[0]).expect_err("unfitted").is_not_fitted());
}

#[test]
fn test_label_serde_round_trip() {
    let mut encoder = LabelEncoder::new();
    encoder
        .fit(&["red".to_string(), "blue".to_string()])
        .expect("fit");

    let json = serde_json::to_string(&encoder).expect("serialize");
    let restored: LabelEncoder<String> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, encoder);
    assert_eq!(
        restored.transform(&["blue".to_string()]).expect("fitted"),
        vec![0]
    );
}

// ---------------------------------------------------------------------
// Float labels
// ---------------------------------------------------------------------

#[test]
fn test_float_labels_encode_numerically() {
    let mut encoder = FloatLabelEncoder::new();
    let codes = encoder
        .fit_transform_floats(&[2.5, 1.5, 2.5])
        .expect("finite labels");
    assert_eq!(codes, vec![1, 0, 1]);
    assert_eq!(encoder.n_classes(), Some(2));

    let codes = encoder.transform_floats(&[3.5, 1.5]).expect("fitted");
    assert_eq!(codes, vec![UNSEEN_LABEL, 0]);
}

#[test]
fn test_float_labels_order_is_numeric() {
    let mut encoder = FloatLabelEncoder::new();
    encoder.fit_floats(&[10.0, -2.0, 9.5]).expect("fit");
    assert_eq!(
        encoder.inverse_transform_floats(&[0, 1, 2]).expect("known codes"),
        vec![-2.0, 9.5, 10.0]
    );
}

#[test]
fn test_float_labels_signed_zero_is_one_class() {
    let mut encoder = FloatLabelEncoder::new();
    let codes = encoder.fit_transform_floats(&[0.0, -0.0, 1.0]).expect("fit");
    assert_eq!(codes, vec![0, 0, 1]);
}

#[test]
fn test_float_labels_reject_non_finite_fit() {
    let mut encoder = FloatLabelEncoder::new();
    let err = encoder.fit_floats(&[1.0, f64::NAN]).expect_err("NaN label");
    assert!(matches!(err, PrepkitError::InvalidLabel { .. }));
    assert!(encoder.fit_floats(&[f64::INFINITY]).is_err());
    assert!(!encoder.is_fitted());
}

#[test]
fn test_float_labels_non_finite_transform_is_unseen() {
    let mut encoder = FloatLabelEncoder::new();
    encoder.fit_floats(&[1.0, 2.0]).expect("fit");
    let codes = encoder
        .transform_floats(&[f64::NAN, f64::NEG_INFINITY, 2.0])
        .expect("fitted");
    assert_eq!(codes, vec![UNSEEN_LABEL, UNSEEN_LABEL, 1]);
}

#[test]
fn test_float_labels_not_fitted() {
    let encoder = FloatLabelEncoder::new();
    assert!(encoder
        .transform_floats(&[1.0])
        .expect_err("unfitted")
        .is_not_fitted());
}
