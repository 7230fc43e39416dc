// Unit tests for Estate Price

use estate_price::core::{
    encode_features, price_estimate, round_to_cents, ColumnSchema, PricePredictor, PredictionError,
};
use estate_price::models::PredictionInput;
use estate_price::services::LinearModel;
use std::sync::Arc;

fn create_schema() -> ColumnSchema {
    ColumnSchema::new(
        [
            "area",
            "bathrooms",
            "bedrooms",
            "location_Downtown",
            "location_Suburb",
            "location_Riverside",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
    .unwrap()
}

fn create_predictor() -> PricePredictor {
    PricePredictor::new(
        Arc::new(create_schema()),
        Arc::new(LinearModel::new(
            3_333.33,
            vec![97.13, 4_111.7, 7_909.9, 21_000.05, -4_800.0, 1_234.56],
        )),
    )
}

fn create_input(area: f64, bedrooms: i64, bathrooms: i64, location: &str) -> PredictionInput {
    PredictionInput {
        area,
        bedrooms,
        bathrooms,
        location: location.to_string(),
    }
}

#[test]
fn test_encoding_scenario() {
    let schema = ColumnSchema::new(
        ["area", "bathrooms", "bedrooms", "location_Downtown", "location_Suburb"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
    .unwrap();

    let features = encode_features(&schema, &create_input(1200.0, 3, 2, "Downtown")).unwrap();
    assert_eq!(features.into_inner(), vec![1200.0, 2.0, 3.0, 1.0, 0.0]);
}

#[test]
fn test_feature_vector_shape() {
    let schema = create_schema();

    for location in schema.locations() {
        let features = encode_features(&schema, &create_input(640.0, 2, 1, location)).unwrap();
        let values = features.as_slice();

        assert_eq!(values.len(), schema.len());
        // exactly one location flag set
        let flags: Vec<f64> = values[3..].to_vec();
        assert_eq!(flags.iter().filter(|v| **v == 1.0).count(), 1);
        assert_eq!(flags.iter().filter(|v| **v == 0.0).count(), flags.len() - 1);
    }
}

#[test]
fn test_locations_match_prefixed_columns() {
    let schema = create_schema();

    let expected: Vec<String> = schema
        .columns()
        .iter()
        .filter_map(|c| c.strip_prefix("location_"))
        .map(str::to_string)
        .collect();

    assert_eq!(schema.locations(), expected.as_slice());
}

#[test]
fn test_band_ordering_for_valid_inputs() {
    let predictor = create_predictor();
    let inputs = [
        create_input(1200.0, 3, 2, "Downtown"),
        create_input(450.5, 1, 1, "Suburb"),
        create_input(3000.0, 5, 4, "Riverside"),
        create_input(0.0, 0, 0, "Suburb"),
        create_input(-200.0, 0, 0, "Suburb"),
    ];

    for input in &inputs {
        let estimate = predictor.predict(input).unwrap();

        if estimate.predicted_price >= 0.0 {
            assert!(estimate.min_price <= estimate.predicted_price);
            assert!(estimate.predicted_price <= estimate.max_price);
        } else {
            assert!(estimate.min_price >= estimate.predicted_price);
            assert!(estimate.predicted_price >= estimate.max_price);
        }
    }
}

#[test]
fn test_band_is_derived_from_raw_prediction() {
    let schema = create_schema();
    let model = LinearModel::new(
        3_333.33,
        vec![97.13, 4_111.7, 7_909.9, 21_000.05, -4_800.0, 1_234.56],
    );
    let predictor = create_predictor();
    let input = create_input(777.7, 2, 3, "Riverside");

    let features = encode_features(&schema, &input).unwrap();
    let raw = model
        .coefficients
        .iter()
        .zip(features.as_slice())
        .fold(model.intercept, |acc, (w, x)| acc + w * x);

    let estimate = predictor.predict(&input).unwrap();
    assert!((estimate.predicted_price - round_to_cents(raw)).abs() < 1e-9);
    assert!((estimate.min_price - round_to_cents(raw * 0.95)).abs() < 1e-9);
    assert!((estimate.max_price - round_to_cents(raw * 1.05)).abs() < 1e-9);
}

#[test]
fn test_price_estimate_rounding() {
    let estimate = price_estimate(101_234.5678).unwrap();

    assert_eq!(estimate.predicted_price, 101_234.57);
    assert_eq!(estimate.min_price, round_to_cents(101_234.5678 * 0.95));
    assert_eq!(estimate.max_price, round_to_cents(101_234.5678 * 1.05));
}

#[test]
fn test_unknown_locations_rejected() {
    let predictor = create_predictor();

    for location in ["Uptown", "downtown", "Downtown ", "location_Downtown", ""] {
        let err = predictor
            .predict(&create_input(1000.0, 2, 2, location))
            .unwrap_err();
        assert!(
            matches!(err, PredictionError::InvalidLocation(_)),
            "Expected InvalidLocation for {:?}",
            location
        );
    }
}

#[test]
fn test_prediction_idempotence() {
    let predictor = create_predictor();
    let input = create_input(1337.0, 4, 3, "Downtown");

    let first = predictor.predict(&input).unwrap();
    for _ in 0..10 {
        assert_eq!(predictor.predict(&input).unwrap(), first);
    }
}
