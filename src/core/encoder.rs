use crate::core::predictor::PredictionError;
use crate::core::schema::ColumnSchema;
use crate::models::{FeatureVector, PredictionInput};

/// Encode a prediction input into a feature vector aligned with `schema`
///
/// The vector is all zeros except the area, bathrooms and bedrooms columns
/// and the one-hot flag for the requested location. Values are copied as-is,
/// with no range checks.
///
/// # Errors
/// * `InvalidLocation` if the schema has no `location_<location>` column
/// * `EncodingFailure` if the area is not a finite number
pub fn encode_features(
    schema: &ColumnSchema,
    input: &PredictionInput,
) -> Result<FeatureVector, PredictionError> {
    if !input.area.is_finite() {
        return Err(PredictionError::EncodingFailure(format!(
            "area must be a finite number, got {}",
            input.area
        )));
    }

    let location_index = schema
        .location_index(&input.location)
        .ok_or_else(|| PredictionError::InvalidLocation(input.location.clone()))?;

    let mut features = FeatureVector::zeros(schema.len());
    features.set(schema.area_index(), input.area);
    features.set(schema.bathrooms_index(), input.bathrooms as f64);
    features.set(schema.bedrooms_index(), input.bedrooms as f64);
    features.set(location_index, 1.0);

    Ok(features)
}
