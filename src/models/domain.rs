use serde::{Deserialize, Serialize};

/// Property attributes submitted for a price prediction, deserialized
/// straight from the predict request body
///
/// No range checks are applied: zero or negative values are passed to the
/// encoder unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub area: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub location: String,
}

/// Numeric model input aligned with the column schema
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) {
        self.0[index] = value;
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Point estimate and the ±5% band reported around it, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub predicted_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}
