use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::FeatureVector;

/// Errors that can occur when invoking a regression model
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Feature vector has {found} values, model expects {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Model produced a non-finite prediction")]
    NonFiniteOutput,

    #[error("Model returned no prediction")]
    EmptyOutput,

    #[error("Model artifact is invalid: {0}")]
    InvalidArtifact(String),
}

/// A loaded regression model
///
/// Implementations are immutable after load and shared across request
/// workers without locking.
pub trait RegressionModel: Send + Sync {
    /// Number of features each input row must carry
    fn n_features(&self) -> usize;

    /// Predict one scalar per row of `batch`
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError>;
}

/// Linear model exported by the training pipeline: `y = intercept + coef · x`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default = "default_model_type")]
    pub model_type: String,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    /// Column names the model was fitted on, when the exporter recorded them
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

fn default_model_type() -> String { "ridge_regression".to_string() }

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            model_type: default_model_type(),
            intercept,
            coefficients,
            feature_names: None,
        }
    }

    /// Parse a serialized artifact
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Reject artifacts that could never produce a usable prediction
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::InvalidArtifact("no coefficients".to_string()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::InvalidArtifact("non-finite weight".to_string()));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.coefficients.len() {
                return Err(ModelError::InvalidArtifact(format!(
                    "{} feature names for {} coefficients",
                    names.len(),
                    self.coefficients.len()
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn predict_row(&self, row: &FeatureVector) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                found: row.len(),
            });
        }

        let value = self
            .coefficients
            .iter()
            .zip(row.as_slice())
            .fold(self.intercept, |acc, (w, x)| acc + w * x);

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ModelError::NonFiniteOutput)
        }
    }
}

impl RegressionModel for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        batch.iter().map(|row| self.predict_row(row)).collect()
    }
}
