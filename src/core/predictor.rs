use std::sync::Arc;
use thiserror::Error;
use crate::core::{encoder::encode_features, pricing::price_estimate, schema::ColumnSchema};
use crate::models::{PredictionInput, PriceEstimate};
use crate::services::model::{ModelError, RegressionModel};

/// Fixed description reported by the model-info endpoint
pub const MODEL_NAME: &str = "Ridge Regression";

/// Accuracy figure reported by the model-info endpoint. It is not measured
/// against the loaded model.
pub const MODEL_ACCURACY: f64 = 87.5;

/// Errors that can occur while producing a prediction
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid location selected")]
    InvalidLocation(String),

    #[error("Feature encoding failed: {0}")]
    EncodingFailure(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocationFailure(#[from] ModelError),
}

/// Prediction orchestrator over the startup artifacts
///
/// # Pipeline Stages
/// 1. Encode the input against the column schema
/// 2. Run the model on a single-row batch
/// 3. Derive the ±5% price band and round, rejecting overflow
#[derive(Clone)]
pub struct PricePredictor {
    schema: Arc<ColumnSchema>,
    model: Arc<dyn RegressionModel>,
}

impl PricePredictor {
    pub fn new(schema: Arc<ColumnSchema>, model: Arc<dyn RegressionModel>) -> Self {
        Self { schema, model }
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn locations(&self) -> &[String] {
        self.schema.locations()
    }

    /// Predict a price for `input`
    ///
    /// An unknown location fails before the model is invoked.
    pub fn predict(&self, input: &PredictionInput) -> Result<PriceEstimate, PredictionError> {
        let features = encode_features(&self.schema, input)?;

        let raw = self
            .model
            .predict(std::slice::from_ref(&features))?
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyOutput)?;

        tracing::debug!(
            "Predicted {:.2} for area={}, bedrooms={}, bathrooms={}, location={}",
            raw,
            input.area,
            input.bedrooms,
            input.bathrooms,
            input.location
        );

        Ok(price_estimate(raw)?)
    }
}

impl std::fmt::Debug for PricePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricePredictor")
            .field("columns", &self.schema.len())
            .field("n_features", &self.model.n_features())
            .finish()
    }
}
