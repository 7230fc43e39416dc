use serde::{Deserialize, Serialize};
use crate::models::domain::PriceEstimate;

/// Root status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
}

/// Static model description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub model: String,
    pub accuracy: f64,
}

/// Valid location names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

impl From<PriceEstimate> for PredictResponse {
    fn from(estimate: PriceEstimate) -> Self {
        Self {
            predicted_price: estimate.predicted_price,
            min_price: estimate.min_price,
            max_price: estimate.max_price,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub columns: usize,
    pub locations: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
