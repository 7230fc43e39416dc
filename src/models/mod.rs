// Model exports
pub mod domain;
pub mod responses;

pub use domain::{PredictionInput, FeatureVector, PriceEstimate};
pub use responses::{HomeResponse, ModelInfoResponse, LocationsResponse, PredictResponse, HealthResponse, ErrorResponse};
