//! Estate Price - real estate price prediction service
//!
//! This library loads a pre-trained ridge regression model together with the
//! feature-column schema it was fitted on, and turns structured property
//! attributes into price estimates served over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ColumnSchema, PricePredictor, PredictionError, encode_features};
pub use crate::models::{PredictionInput, FeatureVector, PriceEstimate};
pub use crate::services::{ModelArtifacts, LinearModel, RegressionModel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let schema = ColumnSchema::new(vec![
            "area".to_string(),
            "bathrooms".to_string(),
            "bedrooms".to_string(),
            "location_Downtown".to_string(),
        ])
        .unwrap();
        assert_eq!(schema.locations(), &["Downtown"]);
    }
}
