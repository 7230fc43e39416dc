// Core prediction exports
pub mod encoder;
pub mod predictor;
pub mod pricing;
pub mod schema;

pub use encoder::encode_features;
pub use predictor::{PricePredictor, PredictionError, MODEL_NAME, MODEL_ACCURACY};
pub use pricing::{price_estimate, round_to_cents, PRICE_BAND};
pub use schema::{ColumnSchema, SchemaError, LOCATION_PREFIX};
