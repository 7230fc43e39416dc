// Service exports
pub mod loader;
pub mod model;

pub use loader::{ModelArtifacts, LoaderError, load_schema, load_model};
pub use model::{RegressionModel, LinearModel, ModelError};
