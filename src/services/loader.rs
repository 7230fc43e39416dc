use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use crate::config::ModelSettings;
use crate::core::{ColumnSchema, PricePredictor, SchemaError};
use crate::services::model::{LinearModel, ModelError, RegressionModel};

/// Errors that can occur while loading startup artifacts
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid column schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid model: {0}")]
    Model(#[from] ModelError),

    #[error("Model expects {model} features but column schema has {schema} columns")]
    FeatureCountMismatch { model: usize, schema: usize },

    #[error("Model feature names do not match the column schema (first difference at index {0})")]
    FeatureNameMismatch(usize),
}

/// Column schema and model loaded once at startup
///
/// Both are read-only for the lifetime of the process.
#[derive(Clone)]
pub struct ModelArtifacts {
    pub schema: Arc<ColumnSchema>,
    pub model: Arc<dyn RegressionModel>,
}

impl ModelArtifacts {
    /// Load the column schema and model from the configured paths
    ///
    /// Fails if either file is missing or malformed, or if the model was not
    /// fitted on the same columns as the schema describes.
    pub fn load(settings: &ModelSettings) -> Result<Self, LoaderError> {
        let schema = load_schema(&settings.columns_path)?;
        tracing::info!(
            "Loaded column schema from {} ({} columns, {} locations)",
            settings.columns_path.display(),
            schema.len(),
            schema.locations().len()
        );

        let model = load_model(&settings.model_path)?;
        check_compatible(&schema, &model)?;
        tracing::info!(
            "Loaded {} model from {} ({} coefficients)",
            model.model_type,
            settings.model_path.display(),
            model.n_features()
        );

        Ok(Self {
            schema: Arc::new(schema),
            model: Arc::new(model),
        })
    }

    pub fn predictor(&self) -> PricePredictor {
        PricePredictor::new(self.schema.clone(), self.model.clone())
    }
}

/// Read a JSON array of column names
pub fn load_schema(path: &Path) -> Result<ColumnSchema, LoaderError> {
    let columns: Vec<String> =
        serde_json::from_slice(&read_file(path)?).map_err(|source| parse_error(path, source))?;
    Ok(ColumnSchema::new(columns)?)
}

/// Read and validate a serialized linear model
pub fn load_model(path: &Path) -> Result<LinearModel, LoaderError> {
    let model = LinearModel::from_json(&read_file(path)?).map_err(|source| parse_error(path, source))?;
    model.validate()?;
    Ok(model)
}

fn check_compatible(schema: &ColumnSchema, model: &LinearModel) -> Result<(), LoaderError> {
    if model.n_features() != schema.len() {
        return Err(LoaderError::FeatureCountMismatch {
            model: model.n_features(),
            schema: schema.len(),
        });
    }

    if let Some(names) = &model.feature_names {
        if let Some(index) = names
            .iter()
            .zip(schema.columns())
            .position(|(a, b)| a != b)
        {
            return Err(LoaderError::FeatureNameMismatch(index));
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, LoaderError> {
    std::fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, source: serde_json::Error) -> LoaderError {
    LoaderError::Parse {
        path: path.to_path_buf(),
        source,
    }
}
