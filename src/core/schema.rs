use std::collections::HashSet;
use thiserror::Error;

/// Prefix carried by every one-hot location column
pub const LOCATION_PREFIX: &str = "location_";

pub const AREA_COLUMN: &str = "area";
pub const BATHROOMS_COLUMN: &str = "bathrooms";
pub const BEDROOMS_COLUMN: &str = "bedrooms";

/// Errors raised while building a column schema
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Column schema is empty")]
    Empty,

    #[error("Column schema is missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Column schema contains duplicate column: {0}")]
    DuplicateColumn(String),
}

/// Ordered feature columns the model expects, plus the location catalog
/// derived from them.
///
/// Numeric feature positions are resolved by name when the schema is built,
/// so the encoder never relies on `area`/`bathrooms`/`bedrooms` sitting at
/// fixed indices.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    columns: Vec<String>,
    area_index: usize,
    bathrooms_index: usize,
    bedrooms_index: usize,
    locations: Vec<String>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.clone()));
            }
        }

        let area_index = position_of(&columns, AREA_COLUMN)?;
        let bathrooms_index = position_of(&columns, BATHROOMS_COLUMN)?;
        let bedrooms_index = position_of(&columns, BEDROOMS_COLUMN)?;

        let locations = columns
            .iter()
            .filter_map(|c| c.strip_prefix(LOCATION_PREFIX))
            .map(str::to_string)
            .collect();

        Ok(Self {
            columns,
            area_index,
            bathrooms_index,
            bedrooms_index,
            locations,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn area_index(&self) -> usize {
        self.area_index
    }

    pub fn bathrooms_index(&self) -> usize {
        self.bathrooms_index
    }

    pub fn bedrooms_index(&self) -> usize {
        self.bedrooms_index
    }

    /// Location names in order of appearance, with the `location_` prefix stripped
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Index of the one-hot column for `location`, if the schema has one.
    /// Matching is exact: no case folding, no trimming.
    pub fn location_index(&self, location: &str) -> Option<usize> {
        let column = format!("{}{}", LOCATION_PREFIX, location);
        self.columns.iter().position(|c| *c == column)
    }
}

fn position_of(columns: &[String], name: &'static str) -> Result<usize, SchemaError> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or(SchemaError::MissingColumn(name))
}
