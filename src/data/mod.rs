mod binding;
mod provider;

pub use binding::{build_components, default_bindings, ComponentBinding, FieldRef};
pub use provider::{DataProvider, DataValue, DesignData};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read design data: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Missing field '{field}' in category '{category}'")]
    MissingField { category: String, field: String },
    #[error("Field '{field}' in category '{category}' is not a {expected}")]
    TypeMismatch {
        category: String,
        field: String,
        expected: &'static str,
    },
    #[error("Component '{0}' is bound more than once")]
    DuplicateComponent(String),
}
