//! Settings error types.

use pn_core::ValueError;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Unknown option: {name}")]
    UnknownOption { name: String },

    #[error("Type mismatch for option '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("Duplicate option: {name}")]
    DuplicateOption { name: String },

    #[error("Invalid option name: '{name}'")]
    InvalidName { name: String },

    #[error("Option '{name}' cannot be read as requested: {source}")]
    Conversion {
        name: String,
        #[source]
        source: ValueError,
    },

    #[error("Expected a mapping of option names to values in {what}")]
    NotAMapping { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SettingsError {
    /// Attach an option name to a value-level type error.
    pub(crate) fn mismatch(name: &str, err: ValueError) -> Self {
        match err {
            ValueError::Mismatch { expected, found } => SettingsError::TypeMismatch {
                name: name.to_string(),
                expected,
                found,
            },
            other => SettingsError::Conversion {
                name: name.to_string(),
                source: other,
            },
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, SettingsError::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SettingsError::TypeMismatch {
            name: "prefix".into(),
            expected: "str".into(),
            found: "int `1`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("prefix"));
        assert!(msg.contains("expected str"));

        let err = SettingsError::UnknownOption { name: "zz".into() };
        assert!(err.to_string().contains("zz"));
    }

    #[test]
    fn mismatch_keeps_value_error_details() {
        let err = SettingsError::mismatch(
            "d",
            ValueError::Mismatch {
                expected: "list[str]".into(),
                found: "int `100`".into(),
            },
        );
        assert!(err.is_type_mismatch());
        assert!(err.to_string().contains("list[str]"));
    }
}
