use thiserror::Error;

pub type ValueResult<T> = Result<T, ValueError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Type mismatch: expected {expected}, found {found}")]
    Mismatch { expected: String, found: String },

    #[error("Cannot convert {found} value to {expected}")]
    Conversion {
        expected: &'static str,
        found: &'static str,
    },
}
