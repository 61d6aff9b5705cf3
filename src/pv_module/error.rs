use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleError {
    InvalidDatasheet(String),
    InvalidParameters(String),
}

impl fmt::Display for ModuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleError::InvalidDatasheet(reason) => {
                write!(f, "invalid module datasheet parameters: {}", reason)
            }
            ModuleError::InvalidParameters(reason) => {
                write!(f, "invalid module model parameters: {}", reason)
            }
        }
    }
}

impl std::error::Error for ModuleError {}
