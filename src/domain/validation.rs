use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidCharacter { field: &'static str, character: char },
    LimitOutOfRange { max: u32, actual: u32 },
    MissingEnvVar { name: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidCharacter { field, character } => {
                write!(f, "{field} must not contain {character:?}")
            }
            Self::LimitOutOfRange { max, actual } => {
                write!(f, "limit out of range: {actual} (max {max})")
            }
            Self::MissingEnvVar { name } => {
                write!(f, "{name} environment variable is required")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
