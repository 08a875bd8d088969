use thiserror::Error;

/// Errors returned by enum labeling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HumanizeEnumError {
    /// The enum name is not defined on the host model.
    #[error("unknown enum '{enum_name}' for model '{model}'")]
    UnknownEnumKey { enum_name: String, model: String },
}

impl HumanizeEnumError {
    pub fn unknown_enum_key(enum_name: impl Into<String>, model: impl Into<String>) -> Self {
        Self::UnknownEnumKey {
            enum_name: enum_name.into(),
            model: model.into(),
        }
    }
}

pub type Result<T, E = HumanizeEnumError> = std::result::Result<T, E>;
