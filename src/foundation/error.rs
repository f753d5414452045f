use crate::foundation::core::Category;

/// Convenience result alias used across the crate.
pub type AdcraftResult<T> = Result<T, AdcraftError>;

/// Error type returned by fallible adcraft operations.
///
/// None of these are fatal: every variant describes a rejected edit or a failed lookup and
/// leaves the state it was raised from untouched.
#[derive(thiserror::Error, Debug)]
pub enum AdcraftError {
    /// An edit or input document failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// No catalog entry exists for this effect id in the given category.
    #[error("unknown effect '{id}' in category {category}")]
    UnknownEffect {
        /// Category the lookup ran in.
        category: Category,
        /// Requested effect id.
        id: String,
    },

    /// No template preset exists with this id.
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    /// No output format exists with this id.
    #[error("unknown format '{0}'")]
    UnknownFormat(String),

    /// No imported media asset exists with this id.
    #[error("unknown media '{0}'")]
    UnknownMedia(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdcraftError {
    /// Build an [`AdcraftError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AdcraftError::UnknownEffect`].
    pub fn unknown_effect(category: Category, id: impl Into<String>) -> Self {
        Self::UnknownEffect {
            category,
            id: id.into(),
        }
    }

    /// Build an [`AdcraftError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for AdcraftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
