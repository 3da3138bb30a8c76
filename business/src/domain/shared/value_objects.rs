use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_IDENTIFIER_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier.empty")]
    Empty,
    #[error("identifier.too_long")]
    TooLong,
}

fn validate_identifier(raw: &str) -> Result<(), IdentifierError> {
    if raw.trim().is_empty() {
        return Err(IdentifierError::Empty);
    }
    if raw.len() > MAX_IDENTIFIER_LEN {
        return Err(IdentifierError::TooLong);
    }
    Ok(())
}

/// Opaque identifier of a food item.
/// Items created by this service get a UUID; items imported from elsewhere
/// keep whatever key they were stored under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Validates raw input coming from outside the service.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        validate_identifier(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one shopper session. Every session owns exactly one cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        validate_identifier(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
