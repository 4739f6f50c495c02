use serde::{Deserialize, Serialize};

/// Error body returned by HTTP handlers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by the health probe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthDto {
    pub status: String,
}
