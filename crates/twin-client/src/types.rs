//! Response types specific to the client

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Service metadata returned by `GET /api`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    /// Available endpoints: "METHOD /path" -> description
    pub endpoints: BTreeMap<String, String>,
}

/// Error body returned by the server on failed requests
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[allow(dead_code)]
    pub error: String,
    pub message: String,
}
