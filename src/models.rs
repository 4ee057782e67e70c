use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Open311 API Models
// ============================================================================

/// One service request as returned by the Open311 `requests.json` endpoint.
///
/// The upstream schema is loose: every field may be absent, and records
/// carry many more fields than the ones rendered here. Unknown fields are
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct ServiceRequest {
    pub description: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub service_name: Option<String>,
    pub updated_datetime: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetRequestsRequest {
    /// latitude of the coordinate pair for the point of interest
    pub latitude: String,
    /// longitude of the coordinate pair for the point of interest
    pub longitude: String,
}
