use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{header, Client};
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Deserialize;

use crate::constants::{REQUEST_TIMEOUT_SECS, SEECLICKFIX_API_BASE, USER_AGENT};
use crate::error::FetchError;
use crate::formatters::format_requests;
use crate::models::{GetRequestsRequest, ServiceRequest};

/// Main SeeClickFix service that handles MCP requests
#[derive(Clone)]
pub struct SeeClickFix {
    client: Arc<Client>,
    base_url: String,
    tool_router: ToolRouter<Self>,
}

impl SeeClickFix {
    /// Creates a service instance pointed at the public SeeClickFix API
    pub fn new() -> Result<Self> {
        Self::with_base_url(SEECLICKFIX_API_BASE)
    }

    /// Creates a service instance against an alternate base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
            tool_router: Self::tool_router(),
        })
    }

    /// Builds the Open311 query URL, coordinates passed through verbatim
    fn requests_url(&self, latitude: &str, longitude: &str) -> String {
        format!(
            "{}/open311/v2/requests.json?lat={}&long={}",
            self.base_url, latitude, longitude
        )
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let data = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

#[tool_handler]
impl ServerHandler for SeeClickFix {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "SeeClickFix".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A civic issue lookup service backed by the SeeClickFix Open311 API. \
                Reports citizen-submitted service requests near a coordinate pair."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl SeeClickFix {
    /// Gets service requests near a point of interest
    #[tool(description = "Get requests near a point of interest. Provide latitude and longitude of the coordinate pair as strings (e.g., latitude: '41.30', longitude: '-72.92' for New Haven).")]
    async fn get_requests(
        &self,
        Parameters(request): Parameters<GetRequestsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting service requests near: {}, {}",
            request.latitude,
            request.longitude
        );

        let url = self.requests_url(&request.latitude, &request.longitude);

        let requests = self
            .make_request::<Vec<ServiceRequest>>(&url)
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch service requests: {}", e), None)
            })?;

        let formatted = format_requests(&requests);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}
