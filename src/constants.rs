/// User agent string for HTTP requests
pub const USER_AGENT: &str = "civic-mcp/0.1";

/// SeeClickFix API base URL
pub const SEECLICKFIX_API_BASE: &str = "https://seeclickfix.com";

/// Client-side timeout applied to every upstream request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
