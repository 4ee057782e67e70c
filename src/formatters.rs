use crate::models::ServiceRequest;

/// Formats one service request into a human-readable block
pub fn format_request(request: &ServiceRequest) -> String {
    format!(
        "Description: {}\nStatus: {}\nAddress: {}\nService: {}\nLast Updated: {}",
        request.description.as_deref().unwrap_or("No description available"),
        request.status.as_deref().unwrap_or("No status provided"),
        request.address.as_deref().unwrap_or("No address provided"),
        request.service_name.as_deref().unwrap_or("No service provided"),
        request.updated_datetime.as_deref().unwrap_or("No updates yet"),
    )
}

/// Formats the full result set, one block per request, separated by `---`
pub fn format_requests(requests: &[ServiceRequest]) -> String {
    requests
        .iter()
        .map(format_request)
        .collect::<Vec<_>>()
        .join("\n---\n")
}
