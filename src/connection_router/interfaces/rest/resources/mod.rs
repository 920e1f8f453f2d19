pub mod router_error_response_resource;
pub mod session_ping_resource;
