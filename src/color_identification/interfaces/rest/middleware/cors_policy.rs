use axum::http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::cors::CorsLayer;

/// Cross-origin access for the browser client: one origin, credentials allowed.
pub fn build_cors_layer(allowed_origin: &str) -> Result<CorsLayer, String> {
    let origin = HeaderValue::from_str(allowed_origin.trim())
        .map_err(|e| format!("invalid allowed origin '{allowed_origin}': {e}"))?;

    if origin.as_bytes() == b"*" {
        return Err("allowed origin must be a single origin when credentials are allowed".to_string());
    }

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}
