//! Build-time configuration of the front-end.
//!
//! `PRODUCTS_API_URL` is read when the bundle is compiled (for example
//! `PRODUCTS_API_URL=http://localhost:3002 trunk build`). When it is not set
//! requests go to the origin that served the page, which is what the bundled
//! backend expects.

/// Scheme and host prefixed to every API path, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("PRODUCTS_API_URL").unwrap_or_default())
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
