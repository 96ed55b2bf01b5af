// ABOUTME: HTTP middleware for the dashboard API
// ABOUTME: Cross-origin configuration for the browser frontend

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
