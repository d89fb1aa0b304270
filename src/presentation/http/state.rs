// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub web: Arc<WebSettings>,
}

/// Request-level policy derived from configuration.
#[derive(Debug, Clone)]
pub struct WebSettings {
    /// Host names accepted in the `Host` header. `*` accepts any, a leading
    /// dot also accepts subdomains.
    pub allowed_hosts: Vec<String>,
    /// Extra origins accepted on unsafe requests, as `scheme://host[:port]`.
    pub trusted_origins: Vec<String>,
    /// Adds `Secure` to cookies.
    pub secure_cookies: bool,
}
