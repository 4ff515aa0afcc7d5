//! HTTP adapter for the session server.
//!
//! The server exposes four GET endpoints with plain-text bodies; this
//! adapter decodes the body vocabulary into typed results so nothing
//! downstream ever matches on raw strings.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;

use relay_core::ports::SessionApi;
use relay_types::{RelayError, Result};

const SUCCESS: &str = "Success";
const EXISTS: &str = "exists";
const NOT_FOUND: &str = "not found";

/// Client for the session endpoints. `base` is empty in the normal
/// deployment, where the page is served by the proxy itself.
pub struct HttpSessionApi {
    base: String,
}

impl HttpSessionApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Issue a GET and return the body of a 2xx response.
    async fn get_text(&self, path_and_query: &str) -> Result<String> {
        let url = format!("{}{}", self.base, path_and_query);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(RelayError::Protocol {
                status: response.status(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait(?Send)]
impl SessionApi for HttpSessionApi {
    async fn create_session(&self, auth: Option<&str>) -> Result<String> {
        self.get_text(&build_url("/newsession", &[], auth)).await
    }

    async fn update_session(
        &self,
        id: &str,
        http_proxy: Option<&str>,
        auth: Option<&str>,
    ) -> Result<()> {
        let mut params = vec![("id", id)];
        if let Some(proxy) = http_proxy {
            params.push(("httpProxy", proxy));
        }
        let body = self
            .get_text(&build_url("/editsession", &params, auth))
            .await?;
        if body != SUCCESS {
            return Err(RelayError::Contract { body });
        }
        Ok(())
    }

    async fn session_exists(&self, id: &str, auth: Option<&str>) -> Result<bool> {
        let body = self
            .get_text(&build_url("/sessionexists", &[("id", id)], auth))
            .await?;
        match body.as_str() {
            EXISTS => Ok(true),
            NOT_FOUND => Ok(false),
            _ => Err(RelayError::Contract { body }),
        }
    }

    async fn delete_session_raw(&self, id: &str, auth: Option<&str>) -> Result<()> {
        let body = self
            .get_text(&build_url("/deletesession", &[("id", id)], auth))
            .await?;
        // a session deleted elsewhere in the meantime is fine
        if body != SUCCESS && body != NOT_FOUND {
            return Err(RelayError::Contract { body });
        }
        Ok(())
    }
}

/// Compose a path with percent-encoded query parameters. The shared secret
/// rides along as `pwd`, whether or not the path already carries a query.
pub fn build_url(path: &str, params: &[(&str, &str)], auth: Option<&str>) -> String {
    let mut url = path.to_string();
    let mut separator = if path.contains('?') { '&' } else { '?' };
    let pwd = auth.map(|pwd| ("pwd", pwd));
    for (key, value) in params.iter().chain(pwd.iter()) {
        url.push(separator);
        url.push_str(key);
        url.push('=');
        url.push_str(&encode(value));
        separator = '&';
    }
    url
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
