//! Blocking HTTP GET via libcurl.

use super::{Fetched, Source};
use crate::error::SyncError;
use crate::manifest::remote_url;

/// Fetches `base_url + resource` with a single GET.
///
/// No request headers, no authentication and no timeouts beyond libcurl's
/// defaults. Redirects are followed. The status code is recorded but never
/// turned into an error: error pages are returned like any other body.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Source for HttpSource {
    fn fetch(&self, resource: &str) -> Result<Fetched, SyncError> {
        let url = remote_url(&self.base_url, resource);
        if let Err(source) = url::Url::parse(&url) {
            return Err(SyncError::InvalidUrl { url, source });
        }
        let fetch_err = |source: curl::Error| SyncError::Fetch {
            url: url.clone(),
            source,
        };

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&url).map_err(fetch_err)?;
        easy.follow_location(true).map_err(fetch_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(fetch_err)?;
            transfer.perform().map_err(fetch_err)?;
        }

        let code = easy.response_code().map_err(fetch_err)?;
        let fetched = Fetched {
            body,
            status: Some(code),
        };
        if fetched.is_success() {
            tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, fetched.body.len());
        } else {
            tracing::warn!(
                "GET {} returned HTTP {}; writing body as served ({} bytes)",
                url,
                code,
                fetched.body.len()
            );
        }
        Ok(fetched)
    }

    fn locate(&self, resource: &str) -> String {
        remote_url(&self.base_url, resource)
    }
}
