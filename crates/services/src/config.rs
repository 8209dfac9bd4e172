use std::env;

use url::Url;

use crate::error::ConfigError;

/// Connection settings for the remote course service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    token: Option<String>,
}

impl ApiConfig {
    /// Build a config from a base url such as `https://host/api` and an optional bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the url does not parse or is not http(s).
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ConfigError> {
        let raw = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
            raw: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        let token = token.filter(|t| !t.trim().is_empty());
        Ok(Self {
            base_url: parsed,
            token,
        })
    }

    /// Read `LEARN_API_URL` and `LEARN_API_TOKEN`.
    ///
    /// Returns `Ok(None)` when no url is configured, which disables the remote gateway.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `LEARN_API_URL` is set but invalid.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(url) = env::var("LEARN_API_URL") else {
            return Ok(None);
        };
        if url.trim().is_empty() {
            return Ok(None);
        }
        let token = env::var("LEARN_API_TOKEN").ok();
        Self::new(&url, token).map(Some)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute url for an api path like `courses/quiz-submit`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        url
    }

    /// Url of one resource under `path`, with `id` escaped as a single path segment.
    ///
    /// Returns `None` for ids that cannot name a resource: empty, `.` or `..`.
    #[must_use]
    pub fn resource_endpoint(&self, path: &str, id: &str) -> Option<Url> {
        if matches!(id, "" | "." | "..") {
            return None;
        }
        let mut url = self.endpoint(path);
        url.path_segments_mut().ok()?.push(id);
        Some(url)
    }
}
