//! HTTP implementation of [`PreferenceSync`].

use std::future::Future;

use serde::Serialize;

use shade_app::ports::PreferenceSync;
use shade_domain::error::ShadeError;
use shade_domain::theme::AppliedTheme;

use crate::cookie::cookie_value;
use crate::error::SyncError;

/// Path of the server-side preference save endpoint.
const SAVE_PATH: &str = "/assistant/api/preferences/save/";

/// Anti-forgery header name; the token is sourced from the same-named cookie.
const CSRF_HEADER: &str = "X-CSRFToken";

/// Request body for the preference save endpoint.
#[derive(Serialize)]
struct SaveRequest {
    theme: AppliedTheme,
}

/// Pushes theme choices to the server preference store over HTTP.
///
/// One `POST` per push, no retries, no response body consumed. The server
/// record is picked up on the next render, never reflected live.
#[derive(Debug, Clone)]
pub struct HttpPreferenceSync {
    client: reqwest::Client,
    base_url: String,
    cookies: String,
}

impl HttpPreferenceSync {
    /// Create a sync adapter targeting `base_url`, authenticating requests
    /// with the given `Cookie` header string.
    #[must_use]
    pub fn new(base_url: impl Into<String>, cookies: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
            cookies: cookies.into(),
        }
    }

    fn save_url(&self) -> String {
        format!("{}{SAVE_PATH}", self.base_url)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

impl PreferenceSync for HttpPreferenceSync {
    fn push(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
        let client = self.client.clone();
        let url = self.save_url();
        let token = cookie_value(&self.cookies, CSRF_HEADER);
        let cookies = self.cookies.clone();
        async move {
            let token = token.ok_or(SyncError::MissingCsrfToken(CSRF_HEADER))?;
            client
                .post(url)
                .header(CSRF_HEADER, token)
                .header(reqwest::header::COOKIE, cookies)
                .json(&SaveRequest { theme })
                .send()
                .await
                .map_err(SyncError::Http)?
                .error_for_status()
                .map_err(SyncError::Http)?;
            Ok(())
        }
    }
}
