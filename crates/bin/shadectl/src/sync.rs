//! Sync adapter selection — enabled HTTP push or a logged no-op.

use std::future::Future;

use shade_adapter_sync_http::HttpPreferenceSync;
use shade_app::ports::PreferenceSync;
use shade_domain::error::ShadeError;
use shade_domain::theme::AppliedTheme;

/// Either a real HTTP push or, with sync disabled, a logged no-op.
#[derive(Debug, Clone)]
pub enum SyncAdapter {
    /// Push toggles to the configured server.
    Http(HttpPreferenceSync),
    /// Keep toggles local only.
    Disabled,
}

impl PreferenceSync for SyncAdapter {
    fn push(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
        let adapter = self.clone();
        async move {
            match adapter {
                Self::Http(http) => http.push(theme).await,
                Self::Disabled => {
                    tracing::debug!(%theme, "sync disabled, keeping preference local");
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_succeed_silently_when_disabled() {
        SyncAdapter::Disabled.push(AppliedTheme::Dark).await.unwrap();
    }
}
