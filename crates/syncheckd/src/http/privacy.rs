//! Static data-handling notice.

use axum::response::Html;

/// HTML served at `/privacy`.
pub const PRIVACY_NOTICE: &str = "<html><body><p>We do not store any personal data or information from our users.</p></body></html>";

pub(crate) async fn privacy_notice() -> Html<&'static str> {
    Html(PRIVACY_NOTICE)
}
