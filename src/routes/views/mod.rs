pub mod admin;
pub mod public;
mod router;

pub use router::router;

use axum::{http::StatusCode, response::Html};

type HtmlError = (StatusCode, Html<String>);

fn html_error(status: StatusCode, message: &'static str) -> HtmlError {
    (status, Html(message.to_string()))
}

/// Renders a template or answers with a bare HTML 500.
fn render_page<T: askama::Template>(
    template: T,
    page: &'static str,
) -> Result<Html<String>, HtmlError> {
    template.render().map(Html).map_err(|err| {
        tracing::error!(page, error = %err, "template render failed");
        html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render page")
    })
}

fn current_year() -> i32 {
    chrono::Datelike::year(&chrono::Local::now())
}
