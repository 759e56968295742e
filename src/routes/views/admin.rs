use askama::Template;
use axum::{Router, response::Html, routing::get};

use super::{HtmlError, current_year, render_page};
use crate::content::{REPORTS, ReportDescriptor, STORE_LOCATION};

#[derive(Template)]
#[template(path = "admin_reports.html")]
struct AdminReportsTemplate {
    store_name: &'static str,
    year: i32,
    reports: &'static [ReportDescriptor],
}

pub fn router() -> Router {
    Router::new().route("/admin/reports", get(admin_reports))
}

// Display only; the data behind each tile is served by the admin API.
async fn admin_reports() -> Result<Html<String>, HtmlError> {
    render_page(
        AdminReportsTemplate {
            store_name: STORE_LOCATION.name,
            year: current_year(),
            reports: REPORTS,
        },
        "admin_reports",
    )
}
