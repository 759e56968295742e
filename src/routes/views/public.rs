use std::path::PathBuf;

use askama::Template;
use axum::{Router, response::Html, routing::get};
use tower_http::services::ServeDir;

use super::{HtmlError, current_year, render_page};
use crate::content::{STORE_LOCATION, StoreLocation};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    store_name: &'static str,
    year: i32,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    store_name: &'static str,
    year: i32,
}

#[derive(Template)]
#[template(path = "location.html")]
struct LocationTemplate {
    store_name: &'static str,
    year: i32,
    location: StoreLocation,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/location", get(location))
        .nest_service("/static", ServeDir::new(resolve_public_dir()))
}

fn resolve_public_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("JOYERIA_PUBLIC_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

async fn index() -> Result<Html<String>, HtmlError> {
    render_page(
        IndexTemplate {
            store_name: STORE_LOCATION.name,
            year: current_year(),
        },
        "index",
    )
}

async fn about() -> Result<Html<String>, HtmlError> {
    render_page(
        AboutTemplate {
            store_name: STORE_LOCATION.name,
            year: current_year(),
        },
        "about",
    )
}

async fn location() -> Result<Html<String>, HtmlError> {
    render_page(
        LocationTemplate {
            store_name: STORE_LOCATION.name,
            year: current_year(),
            location: STORE_LOCATION,
        },
        "location",
    )
}
