use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Html,
};
use serde::Serialize;

use crate::state::AppState;

/// Parameterless GET endpoints linked from the sitemap.
pub const SITEMAP_LINKS: &[&str] = &[
    "/user",
    "/people",
    "/planet",
    "/users",
    "/users/favorites",
    "/healthz",
    "/readyz",
];

fn render_sitemap(links: &[&str]) -> String {
    let items: String = links
        .iter()
        .map(|link| format!("<li><a href=\"{link}\">{link}</a></li>"))
        .collect();
    format!(
        "<div style=\"text-align: center;\">\
         <h1>Holonet API</h1>\
         <p>Remember to specify a real endpoint path like:</p>\
         <ul style=\"text-align: left;\">{items}</ul>\
         </div>"
    )
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn sitemap() -> Html<String> {
    Html(render_sitemap(SITEMAP_LINKS))
}

// ── GET /user ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HelloResponse {
    pub msg: &'static str,
}

pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        msg: "Hello, this is your GET /user response ",
    })
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    holonet_core::health::probe(&state.db).await
}
