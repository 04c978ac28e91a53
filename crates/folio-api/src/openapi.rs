//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "0.1.0",
        description = "Contact submission endpoint and read-only site content for the portfolio site."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::contact::submit_contact,
        crate::routes::content::get_site,
        crate::routes::content::list_projects,
        crate::routes::content::featured_projects,
        crate::routes::content::project_domains,
        crate::routes::content::get_project,
        crate::routes::content::get_case_study,
        crate::routes::content::active_navigation,
    ),
    components(
        schemas(
            crate::error::ErrorBody,
            crate::routes::contact::ContactPayload,
            crate::routes::contact::ContactResponse,
            crate::routes::content::ActiveNavigationItem,
        ),
    ),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "content", description = "Profile, projects, case studies and navigation"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
