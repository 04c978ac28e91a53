//! # Site Content Routes
//!
//! Read-only views over the embedded [`SiteContent`]. Nothing here mutates
//! state; every handler borrows from the shared content and serializes.
//!
//! Unknown slugs answer 404 with the usual `{"error": ...}` body.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use folio_core::content::{Hero, Metric, Profile, SkillCategory, ALL_DOMAINS};
use folio_core::{NavigationItem, SiteContent};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/site", get(get_site))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/featured", get(featured_projects))
        .route("/api/projects/domains", get(project_domains))
        .route("/api/projects/{slug}", get(get_project))
        .route("/api/projects/{slug}/case-study", get(get_case_study))
        .route("/api/navigation/active", get(active_navigation))
}

/// Everything the landing page needs except the project list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteOverview<'a> {
    profile: &'a Profile,
    hero: &'a Hero,
    core_metrics: &'a [Metric],
    skills: &'a [SkillCategory],
    navigation: &'a [NavigationItem],
}

impl<'a> From<&'a SiteContent> for SiteOverview<'a> {
    fn from(content: &'a SiteContent) -> Self {
        Self {
            profile: &content.profile,
            hero: &content.hero,
            core_metrics: &content.core_metrics,
            skills: &content.skills,
            navigation: &content.navigation,
        }
    }
}

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    /// Domain to filter by, case-insensitive. `all` or absent returns every project.
    pub domain: Option<String>,
}

/// Query parameters for `GET /api/navigation/active`.
#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    /// Current page path. Defaults to `/`.
    pub path: Option<String>,
}

/// A navigation item with its active flag.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActiveNavigationItem {
    pub label: String,
    pub href: String,
    #[serde(rename = "match")]
    pub match_prefix: String,
    pub active: bool,
}

/// GET /api/site: profile, hero copy, metrics, skills and navigation.
#[utoipa::path(
    get,
    path = "/api/site",
    responses(
        (status = 200, description = "Site overview", body = serde_json::Value),
    ),
    tag = "content"
)]
async fn get_site(State(state): State<AppState>) -> Response {
    Json(SiteOverview::from(state.content.as_ref())).into_response()
}

/// GET /api/projects: all projects, optionally filtered by domain.
#[utoipa::path(
    get,
    path = "/api/projects",
    params(
        ("domain" = Option<String>, Query, description = "Domain filter, case-insensitive; `all` disables it"),
    ),
    responses(
        (status = 200, description = "Matching projects in content order", body = serde_json::Value),
    ),
    tag = "content"
)]
async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Response {
    let domain = filter.domain.as_deref().unwrap_or(ALL_DOMAINS);
    Json(state.content.projects_in_domain(domain)).into_response()
}

/// GET /api/projects/featured: the projects shown on the home page.
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    responses(
        (status = 200, description = "First three projects", body = serde_json::Value),
    ),
    tag = "content"
)]
async fn featured_projects(State(state): State<AppState>) -> Response {
    Json(state.content.featured()).into_response()
}

/// GET /api/projects/domains: distinct domains in first-seen order.
#[utoipa::path(
    get,
    path = "/api/projects/domains",
    responses(
        (status = 200, description = "Project domains", body = Vec<String>),
    ),
    tag = "content"
)]
async fn project_domains(State(state): State<AppState>) -> Response {
    Json(state.content.domains()).into_response()
}

/// GET /api/projects/{slug}
#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project", body = serde_json::Value),
        (status = 404, description = "Unknown slug", body = ErrorBody),
    ),
    tag = "content"
)]
async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let project = state
        .content
        .project(&slug)
        .ok_or_else(|| AppError::NotFound(format!("project '{slug}'")))?;
    Ok(Json(project).into_response())
}

/// GET /api/projects/{slug}/case-study
#[utoipa::path(
    get,
    path = "/api/projects/{slug}/case-study",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Case study", body = serde_json::Value),
        (status = 404, description = "Unknown slug or no case study", body = ErrorBody),
    ),
    tag = "content"
)]
async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let project = state
        .content
        .project(&slug)
        .ok_or_else(|| AppError::NotFound(format!("project '{slug}'")))?;
    let case_study = project
        .case_study
        .as_ref()
        .ok_or_else(|| AppError::NotFound(format!("case study for '{slug}'")))?;
    Ok(Json(case_study).into_response())
}

/// GET /api/navigation/active: navigation items flagged for a path.
#[utoipa::path(
    get,
    path = "/api/navigation/active",
    params(
        ("path" = Option<String>, Query, description = "Current page path (default `/`)"),
    ),
    responses(
        (status = 200, description = "Navigation with active flags", body = Vec<ActiveNavigationItem>),
    ),
    tag = "content"
)]
async fn active_navigation(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<Vec<ActiveNavigationItem>> {
    let path = query.path.as_deref().unwrap_or("/");
    let items = state
        .content
        .active_navigation(path)
        .map(|(item, active)| ActiveNavigationItem {
            label: item.label.clone(),
            href: item.href.clone(),
            match_prefix: item.match_prefix.clone(),
            active,
        })
        .collect();
    Json(items)
}
