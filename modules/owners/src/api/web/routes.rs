//! Route registration for the owner pages

use super::dto::FindOwnersQuery;
use super::error::Problem;
use super::handlers;
use crate::domain::Service;
use axum::{
    extract::{Form, Path, Query},
    response::Response,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tower_cookies::{CookieManagerLayer, Cookies};

/// Register all owner routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        .route("/", get(welcome_handler))
        .route("/owners/new", get(init_creation_form_handler).post(process_creation_form_handler))
        .route("/owners/find", get(init_find_form_handler))
        .route("/owners", get(process_find_form_handler))
        .route("/owners/delete", get(process_delete_owner_handler))
        .route("/owners/{owner_id}", get(show_owner_handler))
        .route(
            "/owners/{owner_id}/edit",
            get(init_update_owner_form_handler).post(process_update_owner_form_handler),
        )
        .route("/owners/{owner_id}/remove", get(init_delete_owner_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
        .layer(CookieManagerLayer::new());

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn welcome_handler(cookies: Cookies) -> Response {
    handlers::welcome(cookies).await
}

async fn init_creation_form_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
) -> Result<Response, Problem> {
    handlers::init_creation_form(service, cookies).await
}

async fn process_creation_form_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, Problem> {
    handlers::process_creation_form(service, cookies, fields).await
}

async fn init_find_form_handler(cookies: Cookies) -> Response {
    handlers::init_find_form(cookies).await
}

async fn process_find_form_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
    Query(query): Query<FindOwnersQuery>,
) -> Result<Response, Problem> {
    handlers::process_find_form(service, cookies, query).await
}

async fn init_update_owner_form_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
    Path(owner_id): Path<i32>,
) -> Result<Response, Problem> {
    handlers::init_update_owner_form(service, cookies, owner_id).await
}

async fn process_update_owner_form_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
    Path(owner_id): Path<i32>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, Problem> {
    handlers::process_update_owner_form(service, cookies, owner_id, fields).await
}

async fn show_owner_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
    Path(owner_id): Path<i32>,
) -> Result<Response, Problem> {
    handlers::show_owner(service, cookies, owner_id).await
}

async fn init_delete_owner_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
    Path(owner_id): Path<i32>,
) -> Result<Response, Problem> {
    handlers::init_delete_owner(service, cookies, owner_id).await
}

async fn process_delete_owner_handler(
    Extension(service): Extension<Arc<Service>>,
    cookies: Cookies,
) -> Result<Response, Problem> {
    handlers::process_delete_owner(service, cookies).await
}
