//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::{owner_binder, FindOwnersQuery, OwnerForm};
use super::error::{map_domain_error, Problem};
use super::flash::Flash;
use super::{session, views};
use crate::contract::OwnerError;
use crate::domain::{FieldErrors, OwnerSearch, Service};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;
use tower_cookies::Cookies;

pub const CREATE_ERROR: &str = "There was an error in creating the owner.";
pub const CREATED_MESSAGE: &str = "New Owner Created";
pub const UPDATE_ERROR: &str = "There was an error in updating the owner.";
pub const UPDATED_MESSAGE: &str = "Owner Values Updated";
pub const DELETED_MESSAGE: &str = "Owner Deleted";
pub const DELETE_MISSING_ERROR: &str = "Owner not found";

fn page(markup: maud::Markup) -> Response {
    Html(markup.into_string()).into_response()
}

fn owner_location(owner_id: i32) -> String {
    format!("/owners/{owner_id}")
}

// ===== Home =====

pub async fn welcome(cookies: Cookies) -> Response {
    page(views::welcome(&Flash::take(&cookies)))
}

// ===== Create =====

/// Render an empty creation form bound to a new owner
pub async fn init_creation_form(service: Arc<Service>, cookies: Cookies) -> Result<Response, Problem> {
    let owner = service.resolve_owner(None).await.map_err(map_domain_error)?;
    let form = OwnerForm::from(&owner);
    Ok(page(views::owner_form(&form, &FieldErrors::new(), true, &Flash::take(&cookies))))
}

/// Validate and create an owner, or redisplay the submitted form
pub async fn process_creation_form(
    service: Arc<Service>,
    cookies: Cookies,
    fields: Vec<(String, String)>,
) -> Result<Response, Problem> {
    let form = match owner_binder().bind::<OwnerForm>(&fields).into_result() {
        Ok(form) => form,
        Err((form, errors)) => {
            tracing::debug!(errors = errors.len(), "Owner creation form rejected");
            return Ok(page(views::owner_form(&form, &errors, true, &Flash::error(CREATE_ERROR))));
        }
    };

    let owner = service.create_owner(form.into()).await.map_err(map_domain_error)?;
    let owner_id = owner.id().ok_or_else(|| map_domain_error(OwnerError::Internal))?;

    Flash::message(CREATED_MESSAGE).store(&cookies);
    Ok(Redirect::to(&owner_location(owner_id)).into_response())
}

// ===== Search =====

pub async fn init_find_form(cookies: Cookies) -> Response {
    page(views::find_owners("", &FieldErrors::new(), &Flash::take(&cookies)))
}

/// Search owners by last name: form with "not found", redirect on a single
/// match, paginated list otherwise
pub async fn process_find_form(
    service: Arc<Service>,
    cookies: Cookies,
    query: FindOwnersQuery,
) -> Result<Response, Problem> {
    let last_name = query.last_name.unwrap_or_default();
    let search = service
        .find_owners(Some(&last_name), query.page.unwrap_or(1))
        .await
        .map_err(map_domain_error)?;

    match search {
        OwnerSearch::NotFound => {
            let mut errors = FieldErrors::new();
            errors.reject("last_name", "notFound", "not found");
            Ok(page(views::find_owners(&last_name, &errors, &Flash::take(&cookies))))
        }
        OwnerSearch::Single(owner) => {
            let owner_id = owner.id().ok_or_else(|| map_domain_error(OwnerError::Internal))?;
            Ok(Redirect::to(&owner_location(owner_id)).into_response())
        }
        OwnerSearch::Many(results) => Ok(page(views::owners_list(
            &results,
            &last_name,
            &Flash::take(&cookies),
        ))),
    }
}

// ===== Edit =====

pub async fn init_update_owner_form(
    service: Arc<Service>,
    cookies: Cookies,
    owner_id: i32,
) -> Result<Response, Problem> {
    let owner = service.resolve_owner(Some(owner_id)).await.map_err(map_domain_error)?;
    let form = OwnerForm::from(&owner);
    Ok(page(views::owner_form(&form, &FieldErrors::new(), false, &Flash::take(&cookies))))
}

/// Validate and update an owner. The identity is taken from the path only.
pub async fn process_update_owner_form(
    service: Arc<Service>,
    cookies: Cookies,
    owner_id: i32,
    fields: Vec<(String, String)>,
) -> Result<Response, Problem> {
    let form = match owner_binder().bind::<OwnerForm>(&fields).into_result() {
        Ok(form) => form,
        Err((form, errors)) => {
            tracing::debug!(owner_id, errors = errors.len(), "Owner update form rejected");
            return Ok(page(views::owner_form(&form, &errors, false, &Flash::error(UPDATE_ERROR))));
        }
    };

    service
        .update_owner(owner_id, form.into())
        .await
        .map_err(map_domain_error)?;

    Flash::message(UPDATED_MESSAGE).store(&cookies);
    Ok(Redirect::to(&owner_location(owner_id)).into_response())
}

// ===== Detail =====

pub async fn show_owner(service: Arc<Service>, cookies: Cookies, owner_id: i32) -> Result<Response, Problem> {
    let owner = service.resolve_owner(Some(owner_id)).await.map_err(map_domain_error)?;
    Ok(page(views::owner_details(&owner, &Flash::take(&cookies))))
}

// ===== Delete =====

/// Confirmation page; stages the owner for deletion in this client's session
pub async fn init_delete_owner(
    service: Arc<Service>,
    cookies: Cookies,
    owner_id: i32,
) -> Result<Response, Problem> {
    let session = session::ensure_session(&cookies);
    let owner = service
        .stage_owner_removal(session, owner_id)
        .await
        .map_err(map_domain_error)?;
    Ok(page(views::owner_delete(&owner)))
}

/// Delete the owner staged by this session, or go home when nothing is staged
pub async fn process_delete_owner(service: Arc<Service>, cookies: Cookies) -> Result<Response, Problem> {
    let Some(session) = session::current_session(&cookies) else {
        return Ok(Redirect::to("/").into_response());
    };

    match service.delete_staged_owner(session).await {
        Ok(Some(_)) => {
            Flash::message(DELETED_MESSAGE).store(&cookies);
            Ok(Redirect::to("/owners").into_response())
        }
        Ok(None) => Ok(Redirect::to("/").into_response()),
        Err(OwnerError::NotFound { .. }) => {
            Flash::error(DELETE_MISSING_ERROR).store(&cookies);
            Ok(Redirect::to("/owners").into_response())
        }
        Err(e) => Err(map_domain_error(e)),
    }
}
