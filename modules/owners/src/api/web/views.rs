//! HTML views rendered with maud

use super::dto::{OwnerForm, OWNER_FORM_FIELDS};
use super::error::Problem;
use super::flash::Flash;
use crate::contract::{Owner, Pet};
use crate::domain::{FieldErrors, OwnerPage};
use maud::{html, Markup, DOCTYPE};

fn layout(title: &str, flash: &Flash, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "PetClinic :: " (title) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    " | "
                    a href="/owners/find" { "Find owners" }
                }
                main {
                    @if let Some(message) = &flash.message {
                        div class="alert alert-success" id="success-message" { (message) }
                    }
                    @if let Some(error) = &flash.error {
                        div class="alert alert-danger" id="error-message" { (error) }
                    }
                    (content)
                }
            }
        }
    }
}

pub fn welcome(flash: &Flash) -> Markup {
    layout(
        "Welcome",
        flash,
        html! {
            h2 { "Welcome" }
            p { "Manage the clinic's owners and their pets." }
        },
    )
}

pub fn find_owners(last_name: &str, errors: &FieldErrors, flash: &Flash) -> Markup {
    layout(
        "Find Owners",
        flash,
        html! {
            h2 { "Find Owners" }
            form action="/owners" method="get" id="search-owner-form" {
                label for="lastName" { "Last name " }
                input type="text" id="lastName" name="lastName" size="30" maxlength="80" value=(last_name);
                @if let Some(message) = errors.message("last_name") {
                    span class="help-inline" { (message) }
                }
                button type="submit" { "Find Owner" }
            }
            a href="/owners/new" { "Add Owner" }
        },
    )
}

pub fn owners_list(page: &OwnerPage, last_name: &str, flash: &Flash) -> Markup {
    let query = urlencoding::encode(last_name).into_owned();
    layout(
        "Owners",
        flash,
        html! {
            h2 { "Owners" }
            table id="owners" {
                thead {
                    tr { th { "Name" } th { "Address" } th { "City" } th { "Telephone" } th { "Pets" } }
                }
                tbody {
                    @for owner in &page.owners {
                        tr {
                            td { a href={ "/owners/" (owner.id().unwrap_or_default()) } { (owner.full_name()) } }
                            td { (owner.address) }
                            td { (owner.city) }
                            td { (owner.telephone) }
                            td { (pet_names(&owner.pets)) }
                        }
                    }
                }
            }
            @if page.total_pages > 1 {
                div class="pagination" {
                    span { "Pages: [" }
                    @for n in 1..=page.total_pages {
                        @if n == page.current_page {
                            span { " " (n) " " }
                        } @else {
                            a href={ "/owners?page=" (n) "&lastName=" (query) } { " " (n) " " }
                        }
                    }
                    span { "] of " (page.total_items) " owners" }
                }
            }
        },
    )
}

pub fn owner_form(form: &OwnerForm, errors: &FieldErrors, is_new: bool, flash: &Flash) -> Markup {
    let (title, button) = if is_new {
        ("New Owner", "Add Owner")
    } else {
        ("Edit Owner", "Update Owner")
    };
    layout(
        title,
        flash,
        html! {
            h2 { "Owner" }
            form method="post" id="add-owner-form" {
                @for (label, input, key) in OWNER_FORM_FIELDS {
                    div.form-group.has-error[errors.has_field(key)] {
                        label for=(input) { (label) }
                        input type="text" id=(input) name=(input) value=(form.value(input));
                        @if let Some(message) = errors.message(key) {
                            span class="help-inline" { (message) }
                        }
                    }
                }
                button type="submit" { (button) }
            }
        },
    )
}

pub fn owner_details(owner: &Owner, flash: &Flash) -> Markup {
    let id = owner.id().unwrap_or_default();
    layout(
        "Owner Information",
        flash,
        html! {
            h2 { "Owner Information" }
            table id="owner" {
                tr { th { "Name" } td { b { (owner.full_name()) } } }
                tr { th { "Address" } td { (owner.address) } }
                tr { th { "City" } td { (owner.city) } }
                tr { th { "Telephone" } td { (owner.telephone) } }
            }
            a href={ "/owners/" (id) "/edit" } { "Edit Owner" }
            " "
            a href={ "/owners/" (id) "/remove" } { "Delete Owner" }

            h2 { "Pets" }
            @if owner.pets.is_empty() {
                p { "No pets registered." }
            } @else {
                table id="pets" {
                    @for pet in &owner.pets {
                        tr {
                            td { (pet.named.to_string()) }
                            td { (pet.birth_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()) }
                            td { (pet.kind) }
                        }
                    }
                }
            }
        },
    )
}

pub fn owner_delete(owner: &Owner) -> Markup {
    let id = owner.id().unwrap_or_default();
    layout(
        "Delete Owner",
        &Flash::default(),
        html! {
            h2 { "Delete Owner" }
            p { "Are you sure you want to delete " b { (owner.full_name()) } "?" }
            @if !owner.pets.is_empty() {
                p { "Their pets will be removed too: " (pet_names(&owner.pets)) }
            }
            a href="/owners/delete" id="confirm-delete" { "Delete" }
            " "
            a href={ "/owners/" (id) } { "Cancel" }
        },
    )
}

pub fn problem(problem: &Problem) -> Markup {
    layout(
        &problem.title,
        &Flash::default(),
        html! {
            h2 { (problem.title) }
            @if let Some(detail) = &problem.detail {
                p { (detail) }
            }
            p { small { "Status " (problem.status) " - " a href=(problem.type_uri) { (problem.type_uri) } } }
        },
    )
}

fn pet_names(pets: &[Pet]) -> String {
    pets.iter()
        .map(|p| p.named.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
