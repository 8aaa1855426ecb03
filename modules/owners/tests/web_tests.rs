//! End-to-end tests for the owner pages over an in-memory SQLite database

use axum::http::StatusCode;
use owners::api::web::handlers::{
    CREATED_MESSAGE, CREATE_ERROR, DELETED_MESSAGE, UPDATED_MESSAGE, UPDATE_ERROR,
};
use owners::api::web::session::SESSION_COOKIE;

mod common;
use common::{assert_redirect, body_text, owner_fields, print_test_header, CookieJar, TestApp};

// ===== Navigation =====

#[tokio::test]
async fn test_static_pages_render() {
    print_test_header("test_static_pages_render", &["Verify welcome, search and creation pages render"]);

    let app = TestApp::new().await;
    let mut jar = CookieJar::new();

    let home = app.get("/", &mut jar).await;
    assert_eq!(home.status(), StatusCode::OK);
    assert!(body_text(home).await.contains("Welcome"));

    let find = app.get("/owners/find", &mut jar).await;
    assert_eq!(find.status(), StatusCode::OK);
    assert!(body_text(find).await.contains("search-owner-form"));

    let new = app.get("/owners/new", &mut jar).await;
    assert_eq!(new.status(), StatusCode::OK);
    let body = body_text(new).await;
    assert!(body.contains("add-owner-form"));
    assert!(body.contains("Add Owner"));
}

// ===== Create =====

#[tokio::test]
async fn test_create_with_invalid_fields_redisplays_form() {
    print_test_header(
        "test_create_with_invalid_fields_redisplays_form",
        &[
            "Verify a blank address re-renders the form with errors and entered values",
            "Nothing is stored",
        ],
    );

    let app = TestApp::new().await;
    let mut jar = CookieJar::new();

    let mut fields = owner_fields("John", "Smith");
    fields[2].1 = String::new();
    fields[4].1 = "12ab".to_string();

    let response = app.post_form("/owners/new", &fields, &mut jar).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(CREATE_ERROR));
    assert!(body.contains("must not be blank"));
    assert!(body.contains("numeric value out of bounds"));
    assert!(body.contains(r#"value="Smith""#));
    assert!(body.contains(r#"value="John""#));

    let search = app.get("/owners?lastName=Smith", &mut jar).await;
    assert_eq!(search.status(), StatusCode::OK);
    assert!(body_text(search).await.contains("not found"));
}

#[tokio::test]
async fn test_create_redirects_to_new_owner_with_flash() {
    print_test_header(
        "test_create_redirects_to_new_owner_with_flash",
        &["Verify a valid submission persists, redirects and flashes once"],
    );

    let app = TestApp::new().await;
    let mut jar = CookieJar::new();

    let response = app.post_form("/owners/new", &owner_fields("Betty", "Davis"), &mut jar).await;
    assert_redirect(&response, "/owners/1");

    let details = app.get("/owners/1", &mut jar).await;
    assert_eq!(details.status(), StatusCode::OK);
    let body = body_text(details).await;
    assert!(body.contains(CREATED_MESSAGE));
    assert!(body.contains("Betty Davis"));
    assert!(body.contains("No pets registered."));

    let again = body_text(app.get("/owners/1", &mut jar).await).await;
    assert!(!again.contains(CREATED_MESSAGE));
}

#[tokio::test]
async fn test_create_ignores_submitted_identity() {
    print_test_header(
        "test_create_ignores_submitted_identity",
        &["Verify an id field in a creation form does not choose the identity"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let mut fields = owner_fields("Forged", "Owner");
    fields.push(("id", "3".to_string()));

    let response = app.post_form("/owners/new", &fields, &mut jar).await;
    assert_redirect(&response, "/owners/11");

    let original = body_text(app.get("/owners/3", &mut jar).await).await;
    assert!(original.contains("Eduardo Rodriquez"));
}

// ===== Search =====

#[tokio::test]
async fn test_search_lists_owners_with_pagination() {
    print_test_header(
        "test_search_lists_owners_with_pagination",
        &["Verify an empty search lists all owners five per page"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let first = app.get("/owners", &mut jar).await;
    assert_eq!(first.status(), StatusCode::OK);
    let body = body_text(first).await;
    assert!(body.contains("George Franklin"));
    assert!(body.contains("Jewel, Rosy"));
    assert!(!body.contains("Carlos Estaban"));
    assert!(body.contains("of 10 owners"));
    assert!(body.contains("/owners?page=2&amp;lastName="));

    let second = body_text(app.get("/owners?page=2&lastName=", &mut jar).await).await;
    assert!(second.contains("Carlos Estaban"));
    assert!(!second.contains("George Franklin"));
}

#[tokio::test]
async fn test_search_single_match_redirects_to_owner() {
    print_test_header(
        "test_search_single_match_redirects_to_owner",
        &["Verify exactly one match redirects to the owner's page"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let response = app.get("/owners?lastName=Franklin", &mut jar).await;
    assert_redirect(&response, "/owners/1");
}

#[tokio::test]
async fn test_search_prefix_lists_several_matches() {
    print_test_header(
        "test_search_prefix_lists_several_matches",
        &["Verify a shared last name lists every matching owner"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let response = app.get("/owners?lastName=Dav", &mut jar).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Betty Davis"));
    assert!(body.contains("Harold Davis"));
    assert!(!body.contains("Pages: ["));
}

#[tokio::test]
async fn test_search_without_matches_shows_not_found() {
    print_test_header(
        "test_search_without_matches_shows_not_found",
        &["Verify zero matches re-renders the search form with a field error"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let response = app.get("/owners?lastName=Nobody", &mut jar).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("not found"));
    assert!(body.contains(r#"value="Nobody""#));
}

// ===== Edit =====

#[tokio::test]
async fn test_edit_form_prefills_owner() {
    print_test_header("test_edit_form_prefills_owner", &["Verify the edit form shows stored values"]);

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let response = app.get("/owners/7/edit", &mut jar).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"value="Jeff""#));
    assert!(body.contains(r#"value="1450 Oak Blvd.""#));
    assert!(body.contains("Update Owner"));
}

#[tokio::test]
async fn test_edit_uses_path_identity_over_submitted_id() {
    print_test_header(
        "test_edit_uses_path_identity_over_submitted_id",
        &[
            "Verify a forged id of 99 in the body cannot retarget the update",
            "Owner 7 changes, no owner 99 appears",
        ],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let mut fields = owner_fields("Jeff", "Blackwell");
    fields.insert(0, ("id", "99".to_string()));

    let response = app.post_form("/owners/7/edit", &fields, &mut jar).await;
    assert_redirect(&response, "/owners/7");

    let details = body_text(app.get("/owners/7", &mut jar).await).await;
    assert!(details.contains(UPDATED_MESSAGE));
    assert!(details.contains("Jeff Blackwell"));
    assert!(details.contains("Lucky"));

    let forged = app.get("/owners/99", &mut jar).await;
    assert_eq!(forged.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_with_invalid_fields_redisplays_form() {
    print_test_header(
        "test_edit_with_invalid_fields_redisplays_form",
        &["Verify validation errors re-render the edit form and keep stored data"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let mut fields = owner_fields("Jeff", "");
    fields[4].1 = "12345678901".to_string();

    let response = app.post_form("/owners/7/edit", &fields, &mut jar).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(UPDATE_ERROR));
    assert!(body.contains("has-error"));

    let details = body_text(app.get("/owners/7", &mut jar).await).await;
    assert!(details.contains("Jeff Black"));
    assert!(details.contains("6085555387"));
}

// ===== Detail =====

#[tokio::test]
async fn test_owner_details_list_pets() {
    print_test_header("test_owner_details_list_pets", &["Verify the detail page shows the owner's pets"]);

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let response = app.get("/owners/3", &mut jar).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Eduardo Rodriquez"));
    assert!(body.contains("Rosy"));
    assert!(body.contains("Jewel"));
    assert!(body.contains("2011-04-17"));
    assert!(body.contains(r#"href="/owners/3/edit""#));
}

#[tokio::test]
async fn test_unknown_owner_is_not_found() {
    print_test_header(
        "test_unknown_owner_is_not_found",
        &["Verify detail, edit and remove pages answer 404 for unknown ids"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    for uri in ["/owners/42", "/owners/42/edit", "/owners/42/remove"] {
        let response = app.get(uri, &mut jar).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(body_text(response).await.contains("Owner Not Found"));
    }

    let response = app.post_form("/owners/42/edit", &owner_fields("Ghost", "Owner"), &mut jar).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ===== Delete =====

#[tokio::test]
async fn test_remove_then_confirm_deletes_owner() {
    print_test_header(
        "test_remove_then_confirm_deletes_owner",
        &["Verify the confirmation page stages the owner and confirming deletes it with pets"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let confirm = app.get("/owners/3/remove", &mut jar).await;
    assert_eq!(confirm.status(), StatusCode::OK);
    assert!(jar.get(SESSION_COOKIE).is_some());
    let body = body_text(confirm).await;
    assert!(body.contains("Eduardo Rodriquez"));
    assert!(body.contains("confirm-delete"));

    let response = app.get("/owners/delete", &mut jar).await;
    assert_redirect(&response, "/owners");

    let list = body_text(app.get("/owners", &mut jar).await).await;
    assert!(list.contains(DELETED_MESSAGE));
    assert!(!list.contains("Eduardo Rodriquez"));

    let gone = app.get("/owners/3", &mut jar).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let repeat = app.get("/owners/delete", &mut jar).await;
    assert_redirect(&repeat, "/");
}

#[tokio::test]
async fn test_delete_without_staged_owner_goes_home() {
    print_test_header(
        "test_delete_without_staged_owner_goes_home",
        &["Verify confirming without a staged owner deletes nothing"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    let response = app.get("/owners/delete", &mut jar).await;
    assert_redirect(&response, "/");

    let list = body_text(app.get("/owners", &mut jar).await).await;
    assert!(list.contains("of 10 owners"));
}

#[tokio::test]
async fn test_sessions_delete_independently() {
    print_test_header(
        "test_sessions_delete_independently",
        &[
            "Verify two browsers staging different owners each delete their own",
            "Browser A stages 3, browser B stages 5, then both confirm",
        ],
    );

    let app = TestApp::seeded().await;
    let mut browser_a = CookieJar::new();
    let mut browser_b = CookieJar::new();

    assert_eq!(app.get("/owners/3/remove", &mut browser_a).await.status(), StatusCode::OK);
    assert_eq!(app.get("/owners/5/remove", &mut browser_b).await.status(), StatusCode::OK);
    assert_ne!(browser_a.get(SESSION_COOKIE), browser_b.get(SESSION_COOKIE));

    assert_redirect(&app.get("/owners/delete", &mut browser_a).await, "/owners");
    assert_redirect(&app.get("/owners/delete", &mut browser_b).await, "/owners");

    let mut jar = CookieJar::new();
    assert_eq!(app.get("/owners/3", &mut jar).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/owners/5", &mut jar).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/owners/4", &mut jar).await.status(), StatusCode::OK);
}

// ===== Search bounds =====

#[tokio::test]
async fn test_search_huge_page_is_not_found() {
    print_test_header(
        "test_search_huge_page_is_not_found",
        &[
            "Verify page numbers far beyond the result set report not found",
            "Offsets that would overflow are never sent to the database",
        ],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    for page in ["9223372036854775807", "2305843009213693952", "3"] {
        let response = app.get(&format!("/owners?page={page}"), &mut jar).await;
        assert_eq!(response.status(), StatusCode::OK, "page={page}");
        assert!(body_text(response).await.contains("not found"), "page={page}");
    }
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    print_test_header(
        "test_search_treats_wildcards_literally",
        &["Verify % and _ in a last name match only themselves"],
    );

    let app = TestApp::seeded().await;
    let mut jar = CookieJar::new();

    for last_name in ["%25", "D_vis", "%25avis", "_"] {
        let response = app.get(&format!("/owners?lastName={last_name}"), &mut jar).await;
        assert_eq!(response.status(), StatusCode::OK, "lastName={last_name}");
        let body = body_text(response).await;
        assert!(body.contains("not found"), "lastName={last_name}");
        assert!(!body.contains("Betty Davis"), "lastName={last_name}");
    }

    let response = app.post_form("/owners/new", &owner_fields("Percy", "100%_Pure"), &mut jar).await;
    assert_redirect(&response, "/owners/11");
    let response = app.get("/owners?lastName=100%25_", &mut jar).await;
    assert_redirect(&response, "/owners/11");
}

// ===== Schema =====

#[tokio::test]
async fn test_migrations_rerun_cleanly() {
    print_test_header(
        "test_migrations_rerun_cleanly",
        &["Verify migrating an up-to-date database is a no-op and keeps data"],
    );

    let app = TestApp::seeded().await;
    app.module.migrate(&app.db).await.unwrap();

    let mut jar = CookieJar::new();
    let list = body_text(app.get("/owners", &mut jar).await).await;
    assert!(list.contains("of 10 owners"));
}
