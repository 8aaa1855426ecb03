//! Browser session token used to scope per-client state

use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "PETCLINIC_SESSION";

/// Session token sent by the client, if it carries a valid one
pub fn current_session(cookies: &Cookies) -> Option<Uuid> {
    cookies
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

/// Session token for this client, issuing a new one when missing
pub fn ensure_session(cookies: &Cookies) -> Uuid {
    if let Some(session) = current_session(cookies) {
        return session;
    }

    let session = Uuid::new_v4();
    cookies.add(
        Cookie::build((SESSION_COOKIE, session.to_string()))
            .path("/")
            .http_only(true)
            .build(),
    );
    tracing::debug!(%session, "Issued session token");
    session
}
