//! One-shot flash messages carried across redirects in cookies

use std::borrow::Cow;
use tower_cookies::{Cookie, Cookies};

pub const MESSAGE_COOKIE: &str = "petclinic_flash_message";
pub const ERROR_COOKIE: &str = "petclinic_flash_error";

/// Success and error texts shown once on the next rendered page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl Flash {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(text.into()),
        }
    }

    /// Keep the texts for the next request
    pub fn store(&self, cookies: &Cookies) {
        if let Some(message) = &self.message {
            cookies.add(flash_cookie(MESSAGE_COOKIE, message));
        }
        if let Some(error) = &self.error {
            cookies.add(flash_cookie(ERROR_COOKIE, error));
        }
    }

    /// Read pending texts and clear them
    pub fn take(cookies: &Cookies) -> Self {
        Self {
            message: take_cookie(cookies, MESSAGE_COOKIE),
            error: take_cookie(cookies, ERROR_COOKIE),
        }
    }
}

fn flash_cookie(name: &'static str, text: &str) -> Cookie<'static> {
    Cookie::build((name, urlencoding::encode(text).into_owned()))
        .path("/")
        .http_only(true)
        .build()
}

fn take_cookie(cookies: &Cookies, name: &'static str) -> Option<String> {
    let cookie = cookies.get(name)?;
    let text = urlencoding::decode(cookie.value())
        .map(Cow::into_owned)
        .unwrap_or_else(|_| cookie.value().to_string());
    cookies.remove(Cookie::build(name).path("/").build());
    (!text.is_empty()).then_some(text)
}
