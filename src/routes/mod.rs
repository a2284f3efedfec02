//! HTTP route handlers and the small helpers they share.

use actix_web::http::header;
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;

pub mod account;
pub mod api;
pub mod main;
pub mod policy;
pub mod policy_type;
pub mod program;
pub mod search;

/// Issues a `303 See Other` to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Guards a handler on a service role; the error branch carries the
/// redirect response to return.
pub fn ensure_role(
    user: &AuthenticatedUser,
    role: &str,
    redirect_to: Option<&str>,
) -> Result<(), HttpResponse> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(redirect(redirect_to.unwrap_or("/na")))
    }
}

/// Maps flash levels onto the alert classes the templates style.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context entries shared by every page: alerts, the current user, and the
/// home link back to the auth service.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
    home_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

/// Renders a template or logs and returns a 500.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Decodes an urlencoded POST body, supporting the repeated keys the
/// schedule grids post.
pub(crate) fn parse_form<T: serde::de::DeserializeOwned>(body: &str) -> Option<T> {
    match serde_html_form::from_str(body) {
        Ok(form) => Some(form),
        Err(err) => {
            log::error!("Failed to decode form body: {err}");
            None
        }
    }
}
