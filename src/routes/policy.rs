use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::permissions::{Role, policy_field_access};
use crate::domain::status::parse_policy_status;
use crate::dto::policy::PolicyPageData;
use crate::forms::policy::PolicyForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, ReferenceReader};
use crate::routes::{base_context, ensure_role, parse_form, redirect, render_template};
use crate::services::ServiceError;
use crate::services::policy::{PolicyTarget, load_policy_page, submit_policy};
use crate::services::session::{SubmitOutcome, submit_confirmation_text};

#[derive(Deserialize)]
struct ViewQueryParams {
    from: Option<String>,
}

#[derive(Deserialize)]
struct NewPolicyQueryParams {
    customer_num: Option<String>,
    customer_name: Option<String>,
}

/// Reference lists the policy tabs render their pickers from.
fn insert_reference_lists(context: &mut Context, repo: &DieselRepository) -> Result<(), ()> {
    let staff = repo.list_staff().map_err(|_| ())?;
    let business_types = repo.list_dropdown_options("BusinessType").map_err(|_| ())?;
    let dnr_statuses = repo.list_dropdown_options("DNRStatus").map_err(|_| ())?;
    let policy_types = repo.list_dropdown_options("PolicyType").map_err(|_| ())?;

    context.insert("staff", &staff);
    context.insert("business_types", &business_types);
    context.insert("dnr_statuses", &dnr_statuses);
    context.insert("policy_type_options", &policy_types);
    Ok(())
}

fn edit_context(
    user: &AuthenticatedUser,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    page: &PolicyPageData,
) -> Context {
    let mut context = base_context(
        flash_messages,
        user,
        "policies",
        &server_config.auth_service_url,
    );
    context.insert("form", &page.form);
    context.insert("enablement", &page.enablement);
    context.insert("locked", &page.locked);
    context.insert("is_create", &page.is_create);
    context.insert("is_next_mod", &page.is_next_mod);
    context.insert("show_cancel_date", &page.show_cancel_date);
    context.insert("show_completion_date", &page.show_completion_date);
    context.insert("confirm_text", page.confirm_text);
    context
}

/// Rebuilds the page state from a posted form so a failed save re-renders
/// with every entered value intact.
fn page_from_form(user: &AuthenticatedUser, form: PolicyForm) -> PolicyPageData {
    let role = Role::from_roles(&user.roles).unwrap_or(Role::Director);
    let status = parse_policy_status(&form.policy_status);
    let show_cancel_date = status.is_some_and(|s| s.unlocks_cancel_date());
    let show_completion_date = status.is_some_and(|s| s.requires_completion_date())
        || form.loc_list == "Completed";
    let is_create = form.is_create;
    let is_next_mod = form.is_next_mod;
    PolicyPageData {
        form,
        enablement: policy_field_access(role).into(),
        locked: false,
        is_create,
        is_next_mod,
        show_cancel_date,
        show_completion_date,
        confirm_text: submit_confirmation_text(role),
    }
}

fn render_edit(tera: &Tera, repo: &DieselRepository, context: &mut Context) -> HttpResponse {
    if insert_reference_lists(context, repo).is_err() {
        error!("Failed to load reference lists for the policy screen");
        return HttpResponse::InternalServerError().finish();
    }
    render_template(tera, "policy/edit.html", context)
}

fn load_and_render(
    target: PolicyTarget,
    from_pending: bool,
    user: &AuthenticatedUser,
    repo: &DieselRepository,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse {
    let page = match load_policy_page(repo, user, target, from_pending) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Policy not found.").send();
            return redirect("/");
        }
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            return redirect("/");
        }
        Err(err) => {
            error!("Failed to load policy: {err}");
            FlashMessage::error("Some error occurred, unable to load data").send();
            return redirect("/");
        }
    };

    let mut context = edit_context(user, flash_messages, server_config, &page);
    render_edit(tera, repo, &mut context)
}

#[get("/policy/new")]
pub async fn show_new_policy(
    params: web::Query<NewPolicyQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let params = params.into_inner();
    let customer = params
        .customer_num
        .map(|num| (num, params.customer_name.unwrap_or_default()));

    load_and_render(
        PolicyTarget::New { customer },
        false,
        &user,
        repo.get_ref(),
        &flash_messages,
        &server_config,
        &tera,
    )
}

#[get("/policy/{lookup}/next-mod")]
pub async fn show_next_mod(
    lookup: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    load_and_render(
        PolicyTarget::NextMod(lookup.into_inner()),
        false,
        &user,
        repo.get_ref(),
        &flash_messages,
        &server_config,
        &tera,
    )
}

#[get("/policy/{lookup}")]
pub async fn show_policy(
    lookup: web::Path<String>,
    params: web::Query<ViewQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let from_pending = params.from.as_deref() == Some("pending");
    load_and_render(
        PolicyTarget::Lookup(lookup.into_inner()),
        from_pending,
        &user,
        repo.get_ref(),
        &flash_messages,
        &server_config,
        &tera,
    )
}

#[post("/policy/save")]
pub async fn save_policy(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    body: String,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let Some(form) = parse_form::<PolicyForm>(&body) else {
        FlashMessage::error("Some error occurred, unable to save the data").send();
        return redirect("/");
    };

    match submit_policy(repo.get_ref(), &user, &form) {
        Ok(SubmitOutcome::Saved { key, created: _ }) => {
            FlashMessage::success("Your changes have been saved").send();
            if form.action == "submit" {
                redirect("/")
            } else {
                redirect(&format!("/policy/pk_number={key}"))
            }
        }
        Ok(SubmitOutcome::DuplicateKey { message }) => {
            let mut context = edit_context(
                &user,
                &flash_messages,
                &server_config,
                &page_from_form(&user, form),
            );
            context.insert("error_message", &message);
            render_edit(&tera, repo.get_ref(), &mut context)
        }
        Ok(SubmitOutcome::PremiumConflict) => redirect("/"),
        Err(ServiceError::Validation(message)) => {
            let mut context = edit_context(
                &user,
                &flash_messages,
                &server_config,
                &page_from_form(&user, form),
            );
            context.insert("error_message", &message);
            render_edit(&tera, repo.get_ref(), &mut context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            error!("Failed to save policy: {err}");
            let mut context = edit_context(
                &user,
                &flash_messages,
                &server_config,
                &page_from_form(&user, form),
            );
            context.insert("error_message", "Some error occurred, unable to save the data");
            render_edit(&tera, repo.get_ref(), &mut context)
        }
    }
}
