use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::permissions::{Role, policy_type_field_access};
use crate::dto::policy_type::PolicyTypePageData;
use crate::forms::contact::ContactChangeForm;
use crate::forms::policy_type::PolicyTypeForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, ReferenceReader};
use crate::routes::{base_context, ensure_role, parse_form, redirect, render_template};
use crate::services::ServiceError;
use crate::services::distribution::{ContactScreen, sync_contact_change};
use crate::services::policy_type::{
    PolicyTypeTarget, list_program_policy_types, load_policy_type_page, submit_policy_type,
};
use crate::services::session::{SubmitOutcome, submit_confirmation_text};

#[derive(Deserialize)]
struct ViewQueryParams {
    from: Option<String>,
}

#[derive(Deserialize)]
struct ProgramQueryParams {
    program_name: String,
}

/// Reference lists the policy-type tabs render their pickers from.
fn insert_reference_lists(context: &mut Context, repo: &DieselRepository) -> Result<(), ()> {
    let staff = repo.list_staff().map_err(|_| ())?;
    let policy_types = repo.list_dropdown_options("PolicyType").map_err(|_| ())?;

    context.insert("staff", &staff);
    context.insert("policy_type_options", &policy_types);
    Ok(())
}

fn edit_context(
    user: &AuthenticatedUser,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    page: &PolicyTypePageData,
) -> Context {
    let mut context = base_context(
        flash_messages,
        user,
        "policy_types",
        &server_config.auth_service_url,
    );
    context.insert("form", &page.form);
    context.insert("enablement", &page.enablement);
    context.insert("locked", &page.locked);
    context.insert("is_create", &page.is_create);
    context.insert("confirm_text", page.confirm_text);
    context
}

/// Rebuilds the page state from a posted form so a failed save re-renders
/// with every entered value intact.
fn page_from_form(user: &AuthenticatedUser, form: PolicyTypeForm) -> PolicyTypePageData {
    let role = Role::from_roles(&user.roles).unwrap_or(Role::Director);
    let is_create = form.is_create;
    PolicyTypePageData {
        form,
        enablement: policy_type_field_access(role).into(),
        locked: false,
        is_create,
        confirm_text: submit_confirmation_text(role),
    }
}

fn render_edit(tera: &Tera, repo: &DieselRepository, context: &mut Context) -> HttpResponse {
    if insert_reference_lists(context, repo).is_err() {
        error!("Failed to load reference lists for the policy-type screen");
        return HttpResponse::InternalServerError().finish();
    }
    render_template(tera, "policy_type/edit.html", context)
}

fn load_and_render(
    target: PolicyTypeTarget,
    from_pending: bool,
    user: &AuthenticatedUser,
    repo: &DieselRepository,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse {
    let page = match load_policy_type_page(repo, user, target, from_pending) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Policy type not found.").send();
            return redirect("/");
        }
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            return redirect("/");
        }
        Err(err) => {
            error!("Failed to load policy type: {err}");
            FlashMessage::error("Some error occurred, unable to load data").send();
            return redirect("/");
        }
    };

    let mut context = edit_context(user, flash_messages, server_config, &page);
    render_edit(tera, repo, &mut context)
}

/// Policy-type browser for one program.
#[get("/policy-types")]
pub async fn show_policy_types(
    params: web::Query<ProgramQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let records = match list_program_policy_types(repo.get_ref(), &user, &params.program_name) {
        Ok(records) => records,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            error!("Failed to list policy types: {err}");
            FlashMessage::error("Some error occurred, unable to load data").send();
            return redirect("/");
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "policy_types",
        &server_config.auth_service_url,
    );
    context.insert("program_name", &params.program_name);
    context.insert("policy_types", &records);

    render_template(&tera, "policy_type/list.html", &context)
}

#[get("/policy-type/new")]
pub async fn show_new_policy_type(
    params: web::Query<ProgramQueryParams>,
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
        PolicyTypeTarget::New {
            program_name: params.into_inner().program_name,
        },
        false,
        &user,
        repo.get_ref(),
        &flash_messages,
        &server_config,
        &tera,
    )
}

#[get("/policy-type/{lookup}/next")]
pub async fn show_next_policy_type(
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
        PolicyTypeTarget::NextType(lookup.into_inner()),
        false,
        &user,
        repo.get_ref(),
        &flash_messages,
        &server_config,
        &tera,
    )
}

#[get("/policy-type/{lookup}")]
pub async fn show_policy_type(
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
        PolicyTypeTarget::Lookup(lookup.into_inner()),
        from_pending,
        &user,
        repo.get_ref(),
        &flash_messages,
        &server_config,
        &tera,
    )
}

#[post("/policy-type/save")]
pub async fn save_policy_type(
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

    let Some(form) = parse_form::<PolicyTypeForm>(&body) else {
        FlashMessage::error("Some error occurred, unable to save the data").send();
        return redirect("/");
    };

    match submit_policy_type(repo.get_ref(), &user, &form) {
        Ok(SubmitOutcome::Saved { key, created: _ }) => {
            FlashMessage::success("Your changes have been saved").send();
            if form.action == "submit" {
                redirect(&format!(
                    "/program/program_name={}",
                    form.program_name
                ))
            } else {
                redirect(&format!("/policy-type/pk_number={key}"))
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
            error!("Failed to save policy type: {err}");
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

#[post("/policy-type/contact")]
pub async fn policy_type_contact(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: String,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let Some(form) = parse_form::<ContactChangeForm>(&body) else {
        FlashMessage::error("Some error occurred, unable to update the Recipient Lists").send();
        return redirect("/");
    };

    let owner = form.owner.clone();
    if let Err(err) = sync_contact_change(repo.get_ref(), &user, ContactScreen::PolicyType, &form)
    {
        error!("Policy-type distribution sync failed: {err}");
        FlashMessage::error("Some error occurred, unable to update data in distribution table")
            .send();
    }

    redirect(&format!("/program/program_name={owner}"))
}
