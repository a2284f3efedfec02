use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::permissions::{Role, program_field_access};
use crate::domain::schedule::{ScheduleGrid, ScheduleKind};
use crate::dto::program::ProgramPageData;
use crate::forms::contact::ContactChangeForm;
use crate::forms::program::ProgramForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, ReferenceReader};
use crate::routes::{base_context, ensure_role, parse_form, redirect, render_template};
use crate::services::ServiceError;
use crate::services::distribution::{ContactScreen, sync_contact_change};
use crate::services::program::{ProgramTarget, load_program_page, submit_program};
use crate::services::session::{SubmitOutcome, submit_confirmation_text};

#[derive(Deserialize)]
struct ViewQueryParams {
    from: Option<String>,
}

/// Reference lists the program tabs render their pickers from.
fn insert_reference_lists(context: &mut Context, repo: &DieselRepository) -> Result<(), ()> {
    let staff = repo.list_staff().map_err(|_| ())?;
    let reps = repo.list_loss_control_reps(false).map_err(|_| ())?;
    let branches = repo.list_branches().map_err(|_| ())?;
    let business_types = repo.list_dropdown_options("BusinessType").map_err(|_| ())?;
    let accom_types = repo.list_dropdown_options("AccomType").map_err(|_| ())?;
    let dnr_statuses = repo.list_dropdown_options("DNRStatus").map_err(|_| ())?;

    context.insert("staff", &staff);
    context.insert("loss_ctl_reps", &reps);
    context.insert("branches", &branches);
    context.insert("business_types", &business_types);
    context.insert("accom_types", &accom_types);
    context.insert("dnr_statuses", &dnr_statuses);
    Ok(())
}

fn edit_context(
    user: &AuthenticatedUser,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    page: &ProgramPageData,
) -> Context {
    let mut context = base_context(
        flash_messages,
        user,
        "programs",
        &server_config.auth_service_url,
    );
    context.insert("form", &page.form);
    context.insert("loss_run", page.loss_run.slots());
    context.insert("claim_review", page.claim_review.slots());
    context.insert("enablement", &page.enablement);
    context.insert("locked", &page.locked);
    context.insert("is_create", &page.is_create);
    context.insert("confirm_text", page.confirm_text);
    context
}

/// Rebuilds the page state from a posted form so a failed save re-renders
/// with every entered value intact.
fn page_from_form(user: &AuthenticatedUser, form: ProgramForm) -> ProgramPageData {
    let role = Role::from_roles(&user.roles).unwrap_or(Role::Director);
    let (loss_run, claim_review) = form.grids().unwrap_or_else(|_| {
        (
            ScheduleGrid::empty(ScheduleKind::LossRun),
            ScheduleGrid::empty(ScheduleKind::ClaimReview),
        )
    });
    let is_create = form.is_create;
    ProgramPageData {
        form,
        loss_run,
        claim_review,
        enablement: program_field_access(role).into(),
        locked: false,
        is_create,
        confirm_text: submit_confirmation_text(role),
    }
}

fn render_edit(
    tera: &Tera,
    repo: &DieselRepository,
    context: &mut Context,
) -> HttpResponse {
    if insert_reference_lists(context, repo).is_err() {
        error!("Failed to load reference lists for the program screen");
        return HttpResponse::InternalServerError().finish();
    }
    render_template(tera, "program/edit.html", context)
}

#[get("/program/new")]
pub async fn show_new_program(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let page = match load_program_page(repo.get_ref(), &user, ProgramTarget::New, false) {
        Ok(page) => page,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            error!("Failed to open new program screen: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = edit_context(&user, &flash_messages, &server_config, &page);
    render_edit(&tera, repo.get_ref(), &mut context)
}

#[get("/program/{lookup}")]
pub async fn show_program(
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
    let target = ProgramTarget::Lookup(lookup.into_inner());

    let page = match load_program_page(repo.get_ref(), &user, target, from_pending) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Program not found.").send();
            return redirect("/");
        }
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            return redirect("/");
        }
        Err(err) => {
            error!("Failed to load program: {err}");
            FlashMessage::error("Some error occurred, unable to load data").send();
            return redirect("/");
        }
    };

    let mut context = edit_context(&user, &flash_messages, &server_config, &page);
    render_edit(&tera, repo.get_ref(), &mut context)
}

#[post("/program/save")]
pub async fn save_program(
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

    let Some(form) = parse_form::<ProgramForm>(&body) else {
        FlashMessage::error("Some error occurred, unable to save the data").send();
        return redirect("/");
    };

    match submit_program(repo.get_ref(), &user, &form) {
        Ok(SubmitOutcome::Saved { key, created: _ }) => {
            FlashMessage::success("Your changes have been saved").send();
            if form.action == "submit" {
                redirect("/")
            } else {
                redirect(&format!("/program/program_name={key}"))
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
        Ok(SubmitOutcome::PremiumConflict) => {
            // Not raised on this screen; treat as an aborted save.
            redirect("/")
        }
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
            error!("Failed to save program: {err}");
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

#[post("/program/contact")]
pub async fn program_contact(
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
    if let Err(err) = sync_contact_change(repo.get_ref(), &user, ContactScreen::Program, &form) {
        error!("Program distribution sync failed: {err}");
        FlashMessage::error("Some error occurred, unable to add the data to Recipient Lists")
            .send();
    }

    redirect(&format!("/program/program_name={owner}"))
}
