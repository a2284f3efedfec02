use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::permissions::{Role, account_field_access};
use crate::domain::schedule::{ScheduleGrid, ScheduleKind};
use crate::dto::account::AccountPageData;
use crate::forms::account::AccountForm;
use crate::forms::contact::ContactChangeForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, ReferenceReader};
use crate::routes::{base_context, ensure_role, parse_form, redirect, render_template};
use crate::services::ServiceError;
use crate::services::account::{AccountTarget, load_account_page, submit_account};
use crate::services::distribution::{ContactScreen, sync_contact_change};
use crate::services::session::{SubmitOutcome, submit_confirmation_text};

#[derive(Deserialize)]
struct ViewQueryParams {
    from: Option<String>,
}

/// Reference lists the account tabs render their pickers from.
fn insert_reference_lists(context: &mut Context, repo: &DieselRepository) -> Result<(), ()> {
    let staff = repo.list_staff().map_err(|_| ())?;
    let reps_all = repo.list_loss_control_reps(false).map_err(|_| ())?;
    let reps_active = repo.list_loss_control_reps(true).map_err(|_| ())?;
    let branches = repo.list_branches().map_err(|_| ())?;
    let service_levels = repo.list_service_levels().map_err(|_| ())?;
    let business_types = repo.list_dropdown_options("BusinessType").map_err(|_| ())?;
    let accom_types = repo.list_dropdown_options("AccomType").map_err(|_| ())?;
    let dnr_statuses = repo.list_dropdown_options("DNRStatus").map_err(|_| ())?;

    context.insert("staff", &staff);
    context.insert("loss_ctl_reps", &reps_all);
    context.insert("loss_ctl_reps_active", &reps_active);
    context.insert("branches", &branches);
    context.insert("service_levels", &service_levels);
    context.insert("business_types", &business_types);
    context.insert("accom_types", &accom_types);
    context.insert("dnr_statuses", &dnr_statuses);
    Ok(())
}

fn edit_context(
    user: &AuthenticatedUser,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    page: &AccountPageData,
) -> Context {
    let mut context = base_context(
        flash_messages,
        user,
        "accounts",
        &server_config.auth_service_url,
    );
    context.insert("form", &page.form);
    context.insert("loss_run", page.loss_run.slots());
    context.insert("deductible", page.deductible.slots());
    context.insert("claim_review", page.claim_review.slots());
    context.insert("enablement", &page.enablement);
    context.insert("locked", &page.locked);
    context.insert("is_create", &page.is_create);
    context.insert("confirm_text", page.confirm_text);
    context
}

/// Rebuilds the page state from a posted form so a failed save re-renders
/// with every entered value intact.
fn page_from_form(user: &AuthenticatedUser, form: AccountForm) -> AccountPageData {
    let role = Role::from_roles(&user.roles).unwrap_or(Role::Director);
    let (loss_run, deductible, claim_review) = form.grids().unwrap_or_else(|_| {
        (
            ScheduleGrid::empty(ScheduleKind::LossRun),
            ScheduleGrid::empty(ScheduleKind::DeductibleBill),
            ScheduleGrid::empty(ScheduleKind::ClaimReview),
        )
    });
    let is_create = form.is_create;
    AccountPageData {
        form,
        loss_run,
        deductible,
        claim_review,
        enablement: account_field_access(role).into(),
        locked: false,
        is_create,
        confirm_text: submit_confirmation_text(role),
    }
}

fn render_edit(tera: &Tera, repo: &DieselRepository, context: &mut Context) -> HttpResponse {
    if insert_reference_lists(context, repo).is_err() {
        error!("Failed to load reference lists for the account screen");
        return HttpResponse::InternalServerError().finish();
    }
    render_template(tera, "account/edit.html", context)
}

#[get("/account/new")]
pub async fn show_new_account(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let page = match load_account_page(repo.get_ref(), &user, AccountTarget::New, false) {
        Ok(page) => page,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            error!("Failed to open new account screen: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = edit_context(&user, &flash_messages, &server_config, &page);
    render_edit(&tera, repo.get_ref(), &mut context)
}

#[get("/account/{lookup}")]
pub async fn show_account(
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
    let target = AccountTarget::Lookup(lookup.into_inner());

    let page = match load_account_page(repo.get_ref(), &user, target, from_pending) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Account not found.").send();
            return redirect("/");
        }
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            return redirect("/");
        }
        Err(err) => {
            error!("Failed to load account: {err}");
            FlashMessage::error("Some error occurred, unable to load data").send();
            return redirect("/");
        }
    };

    let mut context = edit_context(&user, &flash_messages, &server_config, &page);
    render_edit(&tera, repo.get_ref(), &mut context)
}

#[post("/account/save")]
pub async fn save_account(
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

    let Some(form) = parse_form::<AccountForm>(&body) else {
        FlashMessage::error("Some error occurred, unable to save the data").send();
        return redirect("/");
    };

    match submit_account(repo.get_ref(), &user, &form) {
        Ok(SubmitOutcome::Saved { key, created: _ }) => {
            FlashMessage::success("Your changes have been saved").send();
            if form.action == "submit" {
                redirect("/")
            } else {
                redirect(&format!("/account/customer_num={key}"))
            }
        }
        Ok(SubmitOutcome::PremiumConflict) => {
            // The warning needs an explicit override; re-render with the
            // entered values and the continue-anyway confirmation.
            let mut context = edit_context(
                &user,
                &flash_messages,
                &server_config,
                &page_from_form(&user, form),
            );
            context.insert("premium_conflict", &true);
            render_edit(&tera, repo.get_ref(), &mut context)
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
            error!("Failed to save account: {err}");
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

#[post("/account/contact")]
pub async fn account_contact(
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
    if let Err(err) = sync_contact_change(repo.get_ref(), &user, ContactScreen::Account, &form) {
        error!("Account distribution sync failed: {err}");
        FlashMessage::error("Some error occurred, unable to add the data to Recipient Lists")
            .send();
    }

    redirect(&format!("/account/customer_num={owner}"))
}
