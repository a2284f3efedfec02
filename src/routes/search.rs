use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::dto::search::PolicyListFilter;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, ensure_role, redirect, render_template};
use crate::services::ServiceError;
use crate::services::policy::list_customer_policies;
use crate::services::search::{
    ProgramSearchBy, policy_summaries, search_account_records, search_program_records,
};

#[derive(Deserialize)]
struct ProgramSearchParams {
    search_by: Option<String>,
}

#[derive(Deserialize)]
struct AccountSearchParams {
    q: Option<String>,
    page: Option<usize>,
}

#[derive(Deserialize)]
struct PolicySearchParams {
    customer_num: String,
    customer_name: Option<String>,
    status: Option<String>,
    policy_num: Option<String>,
    policy_type: Option<String>,
}

#[get("/programs")]
pub async fn search_programs(
    params: web::Query<ProgramSearchParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let search_by = params.search_by.as_deref().unwrap_or("program_name");
    let search_by: ProgramSearchBy = match search_by.parse() {
        Ok(search_by) => search_by,
        Err(err) => {
            error!("Invalid program search: {err}");
            FlashMessage::error("Invalid search type").send();
            return redirect("/");
        }
    };

    let rows = match search_program_records(repo.get_ref(), &user, search_by) {
        Ok(rows) => rows,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            error!("Program search failed: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "programs",
        &server_config.auth_service_url,
    );
    context.insert("rows", &rows);
    context.insert(
        "by_producer",
        &(search_by == ProgramSearchBy::ProducerCode),
    );

    render_template(&tera, "search/programs.html", &context)
}

#[get("/accounts")]
pub async fn search_accounts(
    params: web::Query<AccountSearchParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let term = params.q.as_deref().unwrap_or("");
    let rows = match search_account_records(repo.get_ref(), &user, term) {
        Ok(rows) => rows,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            error!("Account search failed: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let page = params.page.unwrap_or(1);
    let total_pages = rows.len().div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let rows = rows
        .into_iter()
        .skip(page.saturating_sub(1) * DEFAULT_ITEMS_PER_PAGE)
        .take(DEFAULT_ITEMS_PER_PAGE)
        .collect::<Vec<_>>();
    let accounts = Paginated::new(rows, page, total_pages);

    let mut context = base_context(
        &flash_messages,
        &user,
        "accounts",
        &server_config.auth_service_url,
    );
    context.insert("accounts", &accounts);
    context.insert("search_query", term);

    render_template(&tera, "search/accounts.html", &context)
}

#[get("/policies")]
pub async fn search_policies(
    params: web::Query<PolicySearchParams>,
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
    let policies = match list_customer_policies(repo.get_ref(), &user, &params.customer_num) {
        Ok(policies) => policies,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            return redirect("/");
        }
        Err(err) => {
            error!("Policy list failed: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let filter = PolicyListFilter {
        status: params.status.filter(|s| !s.is_empty()),
        policy_num: params.policy_num.filter(|s| !s.is_empty()),
        policy_type: params.policy_type.filter(|s| !s.is_empty()),
    };
    let rows = policy_summaries(&policies, &filter);

    let mut context = base_context(
        &flash_messages,
        &user,
        "policies",
        &server_config.auth_service_url,
    );
    context.insert("rows", &rows);
    context.insert("customer_num", &params.customer_num);
    context.insert(
        "customer_name",
        &params.customer_name.unwrap_or_default(),
    );
    context.insert("status_filter", &filter.status.clone().unwrap_or_default());
    context.insert(
        "policy_num_filter",
        &filter.policy_num.clone().unwrap_or_default(),
    );
    context.insert(
        "policy_type_filter",
        &filter.policy_type.clone().unwrap_or_default(),
    );

    render_template(&tera, "search/policies.html", &context)
}
