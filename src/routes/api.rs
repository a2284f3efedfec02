use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::domain::distribution::DistributionList;
use crate::dto::search::PolicyListFilter;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::dropdowns::dropdown_options;
use crate::services::outlook::compose_distribution_email;
use crate::services::policy::list_customer_policies;
use crate::services::search::policy_summaries;

#[get("/v1/dropdowns/{name}")]
pub async fn api_v1_dropdowns(
    name: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match dropdown_options(repo.get_ref(), &user, &name.into_inner()) {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            error!("Failed to load dropdown: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
struct ApiPoliciesQueryParams {
    customer_num: String,
}

#[get("/v1/policies")]
pub async fn api_v1_policies(
    params: web::Query<ApiPoliciesQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_customer_policies(repo.get_ref(), &user, &params.customer_num) {
        Ok(policies) => {
            HttpResponse::Ok().json(policy_summaries(&policies, &PolicyListFilter::default()))
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            error!("Failed to list policies: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
struct ComposePayload {
    owner: String,
    list: String,
    subject: Option<String>,
    body: Option<String>,
}

#[post("/v1/outlook/compose")]
pub async fn api_v1_outlook_compose(
    payload: web::Json<ComposePayload>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    let list: DistributionList = match payload.list.parse() {
        Ok(list) => list,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": format!("Unknown distribution list: {}", payload.list) }));
        }
    };

    match compose_distribution_email(
        repo.get_ref(),
        &user,
        &payload.owner,
        list,
        payload.subject.as_deref(),
        payload.body.as_deref(),
    ) {
        Ok(url) => HttpResponse::Ok().json(json!({ "url": url })),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            error!("Failed to build compose link: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
