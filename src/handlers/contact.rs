use actix_web::{web, HttpResponse, Result, ResponseError};
use crate::models::*;
use crate::services::ContactService;

#[utoipa::path(
    post,
    path = "/submit_feedback",
    tag = "contact",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "留言已保存", body = SubmitResponse)
    )
)]
pub async fn submit_feedback(
    contact_service: web::Data<ContactService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: FeedbackRequest = decode_body(&body);
    match contact_service.submit_feedback(request).await {
        Ok(_) => Ok(HttpResponse::Ok().json(SubmitResponse::stored("Feedback stored"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/submit_query",
    tag = "contact",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "咨询已保存", body = SubmitResponse)
    )
)]
pub async fn submit_query(
    contact_service: web::Data<ContactService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: QueryRequest = decode_body(&body);
    match contact_service.submit_query(request).await {
        Ok(_) => Ok(HttpResponse::Ok().json(SubmitResponse::stored("Query stored"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn contact_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/submit_feedback", web::post().to(submit_feedback))
        .route("/submit_query", web::post().to(submit_query));
}
