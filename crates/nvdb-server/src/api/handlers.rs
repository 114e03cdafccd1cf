//! Route handlers
//!
//! Handlers validate nothing themselves beyond body decoding; the use cases
//! own every rule and the error mapping turns their failures into envelopes.

use nvdb_application::ports::services::CompareQuery;
use nvdb_infrastructure::AppContext;
use nvdb_infrastructure::logging::log_health_check;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{State, get, post};
use tracing::info;

use super::error::{ApiError, api_error, body_error};
use super::models::{
    BatchData, CompareData, CompareRequest, ConfigResponse, EmbedRecordData, EmbedRecordRequest,
    EmbedTextData, EmbedTextRequest, StatusResponse, SuccessResponse, WelcomeResponse,
};
use crate::constants::*;

/// JSON body that may have failed to decode
type Body<'r, T> = Result<Json<T>, json::Error<'r>>;

/// Handler result carrying a success envelope
type ApiResult<T> = Result<Json<SuccessResponse<T>>, ApiError>;

fn decode<T>(body: Body<'_, T>) -> Result<T, ApiError> {
    body.map(Json::into_inner).map_err(|e| body_error(&e))
}

/// Liveness probe
#[get("/health")]
pub fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: HEALTH_STATUS,
        message: HEALTH_MESSAGE.to_string(),
    })
}

/// Greeting
#[get("/")]
pub fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// Sanitised configuration
#[get("/config")]
pub fn config(state: &State<AppContext>) -> Json<ConfigResponse> {
    let provider = state.embedding_provider();
    Json(ConfigResponse {
        environment: state.config.environment.clone(),
        database_configured: state.config.database.is_configured(),
        database_provider: state.repository().provider_name().to_string(),
        embedding_provider: provider.provider_name().to_string(),
        embedding_model: provider.model().to_string(),
    })
}

/// Storage connectivity check
#[get("/db/test")]
pub async fn db_test(state: &State<AppContext>) -> (Status, Json<StatusResponse>) {
    let repository = state.repository();
    match repository.health_check().await {
        Ok(()) => {
            log_health_check(repository.provider_name(), true, None);
            (
                Status::Ok,
                Json(StatusResponse {
                    status: STATUS_SUCCESS,
                    message: DB_OK_MESSAGE.to_string(),
                }),
            )
        }
        Err(e) => {
            let detail = e.to_string();
            log_health_check(repository.provider_name(), false, Some(&detail));
            (
                Status::ServiceUnavailable,
                Json(StatusResponse {
                    status: STATUS_FAILED,
                    message: format!("{DB_FAILED_MESSAGE}: {detail}"),
                }),
            )
        }
    }
}

/// Embed free text
#[post("/embedding", data = "<body>")]
pub async fn embed_text(
    state: &State<AppContext>,
    body: Body<'_, EmbedTextRequest>,
) -> ApiResult<EmbedTextData> {
    let request = decode(body)?;
    let embedding = state
        .embedding_service()
        .embed_text(&request.news_desc)
        .await
        .map_err(|e| api_error(&e, EMBED_TEXT_CONTEXT))?;

    Ok(Json(SuccessResponse::new(EmbedTextData::new(
        request.news_desc,
        embedding,
    ))))
}

/// Embed one stored record and persist the vector
#[post("/embedding-id", data = "<body>")]
pub async fn embed_record(
    state: &State<AppContext>,
    body: Body<'_, EmbedRecordRequest>,
) -> ApiResult<EmbedRecordData> {
    let request = decode(body)?;
    let outcome = state
        .embedding_service()
        .embed_record(&request.news_id)
        .await
        .map_err(|e| api_error(&e, EMBED_RECORD_CONTEXT))?;

    Ok(Json(SuccessResponse::with_message(
        EMBEDDING_SAVED_MESSAGE,
        EmbedRecordData::from(outcome),
    )))
}

/// Embed every pending record
#[post("/embedding/batch/all")]
pub async fn embed_batch(state: &State<AppContext>) -> ApiResult<BatchData> {
    let report = state
        .embedding_service()
        .embed_pending()
        .await
        .map_err(|e| api_error(&e, EMBED_BATCH_CONTEXT))?;

    Ok(Json(SuccessResponse::with_message(
        report.message(),
        BatchData::from(report),
    )))
}

/// Rank stored embeddings against a query
#[post("/similarity-compare", data = "<body>")]
pub async fn similarity_compare(
    state: &State<AppContext>,
    body: Body<'_, CompareRequest>,
) -> ApiResult<CompareData> {
    let query = CompareQuery::from(decode(body)?);
    let outcome = state
        .similarity_service()
        .compare(&query)
        .await
        .map_err(|e| api_error(&e, COMPARE_CONTEXT))?;

    info!(
        results = outcome.results.len(),
        total_compared = outcome.total_compared,
        "Similarity compare served"
    );

    let data = CompareData::from(outcome);
    if data.total_compared == 0 {
        Ok(Json(SuccessResponse::with_message(EMPTY_CORPUS_MESSAGE, data)))
    } else {
        Ok(Json(SuccessResponse::new(data)))
    }
}
