//! Endpoint handlers.
//!
//! Each handler validates its input, asks the catalog, encodes the result and
//! builds the response. Errors are returned as [`ApiError`] and rendered once
//! in [`handle`].

use axum::{
    body::{Body, Bytes},
    extract::{
        rejection::{BytesRejection, FailedToBufferBody},
        FromRequest,
    },
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::catalog::{filter_by_make, filter_by_os, find_by_id, CellPhone};
use crate::codec;
use crate::error::ApiError;
use crate::http::server::AppState;
use crate::routing::{Endpoint, PathParams};

const APPLICATION_JSON: &str = "application/json";

type HandlerResult = Result<Response, ApiError>;

/// Run the handler for a routed request.
pub async fn handle(
    state: &AppState,
    endpoint: Endpoint,
    params: PathParams,
    request: Request<Body>,
) -> Response {
    let result = match endpoint {
        Endpoint::Health => Ok(health()),
        Endpoint::Utc => Ok(utc()),
        Endpoint::ListPhones => list_phones(state),
        Endpoint::GetPhone => get_phone(state, &params),
        Endpoint::PhonesByMake => phones_by_make(state, &params),
        Endpoint::PhonesByOs => phones_by_os(state, &params),
        Endpoint::CreatePhone => create_phone(state, request).await,
    };
    result.unwrap_or_else(IntoResponse::into_response)
}

fn health() -> Response {
    (StatusCode::OK, "Service is healthy").into_response()
}

fn utc() -> Response {
    // e.g. "2026-10-19 08:15:02.123456789 UTC"
    (StatusCode::OK, chrono::Utc::now().to_string()).into_response()
}

fn list_phones(state: &AppState) -> HandlerResult {
    json_response(StatusCode::OK, &state.catalog.list())
}

fn get_phone(state: &AppState, params: &PathParams) -> HandlerResult {
    let id: i64 = params.get("id").unwrap_or_default().parse()?;

    match find_by_id(state.catalog.as_ref(), id) {
        Some(phone) => json_response(StatusCode::OK, &phone),
        None if state.api.not_found_status => Err(ApiError::PhoneNotFound(id)),
        None => json_response(StatusCode::OK, &None::<CellPhone>),
    }
}

fn phones_by_make(state: &AppState, params: &PathParams) -> HandlerResult {
    let make = params.get("make").unwrap_or_default();
    json_response(StatusCode::OK, &filter_by_make(state.catalog.as_ref(), make))
}

fn phones_by_os(state: &AppState, params: &PathParams) -> HandlerResult {
    let os = params.get("os").unwrap_or_default();
    json_response(StatusCode::OK, &filter_by_os(state.catalog.as_ref(), os))
}

async fn create_phone(state: &AppState, request: Request<Body>) -> HandlerResult {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type != Some(APPLICATION_JSON) {
        return Err(ApiError::UnsupportedMediaType);
    }

    let body = Bytes::from_request(request, &())
        .await
        .map_err(|rejection| body_error(rejection, state.max_body_size))?;
    let phone = codec::decode_phone(&body)?;

    // Accepted records are echoed back; the catalog is read-only.
    tracing::info!(id = phone.id, make = %phone.make, "Phone accepted");
    json_response(StatusCode::CREATED, &phone)
}

// Length checks come from the `DefaultBodyLimit` layer, for both sized and
// chunked bodies.
fn body_error(rejection: BytesRejection, limit: usize) -> ApiError {
    match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
            ApiError::PayloadTooLarge { limit }
        }
        other => ApiError::BodyRead(other.body_text()),
    }
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> HandlerResult {
    let body = codec::encode(value)?;
    Ok((status, [(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}
