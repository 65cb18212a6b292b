use super::api_response::{message_id, ApiError, ApiResponse};
use crate::application::read_models::BootcampListItem;
use crate::bootcamp::domain::{
    Bootcamp, BootcampCandidate, BootcampId, Order, Page, PageRequest, SortBy, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
use crate::ports::inbound::BootcampServicePort;
use crate::shared::BootcampError;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

pub type SharedService = Arc<dyn BootcampServicePort>;

/// Body of a list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let (number, size, total_elements, total_pages) = (
            page.page(),
            page.size(),
            page.total_elements(),
            page.total_pages(),
        );
        Self {
            content: page.into_content(),
            page: number,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// Query parameters of `GET /bootcamps` after lenient parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListQuery {
    pub page: i64,
    pub size: i64,
    pub sort_by: SortBy,
    pub order: Order,
}

impl ListQuery {
    /// Values that fail to parse fall back to their defaults
    pub(crate) fn from_params(params: &HashMap<String, String>) -> Self {
        fn parsed<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Option<T> {
            params.get(key).and_then(|v| v.trim().parse().ok())
        }

        Self {
            page: parsed(params, "page").unwrap_or(DEFAULT_PAGE),
            size: parsed(params, "size").unwrap_or(DEFAULT_PAGE_SIZE),
            sort_by: parsed(params, "sortBy").unwrap_or_default(),
            order: parsed(params, "order").unwrap_or_default(),
        }
    }
}

/// Decodes a registration body; an empty or `null` body is `None`
pub(crate) fn parse_candidate(body: &[u8]) -> Result<Option<BootcampCandidate>, BootcampError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<BootcampCandidate>>(body).map_err(|e| {
        tracing::debug!(error = %e, "undecodable registration body");
        BootcampError::InvalidRequest
    })
}

pub async fn create_bootcamp(
    State(service): State<SharedService>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<Bootcamp>>), ApiError> {
    let identifier = message_id(&headers);
    tracing::info!(%identifier, "POST /bootcamps");

    let candidate = parse_candidate(&body).map_err(|e| ApiError::new(&identifier, e))?;
    let saved = service
        .register(candidate)
        .await
        .map_err(|e| ApiError::new(&identifier, e))?;

    let status = StatusCode::CREATED;
    Ok((status, Json(ApiResponse::success(status, identifier, saved))))
}

pub async fn list_bootcamps(
    State(service): State<SharedService>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResponse<BootcampListItem>>, ApiError> {
    let identifier = message_id(&headers);
    tracing::info!(%identifier, "GET /bootcamps");

    let query = ListQuery::from_params(&params);
    let request =
        PageRequest::new(query.page, query.size).map_err(|e| ApiError::new(&identifier, e))?;

    let page = service
        .list_page(request, query.sort_by, query.order)
        .await
        .map_err(|e| ApiError::new(&identifier, e))?;

    Ok(Json(PageResponse::from(page)))
}

pub async fn get_bootcamp(
    State(service): State<SharedService>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Bootcamp>>, ApiError> {
    let identifier = message_id(&headers);
    tracing::info!(%identifier, id = %raw_id, "GET /bootcamps/{{id}}");

    let id: BootcampId = raw_id
        .trim()
        .parse()
        .map_err(|_| ApiError::new(&identifier, BootcampError::InvalidParameters))?;

    match service
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::new(&identifier, e))?
    {
        Some(bootcamp) => Ok(Json(ApiResponse::success(
            StatusCode::OK,
            identifier,
            bootcamp,
        ))),
        None => Err(ApiError::not_found(&identifier)),
    }
}
