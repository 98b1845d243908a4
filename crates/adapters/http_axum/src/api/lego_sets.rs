//! JSON REST handlers for LEGO sets.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use bricklog_app::ports::LegoSetRepository;
use bricklog_domain::error::{CatalogError, NotFoundError};
use bricklog_domain::id::LegoSetId;
use bricklog_domain::lego_set::{LegoSet, LegoSetChanges, LegoSetDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a LEGO set.
///
/// Every field is optional here so that a missing field is reported by the
/// domain with its name instead of as a generic decoding failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLegoSetRequest {
    pub set_number: Option<String>,
    pub name: Option<String>,
    pub pieces: Option<u32>,
    pub price: Option<f64>,
    pub age_range: Option<String>,
    pub theme: Option<String>,
    pub release_year: Option<u16>,
    pub image_url: Option<String>,
}

impl From<CreateLegoSetRequest> for LegoSetDraft {
    fn from(req: CreateLegoSetRequest) -> Self {
        Self {
            set_number: req.set_number,
            name: req.name,
            pieces: req.pieces,
            price: req.price,
            age_range: req.age_range,
            theme: req.theme,
            release_year: req.release_year,
            image_url: req.image_url,
        }
    }
}

/// Request body for updating a LEGO set. Omitted fields are left unchanged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLegoSetRequest {
    pub set_number: Option<String>,
    pub name: Option<String>,
    pub pieces: Option<u32>,
    pub price: Option<f64>,
    pub age_range: Option<String>,
    pub theme: Option<String>,
    pub release_year: Option<u16>,
    pub image_url: Option<String>,
}

impl From<UpdateLegoSetRequest> for LegoSetChanges {
    fn from(req: UpdateLegoSetRequest) -> Self {
        Self {
            set_number: req.set_number,
            name: req.name,
            pieces: req.pieces,
            price: req.price,
            age_range: req.age_range,
            theme: req.theme,
            release_year: req.release_year,
            image_url: req.image_url,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<LegoSet>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<LegoSet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<LegoSet>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// An id that is not a non-negative integer cannot match any set.
fn parse_id(raw: &str) -> Result<LegoSetId, ApiError> {
    LegoSetId::from_str(raw)
        .map_err(|_| ApiError::from(CatalogError::from(NotFoundError::lego_set(raw))))
}

/// `GET /api/lego-sets`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    let sets = state.lego_set_service.list_lego_sets().await?;
    Ok(ListResponse::Ok(Json(sets)))
}

/// `GET /api/lego-sets/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    let set_id = parse_id(&id)?;
    let set = state.lego_set_service.get_lego_set(set_id).await?;
    Ok(GetResponse::Ok(Json(set)))
}

/// `POST /api/lego-sets`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateLegoSetRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let new = LegoSetDraft::from(req).build()?;
    let created = state.lego_set_service.create_lego_set(new).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/lego-sets/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateLegoSetRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    let set_id = parse_id(&id)?;
    let Json(req) = payload?;
    let updated = state
        .lego_set_service
        .update_lego_set(set_id, LegoSetChanges::from(req))
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/lego-sets/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    let set_id = parse_id(&id)?;
    state.lego_set_service.delete_lego_set(set_id).await?;
    Ok(DeleteResponse::NoContent)
}
