//! Image endpoints - upload, tag listing, and lookup

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Image, ImageRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Every stored image carries this tag; the column itself is free-form.
const DOG_TAG: &str = "dog";

/// Image response
#[derive(Serialize)]
pub struct ImageResponse {
    pub id: i32,
    pub url: String,
    pub tag: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            url: image.url,
            tag: image.tag,
        }
    }
}

/// Upload response
#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub id: i32,
    pub url: String,
    pub tag: String,
}

/// Tag listing response
#[derive(Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

/// POST /upload - fetch a random dog image upstream and persist its URL
async fn upload(State(state): State<Arc<AppState>>) -> Result<Json<UploadResponse>, ApiError> {
    let url = state.dog_api.random_image().await?;
    let image = ImageRepo::new(&state.pool).insert(&url, DOG_TAG).await?;

    Ok(Json(UploadResponse {
        message: "Imagem salva com sucesso",
        id: image.id,
        url: image.url,
        tag: image.tag,
    }))
}

/// GET /listar - distinct tags currently stored
async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Json<TagsResponse>, ApiError> {
    let tags = ImageRepo::new(&state.pool).distinct_tags().await?;
    Ok(Json(TagsResponse { tags }))
}

/// GET /mostrar/{id} - one record by id, structured 404 when absent
async fn show_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ImageResponse>, ApiError> {
    let image = ImageRepo::new(&state.pool).get(id).await?;
    Ok(Json(ImageResponse::from(image)))
}

/// GET /imagens - every stored record, unpaged
async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ImageResponse>>, ApiError> {
    let images = ImageRepo::new(&state.pool).list().await?;
    Ok(Json(images.into_iter().map(ImageResponse::from).collect()))
}

/// Image routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(upload))
        .route("/listar", get(list_tags))
        .route("/mostrar/{id}", get(show_image))
        .route("/imagens", get(list_images))
}
