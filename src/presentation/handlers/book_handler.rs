// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::book_request::BookRequestDto;
use crate::domain::models::book::Book;
use crate::domain::services::catalog_service::CatalogService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

/// 获取全部图书
pub async fn get_all_books(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = service.list_all().await?;
    Ok(Json(books))
}

/// 根据ISBN获取图书
pub async fn get_book_by_isbn(
    Extension(service): Extension<Arc<CatalogService>>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = service.get_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// 新增图书
///
/// 成功返回201，请求体无法解析或校验失败返回400，ISBN已存在返回409
pub async fn create_book(
    Extension(service): Extension<Arc<CatalogService>>,
    payload: Result<Json<BookRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Json(payload) = payload?;
    let book = payload.into_book()?;
    let saved = service.create(book).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// 删除图书
///
/// 无论ISBN是否存在都返回204
pub async fn delete_book(
    Extension(service): Extension<Arc<CatalogService>>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 编辑图书，不存在时创建
pub async fn edit_book(
    Extension(service): Extension<Arc<CatalogService>>,
    payload: Result<Json<BookRequestDto>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let Json(payload) = payload?;
    let book = payload.into_book()?;
    let saved = service.upsert(book).await?;
    Ok(Json(saved))
}
