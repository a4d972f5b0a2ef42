// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::catalog_service::CatalogService;
use crate::presentation::handlers::{book_handler, home_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 处理器依赖的 `Arc<CatalogService>` 和 `Arc<Settings>` 需由调用方以
/// `Extension` 形式注入，见 [`app`]
pub fn routes() -> Router {
    let book_routes = Router::new()
        .route(
            "/books",
            post(book_handler::create_book)
                .get(book_handler::get_all_books)
                .put(book_handler::edit_book),
        )
        .route(
            "/books/{isbn}",
            get(book_handler::get_book_by_isbn).delete(book_handler::delete_book),
        );

    let public_routes = Router::new()
        .route("/hello", get(home_handler::greeting))
        .route("/health", get(health_check))
        .route("/version", get(version));

    Router::new().merge(public_routes).merge(book_routes)
}

/// 创建注入了全部依赖的应用
pub fn app(service: Arc<CatalogService>, settings: Arc<Settings>) -> Router {
    routes()
        .layer(Extension(service))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
