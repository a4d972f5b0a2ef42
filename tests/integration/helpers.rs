// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use catalog_service::config::settings::Settings;
use catalog_service::domain::services::catalog_service::CatalogService;
use catalog_service::infrastructure::repositories::in_memory_book_repo::{
    BookStore, InMemoryBookRepository,
};
use catalog_service::presentation::routes;
use std::sync::Arc;

pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<InMemoryBookRepository>,
}

/// 创建使用独立内存存储的测试应用
pub fn create_test_app() -> TestApp {
    let settings = Arc::new(Settings::defaults().unwrap());
    let repository = Arc::new(InMemoryBookRepository::new(Arc::new(BookStore::new())));
    let service = Arc::new(CatalogService::new(repository.clone()));

    let server = TestServer::new(routes::app(service, settings)).unwrap();
    TestApp { server, repository }
}
