// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use catalog_service::config::settings::Settings;
use catalog_service::domain::repositories::book_repository::BookRepository;
use catalog_service::domain::services::catalog_service::CatalogService;
use catalog_service::infrastructure::demo_data;
use catalog_service::infrastructure::repositories::in_memory_book_repo::{
    BookStore, InMemoryBookRepository,
};
use catalog_service::presentation::routes;
use catalog_service::utils::telemetry;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting catalog-service...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    if settings.metrics.enabled {
        let addr = SocketAddr::from(([0, 0, 0, 0], settings.metrics.port));
        catalog_service::infrastructure::metrics::init_metrics(addr);
    }

    // 3. Initialize storage
    let store = Arc::new(BookStore::new());
    let repository: Arc<dyn BookRepository> = Arc::new(InMemoryBookRepository::new(store));

    if settings.demo.load_test_data {
        demo_data::load_book_test_data(repository.as_ref()).await?;
    }
    info!(books = repository.count().await?, "Book repository ready");

    // 4. Start HTTP server
    let service = Arc::new(CatalogService::new(repository));
    let app = routes::app(service, settings.clone());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
