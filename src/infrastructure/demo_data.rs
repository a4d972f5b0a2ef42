// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Book;
use crate::domain::repositories::book_repository::BookRepository;
use crate::utils::errors::RepositoryError;
use tracing::info;

/// 加载演示数据
///
/// 直接写入仓库，不经过校验和存在性检查；重复调用会覆盖同一ISBN的记录。
pub async fn load_book_test_data(repository: &dyn BookRepository) -> Result<(), RepositoryError> {
    let books = [
        Book::new("132131434", "Northern Lights", "Lyra Silverstar", 9.90),
        Book::new("1234124412", "Polar Journey", "Lyra Polarson", 9.90),
    ];

    for book in books {
        repository.save(book).await?;
    }

    info!(count = repository.count().await?, "Demo book data loaded");
    Ok(())
}
