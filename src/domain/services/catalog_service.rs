// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Book;
use crate::domain::repositories::book_repository::BookRepository;
use crate::utils::errors::CatalogError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 目录服务
///
/// 在仓库之上实施目录的领域规则：
/// - 创建时ISBN不得重复
/// - 查询不存在的ISBN返回未找到
/// - 删除是幂等的
/// - 编辑即"不存在则创建，存在则替换"
pub struct CatalogService {
    repository: Arc<dyn BookRepository>,
}

impl CatalogService {
    /// 创建新的目录服务实例
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// 列出目录中的全部图书
    pub async fn list_all(&self) -> Result<Vec<Book>, CatalogError> {
        let books = self.repository.find_all().await?;
        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// 查看图书详情
    ///
    /// # 返回值
    ///
    /// * `Ok(Book)` - 找到的图书
    /// * `Err(CatalogError::NotFound)` - ISBN不存在
    pub async fn get_by_isbn(&self, isbn: &str) -> Result<Book, CatalogError> {
        metrics::counter!("catalog_books_lookups_total").increment(1);

        match self.repository.find(isbn).await? {
            Some(book) => Ok(book),
            None => Err(Self::reject(CatalogError::NotFound(isbn.to_string()))),
        }
    }

    /// 将图书加入目录
    ///
    /// 插入与存在性检查在仓库中原子完成，同一ISBN的并发创建只有一个成功。
    ///
    /// # 返回值
    ///
    /// * `Ok(Book)` - 已保存的图书
    /// * `Err(CatalogError::AlreadyExists)` - ISBN已存在，原记录保持不变
    pub async fn create(&self, book: Book) -> Result<Book, CatalogError> {
        let isbn = book.isbn().to_string();

        if self.repository.insert_if_absent(book.clone()).await?.is_some() {
            return Err(Self::reject(CatalogError::AlreadyExists(isbn)));
        }

        metrics::counter!("catalog_books_created_total").increment(1);
        info!(isbn = %isbn, "Book added to catalog");
        Ok(book)
    }

    /// 从目录中移除图书
    ///
    /// ISBN不存在时视为成功，返回值表示是否确实移除了图书
    pub async fn delete(&self, isbn: &str) -> Result<bool, CatalogError> {
        let removed = self.repository.delete(isbn).await?;

        if removed {
            metrics::counter!("catalog_books_deleted_total").increment(1);
            info!(isbn = %isbn, "Book removed from catalog");
        } else {
            debug!(isbn = %isbn, "Delete requested for absent book");
        }
        Ok(removed)
    }

    /// 编辑图书
    ///
    /// 不存在则创建，存在则整体替换，永远不会返回 `AlreadyExists`。
    pub async fn upsert(&self, book: Book) -> Result<Book, CatalogError> {
        match self.repository.insert_if_absent(book.clone()).await? {
            None => {
                metrics::counter!("catalog_books_created_total").increment(1);
                info!(isbn = %book.isbn(), "Book added to catalog");
                Ok(book)
            }
            Some(_) => {
                let saved = self.repository.save(book).await?;
                metrics::counter!("catalog_books_replaced_total").increment(1);
                info!(isbn = %saved.isbn(), "Book details replaced");
                Ok(saved)
            }
        }
    }

    fn reject(err: CatalogError) -> CatalogError {
        metrics::counter!("catalog_books_rejections_total", "reason" => err.reason())
            .increment(1);
        warn!(error = %err, "Catalog request rejected");
        err
    }
}
