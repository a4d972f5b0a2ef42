// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Book;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 图书仓库特质
///
/// 定义以ISBN为键的图书存储接口。所有方法都必须能在多个调用方之间
/// 并发调用而无需外部加锁，单次调用的效果对其它调用方原子可见。
/// 跨多次调用的原子性不作保证，唯一的例外是 [`BookRepository::insert_if_absent`]。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 返回全部图书，顺序不作保证
    async fn find_all(&self) -> Result<Vec<Book>, RepositoryError>;

    /// 检查指定ISBN的图书是否存在
    async fn exists(&self, isbn: &str) -> Result<bool, RepositoryError>;

    /// 根据ISBN查找图书，不存在时返回 `None`
    async fn find(&self, isbn: &str) -> Result<Option<Book>, RepositoryError>;

    /// 插入或覆盖以 `book.isbn()` 为键的记录，不检查是否已存在
    async fn save(&self, book: Book) -> Result<Book, RepositoryError>;

    /// 删除指定ISBN的图书，不存在时什么也不做
    ///
    /// 返回是否确实删除了一条记录
    async fn delete(&self, isbn: &str) -> Result<bool, RepositoryError>;

    /// 当前存储的图书数量
    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.find_all().await?.len())
    }

    /// 仅当ISBN尚不存在时插入图书
    ///
    /// # 返回值
    ///
    /// * `Ok(None)` - 已插入
    /// * `Ok(Some(existing))` - 已有记录，存储未改变
    ///
    /// 默认实现由 `find` 和 `save` 组合而成，两次调用之间存在竞争：
    /// 两个并发调用可能都看到记录不存在，后写入者覆盖先写入者。
    /// 能够原子地完成该操作的存储应当覆盖此方法。
    async fn insert_if_absent(&self, book: Book) -> Result<Option<Book>, RepositoryError> {
        if let Some(existing) = self.find(book.isbn()).await? {
            return Ok(Some(existing));
        }
        self.save(book).await?;
        Ok(None)
    }
}
