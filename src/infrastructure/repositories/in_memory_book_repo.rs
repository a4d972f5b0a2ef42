// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Book;
use crate::domain::repositories::book_repository::BookRepository;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// 图书存储
///
/// 进程内共享的ISBN到图书的并发映射，由调用方创建并注入仓库
#[derive(Debug, Default)]
pub struct BookStore {
    books: DashMap<String, Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 基于内存的图书仓库实现
#[derive(Clone)]
pub struct InMemoryBookRepository {
    store: Arc<BookStore>,
}

impl InMemoryBookRepository {
    /// 创建新的内存图书仓库
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, RepositoryError> {
        Ok(self
            .store
            .books
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn exists(&self, isbn: &str) -> Result<bool, RepositoryError> {
        Ok(self.store.books.contains_key(isbn))
    }

    async fn find(&self, isbn: &str) -> Result<Option<Book>, RepositoryError> {
        Ok(self.store.books.get(isbn).map(|entry| entry.value().clone()))
    }

    async fn save(&self, book: Book) -> Result<Book, RepositoryError> {
        self.store
            .books
            .insert(book.isbn().to_string(), book.clone());
        Ok(book)
    }

    async fn delete(&self, isbn: &str) -> Result<bool, RepositoryError> {
        Ok(self.store.books.remove(isbn).is_some())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.store.books.len())
    }

    async fn insert_if_absent(&self, book: Book) -> Result<Option<Book>, RepositoryError> {
        // The entry guard holds the shard lock, so check and insert are one step.
        match self.store.books.entry(book.isbn().to_string()) {
            Entry::Occupied(existing) => Ok(Some(existing.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(book);
                Ok(None)
            }
        }
    }
}
