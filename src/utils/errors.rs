// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 仓库层错误类型
///
/// 内存实现不会产生该错误，其它存储后端通过它上报故障
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// 目录领域错误类型
///
/// 由目录服务返回，边界层负责将其转换为客户端可见的响应
#[derive(Error, Debug)]
pub enum CatalogError {
    /// 指定ISBN的图书不存在
    #[error("Book with ISBN {0} was not found.")]
    NotFound(String),

    /// 指定ISBN的图书已存在
    #[error("Book with ISBN {0} already exists.")]
    AlreadyExists(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    /// 用于指标标签的简短原因
    pub fn reason(&self) -> &'static str {
        match self {
            CatalogError::NotFound(_) => "not_found",
            CatalogError::AlreadyExists(_) => "already_exists",
            CatalogError::Repository(_) => "repository",
        }
    }
}
