// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 图书实体
///
/// 目录中的一条记录，以ISBN作为唯一标识。
/// 构造后不可变：字段只读，编辑图书意味着在同一ISBN下替换整条记录。
/// 字段的合法性由边界层在构造前校验，实体本身不做校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    price: f64,
}

impl Book {
    /// 创建一本新图书
    ///
    /// # 参数
    ///
    /// * `isbn` - 图书ISBN（10位或13位数字）
    /// * `title` - 书名
    /// * `author` - 作者
    /// * `price` - 价格，必须大于零
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
