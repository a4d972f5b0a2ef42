// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Book;
use crate::utils::validators::{validate_not_blank, ISBN_PATTERN};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// 图书请求数据传输对象
///
/// 创建和编辑图书时的请求体，通过校验后才能转换为领域实体
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct BookRequestDto {
    #[validate(
        custom(function = "validate_not_blank", message = "The book ISBN must be defined."),
        regex(path = *ISBN_PATTERN, message = "The ISBN format must be valid.")
    )]
    #[serde(default)]
    pub isbn: String,

    #[validate(custom(function = "validate_not_blank", message = "The book title must be defined."))]
    #[serde(default)]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "The book author must be defined."))]
    #[serde(default)]
    pub author: String,

    #[validate(
        required(message = "The book price must be defined."),
        range(exclusive_min = 0.0, message = "The book price must be greater than zero.")
    )]
    pub price: Option<f64>,
}

impl BookRequestDto {
    /// 校验请求并转换为图书实体
    pub fn into_book(self) -> Result<Book, ValidationErrors> {
        self.validate()?;

        let Self {
            isbn,
            title,
            author,
            price,
        } = self;
        // `required` has already rejected a missing price
        Ok(Book::new(isbn, title, author, price.unwrap_or_default()))
    }
}
