// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// ISBN格式：10位或13位数字
pub static ISBN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{10}|[0-9]{13})$").expect("valid ISBN pattern"));

/// 检查字符串是否非空白
///
/// 空字符串和仅包含空白字符的字符串都视为无效
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
