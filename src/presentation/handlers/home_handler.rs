// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use axum::Extension;
use std::sync::Arc;

/// 返回配置中的问候语
pub async fn greeting(Extension(settings): Extension<Arc<Settings>>) -> String {
    settings.catalog.greeting.clone()
}
