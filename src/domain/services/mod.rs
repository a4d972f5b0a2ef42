// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含目录的核心业务规则：
/// - 目录服务（catalog_service）：图书的增删改查及存在性规则
pub mod catalog_service;
