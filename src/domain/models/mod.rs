// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义目录的核心业务实体：
/// - 图书（book）：以ISBN标识的不可变目录记录
pub mod book;
