// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供，服务只依赖这里的抽象。
pub mod book_repository;
