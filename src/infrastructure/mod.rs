// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域抽象的技术实现：
/// - 演示数据（demo_data）：启动时写入示例图书
/// - 指标（metrics）：Prometheus指标导出
/// - 仓库实现（repositories）：基于内存的图书仓库
///
/// 基础设施层依赖于领域层的抽象接口，
/// 确保领域层保持纯粹的业务逻辑，不受技术实现的影响。
pub mod demo_data;
pub mod metrics;
pub mod repositories;
