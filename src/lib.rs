// ==========================================
// 调拨单派工看板 - 核心库
// ==========================================
// 系统定位: 运营看板的分类聚合引擎（派工人 → 时段 → 客户）
// 外部协作者: 上游订单管理接口（经 TransferSource 接入）、展示层
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 显式配置对象
pub mod config;

// 引擎层 - 分派/分类/聚合/刷新
pub mod engine;

// 数据源层 - 外部数据接入
pub mod source;

// 日志系统
pub mod logging;

// API 层 - 面向展示层的接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::transfer::{
    ProductLine, TransferRecord, DEFAULT_QUANTITY, UNKNOWN_CLIENT, UNKNOWN_PRODUCT,
};
pub use domain::types::{FetchState, SlotPolicy, TimeSlot};

// 配置
pub use config::{
    AssignmentEntry, AssignmentTable, CutoffParseError, TimeCutoffConfig, DEFAULT_CUTOFF_TEXT,
    UNASSIGNED_ASSIGNEE,
};

// 引擎
pub use engine::{
    AggregationEngine, AssigneeGroup, AssignmentResolver, ClientBucket, DispatchView,
    RefreshCoordinator, RefreshOutcome, RefreshStatus, SlotGroup, TimeSlotClassifier,
    DEFAULT_REFRESH_INTERVAL,
};

// 数据源
pub use source::{JsonFileSource, SourceError, TransferSource};

// API
pub use api::DashboardApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "调拨单派工看板";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
