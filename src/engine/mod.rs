// ==========================================
// 调拨单派工看板 - 引擎层
// ==========================================
// 职责: 实现分派/分类/聚合规则与刷新一致性模型
// 红线: 分派、分类、聚合是同步纯函数; 拉取是唯一挂起点
// ==========================================

pub mod aggregate;
pub mod assignment;
pub mod refresh;
pub mod time_slot;

// 重导出核心引擎
pub use aggregate::{AggregationEngine, AssigneeGroup, ClientBucket, DispatchView, SlotGroup};
pub use assignment::AssignmentResolver;
pub use refresh::{
    RefreshCoordinator, RefreshOutcome, RefreshStatus, DEFAULT_REFRESH_INTERVAL,
};
pub use time_slot::TimeSlotClassifier;
