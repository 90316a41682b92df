// ==========================================
// 调拨单派工看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体与基础类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod transfer;
pub mod types;

// 重导出核心类型
pub use transfer::{ProductLine, TransferRecord, DEFAULT_QUANTITY, UNKNOWN_CLIENT, UNKNOWN_PRODUCT};
pub use types::{FetchState, SlotPolicy, TimeSlot};
