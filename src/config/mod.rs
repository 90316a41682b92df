// ==========================================
// 调拨单派工看板 - 配置层
// ==========================================
// 职责: 显式传入的配置对象, 不做进程级单例
// 配置面: 截止时间文本（运行期可换）+ 派工城市表（部署期固定）
// ==========================================

pub mod assignment_table;
pub mod time_cutoff;

// 重导出核心配置类型
pub use assignment_table::{AssignmentEntry, AssignmentTable, UNASSIGNED_ASSIGNEE};
pub use time_cutoff::{CutoffParseError, TimeCutoffConfig, DEFAULT_CUTOFF_TEXT};
