// ==========================================
// 调拨单派工看板 - 派工解析引擎
// ==========================================
// 职责: 按目的城市解析负责派工人
// 规则（顺序执行, 命中即返回）:
//   1) 城市统一小写后查表, 按固定表序取第一个命中的派工人
//   2) 无命中 → UNASSIGNED_ASSIGNEE 兜底
// 边界: destination_city 缺失属上游契约违规, 不在此处理
// ==========================================

use crate::config::assignment_table::{AssignmentTable, UNASSIGNED_ASSIGNEE};

// ==========================================
// AssignmentResolver - 派工解析引擎
// ==========================================
pub struct AssignmentResolver {
    table: AssignmentTable,
}

impl AssignmentResolver {
    /// 创建解析引擎; 表内城市重叠仅告警, 运行时按表序先匹配生效
    pub fn new(table: AssignmentTable) -> Self {
        for violation in table.validate() {
            tracing::warn!("派工城市表重叠: {}", violation);
        }
        Self { table }
    }

    pub fn table(&self) -> &AssignmentTable {
        &self.table
    }

    /// 解析目的城市对应的派工人
    pub fn resolve(&self, destination_city: &str) -> &str {
        let city = destination_city.trim().to_lowercase();

        for entry in self.table.entries() {
            if entry.cities.iter().any(|c| c == &city) {
                return &entry.assignee;
            }
        }

        UNASSIGNED_ASSIGNEE
    }
}
