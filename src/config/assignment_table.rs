// ==========================================
// 调拨单派工看板 - 派工城市表
// ==========================================
// 职责: 维护"派工人 → 城市集合"的静态查找表
// 红线: 表序固定且确定; 城市集合理应两两不相交,
//       重叠时按表序先匹配者生效, validate 必须给出原因
// ==========================================

use serde::{Deserialize, Serialize};

/// 兜底派工人标识（不是表内键, 但是合法的解析输出）
pub const UNASSIGNED_ASSIGNEE: &str = "Other / Unassigned";

// ==========================================
// AssignmentEntry - 单个派工人条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    pub assignee: String,    // 派工人标识
    pub cities: Vec<String>, // 负责城市（构造时统一小写并去除首尾空白）
}

impl AssignmentEntry {
    pub fn new(assignee: &str, cities: &[&str]) -> Self {
        Self {
            assignee: assignee.to_string(),
            cities: cities.iter().map(|c| c.trim().to_lowercase()).collect(),
        }
    }
}

// ==========================================
// AssignmentTable - 派工城市表
// ==========================================
// 部署期固定, 运行期不可编辑
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTable {
    entries: Vec<AssignmentEntry>,
}

impl AssignmentTable {
    pub fn new(entries: Vec<AssignmentEntry>) -> Self {
        Self { entries }
    }

    /// 部署默认表（摩洛哥配送网络）
    pub fn deployment_default() -> Self {
        Self::new(vec![
            AssignmentEntry::new("Bader", &["tanger"]),
            AssignmentEntry::new(
                "Abderrazak",
                &["oujda", "guelmim", "azemmour", "kelaa des sraghna"],
            ),
            AssignmentEntry::new("Yassine", &["agadir", "marrakech", "sale", "sidi sliman"]),
            AssignmentEntry::new(
                "Salah",
                &["deroua", "casablanca", "midelt", "beni melal", "khouribga", "safi"],
            ),
        ])
    }

    /// 按固定表序返回全部条目
    pub fn entries(&self) -> &[AssignmentEntry] {
        &self.entries
    }

    /// 展示顺序: 表序 + 兜底标识在末位
    pub fn display_order(&self) -> Vec<String> {
        let mut order: Vec<String> = self.entries.iter().map(|e| e.assignee.clone()).collect();
        order.push(UNASSIGNED_ASSIGNEE.to_string());
        order
    }

    /// 校验城市集合两两不相交
    ///
    /// # 返回
    /// - 违规原因列表（空列表 = 校验通过）; 每条原因指明重叠城市与实际生效方
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            for city in &entry.cities {
                for earlier in &self.entries[..i] {
                    if earlier.cities.iter().any(|c| c == city) {
                        violations.push(format!(
                            "城市 '{}' 同时归属 '{}' 与 '{}', 按表序由 '{}' 生效",
                            city, earlier.assignee, entry.assignee, earlier.assignee
                        ));
                    }
                }
            }
        }

        violations
    }
}
