// ==========================================
// 调拨单派工看板 - 领域类型定义
// ==========================================
// 职责: 定义分组键、分类策略、拉取状态等基础枚举
// 红线: 分组键与展示标签分离, 键不得携带易变的"当前时刻"
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 时段槽位 (Time Slot)
// ==========================================
// 分组键: 同一截止配置下, 同一槽位的两次分类必须相等
// 排序: Morning < Evening < CutoffError (展示顺序即枚举顺序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeSlot {
    Morning,     // 截止前
    Evening,     // 截止后（含非当日的兜底槽位）
    CutoffError, // 截止配置无法解析时的错误槽位
}

impl TimeSlot {
    pub fn as_str(&self) -> &str {
        match self {
            TimeSlot::Morning => "MORNING",
            TimeSlot::Evening => "EVENING",
            TimeSlot::CutoffError => "CUTOFF_ERROR",
        }
    }

    /// 展示标签（内嵌当前截止文本, 不内嵌"当前时刻"）
    pub fn display_label(&self, cutoff_text: &str) -> String {
        match self {
            TimeSlot::Morning => format!("Morning Transfers (Before {})", cutoff_text),
            TimeSlot::Evening => format!("Evening Transfers (After {})", cutoff_text),
            TimeSlot::CutoffError => {
                format!("Unclassified Transfers (Invalid Cutoff \"{}\")", cutoff_text)
            }
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 分类策略 (Slot Policy)
// ==========================================
// CalendarRelative: 仅"参考时刻当天且早于截止"判为 Morning, 其余一律 Evening
// TimeOfDay: 只比较时分, 不看日历日
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotPolicy {
    CalendarRelative,
    TimeOfDay,
}

impl SlotPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            SlotPolicy::CalendarRelative => "CALENDAR_RELATIVE",
            SlotPolicy::TimeOfDay => "TIME_OF_DAY",
        }
    }
}

impl fmt::Display for SlotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 拉取状态 (Fetch State)
// ==========================================
// 刷新协调器的生命周期状态机:
//   Idle --触发--> Fetching --成功--> Idle
//   Fetching --失败--> Error --触发--> Fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchState {
    Idle,
    Fetching,
    Error,
}

impl FetchState {
    pub fn as_str(&self) -> &str {
        match self {
            FetchState::Idle => "IDLE",
            FetchState::Fetching => "FETCHING",
            FetchState::Error => "ERROR",
        }
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
