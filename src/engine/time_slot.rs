// ==========================================
// 调拨单派工看板 - 时段分类引擎
// ==========================================
// 职责: 将调拨单创建时刻映射到时段槽位
// 规则（顺序执行, 命中即返回）:
//   1) 截止配置处于降级状态 → CutoffError（独立槽位, 不得静默丢弃）
//   2) CalendarRelative: 与参考时刻同一日历日 且 时分严格早于截止 → Morning
//      其余（当日截止后、非当日）一律 → Evening 兜底
//   3) TimeOfDay: 只比较时分, 早于截止 → Morning, 否则 → Evening
// 约定: 全部时刻按 UTC 解释, 日历日即 UTC 日
// ==========================================

use chrono::{DateTime, Utc};

use crate::config::time_cutoff::TimeCutoffConfig;
use crate::domain::types::{SlotPolicy, TimeSlot};

// ==========================================
// TimeSlotClassifier - 时段分类引擎
// ==========================================
pub struct TimeSlotClassifier {}

impl TimeSlotClassifier {
    pub fn new() -> Self {
        Self {}
    }

    /// 分类单条记录的时刻
    ///
    /// # 参数
    /// - timestamp: 记录创建时刻
    /// - cutoff: 当前截止配置（含策略）
    /// - reference_now: 参考时刻（日历相对策略的"今天"基准, 由调用方传入保证可测）
    pub fn classify(
        &self,
        timestamp: DateTime<Utc>,
        cutoff: &TimeCutoffConfig,
        reference_now: DateTime<Utc>,
    ) -> TimeSlot {
        let cutoff_time = match cutoff.cutoff() {
            Some(t) => t,
            None => return TimeSlot::CutoffError,
        };

        match cutoff.policy() {
            SlotPolicy::CalendarRelative => {
                let same_day = timestamp.date_naive() == reference_now.date_naive();
                if same_day && timestamp.time() < cutoff_time {
                    TimeSlot::Morning
                } else {
                    TimeSlot::Evening
                }
            }
            SlotPolicy::TimeOfDay => {
                if timestamp.time() < cutoff_time {
                    TimeSlot::Morning
                } else {
                    TimeSlot::Evening
                }
            }
        }
    }
}
