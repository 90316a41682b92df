// ==========================================
// 调拨单派工看板 - 时段截止配置
// ==========================================
// 职责: 解析自由文本 "HH:MM" 截止时间, 携带分类策略
// 红线: 解析失败不得 panic, 必须降级为可见的错误槽位状态
// ==========================================

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::SlotPolicy;

/// 部署默认截止文本
pub const DEFAULT_CUTOFF_TEXT: &str = "18:07";

// ==========================================
// 解析错误
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutoffParseError {
    #[error("截止时间格式无效: 期望 \"HH:MM\", 实际 \"{0}\"")]
    Format(String),

    #[error("小时超出范围 (0-23): {0}")]
    HourOutOfRange(u32),

    #[error("分钟超出范围 (0-59): {0}")]
    MinuteOutOfRange(u32),
}

// ==========================================
// TimeCutoffConfig - 时段截止配置
// ==========================================
// 运行期可被使用方整体替换; 聚合总是读取"当下"的配置值,
// 配置变更会使缓存的聚合视图失效（缓存键含截止文本与策略）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeCutoffConfig {
    raw: String,                 // 原始输入文本（展示标签内嵌此值）
    policy: SlotPolicy,          // 分类策略
    cutoff: Option<NaiveTime>,   // 解析结果; None = 解析失败
    parse_error: Option<String>, // 解析失败原因（可解释性）
}

impl TimeCutoffConfig {
    /// 由自由文本构造
    ///
    /// 解析失败不报错: 配置进入降级状态, 分类器对所有记录给出错误槽位
    pub fn new(raw: &str, policy: SlotPolicy) -> Self {
        match Self::parse_text(raw) {
            Ok(cutoff) => Self {
                raw: raw.to_string(),
                policy,
                cutoff: Some(cutoff),
                parse_error: None,
            },
            Err(e) => {
                tracing::warn!("截止时间 \"{}\" 解析失败, 记录将归入错误槽位: {}", raw, e);
                Self {
                    raw: raw.to_string(),
                    policy,
                    cutoff: None,
                    parse_error: Some(e.to_string()),
                }
            }
        }
    }

    /// 部署默认配置: 18:07 截止, 日历相对策略
    pub fn deployment_default() -> Self {
        Self::new(DEFAULT_CUTOFF_TEXT, SlotPolicy::CalendarRelative)
    }

    /// 解析 "HH:MM" 文本
    ///
    /// 校验: 冒号分隔的两个整数, 小时 0-23, 分钟 0-59
    pub fn parse_text(raw: &str) -> Result<NaiveTime, CutoffParseError> {
        let trimmed = raw.trim();
        let (hour_text, minute_text) = trimmed
            .split_once(':')
            .ok_or_else(|| CutoffParseError::Format(trimmed.to_string()))?;

        let hour: u32 = hour_text
            .trim()
            .parse()
            .map_err(|_| CutoffParseError::Format(trimmed.to_string()))?;
        let minute: u32 = minute_text
            .trim()
            .parse()
            .map_err(|_| CutoffParseError::Format(trimmed.to_string()))?;

        if hour > 23 {
            return Err(CutoffParseError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(CutoffParseError::MinuteOutOfRange(minute));
        }

        // 范围已校验, 此处不会落空
        NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| CutoffParseError::Format(trimmed.to_string()))
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn policy(&self) -> SlotPolicy {
        self.policy
    }

    /// 解析后的截止时刻; None 表示配置处于降级状态
    pub fn cutoff(&self) -> Option<NaiveTime> {
        self.cutoff
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.cutoff.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_cutoff() {
        let config = TimeCutoffConfig::new("18:07", SlotPolicy::CalendarRelative);
        assert!(config.is_valid());
        assert_eq!(config.cutoff(), NaiveTime::from_hms_opt(18, 7, 0));
        assert_eq!(config.raw(), "18:07");
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let config = TimeCutoffConfig::new(" 8 : 30 ", SlotPolicy::TimeOfDay);
        assert!(config.is_valid());
        assert_eq!(config.cutoff(), NaiveTime::from_hms_opt(8, 30, 0));
    }

    #[test]
    fn test_hour_out_of_range_degrades() {
        // "25:99" 先命中小时越界
        let config = TimeCutoffConfig::new("25:99", SlotPolicy::CalendarRelative);
        assert!(!config.is_valid());
        let reason = config.parse_error().unwrap();
        assert!(reason.contains("25"), "原因应包含越界值");
    }

    #[test]
    fn test_minute_out_of_range_degrades() {
        let config = TimeCutoffConfig::new("18:60", SlotPolicy::CalendarRelative);
        assert!(!config.is_valid());
        assert!(config.parse_error().unwrap().contains("60"));
    }

    #[test]
    fn test_garbage_text_degrades_without_panic() {
        for text in ["", "abc", "18", "18:xx", ":：", "18:07:30"] {
            let config = TimeCutoffConfig::new(text, SlotPolicy::CalendarRelative);
            assert!(!config.is_valid(), "\"{}\" 应进入降级状态", text);
            assert!(config.parse_error().is_some());
        }
    }
}
