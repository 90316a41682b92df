// ==========================================
// 调拨单派工看板 - 看板 API
// ==========================================
// 职责: 面向展示层的聚合查询与配置入口
// 架构: API 层 → 引擎层（解析/分类/聚合）+ 刷新协调器
// 缓存: 聚合视图按 (快照代数, 截止文本, 策略) 作键;
//       新快照装入或截止配置变更即自然失效, 无陈旧截止读取
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::config::assignment_table::AssignmentTable;
use crate::config::time_cutoff::TimeCutoffConfig;
use crate::domain::types::SlotPolicy;
use crate::engine::aggregate::{AggregationEngine, DispatchView};
use crate::engine::assignment::AssignmentResolver;
use crate::engine::refresh::{RefreshCoordinator, RefreshOutcome, RefreshStatus};
use crate::engine::time_slot::TimeSlotClassifier;

// 缓存键: 三元组中任一项变化都要求重算
#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewCacheKey {
    generation: u64,
    cutoff_text: String,
    policy: SlotPolicy,
}

struct ViewCache {
    key: ViewCacheKey,
    view: Arc<DispatchView>,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    coordinator: Arc<RefreshCoordinator>,
    resolver: AssignmentResolver,
    classifier: TimeSlotClassifier,
    engine: AggregationEngine,
    cutoff: Mutex<TimeCutoffConfig>,
    cache: Mutex<Option<ViewCache>>,
}

impl DashboardApi {
    /// 创建看板 API
    ///
    /// # 参数
    /// - coordinator: 刷新协调器（快照所有者）
    /// - table: 派工城市表（部署期固定）
    /// - cutoff: 初始截止配置
    pub fn new(
        coordinator: Arc<RefreshCoordinator>,
        table: AssignmentTable,
        cutoff: TimeCutoffConfig,
    ) -> Self {
        Self {
            coordinator,
            resolver: AssignmentResolver::new(table),
            classifier: TimeSlotClassifier::new(),
            engine: AggregationEngine::new(),
            cutoff: Mutex::new(cutoff),
            cache: Mutex::new(None),
        }
    }

    /// 当前分组视图（展示就绪: 槽位 Morning 先于 Evening, 派工人按表序）
    ///
    /// 命中缓存时直接复用; 否则对当前快照重新折叠
    pub async fn grouped_view(&self, now: DateTime<Utc>) -> Arc<DispatchView> {
        let cutoff = self.cutoff.lock().await.clone();
        let (generation, snapshot) = self.coordinator.snapshot_with_generation().await;

        let key = ViewCacheKey {
            generation,
            cutoff_text: cutoff.raw().to_string(),
            policy: cutoff.policy(),
        };

        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            if cached.key == key {
                return Arc::clone(&cached.view);
            }
        }

        let mut view =
            self.engine
                .aggregate(&snapshot, &self.resolver, &self.classifier, &cutoff, now);
        view.sort_for_display(self.resolver.table());

        let view = Arc::new(view);
        *cache = Some(ViewCache {
            key,
            view: Arc::clone(&view),
        });
        view
    }

    /// 替换截止文本（策略保持不变）
    ///
    /// 非法文本同样生效: 配置降级, 全部记录进入错误槽位（可见, 不丢弃）
    pub async fn set_cutoff_text(&self, text: &str) {
        let mut cutoff = self.cutoff.lock().await;
        let policy = cutoff.policy();
        *cutoff = TimeCutoffConfig::new(text, policy);
    }

    /// 切换分类策略（截止文本保持不变）
    pub async fn set_policy(&self, policy: SlotPolicy) {
        let mut cutoff = self.cutoff.lock().await;
        let raw = cutoff.raw().to_string();
        *cutoff = TimeCutoffConfig::new(&raw, policy);
    }

    /// 当下生效的截止配置
    pub async fn cutoff(&self) -> TimeCutoffConfig {
        self.cutoff.lock().await.clone()
    }

    /// 手动触发一次刷新（与周期触发共用单飞闸门）
    pub async fn refresh_now(&self) -> RefreshOutcome {
        self.coordinator.trigger_refresh().await
    }

    /// 刷新状态摘要（供头部展示"最近更新/失败原因"）
    pub async fn refresh_status(&self) -> RefreshStatus {
        self.coordinator.status().await
    }
}
