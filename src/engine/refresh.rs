// ==========================================
// 调拨单派工看板 - 刷新协调器
// ==========================================
// 职责: 独占持有当前快照, 驱动周期/手动拉取, 维护生命周期状态机
// 状态机: Idle --触发--> Fetching --成功--> Idle
//         Fetching --失败--> Error --触发--> Fetching
// 红线: 任一时刻至多一次在途拉取（不排队, 不取消在途请求）;
//       快照整体替换（要么全装入, 要么一条不动）;
//       失败保留上一份有效快照, 陈旧可用优于清空
// ==========================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::transfer::TransferRecord;
use crate::domain::types::FetchState;
use crate::source::TransferSource;

/// 周期触发的默认间隔
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

// ==========================================
// RefreshOutcome - 单次触发的结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// 拉取成功, 快照已整体替换
    Completed {
        fetch_id: String,
        record_count: usize,
    },
    /// 已有拉取在途, 本次触发为空操作
    AlreadyInFlight,
    /// 拉取失败, 保留上一份有效快照
    Failed { fetch_id: String, reason: String },
}

// ==========================================
// RefreshStatus - 状态摘要（供展示层头部）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshStatus {
    pub state: FetchState,
    pub generation: u64, // 快照代数; 每次成功装入递增
    pub record_count: usize,
    pub last_updated: Option<DateTime<Utc>>, // 最近一次成功装入的时刻
    pub last_error: Option<String>,          // 最近一次失败原因（成功后清除）
}

// 受锁保护的协调器内部状态
struct Inner {
    state: FetchState,
    snapshot: Arc<Vec<TransferRecord>>,
    generation: u64,
    last_updated: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

// ==========================================
// RefreshCoordinator - 刷新协调器
// ==========================================
// 生命周期与进程一致, 无终止状态
pub struct RefreshCoordinator {
    source: Arc<dyn TransferSource>,
    in_flight: AtomicBool, // 唯一的单飞闸门; 周期与手动触发共用
    inner: Mutex<Inner>,
}

impl RefreshCoordinator {
    pub fn new(source: Arc<dyn TransferSource>) -> Self {
        Self {
            source,
            in_flight: AtomicBool::new(false),
            inner: Mutex::new(Inner {
                state: FetchState::Idle,
                snapshot: Arc::new(Vec::new()),
                generation: 0,
                last_updated: None,
                last_error: None,
            }),
        }
    }

    /// 触发一次刷新
    ///
    /// # 返回
    /// - Completed: 快照已替换, 状态回到 Idle
    /// - AlreadyInFlight: 在途拉取存在, 本次为空操作（状态不变）
    /// - Failed: 进入 Error 状态, 旧快照保留, 原因可读
    pub async fn trigger_refresh(&self) -> RefreshOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("已有拉取在途, 忽略本次触发");
            return RefreshOutcome::AlreadyInFlight;
        }

        let fetch_id = Uuid::new_v4().to_string();
        {
            let mut inner = self.inner.lock().await;
            inner.state = FetchState::Fetching;
        }
        tracing::info!(fetch_id = %fetch_id, "开始拉取待处理调拨单");

        // 唯一的挂起点; 锁不跨越此处
        let result = self.source.fetch_pending().await;

        let outcome = match result {
            Ok(records) => {
                let record_count = records.len();
                let mut inner = self.inner.lock().await;
                inner.snapshot = Arc::new(records);
                inner.generation += 1;
                inner.state = FetchState::Idle;
                inner.last_updated = Some(Utc::now());
                inner.last_error = None;
                tracing::info!(
                    fetch_id = %fetch_id,
                    record_count,
                    generation = inner.generation,
                    "快照整体替换完成"
                );
                RefreshOutcome::Completed {
                    fetch_id,
                    record_count,
                }
            }
            Err(e) => {
                let reason = e.to_string();
                let mut inner = self.inner.lock().await;
                inner.state = FetchState::Error;
                inner.last_error = Some(reason.clone());
                tracing::error!(
                    fetch_id = %fetch_id,
                    generation = inner.generation,
                    "拉取失败, 保留上一份快照: {}",
                    reason
                );
                RefreshOutcome::Failed { fetch_id, reason }
            }
        };

        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    /// 当前快照（廉价克隆 Arc; 替换对读者原子可见）
    pub async fn snapshot(&self) -> Arc<Vec<TransferRecord>> {
        Arc::clone(&self.inner.lock().await.snapshot)
    }

    /// 同一把锁下读取 (代数, 快照), 供缓存键与数据保持一致
    pub async fn snapshot_with_generation(&self) -> (u64, Arc<Vec<TransferRecord>>) {
        let inner = self.inner.lock().await;
        (inner.generation, Arc::clone(&inner.snapshot))
    }

    pub async fn status(&self) -> RefreshStatus {
        let inner = self.inner.lock().await;
        RefreshStatus {
            state: inner.state,
            generation: inner.generation,
            record_count: inner.snapshot.len(),
            last_updated: inner.last_updated,
            last_error: inner.last_error.clone(),
        }
    }

    /// 启动周期触发任务
    ///
    /// 首个 tick 立即到期（启动即拉取一次）; 与手动触发共用单飞闸门,
    /// 在途期间到期的 tick 退化为空操作, 不排队补偿
    pub fn spawn_periodic(self: Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if self.trigger_refresh().await == RefreshOutcome::AlreadyInFlight {
                    tracing::debug!("周期触发与在途拉取重叠, 跳过本轮");
                }
            }
        })
    }
}
