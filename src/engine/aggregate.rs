// ==========================================
// 调拨单派工看板 - 聚合引擎
// ==========================================
// 职责: 将一份快照单趟折叠为三级分组视图
//       派工人 → 时段槽位 → 客户品牌 → 聚合桶
// 红线: 单趟遍历, 不提前终止, 不静默跳过任何记录;
//       固定输入序列 + 固定表 + 固定截止 ⇒ 输出逐字节一致
// ==========================================

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::instrument;

use crate::config::assignment_table::AssignmentTable;
use crate::config::time_cutoff::TimeCutoffConfig;
use crate::domain::transfer::{TransferRecord, DEFAULT_QUANTITY, UNKNOWN_CLIENT, UNKNOWN_PRODUCT};
use crate::domain::types::TimeSlot;
use crate::engine::assignment::AssignmentResolver;
use crate::engine::time_slot::TimeSlotClassifier;

// ==========================================
// ClientBucket - 客户聚合桶
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientBucket {
    pub transfer_count: u64, // 该客户在此槽位的调拨单数
    pub product_quantities: IndexMap<String, u64>, // 商品名 → 累计数量（按首次出现序迭代）
    pub latest_update: DateTime<Utc>, // 桶内最晚的 updated_at
}

// ==========================================
// SlotGroup - 时段分组
// ==========================================
// label 为展示标签, 构造时内嵌当前截止文本; 分组键是 TimeSlot 枚举
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotGroup {
    pub label: String,
    pub clients: IndexMap<String, ClientBucket>,
}

// ==========================================
// AssigneeGroup - 派工人分组
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssigneeGroup {
    pub total_count: u64, // 该派工人全部槽位的调拨单总数
    pub slots: IndexMap<TimeSlot, SlotGroup>,
}

impl AssigneeGroup {
    fn empty() -> Self {
        Self {
            total_count: 0,
            slots: IndexMap::new(),
        }
    }
}

// ==========================================
// DispatchView - 聚合视图
// ==========================================
// 派生数据: 每次新快照或配置变更后整体重建, 从不原地修补
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchView {
    pub assignees: IndexMap<String, AssigneeGroup>,
    pub cutoff_text: String, // 构建本视图时生效的截止文本
}

impl DispatchView {
    /// 整理为展示顺序: 槽位 Morning < Evening < CutoffError, 派工人按表序且兜底在末位
    ///
    /// 折叠本身保持首次出现序以保证可复现; 展示排序是独立的后处理
    pub fn sort_for_display(&mut self, table: &AssignmentTable) {
        for group in self.assignees.values_mut() {
            group.slots.sort_keys();
        }

        let order = table.display_order();
        self.assignees.sort_by(|a_key, _, b_key, _| {
            let a_pos = order.iter().position(|n| n == a_key).unwrap_or(usize::MAX);
            let b_pos = order.iter().position(|n| n == b_key).unwrap_or(usize::MAX);
            a_pos.cmp(&b_pos).then_with(|| a_key.cmp(b_key))
        });
    }

    /// 全部派工人的调拨单总数
    pub fn total_count(&self) -> u64 {
        self.assignees.values().map(|g| g.total_count).sum()
    }
}

// ==========================================
// AggregationEngine - 聚合引擎
// ==========================================
pub struct AggregationEngine {}

impl AggregationEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 单趟折叠一份快照
    ///
    /// # 参数
    /// - records: 当前快照（聚合期间不可变）
    /// - resolver: 派工解析引擎
    /// - classifier: 时段分类引擎
    /// - cutoff: 当下生效的截止配置
    /// - now: 参考时刻（日历相对策略基准）
    ///
    /// # 保证
    /// - 每条记录恰好计入一个 派工人/槽位/品牌 路径（首用创建, 从不覆盖）
    /// - 商品数量按首次出现序累计; 空商品行只计单数
    /// - 对满足记录形状的任意输入不抛出任何异常
    #[instrument(skip_all, fields(count = records.len()))]
    pub fn aggregate(
        &self,
        records: &[TransferRecord],
        resolver: &AssignmentResolver,
        classifier: &TimeSlotClassifier,
        cutoff: &TimeCutoffConfig,
        now: DateTime<Utc>,
    ) -> DispatchView {
        let mut assignees: IndexMap<String, AssigneeGroup> = IndexMap::new();

        for record in records {
            let assignee = resolver.resolve(&record.destination_city);
            let slot = classifier.classify(record.created_at, cutoff, now);
            let brand = record.client_brand.as_deref().unwrap_or(UNKNOWN_CLIENT);

            let group = assignees
                .entry(assignee.to_string())
                .or_insert_with(AssigneeGroup::empty);
            group.total_count += 1;

            let slot_group = group.slots.entry(slot).or_insert_with(|| SlotGroup {
                label: slot.display_label(cutoff.raw()),
                clients: IndexMap::new(),
            });

            let bucket = slot_group
                .clients
                .entry(brand.to_string())
                .or_insert_with(|| ClientBucket {
                    transfer_count: 0,
                    product_quantities: IndexMap::new(),
                    latest_update: record.updated_at,
                });

            bucket.transfer_count += 1;
            if record.updated_at > bucket.latest_update {
                bucket.latest_update = record.updated_at;
            }

            for line in &record.products {
                let name = line.product_name.as_deref().unwrap_or(UNKNOWN_PRODUCT);
                let quantity = line.quantity.unwrap_or(DEFAULT_QUANTITY);
                *bucket
                    .product_quantities
                    .entry(name.to_string())
                    .or_insert(0) += quantity;
            }
        }

        DispatchView {
            assignees,
            cutoff_text: cutoff.raw().to_string(),
        }
    }
}
