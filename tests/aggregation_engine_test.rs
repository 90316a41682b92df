// ==========================================
// 聚合引擎集成测试
// ==========================================
// 测试范围: 派工解析 → 时段分类 → 三级折叠
// ==========================================

mod helpers;

use helpers::test_data_builder::*;
use transfer_dispatch::config::{AssignmentEntry, AssignmentTable, TimeCutoffConfig};
use transfer_dispatch::domain::types::{SlotPolicy, TimeSlot};
use transfer_dispatch::domain::{UNKNOWN_CLIENT, UNKNOWN_PRODUCT};
use transfer_dispatch::engine::{AggregationEngine, AssignmentResolver, TimeSlotClassifier};

fn engine_fixtures() -> (
    AggregationEngine,
    AssignmentResolver,
    TimeSlotClassifier,
    TimeCutoffConfig,
) {
    (
        AggregationEngine::new(),
        AssignmentResolver::new(AssignmentTable::deployment_default()),
        TimeSlotClassifier::new(),
        TimeCutoffConfig::new("18:07", SlotPolicy::CalendarRelative),
    )
}

// ==========================================
// 场景A: 单条记录, 已知城市
// ==========================================

#[test]
fn test_scenario_a_single_record_known_city() {
    let (engine, _, classifier, cutoff) = engine_fixtures();
    // 最小表 {Bader: [tanger]}
    let resolver = AssignmentResolver::new(AssignmentTable::new(vec![AssignmentEntry::new(
        "Bader",
        &["tanger"],
    )]));

    let records = vec![TransferBuilder::new("Tanger")
        .brand("Acme")
        .product("Box", 2)
        .build()];

    let view = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());

    let group = &view.assignees["Bader"];
    assert_eq!(group.total_count, 1);

    let bucket = &group.slots[&TimeSlot::Morning].clients["Acme"];
    assert_eq!(bucket.transfer_count, 1, "Acme 桶应有 1 单");
    assert_eq!(bucket.product_quantities["Box"], 2);
    assert_eq!(bucket.product_quantities.len(), 1);
}

// ==========================================
// 场景B: 同城同品牌同商品合并
// ==========================================

#[test]
fn test_scenario_b_same_bucket_merges() {
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    let records = vec![
        TransferBuilder::new("tanger").brand("Acme").product("Box", 2).build(),
        TransferBuilder::new("tanger").brand("Acme").product("Box", 3).build(),
    ];

    let view = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());

    let bucket = &view.assignees["Bader"].slots[&TimeSlot::Morning].clients["Acme"];
    assert_eq!(bucket.transfer_count, 2, "两单应合并进同一客户桶");
    assert_eq!(bucket.product_quantities["Box"], 5, "数量应累计");
}

// ==========================================
// 场景C: 未知城市进兜底分组
// ==========================================

#[test]
fn test_scenario_c_unknown_city_goes_unassigned() {
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    let records = vec![TransferBuilder::new("rabat").brand("Acme").build()];
    let view = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());

    assert_eq!(
        view.assignees[transfer_dispatch::UNASSIGNED_ASSIGNEE].total_count,
        1
    );
}

// ==========================================
// 场景D: 空商品行只计单数
// ==========================================

#[test]
fn test_scenario_d_empty_products_counts_transfer_only() {
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    let records = vec![TransferBuilder::new("tanger").brand("Acme").build()];
    let view = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());

    let bucket = &view.assignees["Bader"].slots[&TimeSlot::Morning].clients["Acme"];
    assert_eq!(bucket.transfer_count, 1);
    assert!(bucket.product_quantities.is_empty(), "无商品行则无数量条目");
}

// ==========================================
// 场景E: 非法截止文本 → 错误槽位, 不抛异常
// ==========================================

#[test]
fn test_scenario_e_invalid_cutoff_visible_error_bucket() {
    let (engine, resolver, classifier, _) = engine_fixtures();
    let cutoff = TimeCutoffConfig::new("25:99", SlotPolicy::CalendarRelative);

    let records = vec![
        TransferBuilder::new("tanger").brand("Acme").build(),
        TransferBuilder::new("rabat").build(),
    ];

    let view = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());

    // 每条记录都落入错误槽位, 且槽位可见（不被静默丢弃）
    for group in view.assignees.values() {
        assert_eq!(group.slots.len(), 1);
        assert!(group.slots.contains_key(&TimeSlot::CutoffError));
    }
    assert_eq!(view.total_count(), 2);

    let label = &view.assignees["Bader"].slots[&TimeSlot::CutoffError].label;
    assert!(label.contains("25:99"), "错误槽位标签应内嵌原始文本");
}

// ==========================================
// 缺省哨兵: 品牌/商品名缺失
// ==========================================

#[test]
fn test_missing_brand_and_product_use_sentinels() {
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    let records = vec![TransferBuilder::new("tanger").anonymous_product().build()];
    let view = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());

    let bucket = &view.assignees["Bader"].slots[&TimeSlot::Morning].clients[UNKNOWN_CLIENT];
    assert_eq!(bucket.product_quantities[UNKNOWN_PRODUCT], 1, "缺失数量按 1 计");
}

// ==========================================
// 总量与顺序性质
// ==========================================

#[test]
fn test_totals_are_order_independent() {
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    let a = TransferBuilder::new("tanger").brand("Acme").product("Box", 2).build();
    let b = TransferBuilder::new("tanger").brand("Acme").product("Bag", 4).build();
    let c = TransferBuilder::new("casablanca").brand("Nord").product("Box", 1).build();

    let forward = engine.aggregate(
        &[a.clone(), b.clone(), c.clone()],
        &resolver,
        &classifier,
        &cutoff,
        reference_now(),
    );
    let backward = engine.aggregate(&[c, b, a], &resolver, &classifier, &cutoff, reference_now());

    // 总量与计数不依赖记录顺序
    assert_eq!(forward.total_count(), backward.total_count());
    for (assignee, group) in &forward.assignees {
        let other = &backward.assignees[assignee];
        assert_eq!(group.total_count, other.total_count);
        for (slot, slot_group) in &group.slots {
            for (brand, bucket) in &slot_group.clients {
                let other_bucket = &other.slots[slot].clients[brand];
                assert_eq!(bucket.transfer_count, other_bucket.transfer_count);
                assert_eq!(
                    bucket.product_quantities.get("Box"),
                    other_bucket.product_quantities.get("Box")
                );
            }
        }
    }
}

#[test]
fn test_product_order_is_order_dependent() {
    // 首次出现序是折叠语义的一部分: 顺序不同则迭代序不同
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    let a = TransferBuilder::new("tanger").brand("Acme").product("Box", 1).build();
    let b = TransferBuilder::new("tanger").brand("Acme").product("Bag", 1).build();

    let forward = engine.aggregate(
        &[a.clone(), b.clone()],
        &resolver,
        &classifier,
        &cutoff,
        reference_now(),
    );
    let backward = engine.aggregate(&[b, a], &resolver, &classifier, &cutoff, reference_now());

    let names = |view: &transfer_dispatch::DispatchView| -> Vec<String> {
        view.assignees["Bader"].slots[&TimeSlot::Morning].clients["Acme"]
            .product_quantities
            .keys()
            .cloned()
            .collect()
    };

    assert_eq!(names(&forward), vec!["Box", "Bag"]);
    assert_eq!(names(&backward), vec!["Bag", "Box"]);
}

#[test]
fn test_aggregate_is_idempotent() {
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    let records = vec![
        TransferBuilder::new("tanger").brand("Acme").product("Box", 2).build(),
        TransferBuilder::new("agadir")
            .brand("Nord")
            .created_at(evening_instant())
            .product("Bag", 1)
            .build(),
        TransferBuilder::new("rabat").build(),
    ];

    let first = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());
    let second = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());
    assert_eq!(first, second, "同一快照与配置重复折叠应得到相同视图");
}

// ==========================================
// 展示排序
// ==========================================

#[test]
fn test_sort_for_display_orders_slots_and_assignees() {
    let (engine, resolver, classifier, cutoff) = engine_fixtures();

    // 构造顺序刻意打乱: 晚间记录在前, 兜底派工人在前
    let records = vec![
        TransferBuilder::new("rabat").created_at(evening_instant()).build(),
        TransferBuilder::new("agadir").created_at(evening_instant()).build(),
        TransferBuilder::new("agadir").created_at(morning_instant()).build(),
        TransferBuilder::new("tanger").created_at(morning_instant()).build(),
    ];

    let mut view = engine.aggregate(&records, &resolver, &classifier, &cutoff, reference_now());
    view.sort_for_display(resolver.table());

    let assignees: Vec<&str> = view.assignees.keys().map(String::as_str).collect();
    assert_eq!(
        assignees,
        vec!["Bader", "Yassine", transfer_dispatch::UNASSIGNED_ASSIGNEE],
        "派工人应按表序, 兜底在末位"
    );

    let slots: Vec<TimeSlot> = view.assignees["Yassine"].slots.keys().copied().collect();
    assert_eq!(slots, vec![TimeSlot::Morning, TimeSlot::Evening], "Morning 应排在 Evening 前");
}
