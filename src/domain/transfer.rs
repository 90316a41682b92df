// ==========================================
// 调拨单派工看板 - 调拨单领域模型
// ==========================================
// 职责: 定义一条待处理调拨单及其商品行
// 红线: 拉取后不可变; 单份快照由刷新协调器独占持有
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== 缺省哨兵值 =====
// 哨兵是普通的聚合键, 不做额外特殊处理

/// 客户品牌缺失时的聚合键
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// 商品名缺失时的聚合键
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// 数量缺失或非法时的默认值
pub const DEFAULT_QUANTITY: u64 = 1;

// ==========================================
// TransferRecord - 待处理调拨单
// ==========================================
// 用途: 数据源层写入, 聚合引擎只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    // ===== 分派依据 =====
    pub destination_city: String, // 目的城市（必填, 上游契约保证非空）

    // ===== 时间信息 =====
    pub created_at: DateTime<Utc>, // 创建时刻（时段分类依据）
    pub updated_at: DateTime<Utc>, // 最后更新时刻（latest_update 折叠依据）

    // ===== 客户信息 =====
    pub client_brand: Option<String>, // 客户品牌（缺失 → UNKNOWN_CLIENT）

    // ===== 商品行 =====
    pub products: Vec<ProductLine>, // 可为空; 空列表仍计入单数
}

// ==========================================
// ProductLine - 商品行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub product_name: Option<String>, // 商品名（缺失 → UNKNOWN_PRODUCT）
    pub quantity: Option<u64>,        // 数量 ≥ 0（缺失/非法 → DEFAULT_QUANTITY）
}
