// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use transfer_dispatch::domain::transfer::{ProductLine, TransferRecord};

/// 测试基准时刻: 2026-08-06 20:00 UTC（当日截止 18:07 已过）
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 20, 0, 0).unwrap()
}

/// 基准日上午时刻（截止前）
pub fn morning_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 0).unwrap()
}

/// 基准日晚间时刻（截止后）
pub fn evening_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 19, 0, 0).unwrap()
}

// ==========================================
// TransferRecord 构建器
// ==========================================

pub struct TransferBuilder {
    destination_city: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    client_brand: Option<String>,
    products: Vec<ProductLine>,
}

impl TransferBuilder {
    pub fn new(destination_city: &str) -> Self {
        Self {
            destination_city: destination_city.to_string(),
            created_at: morning_instant(),
            updated_at: morning_instant(),
            client_brand: None,
            products: Vec::new(),
        }
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.client_brand = Some(brand.to_string());
        self
    }

    pub fn created_at(mut self, instant: DateTime<Utc>) -> Self {
        self.created_at = instant;
        self
    }

    pub fn updated_at(mut self, instant: DateTime<Utc>) -> Self {
        self.updated_at = instant;
        self
    }

    pub fn product(mut self, name: &str, quantity: u64) -> Self {
        self.products.push(ProductLine {
            product_name: Some(name.to_string()),
            quantity: Some(quantity),
        });
        self
    }

    /// 名称与数量均缺失的商品行
    pub fn anonymous_product(mut self) -> Self {
        self.products.push(ProductLine {
            product_name: None,
            quantity: None,
        });
        self
    }

    pub fn build(self) -> TransferRecord {
        TransferRecord {
            destination_city: self.destination_city,
            created_at: self.created_at,
            updated_at: self.updated_at,
            client_brand: self.client_brand,
            products: self.products,
        }
    }
}
