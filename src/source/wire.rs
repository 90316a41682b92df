// ==========================================
// 调拨单派工看板 - 上游线格式
// ==========================================
// 职责: 反序列化订单管理接口的响应体并映射为领域记录
// 线格式: 响应体两层 data 包裹, 记录行为
//   { to_city, timestamps: { created, updated },
//     client: { brand: { name } },
//     products: [ { product: { name }, quantity } ] }
// 边界: 包裹层任一级缺失 → 空列表; 数量非法 → 按缺失处理
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::domain::transfer::{ProductLine, TransferRecord};
use crate::source::SourceError;

// ==========================================
// 记录行 DTO
// ==========================================

#[derive(Debug, Clone, Deserialize)]
pub struct TransferDto {
    pub to_city: String,
    pub timestamps: TimestampsDto,
    #[serde(default)]
    pub client: Option<ClientDto>,
    #[serde(default)]
    pub products: Vec<ProductItemDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimestampsDto {
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientDto {
    #[serde(default)]
    pub brand: Option<BrandDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductItemDto {
    #[serde(default)]
    pub product: Option<ProductRefDto>,
    // 上游偶发负数/小数/字符串数量, 一律按缺失处理, 聚合时落到默认值
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRefDto {
    #[serde(default)]
    pub name: Option<String>,
}

/// 宽容数量解析: 非负整数之外的值视为缺失, 不使整条记录失败
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_u64()))
}

// ==========================================
// DTO → 领域记录
// ==========================================

impl From<TransferDto> for TransferRecord {
    fn from(dto: TransferDto) -> Self {
        TransferRecord {
            destination_city: dto.to_city,
            created_at: dto.timestamps.created,
            updated_at: dto.timestamps.updated,
            client_brand: dto.client.and_then(|c| c.brand).and_then(|b| b.name),
            products: dto
                .products
                .into_iter()
                .map(|item| ProductLine {
                    product_name: item.product.and_then(|p| p.name),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

// ==========================================
// 响应体包裹
// ==========================================

#[derive(Debug, Default, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<EnvelopeData>,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    data: Option<Vec<TransferDto>>,
}

/// 解析上游响应体为领域记录序列
///
/// # 返回
/// - Ok(Vec<TransferRecord>): 包裹层缺失时为合法的空列表
/// - Err(SourceError::Decode): 响应体不是合法 JSON 或记录行形状非法
pub fn parse_response(body: &str) -> Result<Vec<TransferRecord>, SourceError> {
    let envelope: ResponseEnvelope = serde_json::from_str(body)?;
    let dtos = envelope.data.and_then(|d| d.data).unwrap_or_default();
    Ok(dtos.into_iter().map(TransferRecord::from).collect())
}
