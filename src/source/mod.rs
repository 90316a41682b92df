// ==========================================
// 调拨单派工看板 - 数据源层
// ==========================================
// 职责: 定义调拨单数据源接口与线格式解析
// 说明: HTTP 拉取由外部实现此 trait 接入; 核心只消费结果
// 红线: 空列表是合法结果, 不是错误
// ==========================================

pub mod file_source;
pub mod wire;

pub use file_source::JsonFileSource;
pub use wire::parse_response;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transfer::TransferRecord;

// ==========================================
// SourceError - 数据源错误
// ==========================================
// 错误信息必须包含显式原因, 协调器原样保留用于展示
#[derive(Debug, Error)]
pub enum SourceError {
    /// 上游接口请求失败（鉴权、网络等, 由实现方给出人类可读原因）
    #[error("上游接口请求失败: {0}")]
    Request(String),

    /// 响应体反序列化失败
    #[error("响应体解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    /// 本地数据文件读取失败
    #[error("数据文件读取失败: {0}")]
    Io(#[from] std::io::Error),
}

// ==========================================
// TransferSource Trait
// ==========================================
// 用途: 待处理调拨单数据源主接口
// 实现者: JsonFileSource（本地文件）, 外部 HTTP 客户端适配器
#[async_trait]
pub trait TransferSource: Send + Sync {
    /// 拉取全部待处理调拨单
    ///
    /// # 返回
    /// - Ok(Vec<TransferRecord>): 一份完整快照（可为空）
    /// - Err(SourceError): 拉取失败, 原因供展示层使用
    async fn fetch_pending(&self) -> Result<Vec<TransferRecord>, SourceError>;
}
