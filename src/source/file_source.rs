// ==========================================
// 调拨单派工看板 - JSON 文件数据源
// ==========================================
// 职责: 从本地文件读取与上游接口同构的响应体
// 用途: 演示入口与离线排查
// ==========================================

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::transfer::TransferRecord;
use crate::source::{wire, SourceError, TransferSource};

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TransferSource for JsonFileSource {
    async fn fetch_pending(&self) -> Result<Vec<TransferRecord>, SourceError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        wire::parse_response(&body)
    }
}
