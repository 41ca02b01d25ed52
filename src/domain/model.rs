use crate::utils::error::{BringError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 商品 id → 在地化顯示名稱
pub type ArticleCatalog = HashMap<String, String>;

/// 購物清單中的一筆原始項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListEntry {
    pub name: String,
    pub specification: String,
}

/// details 回應中的一筆記錄，只用來取得圖示 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    pub item_id: String,
    #[serde(default)]
    pub user_icon_item_id: Option<String>,
}

/// 清單內容；其他欄位忽略
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListContents {
    pub purchase: Vec<RawListEntry>,
    pub recently: Vec<RawListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub name: String,
    pub specification: String,
    pub image: String,
    pub key: String,
}

/// 三個端點解碼後、尚未轉型的原始 JSON
#[derive(Debug, Clone)]
pub struct RawPayloads {
    pub articles: serde_json::Value,
    pub details: serde_json::Value,
    pub list: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailsPayload {
    Bare(Vec<DetailRecord>),
    Wrapped {
        #[serde(alias = "details")]
        items: Vec<DetailRecord>,
    },
}

impl RawPayloads {
    pub fn catalog(&self) -> Result<ArticleCatalog> {
        ArticleCatalog::deserialize(&self.articles)
            .map_err(|e| BringError::shape(format!("article catalog: {}", e)))
    }

    pub fn details(&self) -> Result<Vec<DetailRecord>> {
        match DetailsPayload::deserialize(&self.details) {
            Ok(DetailsPayload::Bare(records)) => Ok(records),
            Ok(DetailsPayload::Wrapped { items }) => Ok(items),
            Err(e) => Err(BringError::shape(format!("item details: {}", e))),
        }
    }

    pub fn list_contents(&self) -> Result<ListContents> {
        ListContents::deserialize(&self.list)
            .map_err(|e| BringError::shape(format!("list contents: {}", e)))
    }
}

/// 感測器對外的屬性
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorAttributes {
    #[serde(rename = "Purchase")]
    pub purchase: Vec<NormalizedItem>,
    #[serde(rename = "Recently")]
    pub recently: Vec<NormalizedItem>,
    #[serde(rename = "List_Id")]
    pub list_id: String,
}

/// 一次成功更新後發佈的完整狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub name: String,
    pub state: Option<usize>,
    pub icon: String,
    pub attributes: SensorAttributes,
    pub last_updated: Option<DateTime<Utc>>,
}
