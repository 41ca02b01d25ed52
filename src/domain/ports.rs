use crate::domain::model::RawPayloads;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 購物清單服務的讀取端
#[async_trait]
pub trait ShoppingListSource: Send + Sync {
    async fn fetch_articles(&self, locale: &str) -> Result<serde_json::Value>;
    async fn fetch_details(&self, list_id: &str) -> Result<serde_json::Value>;
    async fn fetch_list(&self, list_id: &str) -> Result<serde_json::Value>;

    /// 依序取得三個資源，任何一個失敗就整體失敗
    async fn fetch_all(&self, list_id: &str, locale: &str) -> Result<RawPayloads> {
        let articles = self.fetch_articles(locale).await?;
        let details = self.fetch_details(list_id).await?;
        let list = self.fetch_list(list_id).await?;
        Ok(RawPayloads {
            articles,
            details,
            list,
        })
    }
}
