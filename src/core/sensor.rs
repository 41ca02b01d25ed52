use crate::config::ListConfig;
use crate::core::reconcile::reconcile;
use crate::domain::model::{NormalizedItem, RawPayloads, SensorAttributes, SensorSnapshot};
use crate::domain::ports::ShoppingListSource;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

pub const SENSOR_PREFIX: &str = "bring_shopping_list_";
pub const ICON: &str = "mdi:cart";
pub const ICON_EMPTY: &str = "mdi:cart-outline";

/// 一次完整週期的結果，整組替換
#[derive(Debug, Clone)]
struct Reconciled {
    state: usize,
    purchase: Vec<NormalizedItem>,
    recently: Vec<NormalizedItem>,
}

impl Reconciled {
    fn from_payloads(payloads: &RawPayloads) -> Result<Self> {
        let catalog = payloads.catalog()?;
        let details = payloads.details()?;
        let contents = payloads.list_contents()?;

        Ok(Self {
            // 以原始項目數為準，不是拆分後的數量
            state: contents.purchase.len(),
            purchase: reconcile(&contents.purchase, &details, &catalog)?,
            recently: reconcile(&contents.recently, &details, &catalog)?,
        })
    }
}

/// 單一購物清單的感測器
pub struct BringSensor {
    list: ListConfig,
    state: Option<usize>,
    purchase: Vec<NormalizedItem>,
    recently: Vec<NormalizedItem>,
    last_updated: Option<DateTime<Utc>>,
}

impl BringSensor {
    pub fn new(list: ListConfig) -> Self {
        Self {
            list,
            state: None,
            purchase: Vec::new(),
            recently: Vec::new(),
            last_updated: None,
        }
    }

    pub fn list_id(&self) -> &str {
        &self.list.id
    }

    pub fn name(&self) -> String {
        format!("{}{}", SENSOR_PREFIX, self.list.name)
    }

    pub fn state(&self) -> Option<usize> {
        self.state
    }

    pub fn icon(&self) -> &'static str {
        if self.purchase.is_empty() {
            ICON_EMPTY
        } else {
            ICON
        }
    }

    pub fn attributes(&self) -> SensorAttributes {
        SensorAttributes {
            purchase: self.purchase.clone(),
            recently: self.recently.clone(),
            list_id: self.list.id.clone(),
        }
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            name: self.name(),
            state: self.state,
            icon: self.icon().to_string(),
            attributes: self.attributes(),
            last_updated: self.last_updated,
        }
    }

    /// 套用已取得的資料；失敗時保留上一次的值
    pub fn apply(&mut self, payloads: &RawPayloads) -> Result<()> {
        let reconciled = Reconciled::from_payloads(payloads)?;

        self.state = Some(reconciled.state);
        self.purchase = reconciled.purchase;
        self.recently = reconciled.recently;
        self.last_updated = Some(Utc::now());
        Ok(())
    }

    pub async fn update<S: ShoppingListSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        tracing::debug!(
            "🔄 Updating list {} (locale {})",
            self.list.id,
            self.list.locale
        );
        let payloads = source.fetch_all(&self.list.id, &self.list.locale).await?;
        self.apply(&payloads)?;

        tracing::debug!(
            "✅ List {}: {} to purchase, {} recently",
            self.list.id,
            self.purchase.len(),
            self.recently.len()
        );
        Ok(())
    }
}
