use crate::core::sensor::BringSensor;
use crate::domain::model::SensorSnapshot;
use crate::domain::ports::{ShoppingListSource, Storage};
use crate::utils::error::Result;
use std::time::Duration;

/// 一個更新週期的結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl CycleReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 依序更新每個清單，並把成功的結果發佈出去
pub struct SensorEngine<C: ShoppingListSource, S: Storage> {
    source: C,
    storage: Option<S>,
    sensors: Vec<BringSensor>,
}

impl<C: ShoppingListSource, S: Storage> SensorEngine<C, S> {
    pub fn new(source: C, sensors: Vec<BringSensor>) -> Self {
        Self {
            source,
            storage: None,
            sensors,
        }
    }

    pub fn with_storage(mut self, storage: S) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn sensors(&self) -> &[BringSensor] {
        &self.sensors
    }

    pub fn snapshots(&self) -> Vec<SensorSnapshot> {
        self.sensors.iter().map(BringSensor::snapshot).collect()
    }

    pub async fn update_all(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        for sensor in self.sensors.iter_mut() {
            let list_id = sensor.list_id().to_string();

            match sensor.update(&self.source).await {
                Ok(()) => {
                    let snapshot = sensor.snapshot();
                    if let Err(e) = publish(self.storage.as_ref(), &snapshot).await {
                        // 發佈失敗不影響感測器本身的狀態
                        tracing::warn!("⚠️ List {}: could not publish state: {}", list_id, e);
                    }
                    report.succeeded.push(list_id);
                }
                Err(e) => {
                    tracing::error!(
                        "❌ List {}: update failed: {} (Category: {:?}, Severity: {:?})",
                        list_id,
                        e,
                        e.category(),
                        e.severity()
                    );
                    if e.is_retryable() {
                        tracing::info!("🔁 List {}: will retry on the next cycle", list_id);
                    } else {
                        tracing::warn!("💡 List {}: {}", list_id, e.recovery_suggestion());
                    }
                    report.failed.push(list_id);
                }
            }
        }

        tracing::info!(
            "📋 Cycle finished: {} updated, {} failed",
            report.succeeded.len(),
            report.failed.len()
        );
        report
    }

    /// 固定間隔輪詢；不會自行結束
    pub async fn run(&mut self, scan_interval: Duration) {
        tracing::info!(
            "🚀 Polling {} list(s) every {:?}",
            self.sensors.len(),
            scan_interval
        );

        let mut ticker = tokio::time::interval(scan_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.update_all().await;
        }
    }
}

async fn publish<S: Storage>(storage: Option<&S>, snapshot: &SensorSnapshot) -> Result<()> {
    let line = serde_json::to_string(snapshot)?;
    println!("{}", line);

    if let Some(storage) = storage {
        let json = serde_json::to_vec_pretty(snapshot)?;
        storage
            .write_file(&format!("{}.json", snapshot.name), &json)
            .await?;
    }
    Ok(())
}
