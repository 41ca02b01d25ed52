pub mod engine;
pub mod reconcile;
pub mod sensor;

pub use crate::domain::model::{NormalizedItem, RawListEntry, SensorSnapshot};
pub use crate::domain::ports::{ShoppingListSource, Storage};
pub use crate::utils::error::Result;
