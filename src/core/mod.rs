pub mod aggregator;

pub use crate::domain::model::ShipInfo;
pub use crate::domain::ports::{Aggregate, ConfigProvider};
pub use crate::utils::error::Result;
