pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::ServiceConfig;
pub use crate::core::aggregator::UpstreamAggregator;
pub use crate::domain::model::ShipInfo;
pub use crate::domain::ports::{Aggregate, ConfigProvider};
pub use crate::utils::error::{Result, ShipInfoError};
