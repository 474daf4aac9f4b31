use crate::domain::model::ShipInfo;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn log_endpoint(&self) -> &str;
    fn crew_endpoint(&self) -> &str;
    fn bind_addr(&self) -> &str;
}

#[async_trait]
pub trait Aggregate: Send + Sync {
    async fn aggregate(&self) -> Result<ShipInfo>;
}
