use crate::core::{Aggregate, ConfigProvider, Result, ShipInfo};
use reqwest::Client;

pub struct UpstreamAggregator<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> UpstreamAggregator<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Aggregate for UpstreamAggregator<C> {
    async fn aggregate(&self) -> Result<ShipInfo> {
        tracing::debug!(
            "Fetching captain's log from: {}",
            self.config.log_endpoint()
        );
        let response = self.client.get(self.config.log_endpoint()).send().await?;
        tracing::debug!("Log service response status: {}", response.status());

        // Status codes are not inspected; any valid JSON body is accepted.
        let captains_log: serde_json::Value = response.json().await?;

        // The crew request is only issued once the log request has completed.
        tracing::debug!("Fetching crew roster from: {}", self.config.crew_endpoint());
        let response = self.client.get(self.config.crew_endpoint()).send().await?;
        tracing::debug!("Crew service response status: {}", response.status());

        let crew: serde_json::Value = response.json().await?;

        Ok(ShipInfo { captains_log, crew })
    }
}
