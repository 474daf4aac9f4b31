use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ship-info")]
#[command(about = "Aggregates the captain's log and crew services into one endpoint")]
pub struct ServiceConfig {
    /// Mesh address of the captain's log service
    #[arg(
        long,
        default_value = "http://captains-log_my-services_svc_5000.mesh:80"
    )]
    pub log_endpoint: String,

    /// Mesh address of the crew service
    #[arg(long, default_value = "http://crew_my-services_svc_5000.mesh:80")]
    pub crew_endpoint: String,

    #[arg(long, default_value = "0.0.0.0:5000")]
    pub bind_addr: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for ServiceConfig {
    fn log_endpoint(&self) -> &str {
        &self.log_endpoint
    }

    fn crew_endpoint(&self) -> &str {
        &self.crew_endpoint
    }

    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url("log_endpoint", &self.log_endpoint)?;
        validate_url("crew_endpoint", &self.crew_endpoint)?;
        validate_non_empty_string("bind_addr", &self.bind_addr)?;
        Ok(())
    }
}
