// crates/gateway/src/config.rs
//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

/// Default address of the downstream job service.
pub const DEFAULT_JOB_SERVICE_URL: &str = "http://job-service:9080";

/// Job gateway: forwards /jobs requests to the job service.
#[derive(Debug, Clone, Parser)]
#[command(name = "job-gateway", version, about)]
pub struct GatewayConfig {
    /// Address the gateway listens on.
    #[arg(long, env = "JOB_GATEWAY_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Base URL of the downstream job service.
    #[arg(long, env = "JOB_SERVICE_URL", default_value = DEFAULT_JOB_SERVICE_URL)]
    pub job_service_url: String,

    /// Per-request timeout for job service calls, in seconds.
    /// Unset keeps the HTTP client's default.
    #[arg(long, env = "JOB_SERVICE_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

impl GatewayConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::try_parse_from(["job-gateway"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.job_service_url, DEFAULT_JOB_SERVICE_URL);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = GatewayConfig::try_parse_from([
            "job-gateway",
            "--bind",
            "127.0.0.1:9000",
            "--job-service-url",
            "http://localhost:9080",
            "--request-timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.job_service_url, "http://localhost:9080");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        assert!(GatewayConfig::try_parse_from(["job-gateway", "--bind", "nope"]).is_err());
    }
}
