use crate::config::GatewayConfig;
use crate::proxy::upstream::UpstreamClient;

/// Shared application state.
///
/// Built once at startup from an explicit [`GatewayConfig`]; nothing in here
/// is mutated while the gateway is serving.
pub struct AppState {
    pub config: GatewayConfig,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Result<Self, String> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(Self { config, upstream })
    }
}
