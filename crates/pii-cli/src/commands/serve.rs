use std::sync::Arc;

use anyhow::Result;
use pii_config::Config;
use pii_server::MaskServer;

pub async fn handle(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let service = Arc::new(super::build_service(config)?);

    eprintln!("Starting masking service on {}:{}", host, port);
    MaskServer::serve(service, &host, port).await
}
