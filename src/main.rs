//! iplocation - IP geolocation lookup with ordered provider fallback
//!
//! This is the composition root that wires the default adapters into the
//! resolver service and prints the result for one IP.

use anyhow::Context;
use iplocation::{
    load_config, FieldMapNormaliser, HttpProviderGateway, ProviderTemplate, ResolverService,
    SyntaxIpValidator,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging; DEBUG enables the resolver's diagnostic target
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let ip = std::env::args()
        .nth(1)
        .context("usage: iplocation <ip-address>")?;

    let extra_providers = cfg
        .providers
        .iter()
        .map(|p| ProviderTemplate::parse(p.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid provider template in IPLOCATION_PROVIDERS")?;

    let gateway = HttpProviderGateway::with_timeout(cfg.timeout_secs.map(Duration::from_secs))?;

    let service = ResolverService::with_defaults(
        Arc::new(SyntaxIpValidator),
        Arc::new(FieldMapNormaliser),
        Arc::new(gateway),
        extra_providers,
    );

    let location = service.resolve(&ip).await?;
    println!("{}", serde_json::to_string_pretty(&location)?);

    Ok(())
}
