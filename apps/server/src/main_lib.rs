use std::sync::Arc;

use anyhow::Context;
use hkstocks_market_data::{
    AastocksDividendProvider, ConstituentProvider, DividendProvider, HangSengConstituentProvider,
    HkexLotSizeProvider, HttpFetcher, LotSizeProvider,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub lot_size_provider: Arc<dyn LotSizeProvider>,
    pub dividend_provider: Arc<dyn DividendProvider>,
    pub constituent_provider: Arc<dyn ConstituentProvider>,
    /// Route prefix, echoed in the health and docs payloads.
    pub path_prefix: String,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    reqwest::Url::parse(&config.lot_size_url)
        .with_context(|| format!("Invalid HKSTOCKS_LOT_SIZE_URL: {}", config.lot_size_url))?;
    reqwest::Url::parse(&config.dividend_url)
        .with_context(|| format!("Invalid HKSTOCKS_DIVIDEND_URL: {}", config.dividend_url))?;

    if config.request_timeout <= config.upstream_timeout {
        tracing::warn!(
            request_timeout_ms = config.request_timeout.as_millis() as u64,
            upstream_timeout_ms = config.upstream_timeout.as_millis() as u64,
            "request timeout does not exceed upstream timeout; slow sources will answer 504"
        );
    }

    // One client for every provider so connections are pooled.
    let fetcher = HttpFetcher::new(config.upstream_timeout);

    let lot_size_provider = Arc::new(HkexLotSizeProvider::new(
        fetcher.clone(),
        config.lot_size_url.clone(),
    ));
    let dividend_provider = Arc::new(AastocksDividendProvider::new(
        fetcher.clone(),
        config.dividend_url.clone(),
    ));
    let constituent_provider = Arc::new(HangSengConstituentProvider::new(fetcher));

    tracing::info!(
        lot_size = lot_size_provider.id(),
        dividends = dividend_provider.id(),
        constituents = constituent_provider.id(),
        "providers configured"
    );

    Ok(Arc::new(AppState {
        lot_size_provider,
        dividend_provider,
        constituent_provider,
        path_prefix: config.path_prefix.clone(),
    }))
}
