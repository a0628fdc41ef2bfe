// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stream_registry::config::{Config, WatchMode};
use stream_registry::stream_api::{StreamApi, StreamEvent};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting stream registry");

    let config = Config::from_env()?;
    info!("Configuration loaded: watch_mode={:?}", config.watch_mode);

    // No control plane, nothing to do: bail out instead of degrading
    let api = StreamApi::try_incluster().await?;
    info!("Connected to Kubernetes cluster");

    for record in api.list_records().await? {
        info!(
            "Known stream {} -> {} ({})",
            record.server_address, record.client_address, record.state
        );
    }

    let (tx, mut rx) = mpsc::channel::<StreamEvent>(64);
    let consumer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            info!(
                "Stream {} {:?}: state {}",
                event.name, event.kind, event.record.state
            );
        }
    });

    match config.watch_mode {
        WatchMode::Once => api.watch_streams(&tx).await,
        WatchMode::Follow => {
            tokio::select! {
                _ = api.follow_streams(tx.clone()) => {}
                _ = tokio::signal::ctrl_c() => info!("Shutdown requested"),
            }
        }
    }

    drop(tx);
    consumer.await?;
    info!("Stream registry stopped");
    Ok(())
}
