// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Control-plane client creation

use crate::error::{Result, StreamApiError};
use kube::{Client, Config as KConfig};
use tracing::{info, instrument};

/// Create a Kubernetes client from the pod's service account
#[instrument]
pub async fn create_incluster_client() -> Result<Client> {
    let config = KConfig::incluster().map_err(|e| {
        StreamApiError::ClientConfig(format!("Failed to load in-cluster config: {}", e))
    })?;
    info!("Using in-cluster API server at {}", config.cluster_url);

    client_from_config(config)
}

/// Build a client from an already resolved configuration
pub fn client_from_config(config: KConfig) -> Result<Client> {
    Client::try_from(config)
        .map_err(|e| StreamApiError::ClientConfig(format!("Failed to create client: {}", e)))
}
