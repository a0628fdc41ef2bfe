// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRUD access to Streamdata resources in the fixed namespace

use crate::constants::{NAMESPACE, OPERATION_TIMEOUT_SECS};
use crate::error::{Result, StreamApiError};
use crate::kubernetes::create_incluster_client;
use crate::stream_api::mapping::{derive_name, record_name, to_domain, to_resource};
use crate::types::{StreamRecord, Streamdata};
use kube::{
    api::{DeleteParams, ListParams, ObjectList, PostParams, Preconditions},
    Api, Client, ResourceExt,
};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Adapter between `StreamRecord`s and the Streamdata resources on the API server.
/// Every call round-trips to the server; nothing is cached.
#[derive(Clone)]
pub struct StreamApi {
    pub(crate) api: Api<Streamdata>,
    timeout: Duration,
}

impl StreamApi {
    pub fn new(client: Client) -> Self {
        Self {
            api: Api::namespaced(client, NAMESPACE),
            timeout: Duration::from_secs(OPERATION_TIMEOUT_SECS),
        }
    }

    /// Connect with the pod's service account credentials
    pub async fn try_incluster() -> Result<Self> {
        Ok(Self::new(create_incluster_client().await?))
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, kube::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => Ok(res?),
            Err(_) => Err(StreamApiError::DeadlineExceeded {
                operation,
                timeout: self.timeout,
            }),
        }
    }

    /// List all stream resources
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<ObjectList<Streamdata>> {
        let list = self
            .bounded("list", self.api.list(&ListParams::default()))
            .await?;
        debug!("Listed {} streamdata resources", list.items.len());
        Ok(list)
    }

    /// List all stream resources as domain records
    pub async fn list_records(&self) -> Result<Vec<StreamRecord>> {
        Ok(self.list().await?.items.iter().map(to_domain).collect())
    }

    /// Get one stream resource by name
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<Streamdata> {
        self.bounded("get", self.api.get(name)).await
    }

    /// Get the resource stored for a server/client pair
    pub async fn get_for(&self, server_address: &str, client_address: &str) -> Result<Streamdata> {
        self.get(&derive_name(server_address, client_address)).await
    }

    /// Create the resource for a record. Fails with AlreadyExists when the
    /// server/client pair is already registered.
    #[instrument(skip(self, record), fields(stream = %record_name(record)))]
    pub async fn create(&self, record: &StreamRecord) -> Result<Streamdata> {
        let resource = to_resource(record)?;
        let created = self
            .bounded("create", self.api.create(&PostParams::default(), &resource))
            .await?;
        info!("Created streamdata {}", created.describe());
        Ok(created)
    }

    /// Replace the stored resource with one built from the record.
    /// No read-modify-write is done; a stale version surfaces as Conflict.
    #[instrument(skip(self, record), fields(stream = %record_name(record)))]
    pub async fn update(&self, record: &StreamRecord) -> Result<Streamdata> {
        let resource = to_resource(record)?;
        let name = resource.name_any();
        let updated = self
            .bounded(
                "update",
                self.api.replace(&name, &PostParams::default(), &resource),
            )
            .await?;
        info!("Updated streamdata {} to state {}", updated.describe(), record.state);
        Ok(updated)
    }

    /// Delete the resource for a record. The current object is fetched first
    /// and its UID is used as a delete precondition.
    #[instrument(skip(self, record), fields(stream = %record_name(record)))]
    pub async fn delete(&self, record: &StreamRecord) -> Result<()> {
        let current = self.get(&record_name(record)).await?;
        let name = current.name_any();

        let dp = DeleteParams {
            preconditions: Some(Preconditions {
                uid: current.uid(),
                resource_version: None,
            }),
            ..Default::default()
        };
        self.bounded("delete", self.api.delete(&name, &dp)).await?;
        info!("Deleted streamdata {}", current.describe());
        Ok(())
    }
}
