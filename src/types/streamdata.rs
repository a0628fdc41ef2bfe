// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "mediastreams.media-streaming-mesh.io",
    version = "v1",
    kind = "Streamdata",
    plural = "streamdata",
    derive = "PartialEq"
)]
#[kube(namespaced)]
#[kube(status = "StreamdataStatus")]
#[serde(rename_all = "camelCase")]
pub struct StreamdataSpec {
    #[serde(default)]
    pub stub_ip: String,
    #[serde(default)]
    pub server_ip: String,
    #[serde(default)]
    pub client_ip: String,
    #[serde(default)]
    pub server_port: u32,
    #[serde(default)]
    pub client_port: u32,
    #[serde(default)]
    pub node_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_state: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreamdataStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub stream_status: String,
}

impl Streamdata {
    /// Current state text from the spec, empty when unset
    pub fn state_text(&self) -> &str {
        self.spec.stream_state.as_deref().unwrap_or_default()
    }

    /// Status reported by the node controller, if any was written yet
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.status.as_str())
    }

    /// Short `name (server -> client)` label used in logs
    pub fn describe(&self) -> String {
        format!(
            "{} ({} -> {})",
            self.name_any(),
            self.spec.server_ip,
            self.spec.client_ip
        )
    }
}
