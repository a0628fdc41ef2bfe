// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion between `StreamRecord` and the `Streamdata` resource

use crate::constants::{crd, status, NAMESPACE};
use crate::error::{Result, StreamApiError};
use crate::types::{StreamRecord, StreamState, Streamdata, StreamdataSpec, StreamdataStatus};
use kube::ResourceExt;
use tracing::{debug, warn};

/// Resource name for a server/client pair. Other record fields do not affect it.
pub fn derive_name(server_address: &str, client_address: &str) -> String {
    format!("{}-{}-{}", crd::NAME_PREFIX, server_address, client_address)
}

/// Resource name for a record
pub fn record_name(record: &StreamRecord) -> String {
    derive_name(&record.server_address, &record.client_address)
}

/// Convert a stored resource into the domain record.
/// Unrecognized state text maps to `StreamState::Unknown`.
pub fn to_domain(resource: &Streamdata) -> StreamRecord {
    let text = resource.state_text();
    let state = StreamState::parse(text).unwrap_or_else(|| {
        if !text.is_empty() {
            warn!(
                "Streamdata {} has unrecognized state '{}', treating as unknown",
                resource.name_any(),
                text
            );
        }
        StreamState::Unknown
    });

    let spec = &resource.spec;
    StreamRecord {
        stub_address: spec.stub_ip.clone(),
        server_address: spec.server_ip.clone(),
        client_address: spec.client_ip.clone(),
        client_ports: vec![spec.client_port],
        server_ports: vec![spec.server_port],
        state,
    }
}

/// Build the resource for a record. Both port lists must be non-empty;
/// only their first entries are stored.
pub fn to_resource(record: &StreamRecord) -> Result<Streamdata> {
    let server_port = record
        .server_port()
        .ok_or(StreamApiError::MissingPort("server"))?;
    let client_port = record
        .client_port()
        .ok_or(StreamApiError::MissingPort("client"))?;

    if record.server_ports.len() > 1 || record.client_ports.len() > 1 {
        debug!(
            "Stream {} has multiple ports, storing only the first of each",
            record_name(record)
        );
    }

    let mut resource = Streamdata::new(
        &record_name(record),
        StreamdataSpec {
            stub_ip: record.stub_address.clone(),
            server_ip: record.server_address.clone(),
            client_ip: record.client_address.clone(),
            server_port,
            client_port,
            node_id: String::new(),
            stream_state: record.state.as_resource_text().map(str::to_string),
        },
    );
    resource.metadata.namespace = Some(NAMESPACE.to_string());
    resource.status = Some(StreamdataStatus {
        status: status::STATUS.to_string(),
        reason: status::REASON.to_string(),
        stream_status: status::STREAM_STATUS.to_string(),
    });

    Ok(resource)
}
