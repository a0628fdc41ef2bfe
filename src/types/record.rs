// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

/// Lifecycle state of a stream session.
/// Transitions are not enforced here; consumers of the watch decide what is legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StreamState {
    Create,
    Play,
    Teardown,
    #[default]
    Unknown,
}

impl StreamState {
    /// Parse the state text stored on a resource, ignoring case.
    /// Returns `None` for anything outside create/play/teardown.
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "create" => Some(StreamState::Create),
            "play" => Some(StreamState::Play),
            "teardown" => Some(StreamState::Teardown),
            _ => None,
        }
    }

    /// Text written to the resource, `None` for `Unknown`
    pub fn as_resource_text(&self) -> Option<&'static str> {
        match self {
            StreamState::Create => Some("CREATE"),
            StreamState::Play => Some("PLAY"),
            StreamState::Teardown => Some("TEARDOWN"),
            StreamState::Unknown => None,
        }
    }
}

impl fmt::Display for StreamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_resource_text().unwrap_or("UNKNOWN"))
    }
}

/// In-memory view of one stream session between a server and a client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamRecord {
    pub stub_address: String,
    pub server_address: String,
    pub client_address: String,
    /// Only the first port is stored on the resource
    pub client_ports: Vec<u32>,
    /// Only the first port is stored on the resource
    pub server_ports: Vec<u32>,
    pub state: StreamState,
}

impl StreamRecord {
    pub fn new(
        stub_address: impl Into<String>,
        server_address: impl Into<String>,
        client_address: impl Into<String>,
    ) -> Self {
        Self {
            stub_address: stub_address.into(),
            server_address: server_address.into(),
            client_address: client_address.into(),
            ..Default::default()
        }
    }

    pub fn with_ports(mut self, server_port: u32, client_port: u32) -> Self {
        self.server_ports = vec![server_port];
        self.client_ports = vec![client_port];
        self
    }

    pub fn with_state(mut self, state: StreamState) -> Self {
        self.state = state;
        self
    }

    pub fn server_port(&self) -> Option<u32> {
        self.server_ports.first().copied()
    }

    pub fn client_port(&self) -> Option<u32> {
        self.client_ports.first().copied()
    }
}
