// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Identity of the Streamdata custom resource
pub mod crd {
    pub const GROUP: &str = "mediastreams.media-streaming-mesh.io";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "Streamdata";
    pub const PLURAL: &str = "streamdata";
    /// Prefix of every derived resource name
    pub const NAME_PREFIX: &str = "streamdata";
}

/// All stream resources live in this namespace
pub const NAMESPACE: &str = "default";

/// Status values written on every create/update
pub mod status {
    pub const STATUS: &str = "PENDING";
    pub const REASON: &str = "SETUP FROM APP";
    pub const STREAM_STATUS: &str = "CREATE";
}

/// Upper bound for a single list/get/create/update/delete round trip
pub const OPERATION_TIMEOUT_SECS: u64 = 10;
