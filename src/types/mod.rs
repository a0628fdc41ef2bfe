// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource and domain types for stream sessions.

pub mod record;
pub mod streamdata;

pub use record::{StreamRecord, StreamState};
pub use streamdata::{Streamdata, StreamdataSpec, StreamdataStatus};
