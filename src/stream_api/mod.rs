// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Stream registry adapter: CRUD and watch over Streamdata resources.

pub mod client;
pub mod mapping;
pub mod watch;

pub use client::StreamApi;
pub use mapping::{derive_name, record_name, to_domain, to_resource};
pub use watch::{StreamEvent, StreamEventKind};
