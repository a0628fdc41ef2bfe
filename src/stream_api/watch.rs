// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Watching Streamdata resources and forwarding them as domain events

use crate::stream_api::client::StreamApi;
use crate::stream_api::mapping::to_domain;
use crate::types::{StreamRecord, Streamdata};
use futures::StreamExt;
use kube::{
    api::{WatchEvent, WatchParams},
    runtime::{watcher, WatchStreamExt},
    ResourceExt,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Raw watch events report added and modified objects separately, the
/// runtime watcher does not. Both are forwarded as `Applied`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamEventKind {
    /// Created or changed
    Applied,
    Deleted,
}

/// A change to one stream resource, translated to the domain form
#[derive(Clone, Debug, PartialEq)]
pub struct StreamEvent {
    pub kind: StreamEventKind,
    pub name: String,
    pub record: StreamRecord,
}

impl StreamEvent {
    fn new(kind: StreamEventKind, resource: &Streamdata) -> Self {
        Self {
            kind,
            name: resource.name_any(),
            record: to_domain(resource),
        }
    }
}

impl StreamApi {
    /// Observe a single watch event, forward it on `tx` and return.
    /// Subscription errors are logged only.
    pub async fn watch_streams(&self, tx: &mpsc::Sender<StreamEvent>) {
        info!("Start watch for streamdata");

        let mut stream = match self.api.watch(&WatchParams::default(), "0").await {
            Ok(stream) => stream.boxed(),
            Err(e) => {
                error!("Failed to watch streamdata: {}", e);
                return;
            }
        };

        let event = match stream.next().await {
            Some(Ok(WatchEvent::Added(obj))) => {
                info!("Received add event for {}", obj.describe());
                Some(StreamEvent::new(StreamEventKind::Applied, &obj))
            }
            Some(Ok(WatchEvent::Modified(obj))) => {
                info!("Received modify event for {}", obj.describe());
                Some(StreamEvent::new(StreamEventKind::Applied, &obj))
            }
            Some(Ok(WatchEvent::Deleted(obj))) => {
                info!("Received delete event for {}", obj.describe());
                Some(StreamEvent::new(StreamEventKind::Deleted, &obj))
            }
            Some(Ok(WatchEvent::Bookmark(bm))) => {
                debug!("Received bookmark at {}", bm.metadata.resource_version);
                None
            }
            Some(Ok(WatchEvent::Error(e))) => {
                error!("Watch streamdata returned error: {}", e);
                None
            }
            Some(Err(e)) => {
                error!("Failed watch streamdata with error {}", e);
                None
            }
            None => {
                warn!("Watch streamdata closed before any event");
                None
            }
        };
        drop(stream);

        if let Some(event) = event {
            if tx.send(event).await.is_err() {
                warn!("Stream event receiver dropped, event discarded");
            }
        }

        info!("End watch for streamdata");
    }

    /// Forward every change to `tx` until the receiver is dropped or the
    /// watch stream ends. Watch errors are logged and the watch resumes;
    /// a dropped receiver stops the watch even while no events arrive.
    pub async fn follow_streams(&self, tx: mpsc::Sender<StreamEvent>) {
        info!("Following streamdata changes");

        let mut stream = watcher(self.api.clone(), watcher::Config::default())
            .default_backoff()
            .boxed();

        loop {
            let item = tokio::select! {
                _ = tx.closed() => {
                    info!("Stream event receiver dropped, stopping watch");
                    return;
                }
                item = stream.next() => match item {
                    Some(item) => item,
                    None => break,
                },
            };

            let event = match item {
                Ok(watcher::Event::Apply(obj)) | Ok(watcher::Event::InitApply(obj)) => {
                    debug!("Streamdata {} applied", obj.describe());
                    StreamEvent::new(StreamEventKind::Applied, &obj)
                }
                Ok(watcher::Event::Delete(obj)) => {
                    debug!("Streamdata {} deleted", obj.describe());
                    StreamEvent::new(StreamEventKind::Deleted, &obj)
                }
                Ok(watcher::Event::Init) | Ok(watcher::Event::InitDone) => continue,
                Err(e) => {
                    warn!("Streamdata watcher error: {}", e);
                    continue;
                }
            };

            if tx.send(event).await.is_err() {
                info!("Stream event receiver dropped, stopping watch");
                return;
            }
        }

        info!("Streamdata watch stream ended");
    }
}
