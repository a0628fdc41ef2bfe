// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use crate::constants::{crd, NAMESPACE};
use crate::types::Streamdata;
use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tower::Service;

/// Pseudo-method under which watch requests (`?watch=true`) are registered
const WATCH: &str = "WATCH";

/// A mock HTTP service that returns predefined responses based on method and path.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
    delay: Option<Duration>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for GET requests matching the path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    /// Add a response for DELETE requests matching the path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Add a newline-delimited event body for watch requests on the path
    pub fn on_watch(self, path: &str, events: &[String]) -> Self {
        let body: String = events.iter().map(|e| format!("{}\n", e)).collect();
        self.on(WATCH, path, 200, &body)
    }

    /// Hold every response back for the given duration
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests seen so far, as (method, path) with watches reported as "WATCH"
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, NAMESPACE)
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Fall back to the longest registered prefix
        responses
            .iter()
            .filter(|((m, p), _)| m == method && path.starts_with(p.as_str()))
            .max_by_key(|((_, p), _)| p.len())
            .map(|(_, resp)| resp.clone())
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let is_watch = req
            .uri()
            .query()
            .is_some_and(|q| q.split('&').any(|kv| kv == "watch=true" || kv == "watch=1"));
        let method = if is_watch {
            WATCH.to_string()
        } else {
            req.method().to_string()
        };
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);
        let delay = self.delay;

        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let (status, body) = response.unwrap_or_else(|| (404, not_found_json("streamdata", &path)));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Collection path of the Streamdata resource in the fixed namespace
pub fn streamdata_path() -> String {
    format!(
        "/apis/{}/{}/namespaces/{}/{}",
        crd::GROUP,
        crd::VERSION,
        NAMESPACE,
        crd::PLURAL
    )
}

/// Path of a single Streamdata object
pub fn streamdata_item_path(name: &str) -> String {
    format!("{}/{}", streamdata_path(), name)
}

/// Serialize a resource as the API server would return it
pub fn streamdata_json(resource: &Streamdata) -> String {
    let mut value = serde_json::to_value(resource).unwrap();
    let metadata = &mut value["metadata"];
    metadata["uid"] = serde_json::json!(format!("uid-{}", resource.metadata.name.clone().unwrap_or_default()));
    metadata["resourceVersion"] = serde_json::json!("1");
    value.to_string()
}

/// Create a mock StreamdataList JSON response
pub fn streamdata_list_json(items: &[Streamdata]) -> String {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|r| serde_json::from_str(&streamdata_json(r)).unwrap())
        .collect();
    serde_json::json!({
        "apiVersion": format!("{}/{}", crd::GROUP, crd::VERSION),
        "kind": "StreamdataList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// A single watch event line
pub fn watch_event_json(event_type: &str, resource: &Streamdata) -> String {
    let object: serde_json::Value = serde_json::from_str(&streamdata_json(resource)).unwrap();
    serde_json::json!({ "type": event_type, "object": object }).to_string()
}

/// A bookmark watch event at the given resource version
pub fn bookmark_event_json(resource_version: &str) -> String {
    serde_json::json!({
        "type": "BOOKMARK",
        "object": {
            "apiVersion": format!("{}/{}", crd::GROUP, crd::VERSION),
            "kind": crd::KIND,
            "metadata": { "resourceVersion": resource_version }
        }
    })
    .to_string()
}

/// An error watch event carrying a Status object
pub fn error_event_json(code: u16, reason: &str, message: &str) -> String {
    let status: serde_json::Value = serde_json::from_str(&status_json(code, reason, message)).unwrap();
    serde_json::json!({ "type": "ERROR", "object": status }).to_string()
}

/// Create a Status failure response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}
