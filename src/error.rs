// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamApiError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("{operation} did not complete within {timeout:?}")]
    DeadlineExceeded {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("Stream record has no {0} port")]
    MissingPort(&'static str),

    #[error("Failed to build in-cluster client: {0}")]
    ClientConfig(String),
}

impl StreamApiError {
    /// The resource does not exist (HTTP 404)
    pub fn is_not_found(&self) -> bool {
        self.api_status().is_some_and(|(code, _)| code == 404)
    }

    /// A resource with the same name already exists
    pub fn is_already_exists(&self) -> bool {
        self.api_status()
            .is_some_and(|(code, reason)| code == 409 && reason == "AlreadyExists")
    }

    /// The stored resource version did not match the submitted one
    pub fn is_conflict(&self) -> bool {
        self.api_status()
            .is_some_and(|(code, reason)| code == 409 && reason == "Conflict")
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, StreamApiError::DeadlineExceeded { .. })
    }

    fn api_status(&self) -> Option<(u16, &str)> {
        match self {
            StreamApiError::KubeError(kube::Error::Api(resp)) => {
                Some((resp.code, resp.reason.as_str()))
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamApiError>;
