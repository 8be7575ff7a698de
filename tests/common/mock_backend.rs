//! In-memory code service

use async_trait::async_trait;
use carbon_share::backend::CodeService;
use carbon_share::error::{Error, Result};
use carbon_share::types::{SharingRequest, SharingResponse, SubmissionRequest, SubmissionResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Code service that records every request and answers from a script
pub struct MockBackend {
    optimize: Mutex<std::result::Result<SubmissionResult, String>>,
    share: std::result::Result<i64, String>,
    gate: Option<Arc<Notify>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    optimize_requests: Mutex<Vec<SubmissionRequest>>,
    share_requests: Mutex<Vec<SharingRequest>>,
}

impl MockBackend {
    /// Optimize returns `result`, sharing reports success
    pub fn succeeding(result: SubmissionResult) -> Self {
        Self::with_optimize(Ok(result))
    }

    /// Optimize fails with a backend error
    pub fn failing(message: &str) -> Self {
        Self::with_optimize(Err(message.to_string()))
    }

    fn with_optimize(optimize: std::result::Result<SubmissionResult, String>) -> Self {
        Self {
            optimize: Mutex::new(optimize),
            share: Ok(200),
            gate: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            optimize_requests: Mutex::new(Vec::new()),
            share_requests: Mutex::new(Vec::new()),
        }
    }

    /// Sharing answers with this `success` value
    pub fn share_status(mut self, status: i64) -> Self {
        self.share = Ok(status);
        self
    }

    /// Sharing fails at the transport level
    pub fn share_error(mut self, message: &str) -> Self {
        self.share = Err(message.to_string());
        self
    }

    /// Optimize waits for `gate` before answering
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Make every later optimize call fail
    pub fn fail_optimize(&self, message: &str) {
        *self.optimize.lock().unwrap() = Err(message.to_string());
    }

    pub fn optimize_requests(&self) -> Vec<SubmissionRequest> {
        self.optimize_requests.lock().unwrap().clone()
    }

    pub fn share_requests(&self) -> Vec<SharingRequest> {
        self.share_requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeService for MockBackend {
    async fn optimize(&self, request: &SubmissionRequest) -> Result<SubmissionResult> {
        self.optimize_requests.lock().unwrap().push(request.clone());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.optimize.lock().unwrap().clone().map_err(Error::Backend)
    }

    async fn share(&self, request: &SharingRequest) -> Result<SharingResponse> {
        self.share_requests.lock().unwrap().push(request.clone());
        match &self.share {
            Ok(status) => Ok(SharingResponse {
                success: Some(*status),
            }),
            Err(message) => Err(Error::Backend(message.clone())),
        }
    }
}
