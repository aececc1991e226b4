//! Scripted completion service for tests

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::service::llm::{CompletionError, CompletionRequest, CompletionService};

/// Replies per contract name and records every request it receives
///
/// Several replies scripted for one contract are served in order; the last
/// one repeats once the queue is down to it.
#[derive(Default)]
pub struct StubCompletionService {
    replies: Mutex<HashMap<&'static str, VecDeque<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, contract: &'static str, body: serde_json::Value) -> Self {
        self.reply_raw(contract, &body.to_string())
    }

    pub fn reply_raw(self, contract: &'static str, raw: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(contract)
            .or_default()
            .push_back(raw.to_string());
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, contract: &str) -> Vec<CompletionRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.contract == contract)
            .collect()
    }
}

#[async_trait]
impl CompletionService for StubCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().unwrap();
        let queue = replies
            .get_mut(request.contract)
            .ok_or_else(|| CompletionError::Request {
                provider: "stub",
                message: format!("no scripted reply for {}", request.contract),
            })?;
        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        reply.ok_or_else(|| CompletionError::Request {
            provider: "stub",
            message: format!("no scripted reply for {}", request.contract),
        })
    }

    fn provider(&self) -> &'static str {
        "stub"
    }
}
