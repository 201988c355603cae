//! Test doubles for the model client seam.
//!
//! `MockModel` returns scripted replies and records every prompt it
//! receives, so tests can assert both on extraction output and on
//! whether the fallback was reached at all.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ExtractError, Result};
use crate::traits::model::ModelClient;

/// Scripted model client for tests.
///
/// Replies are consumed in order; once the script runs out the last
/// reply repeats. With an empty script every call fails, which is also
/// how transport errors are simulated via [`MockModel::failing`].
#[derive(Clone, Default)]
pub struct MockModel {
    replies: Arc<RwLock<Vec<String>>>,
    prompts: Arc<RwLock<Vec<String>>>,
    fail: Arc<RwLock<bool>>,
}

impl MockModel {
    /// A mock with a single scripted reply.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_replies(vec![reply.into()])
    }

    /// A mock with an ordered reply script.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Arc::new(RwLock::new(replies)),
            prompts: Arc::new(RwLock::new(Vec::new())),
            fail: Arc::new(RwLock::new(false)),
        }
    }

    /// A mock whose every call returns a transport error.
    pub fn failing() -> Self {
        let mock = Self::default();
        *mock.fail.write().unwrap() = true;
        mock
    }

    /// Every prompt sent so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for MockModel {
    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        if *self.fail.read().unwrap() {
            return Err(ExtractError::Model("mock transport failure".into()));
        }

        let mut replies = self.replies.write().unwrap();
        if replies.len() > 1 {
            Ok(replies.remove(0))
        } else {
            replies
                .first()
                .cloned()
                .ok_or_else(|| ExtractError::Model("mock has no scripted reply".into()))
        }
    }
}
