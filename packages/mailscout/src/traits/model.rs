//! Model client trait for the fallback call.

use async_trait::async_trait;

use crate::error::Result;

/// A generative text endpoint, reduced to the one operation the engine
/// needs: one prompt in, one opaque reply out.
///
/// Implementations wrap a specific provider and its transport details.
/// The engine treats the returned string as untrusted and runs it
/// through the full parsing fallback chain; a transport error is
/// absorbed as "zero model candidates", never surfaced to callers of
/// `extract_emails`.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a single prompt and return the raw response text.
    async fn send_prompt(&self, prompt: &str) -> Result<String>;
}
