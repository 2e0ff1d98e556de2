//! Text-completion service access
//!
//! The form submits its prompt through the [`Completer`] trait. The only
//! production implementation is [`OpenAiClient`], which talks to an
//! OpenAI-compatible completions endpoint. There is no retry: one submit
//! is one request.

mod client;
mod error;

pub use client::{Completer, CompletionRequest, OpenAiClient};
pub use error::CompletionError;
