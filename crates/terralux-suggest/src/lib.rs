//! TerraLux Suggest - AI-assisted model suggestions
//!
//! This crate wraps a single outbound call to the Anthropic Messages API:
//! it builds a natural-language prompt from a vendor's identity, sends one
//! user-role message, and parses the reply as a JSON array of draft models.
//!
//! The client never raises: every transport, shape, or parse failure is
//! logged and degraded to an empty suggestion list. Callers treat "no
//! suggestions available" and "zero suggestions returned" identically.

pub mod client;
pub mod model;

pub use client::{AnthropicSuggester, ModelSuggester};
pub use model::{ModelSuggestion, SuggestConfig};
