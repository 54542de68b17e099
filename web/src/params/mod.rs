//! This module holds typed parameters for endpoint inputs.
//!
//! By using typed parameters, malformed request bodies are rejected by the extractors
//! before they reach the application logic.

pub(crate) mod analysis;
