//! Provider abstractions for the two remote model capabilities the companion relies on:
//! - Emotion classification of free text
//! - LLM reply generation from a composed prompt
//!
//! Application code depends only on these traits so providers (Hugging Face, Groq,
//! OpenAI-compatible servers, local models) can be swapped at construction time.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::classification::EmotionScore;
pub use types::generation::Request as GenerationRequest;
