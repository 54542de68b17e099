//! Types accepted by reply generation providers.

use serde::{Deserialize, Serialize};

/// A single-turn generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Optional instructions sent ahead of the prompt
    pub system: Option<String>,
    pub prompt: String,
}

impl Request {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_system_instructions() {
        let request = Request::new("Hello, world!").with_system("Be kind.");

        assert_eq!(request.prompt, "Hello, world!");
        assert_eq!(request.system.as_deref(), Some("Be kind."));
    }
}
