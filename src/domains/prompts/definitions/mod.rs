//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its metadata, arguments,
//! template string and any defaults drawn from configuration.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod crisis_agent;
mod evacuation_briefing;

pub use crisis_agent::CrisisAgentPrompt;
pub use evacuation_briefing::EvacuationBriefingPrompt;

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use crate::core::config::AgentConfig;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Values for omitted arguments.
    fn defaults(_agent: &AgentConfig) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Normalize caller arguments before defaults apply.
    fn prepare(arguments: HashMap<String, String>) -> HashMap<String, String> {
        arguments
    }
}

pub(crate) fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}
