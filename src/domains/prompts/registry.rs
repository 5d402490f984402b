//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{CrisisAgentPrompt, EvacuationBriefingPrompt, PromptDefinition};
use super::templates::PromptTemplate;
use crate::core::config::AgentConfig;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>(agent: &AgentConfig) -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
    .with_defaults(P::defaults(agent))
    .with_prepare(P::prepare)
}

/// Get all registered prompts, in listing order.
pub fn get_all_prompts(agent: &AgentConfig) -> Vec<PromptTemplate> {
    vec![
        build_template::<CrisisAgentPrompt>(agent),
        build_template::<EvacuationBriefingPrompt>(agent),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![CrisisAgentPrompt::NAME, EvacuationBriefingPrompt::NAME]
}
