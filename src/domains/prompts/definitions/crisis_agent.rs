//! Crisis response agent system prompt.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::{PromptDefinition, argument};
use crate::core::config::{AgentConfig, parse_list};

/// System prompt for an agent that drives the crisis tools.
pub struct CrisisAgentPrompt;

impl CrisisAgentPrompt {
    /// Render capabilities as a bulleted list.
    fn bullet_list(items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PromptDefinition for CrisisAgentPrompt {
    const NAME: &'static str = "crisis_agent";
    const DESCRIPTION: &'static str =
        "System prompt for a crisis response agent that uses the flood and evacuation tools";

    fn template() -> &'static str {
        "You are {{agent_name}}, a {{specialization}}.

{{description}}

Your capabilities include:
{{capabilities}}

Use the available tools before answering: get_flood_risk for current conditions, \
monitor_risk_zones for water levels and risk zones, generate_evacuation_route for \
safe routes and the nearest shelter, find_emergency_resources for shelters and \
hospitals, and execute_community_evacuation to run the full workflow.

Quote tool output faithfully. If a tool reports no data for a location, say so \
plainly and never invent roads, shelters or readings. Put life safety first and \
keep instructions short enough to act on.{{#if region}}

You are assigned to {{region}}.{{/if}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("agent_name", "Name the agent introduces itself with", false),
            argument("specialization", "One-line role of the agent", false),
            argument("description", "Paragraph describing the agent", false),
            argument(
                "capabilities",
                "Comma separated list of capabilities",
                false,
            ),
            argument("region", "City or region the agent covers", false),
        ]
    }

    fn defaults(agent: &AgentConfig) -> HashMap<String, String> {
        HashMap::from([
            ("agent_name".to_string(), agent.name.clone()),
            ("specialization".to_string(), agent.specialization.clone()),
            ("description".to_string(), agent.description.clone()),
            (
                "capabilities".to_string(),
                Self::bullet_list(&agent.capabilities),
            ),
        ])
    }

    fn prepare(mut arguments: HashMap<String, String>) -> HashMap<String, String> {
        if let Some(raw) = arguments.get_mut("capabilities") {
            *raw = capabilities_argument(raw);
        }
        arguments
    }
}

/// Turn a caller-supplied comma separated list into bullets.
pub(crate) fn capabilities_argument(raw: &str) -> String {
    CrisisAgentPrompt::bullet_list(&parse_list(raw))
}
