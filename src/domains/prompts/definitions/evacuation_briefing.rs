//! Evacuation briefing prompt.

use rmcp::model::PromptArgument;

use super::{PromptDefinition, argument};

/// Asks the model to brief residents of a city using the evacuation tools.
pub struct EvacuationBriefingPrompt;

impl PromptDefinition for EvacuationBriefingPrompt {
    const NAME: &'static str = "evacuation_briefing";
    const DESCRIPTION: &'static str =
        "Prepare an evacuation briefing for a city from live tool output";

    fn template() -> &'static str {
        "Prepare an evacuation briefing for {{city}}.

1. Call monitor_risk_zones with city \"{{city}}\" and note any CRITICAL gauges.
2. Call execute_community_evacuation with city \"{{city}}\".
3. Call find_emergency_resources with city \"{{city}}\".

Write the briefing for {{#if audience}}{{audience}}{{else}}the general public{{/if}}. \
Lead with the affected areas, then the recommended routes, then where to go and how \
much space is left. Keep it under 200 words and do not add routes or shelters that \
the tools did not return."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("city", "City to brief", true),
            argument(
                "audience",
                "Who the briefing is for, e.g. residents, schools, hospitals",
                false,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evacuation_briefing_metadata() {
        let args = EvacuationBriefingPrompt::arguments();
        assert_eq!(args[0].name, "city");
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
        assert!(EvacuationBriefingPrompt::template().contains("{{city}}"));
    }
}
