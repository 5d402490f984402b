//! Prompt service implementation.
//!
//! Holds the rendered-on-demand prompt templates and validates required
//! arguments before rendering.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::AgentConfig;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registration order, used for listing.
    order: Vec<String>,

    /// Key: prompt name.
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService whose agent prompt defaults come from `agent`.
    pub fn new(agent: &AgentConfig) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            order: Vec::new(),
            prompts: HashMap::new(),
        };

        for template in get_all_prompts(agent) {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        if !self.prompts.contains_key(&template.name) {
            self.order.push(template.name.clone());
        }
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.order
            .iter()
            .filter_map(|name| self.prompts.get(name))
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = template.merge_arguments(arguments.unwrap_or_default());

        for arg in &template.arguments {
            let present = arguments
                .get(&arg.name)
                .is_some_and(|v| !v.trim().is_empty());
            if arg.required.unwrap_or(false) && !present {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn service() -> PromptService {
        PromptService::new(&AgentConfig::default())
    }

    fn text_of(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            _ => panic!("Expected text message"),
        }
    }

    #[tokio::test]
    async fn test_list_prompts_in_order() {
        let prompts = service().list_prompts().await;
        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["crisis_agent", "evacuation_briefing"]);
    }

    #[tokio::test]
    async fn test_crisis_agent_uses_config_defaults() {
        let result = service().get_prompt("crisis_agent", None).await.unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("You are Crisis Response Coordinator, a "));
        assert!(text.contains("- flood risk assessment"));
        assert!(!text.contains("You are assigned to"));
    }

    #[tokio::test]
    async fn test_crisis_agent_overrides() {
        let args = HashMap::from([
            ("agent_name".to_string(), "Harbor Watch".to_string()),
            ("capabilities".to_string(), "gauges, routes".to_string()),
            ("region".to_string(), "Boston".to_string()),
        ]);
        let result = service()
            .get_prompt("crisis_agent", Some(args))
            .await
            .unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("You are Harbor Watch, a "));
        assert!(text.contains("- gauges\n- routes"));
        assert!(text.ends_with("You are assigned to Boston."));
    }

    #[tokio::test]
    async fn test_evacuation_briefing() {
        let args = HashMap::from([("city".to_string(), "Boston".to_string())]);
        let result = service()
            .get_prompt("evacuation_briefing", Some(args))
            .await
            .unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("Prepare an evacuation briefing for Boston."));
        assert!(text.contains("for the general public."));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let result = service().get_prompt("evacuation_briefing", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(ref a)) if a == "city"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
