//! Prompt templates module.
//!
//! A deliberately small template language:
//! - `{{variable}}` is replaced with the value of `variable`
//! - `{{#if variable}}content{{/if}}` includes content only if variable is set
//! - `{{#if variable}}content{{else}}alternative{{/if}}` with else support
//!
//! Conditionals do not nest. Placeholders with no value render as nothing.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE_TAG: &str = "{{else}}";
const ENDIF_TAG: &str = "{{/if}}";

/// Normalizes caller arguments before defaults are applied.
pub type ArgumentHook = fn(HashMap<String, String>) -> HashMap<String, String>;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// Values used for arguments the caller leaves out.
    pub defaults: HashMap<String, String>,

    pub prepare: ArgumentHook,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            defaults: HashMap::new(),
            prepare: std::convert::identity,
            template: template.into(),
        }
    }

    /// Attach default argument values.
    pub fn with_defaults(mut self, defaults: HashMap<String, String>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_prepare(mut self, prepare: ArgumentHook) -> Self {
        self.prepare = prepare;
        self
    }

    /// Caller arguments layered over the defaults. Blank values count as
    /// absent so a default still applies.
    pub fn merge_arguments(&self, arguments: HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = self.defaults.clone();
        for (key, value) in (self.prepare)(arguments) {
            if !value.trim().is_empty() {
                merged.insert(key, value);
            }
        }
        merged
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let resolved = resolve_conditionals(&self.template, arguments)?;
        Ok(substitute(&resolved, arguments))
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.trim().is_empty())
}

/// Replace every `{{#if}}` block with the branch selected by its variable.
fn resolve_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + IF_OPEN.len()..];

        let close = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let var_name = after_open[..close].trim();
        let body = &after_open[close + 2..];

        let end = body
            .find(ENDIF_TAG)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;
        let block = &body[..end];

        let (when_set, when_unset) = match block.find(ELSE_TAG) {
            Some(pos) => (&block[..pos], &block[pos + ELSE_TAG.len()..]),
            None => (block, ""),
        };

        output.push_str(if is_set(arguments, var_name) {
            when_set
        } else {
            when_unset
        });
        rest = &body[end + ENDIF_TAG.len()..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Substitute `{{name}}` placeholders in one pass, so values are never
/// re-scanned for placeholders.
fn substitute(template: &str, arguments: &HashMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let Some(len) = rest[start..].find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = rest[start + 2..start + len].trim();
        if let Some(value) = arguments.get(key) {
            output.push_str(value);
        }
        rest = &rest[start + len + 2..];
    }

    output.push_str(rest);
    output
}
