//! Prompt templates module.
//!
//! A template is an ordered list of literal segments interleaved with named
//! substitution points. Each substitution point carries its own fallback
//! text, used when the argument is missing or empty. Rendering is a fold
//! over the segments.
//!
//! Templates are written as text with `{{name}}` or `{{name|fallback}}`
//! placeholders and parsed once at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::catalog::PromptArguments;
use super::error::PromptError;

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output unchanged.
    Literal(String),

    /// Replaced by the argument value, or `fallback` when it is absent.
    Placeholder { name: String, fallback: String },
}

/// A parsed text template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `{{name}}` / `{{name|fallback}}` placeholders out of `source`.
    pub fn parse(source: &str) -> Result<Self, PromptError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| {
                PromptError::template(format!(
                    "unclosed placeholder at byte {}",
                    source.len() - rest.len() + open
                ))
            })?;

            let inner = &after_open[..close];
            let (name, fallback) = match inner.split_once('|') {
                Some((name, fallback)) => (name.trim(), fallback),
                None => (inner.trim(), ""),
            };
            if !is_valid_name(name) {
                return Err(PromptError::template(format!(
                    "invalid placeholder name '{}'",
                    name
                )));
            }

            segments.push(Segment::Placeholder {
                name: name.to_string(),
                fallback: fallback.to_string(),
            });
            rest = &after_open[close + 2..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Start building a template from segments.
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of every argument this template substitutes.
    pub fn referenced_arguments(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder { name, .. } => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Render with `arguments`. Never fails: absent or empty values use the
    /// placeholder's fallback.
    pub fn render(&self, arguments: &PromptArguments) -> String {
        self.segments
            .iter()
            .fold(String::new(), |mut out, segment| {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Placeholder { name, fallback } => {
                        let value = arguments
                            .get(name)
                            .map(String::as_str)
                            .filter(|v| !v.is_empty())
                            .unwrap_or(fallback.as_str());
                        out.push_str(value);
                    }
                }
                out
            })
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Builder for assembling a template segment by segment.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    segments: Vec<Segment>,
}

impl TemplateBuilder {
    /// Append literal text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Literal(text.into()));
        self
    }

    /// Append a substitution point.
    pub fn arg(mut self, name: impl Into<String>, fallback: impl Into<String>) -> Self {
        self.segments.push(Segment::Placeholder {
            name: name.into(),
            fallback: fallback.into(),
        });
        self
    }

    pub fn build(self) -> Template {
        Template {
            segments: self.segments,
        }
    }
}

/// Speaker of a message fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// One rendered, role-tagged block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFragment {
    pub role: Role,
    pub text: String,
}

impl MessageFragment {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// The output of rendering a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    /// Short description of this rendering, for display and logging.
    pub summary: String,

    pub messages: Vec<MessageFragment>,
}

/// A prompt's summary template plus its ordered message templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub summary: Template,
    pub messages: Vec<Template>,
}

impl PromptTemplate {
    /// Parse a summary and message sources.
    pub fn parse<'a>(
        summary: &str,
        messages: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, PromptError> {
        Ok(Self {
            summary: Template::parse(summary)?,
            messages: messages
                .into_iter()
                .map(Template::parse)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Names of every argument substituted by the summary or any message.
    pub fn referenced_arguments(&self) -> BTreeSet<&str> {
        let mut names = self.summary.referenced_arguments();
        for message in &self.messages {
            names.extend(message.referenced_arguments());
        }
        names
    }

    pub fn render(&self, arguments: &PromptArguments) -> RenderedPrompt {
        RenderedPrompt {
            summary: self.summary.render(arguments),
            messages: self
                .messages
                .iter()
                .map(|m| MessageFragment::user(m.render(arguments)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> PromptArguments {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = Template::parse("Hello, {{name}}!").unwrap();
        assert_eq!(template.render(&args(&[("name", "World")])), "Hello, World!");
    }

    #[test]
    fn test_fallback_when_missing() {
        let template = Template::parse("Hello, {{name|stranger}}!").unwrap();
        assert_eq!(template.render(&args(&[])), "Hello, stranger!");
    }

    #[test]
    fn test_fallback_when_empty() {
        let template = Template::parse("Hello, {{name|stranger}}!").unwrap();
        assert_eq!(template.render(&args(&[("name", "")])), "Hello, stranger!");
    }

    #[test]
    fn test_value_used_verbatim() {
        let template = Template::parse("[{{name|x}}]").unwrap();
        assert_eq!(template.render(&args(&[("name", "  {{raw}}  ")])), "[  {{raw}}  ]");
    }

    #[test]
    fn test_missing_without_fallback_renders_empty() {
        let template = Template::parse("a{{name}}b").unwrap();
        assert_eq!(template.render(&args(&[])), "ab");
    }

    #[test]
    fn test_fallback_may_contain_spaces_and_punctuation() {
        let template = Template::parse("{{ project_type | web application, probably }}").unwrap();
        assert_eq!(
            template.segments(),
            &[Segment::Placeholder {
                name: "project_type".to_string(),
                fallback: " web application, probably ".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_segments_in_order() {
        let template = Template::parse("A {{x|1}} B {{y}}").unwrap();
        assert_eq!(template.segments().len(), 4);
        assert_eq!(template.segments()[0], Segment::Literal("A ".to_string()));
        assert_eq!(template.segments()[2], Segment::Literal(" B ".to_string()));
    }

    #[test]
    fn test_unclosed_placeholder_is_error() {
        let err = Template::parse("Hello {{name").unwrap_err();
        assert!(matches!(err, PromptError::TemplateError(_)));
    }

    #[test]
    fn test_invalid_name_is_error() {
        assert!(Template::parse("{{}}").is_err());
        assert!(Template::parse("{{|fallback}}").is_err());
        assert!(Template::parse("{{two words}}").is_err());
    }

    #[test]
    fn test_builder_matches_parse() {
        let built = Template::builder()
            .text("Hi ")
            .arg("client_name", "client")
            .text(".")
            .build();
        assert_eq!(built, Template::parse("Hi {{client_name|client}}.").unwrap());
    }

    #[test]
    fn test_referenced_arguments() {
        let template =
            PromptTemplate::parse("{{a}}", ["{{b|x}} and {{a}}", "{{c}}"]).unwrap();
        let names: Vec<_> = template.referenced_arguments().into_iter().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_prompt_render_tags_user_role() {
        let template = PromptTemplate::parse("For {{who|you}}", ["one", "two {{who|you}}"]).unwrap();
        let rendered = template.render(&args(&[("who", "Acme")]));
        assert_eq!(rendered.summary, "For Acme");
        assert_eq!(
            rendered.messages,
            vec![MessageFragment::user("one"), MessageFragment::user("two Acme")]
        );
        assert!(rendered.messages.iter().all(|m| m.role == Role::User));
    }
}
