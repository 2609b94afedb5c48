//! Architecture decision record prompt.

use crate::domains::prompts::catalog::ArgumentDescriptor;
use crate::domains::prompts::definitions::PromptDefinition;

pub struct WriteAdrPrompt;

impl PromptDefinition for WriteAdrPrompt {
    const NAME: &'static str = "write_adr";
    const DESCRIPTION: &'static str = "Draft an architecture decision record";
    const SUMMARY: &'static str = "ADR: {{title|Untitled decision}}";

    fn messages() -> Vec<&'static str> {
        vec![
            "Draft an architecture decision record titled \"{{title|Untitled decision}}\" with \
             the sections Status, Context, Options, Decision and Consequences. Status is \
             Proposed.\n\nContext: {{context|Not provided. Ask what problem forces this \
             decision now before writing the record.}}\n\nOptions considered: \
             {{options|list at least two realistic options, including doing nothing}}.",
        ]
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("title", "Short title of the decision"),
            ArgumentDescriptor::optional("context", "The problem and constraints"),
            ArgumentDescriptor::optional("options", "Options already on the table"),
        ]
    }
}
