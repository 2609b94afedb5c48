//! Code review prompt definition.

use crate::domains::prompts::catalog::ArgumentDescriptor;
use crate::domains::prompts::definitions::PromptDefinition;

/// A code review prompt following the house review guide.
pub struct ReviewCodePrompt;

impl PromptDefinition for ReviewCodePrompt {
    const NAME: &'static str = "review_code";
    const DESCRIPTION: &'static str = "Review a change the way docs://engineering/code-review asks";
    const SUMMARY: &'static str = "Code review of {{language|submitted}} code";

    fn messages() -> Vec<&'static str> {
        vec![
            "Please review the following {{language|}} code:\n\n```\n{{code|(no code was \
             provided; ask the author to paste the diff)}}\n```",
            "Follow the review order from docs://engineering/code-review: intent, correctness, \
             tests, design, then style. Pay particular attention to \
             {{focus|error handling and missing tests}}. Mark optional suggestions with \
             `nit:` and group blocking issues first.",
        ]
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("code", "The code or diff to review"),
            ArgumentDescriptor::optional("language", "The programming language of the code"),
            ArgumentDescriptor::optional(
                "focus",
                "Specific areas to focus on (e.g., security, performance)",
            ),
        ]
    }
}
