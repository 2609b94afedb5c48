//! Weekly project status update prompt.

use crate::domains::prompts::catalog::ArgumentDescriptor;
use crate::domains::prompts::definitions::PromptDefinition;

pub struct StatusUpdatePrompt;

impl PromptDefinition for StatusUpdatePrompt {
    const NAME: &'static str = "project_status_update";
    const DESCRIPTION: &'static str = "Turn raw notes into the weekly client status update";
    const SUMMARY: &'static str = "Status update for {{project_name|the project}}";

    fn messages() -> Vec<&'static str> {
        vec![
            "Write the status update for {{project_name|the project}} covering \
             {{period|this week}}. Follow docs://policies/communication: lead with anything \
             that needs a client decision, then progress against the current milestone, then \
             risks with their owners.",
            "Notes from the team:\n\n{{highlights|No notes were provided. Ask the team for \
             progress, blockers and risks before writing the update.}}",
        ]
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("project_name", "Project the update is for"),
            ArgumentDescriptor::optional("period", "Reporting period, e.g. week 12"),
            ArgumentDescriptor::optional("highlights", "Raw notes, bullet points or ticket list"),
        ]
    }
}
