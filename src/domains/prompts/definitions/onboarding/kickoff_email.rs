//! Kickoff invitation email prompt.

use crate::domains::prompts::catalog::ArgumentDescriptor;
use crate::domains::prompts::definitions::PromptDefinition;

pub struct KickoffEmailPrompt;

impl PromptDefinition for KickoffEmailPrompt {
    const NAME: &'static str = "draft_kickoff_email";
    const DESCRIPTION: &'static str = "Write the email inviting a client to the kickoff meeting";
    const SUMMARY: &'static str = "Kickoff email for {{client_name|the client}}";

    fn messages() -> Vec<&'static str> {
        vec![
            "Write a short, friendly email to {{client_name|the client}} inviting them to the \
             kickoff meeting for {{project_name|their new project}} on \
             {{meeting_date|a date that suits them}}. Attach the agenda from \
             docs://onboarding/kickoff-agenda as a bullet list, ask them to bring everyone who \
             signs off deliverables, and list the system access we need before the call. Keep \
             it under 200 words and sign off as the project lead.",
        ]
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("client_name", "Name of the client contact or organisation"),
            ArgumentDescriptor::optional("project_name", "Project name used in the subject line"),
            ArgumentDescriptor::optional("meeting_date", "Proposed date and time of the kickoff"),
        ]
    }
}
