//! Client onboarding plan prompt.

use crate::domains::prompts::catalog::ArgumentDescriptor;
use crate::domains::prompts::definitions::PromptDefinition;

/// Produces an onboarding plan for a new client.
pub struct OnboardClientPrompt;

impl PromptDefinition for OnboardClientPrompt {
    const NAME: &'static str = "onboard_client";
    const DESCRIPTION: &'static str =
        "Draft an onboarding plan for a new client using the onboarding checklist";
    const SUMMARY: &'static str = "Onboarding plan for {{client_name|client}}";

    fn messages() -> Vec<&'static str> {
        vec![
            "We have just signed {{client_name|client}} for a {{project_type|web application}} \
             project. Using the checklist at docs://onboarding/checklist and the agenda at \
             docs://onboarding/kickoff-agenda, draft an onboarding plan for \
             {{client_name|client}}.",
            "Structure the plan in three sections: before kickoff, the kickoff meeting, and \
             the first week. For each item give an owner role and a due date relative to the \
             kickoff day. Call out anything specific to a {{project_type|web application}} \
             project, such as environments, accounts or third-party access we will need.",
        ]
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("client_name", "Name of the client organisation"),
            ArgumentDescriptor::required(
                "project_type",
                "Kind of project, e.g. web application, mobile app, data platform",
            ),
        ]
    }
}
