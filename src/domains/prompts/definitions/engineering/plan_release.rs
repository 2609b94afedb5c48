//! Release planning prompt.

use crate::domains::prompts::catalog::ArgumentDescriptor;
use crate::domains::prompts::definitions::PromptDefinition;

pub struct PlanReleasePrompt;

impl PromptDefinition for PlanReleasePrompt {
    const NAME: &'static str = "plan_release";
    const DESCRIPTION: &'static str = "Plan a release against the release checklist";
    const SUMMARY: &'static str =
        "Release plan for {{project|the service}} {{version|(next version)}}";

    fn messages() -> Vec<&'static str> {
        vec![
            "We are preparing release {{version|(next version)}} of {{project|the service}}. \
             Walk through docs://engineering/release-checklist and turn it into a concrete plan: \
             one line per item with an owner role and whether it can be automated.",
            "Known changes in this release:\n\n{{changes|None listed. Start by collecting the \
             merged pull requests since the previous tag.}}\n\nFlag any change that needs a \
             database migration or a rollback rehearsal.",
        ]
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("version", "Version being released, e.g. 2.4.0"),
            ArgumentDescriptor::optional("project", "Service or repository name"),
            ArgumentDescriptor::optional("changes", "Summary of merged changes"),
        ]
    }
}
