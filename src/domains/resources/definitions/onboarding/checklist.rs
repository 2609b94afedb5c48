//! Client onboarding checklist.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

/// Step-by-step checklist for bringing a new client on board (plain text).
pub struct OnboardingChecklistResource;

impl ResourceDefinition for OnboardingChecklistResource {
    const URI: &'static str = "docs://onboarding/checklist";
    const NAME: &'static str = "Checklist";
    const DESCRIPTION: &'static str =
        "Everything that has to happen between a signed contract and the first sprint";
    const MIME_TYPE: &'static str = "text/plain";
    const CATEGORY: &'static str = "onboarding";

    fn content() -> ResourceContent {
        ResourceContent::text(CHECKLIST)
    }
}

const CHECKLIST: &str = "# Checklist
Client onboarding, in order. Tick every box before the kickoff call.

## Before kickoff
[ ] Countersigned contract stored in the client folder
[ ] Billing contact and purchase order number recorded
[ ] Primary and secondary client contacts confirmed
[ ] Shared channel created and client contacts invited
[ ] Project tracker board created from the standard template
[ ] Repository created, default branch protected, CI enabled
[ ] Access requests sent for client systems (staging, analytics, DNS)

## Kickoff
[ ] Agenda sent at least two working days ahead
[ ] Goals, success metrics and constraints captured in the project brief
[ ] Decision makers and approval path written down
[ ] Communication cadence agreed (see the communication policy)
[ ] First milestone and its acceptance criteria agreed

## First week
[ ] Welcome pack sent
[ ] Environments reachable by every team member
[ ] Risks logged with an owner each
[ ] First status update sent on the agreed day
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_metadata() {
        assert_eq!(OnboardingChecklistResource::URI, "docs://onboarding/checklist");
        assert_eq!(OnboardingChecklistResource::MIME_TYPE, "text/plain");
    }

    #[test]
    fn test_checklist_content() {
        let content = OnboardingChecklistResource::content();
        let text = content.resolve();
        assert!(text.starts_with("# Checklist\n"));
        assert!(text.contains("[ ]"));
    }
}
