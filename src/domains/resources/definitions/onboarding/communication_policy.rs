//! Client communication policy.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

/// Response times and channel etiquette (static Markdown).
pub struct CommunicationPolicyResource;

impl ResourceDefinition for CommunicationPolicyResource {
    const URI: &'static str = "docs://policies/communication";
    const NAME: &'static str = "Communication Policy";
    const DESCRIPTION: &'static str = "Channels, response times and escalation for client work";
    const MIME_TYPE: &'static str = "text/markdown";
    const CATEGORY: &'static str = "policies";

    fn content() -> ResourceContent {
        ResourceContent::text(
            r#"# Communication Policy

## Channels

| Need | Channel | Expected response |
|------|---------|-------------------|
| Quick question | Shared channel | Same working day |
| New work or change request | Project tracker | Two working days |
| Status | Weekly written update | Fixed day each week |
| Incident on a live system | Phone, then shared channel | Within one hour |

## Rules

- Decisions made in calls are written down in the tracker the same day.
- Never share credentials in chat; use the shared vault.
- Client-facing messages about scope, budget or dates go through the
  project lead.

## Escalation

1. Project lead
2. Account lead
3. Delivery director

Escalate when a risk threatens a milestone date, when the client has not
answered a blocking question for three working days, or when the team
disagrees with the client on scope.
"#,
        )
    }
}
