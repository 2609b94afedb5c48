//! Kickoff meeting agenda.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

/// Standard agenda for the client kickoff meeting (static Markdown).
pub struct KickoffAgendaResource;

impl ResourceDefinition for KickoffAgendaResource {
    const URI: &'static str = "docs://onboarding/kickoff-agenda";
    const NAME: &'static str = "Kickoff Agenda";
    const DESCRIPTION: &'static str = "Timed agenda for the 90 minute client kickoff meeting";
    const MIME_TYPE: &'static str = "text/markdown";
    const CATEGORY: &'static str = "onboarding";

    fn content() -> ResourceContent {
        ResourceContent::text(
            r#"# Kickoff Agenda

| Time | Topic | Owner |
|------|-------|-------|
| 0:00 | Introductions and roles | Account lead |
| 0:10 | Business goals and what success looks like | Client sponsor |
| 0:30 | Scope walkthrough and known constraints | Project lead |
| 0:50 | Technical landscape: systems, access, environments | Tech lead |
| 1:05 | Ways of working: cadence, channels, approvals | Project lead |
| 1:15 | Risks and open questions | Everyone |
| 1:25 | Next steps and owners | Account lead |

## Preparation

- Read the signed proposal and the project brief.
- Bring a list of the systems we need access to.
- Client: bring anyone who will sign off deliverables.

## Outputs

1. Confirmed contacts and approval path.
2. First milestone with acceptance criteria.
3. Risk log with an owner per risk.
"#,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_agenda_metadata() {
        assert_eq!(KickoffAgendaResource::URI, "docs://onboarding/kickoff-agenda");
        assert_eq!(KickoffAgendaResource::MIME_TYPE, "text/markdown");
    }
}
