//! Client welcome pack.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

pub struct WelcomePackResource;

impl ResourceDefinition for WelcomePackResource {
    const URI: &'static str = "docs://onboarding/welcome-pack";
    const NAME: &'static str = "Welcome Pack";
    const DESCRIPTION: &'static str = "What new clients receive in their first week";
    const MIME_TYPE: &'static str = "text/markdown";
    const CATEGORY: &'static str = "onboarding";

    fn content() -> ResourceContent {
        ResourceContent::text(
            r#"# Welcome Pack

Welcome aboard. This pack explains how we will work together.

## Your team

Every project has an account lead (commercial questions), a project lead
(schedule, scope, priorities) and a tech lead (architecture and delivery).
Their names and contact details are in the project brief.

## Where things live

- **Shared channel**: day-to-day questions and quick decisions.
- **Project tracker**: every piece of work, its status and its owner.
- **Status updates**: a written summary every week, on the agreed day.
- **Demo**: a working demo at the end of every iteration.

## How to ask for changes

Raise it in the shared channel or the tracker. The project lead will size
it, explain the impact on schedule and budget, and ask for your approval
before any work starts.

## What we need from you

- Timely feedback on demos, ideally within two working days.
- Access to the systems listed in the kickoff notes.
- One person who can make the final call on priorities.
"#,
        )
    }
}
