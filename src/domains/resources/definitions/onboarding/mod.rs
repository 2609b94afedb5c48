pub mod checklist;
pub mod communication_policy;
pub mod kickoff_agenda;
pub mod welcome_pack;

pub use checklist::OnboardingChecklistResource;
pub use communication_policy::CommunicationPolicyResource;
pub use kickoff_agenda::KickoffAgendaResource;
pub use welcome_pack::WelcomePackResource;

use super::entry;
use crate::domains::resources::registry::ResourceEntry;

/// Documents served by the onboarding profile.
pub fn resources() -> Vec<ResourceEntry> {
    vec![
        entry::<OnboardingChecklistResource>(),
        entry::<KickoffAgendaResource>(),
        entry::<WelcomePackResource>(),
        entry::<CommunicationPolicyResource>(),
    ]
}
