pub mod kickoff_email;
pub mod onboard_client;
pub mod status_update;

pub use kickoff_email::KickoffEmailPrompt;
pub use onboard_client::OnboardClientPrompt;
pub use status_update::StatusUpdatePrompt;

use super::entry;
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::registry::PromptEntry;

/// Prompts served by the onboarding profile.
pub fn prompts() -> Result<Vec<PromptEntry>, PromptError> {
    Ok(vec![
        entry::<OnboardClientPrompt>()?,
        entry::<KickoffEmailPrompt>()?,
        entry::<StatusUpdatePrompt>()?,
    ])
}
