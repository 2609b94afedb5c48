pub mod plan_release;
pub mod review_code;
pub mod write_adr;

pub use plan_release::PlanReleasePrompt;
pub use review_code::ReviewCodePrompt;
pub use write_adr::WriteAdrPrompt;

use super::entry;
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::registry::PromptEntry;

/// Prompts served by the engineering profile.
pub fn prompts() -> Result<Vec<PromptEntry>, PromptError> {
    Ok(vec![
        entry::<ReviewCodePrompt>()?,
        entry::<PlanReleasePrompt>()?,
        entry::<WriteAdrPrompt>()?,
    ])
}
