pub mod code_review;
pub mod git_workflow;
pub mod release_checklist;
pub mod rust_style;

pub use code_review::CodeReviewGuideResource;
pub use git_workflow::GitWorkflowResource;
pub use release_checklist::ReleaseChecklistResource;
pub use rust_style::RustStyleResource;

use super::entry;
use crate::domains::resources::registry::ResourceEntry;

/// Documents served by the engineering profile.
pub fn resources() -> Vec<ResourceEntry> {
    vec![
        entry::<CodeReviewGuideResource>(),
        entry::<GitWorkflowResource>(),
        entry::<RustStyleResource>(),
        entry::<ReleaseChecklistResource>(),
    ]
}
