//! Code review guide.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

/// How we review code (static Markdown).
pub struct CodeReviewGuideResource;

impl ResourceDefinition for CodeReviewGuideResource {
    const URI: &'static str = "docs://engineering/code-review";
    const NAME: &'static str = "Code Review Guide";
    const DESCRIPTION: &'static str = "Expectations for authors and reviewers of pull requests";
    const MIME_TYPE: &'static str = "text/markdown";
    const CATEGORY: &'static str = "practices";

    fn content() -> ResourceContent {
        ResourceContent::text(
            r#"# Code Review Guide

## Authors

- Keep pull requests under 400 changed lines where possible.
- The description says what changed and how it was tested.
- CI is green before you request review.
- Reply to every comment, even if only with "done".

## Reviewers

Review in this order and stop early if an earlier step fails:

1. **Intent**: does the change do what the description says?
2. **Correctness**: edge cases, error paths, concurrency.
3. **Tests**: do they fail without the change?
4. **Design**: names, boundaries, duplication.
5. **Style**: only what the formatter and linter cannot catch.

Prefix optional suggestions with `nit:`. Anything else blocks the merge
until it is resolved or explicitly deferred to a tracked issue.

## Turnaround

First review within one working day. If you cannot, say so and suggest
another reviewer.
"#,
        )
    }
}
