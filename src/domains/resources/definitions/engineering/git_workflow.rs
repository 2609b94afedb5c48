//! Git workflow reference.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

pub struct GitWorkflowResource;

impl ResourceDefinition for GitWorkflowResource {
    const URI: &'static str = "docs://engineering/git-workflow";
    const NAME: &'static str = "Git Workflow";
    const DESCRIPTION: &'static str = "Branch naming, commit messages and merge strategy";
    const MIME_TYPE: &'static str = "text/markdown";
    const CATEGORY: &'static str = "practices";

    fn content() -> ResourceContent {
        ResourceContent::text(
            r#"# Git Workflow

## Branches

- `main` is always releasable and protected.
- Work happens on short-lived branches named `<type>/<ticket>-<summary>`,
  for example `fix/PRJ-142-session-timeout`.
- Types: `feat`, `fix`, `chore`, `docs`, `refactor`.

## Commits

```text
Fix session timeout on idle tabs

The refresh timer was cleared when the tab lost focus, so sessions
expired after 15 minutes of inactivity even with the tab open.
```

- Subject in the imperative, at most 72 characters, no trailing period.
- Body explains what and why, wrapped at 72 columns.

## Merging

- Squash merge into `main`; the pull request title becomes the subject.
- Rebase on `main` instead of merging `main` into your branch.
- Delete the branch after merging.

## Releases

Tag `main` with `vMAJOR.MINOR.PATCH`. See the release checklist.
"#,
        )
    }
}
