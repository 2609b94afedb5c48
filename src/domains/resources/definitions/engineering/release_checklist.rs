//! Release checklist.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

pub struct ReleaseChecklistResource;

impl ResourceDefinition for ReleaseChecklistResource {
    const URI: &'static str = "docs://engineering/release-checklist";
    const NAME: &'static str = "Release Checklist";
    const DESCRIPTION: &'static str = "Steps to cut, verify and announce a release";
    const MIME_TYPE: &'static str = "text/plain";
    const CATEGORY: &'static str = "operations";

    fn content() -> ResourceContent {
        ResourceContent::text(
            "# Release Checklist

## Prepare
[ ] All issues in the milestone closed or moved
[ ] CHANGELOG updated with user-facing changes
[ ] Version bumped in the manifest and lockfile
[ ] Database migrations reviewed and reversible

## Verify
[ ] CI green on the release commit
[ ] Staging deployed from the release commit
[ ] Smoke tests pass on staging
[ ] Rollback procedure rehearsed for risky migrations

## Ship
[ ] Tag pushed (vMAJOR.MINOR.PATCH)
[ ] Production deployed
[ ] Dashboards watched for 30 minutes
[ ] Release notes posted to the shared channel
",
        )
    }
}
