//! Rust style guide with code samples.

use crate::domains::resources::definitions::ResourceDefinition;
use crate::domains::resources::store::ResourceContent;

/// House style for Rust services (static Markdown with code samples).
pub struct RustStyleResource;

impl ResourceDefinition for RustStyleResource {
    const URI: &'static str = "docs://engineering/rust-style";
    const NAME: &'static str = "Rust Style Guide";
    const DESCRIPTION: &'static str = "Conventions and code samples for Rust services";
    const MIME_TYPE: &'static str = "text/markdown";
    const CATEGORY: &'static str = "languages";

    fn content() -> ResourceContent {
        ResourceContent::text(
            r#"# Rust Style Guide

`cargo fmt` and `cargo clippy -- -D warnings` are the baseline. This
guide covers what the tools do not.

## Errors

Libraries define their own error enums with `thiserror`; binaries use
`anyhow` at the edge.

```rust
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
```

No `unwrap()` outside tests. Use `expect("reason")` only for invariants
that cannot fail at runtime, and write the invariant in the message.

## Logging

Use `tracing`, never `println!`. Log at `info` for lifecycle events and
`debug` for per-request detail.

```rust
#[tracing::instrument(skip(self))]
pub fn load(&self, id: &str) -> Result<Record, StoreError> {
    tracing::debug!("loading record");
    self.records.get(id).cloned().ok_or_else(|| StoreError::NotFound(id.into()))
}
```

## Types

- Prefer enums over boolean flags in public APIs.
- Newtypes for identifiers: `struct UserId(String)`.
- Builders for structs with more than three optional fields.

## Tests

Unit tests live in a `#[cfg(test)] mod tests` at the bottom of the file.
Integration tests in `tests/` use only the public API.
"#,
        )
    }
}
