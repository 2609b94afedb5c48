//! Domains module containing business logic organized by bounded contexts.
//!
//! - **resources**: the document manifest, its content store and the registry
//! - **prompts**: the prompt catalog, templates and rendering
//! - **dispatch**: request routing and response envelopes shared by every transport

pub mod dispatch;
pub mod prompts;
pub mod resources;
