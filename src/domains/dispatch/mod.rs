//! Dispatch domain module.
//!
//! Routes the four protocol requests to the resource and prompt registries
//! and wraps their output in MCP envelopes. Every transport goes through the
//! same [`Dispatcher`], so stdio, TCP and HTTP answer identically.
//!
//! ## Architecture
//!
//! - `request.rs` - Typed requests and parsing from JSON-RPC method/params
//! - `response.rs` - Response builder functions and the [`Response`] sum type
//! - `dispatcher.rs` - The stateless router
//! - `error.rs` - Dispatch errors and their JSON-RPC mapping

mod dispatcher;
mod error;
mod request;
pub mod response;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use request::{Request, RequestError};
pub use response::{
    Response, build_prompt_list, build_prompt_response, build_resource_list,
    build_resource_response,
};
