//! Provider clients and the analysis prompt.

pub mod client;
pub mod client_impl;
pub mod factory;
pub mod prompts;
