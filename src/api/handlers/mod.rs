//! HTTP request handlers.

pub mod gateway;

pub use gateway::gateway_handler;
