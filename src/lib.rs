//! Courier - minimal HTTP/1.1 server
//!
//! Root health-check, user-agent and path echo, and whole-file reads and
//! writes under a configured directory. One request per connection.

pub mod cli;
pub mod config;
pub mod files;
pub mod http;
pub mod routing;
pub mod server;
