//! Request routing
//!
//! Maps a parsed request to one of the fixed routes and produces its
//! response. Pattern routes are compiled once when the router is built.

pub mod router;

pub use router::{Route, Router};
