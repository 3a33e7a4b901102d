//! promosuite - AI image enhancement and layout optimization backend
//!
//! Model-backed operations are simulated; layout optimization applies a
//! fixed set of heuristics.

pub mod cli;
pub mod http_server;
pub mod imaging;
pub mod layout;
pub mod observability;
