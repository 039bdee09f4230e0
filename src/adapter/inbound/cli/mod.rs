//! CLI module graph.

pub mod clean;
pub mod command;
pub mod diagnostic;
pub mod dispatch;
pub mod ferengi;
pub mod market;
pub mod output;
pub mod paths;
pub mod snapshots;
pub mod trade;
