//! Inbound adapters: the command-line front end.

pub mod cli;
