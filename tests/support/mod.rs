#![allow(dead_code)]

pub mod architecture;
pub mod reporter;
pub mod snapshots;
