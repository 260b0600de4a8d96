// src/lib.rs
pub mod config;
pub mod console;
pub mod domain;
pub mod money;

pub use domain::*;
pub use money::*;
