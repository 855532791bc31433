// src/utils/mod.rs

pub mod config;
pub mod constants;
pub mod env;
