// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod csv;
pub mod data;
pub mod gui;
pub mod view;
