// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod view;

pub use app::run;
