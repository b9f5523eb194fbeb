// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,refresh,scrape,save_settings}.

mod copy;      // src/gui/actions/copy.rs
mod jobs;      // src/gui/actions/jobs.rs
mod settings;  // src/gui/actions/settings.rs

pub use copy::copy;
pub use jobs::{refresh, scrape};
pub use settings::save_settings;
