//! Configuration for tablegen

pub mod defaults;
mod settings;

pub use settings::*;
