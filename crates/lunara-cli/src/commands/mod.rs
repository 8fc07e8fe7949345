pub mod config;
pub mod guidance;
pub mod log;
pub mod phase;
pub mod settings;
pub mod stats;
