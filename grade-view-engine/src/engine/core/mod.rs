//! App construction, state machine and window configuration.

pub mod app_setup;
pub mod app_state;
pub mod window_config;
