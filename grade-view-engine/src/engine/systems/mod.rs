//! Input and HUD systems running while a dataset is shown.

pub mod range_input;
pub mod ui;
