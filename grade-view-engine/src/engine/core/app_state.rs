use bevy::prelude::*;

/// Top-level session state. Loading covers config and dataset
/// acquisition; everything interactive runs in Running.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
