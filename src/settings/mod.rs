// Player configuration

#[allow(clippy::module_inception)]
mod settings;

pub use settings::{
    ArtworkSettings, LabelSettings, PlayerSettings, ProgressSettings, ThemeSettings,
    SETTINGS_VERSION,
};
