// Render model
// Everything the page needs to draw the player, serialized for the webview.
use serde::Serialize;

use super::controls::TransportButton;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerViewModel {
    pub header: String,
    pub panel: EpisodePanel,
    pub scrub: ScrubBar,
    /// Present only while an episode is bound
    pub media: Option<MediaElement>,
    pub buttons: Vec<ButtonModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EpisodePanel {
    #[serde(rename_all = "camelCase")]
    Episode {
        thumbnail: String,
        title: String,
        members: String,
        /// `members` split into individual names
        member_names: Vec<String>,
        artwork_width: u32,
        artwork_height: u32,
    },
    Empty { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrubBar {
    pub elapsed: String,
    pub total: String,
    /// `None` renders the flat empty slider
    pub slider: Option<SliderModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderModel {
    pub max: u64,
    pub value: u64,
    pub track_color: String,
    pub rail_color: String,
    pub handle_border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaElement {
    pub src: String,
    pub looping: bool,
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonModel {
    pub button: TransportButton,
    pub enabled: bool,
    pub active: bool,
    pub icon: String,
    pub label: String,
}

impl PlayerViewModel {
    pub fn button(&self, button: TransportButton) -> Option<&ButtonModel> {
        self.buttons.iter().find(|model| model.button == button)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.panel, EpisodePanel::Empty { .. })
    }
}
