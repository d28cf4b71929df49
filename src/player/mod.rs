// Player view module
// Transport controls, the render model, and the view that ties store and engine together

pub mod controls;
pub mod model;
pub mod view;

pub use controls::TransportButton;
pub use model::{ButtonModel, EpisodePanel, MediaElement, PlayerViewModel, ScrubBar, SliderModel};
pub use view::PlayerView;
