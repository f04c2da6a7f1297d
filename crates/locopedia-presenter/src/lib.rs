//! Presentation state for browsing locations and opening them in a
//! companion application.

pub mod controller;
pub mod draft;
pub mod launcher;
pub mod view_state;

pub use controller::LocationsController;
pub use draft::CustomLocationDraft;
pub use launcher::Launcher;
pub use view_state::ViewState;
