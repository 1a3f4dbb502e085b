//! Objects (views, snapshots, the cycler) used to drive view cycling.
mod cycler;
mod view;
mod view_state;

pub use cycler::Cycler;
pub use view::View;
pub use view::ViewFilter;
pub use view_state::ViewState;

/// Identifier of a view, unique within one window-manager process.
pub type ViewId = usize;
