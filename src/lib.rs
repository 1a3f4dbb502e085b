//! Recency-ordered view cycling for window managers.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of viewcycle is to do one thing and to do that one thing
// well: cycle views by recency.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate
)]
mod command;
pub mod config;
pub mod errors;
mod handlers;
mod key_event;
pub mod models;
pub mod reconcile;
pub mod utils;
pub mod view_servers;

pub use command::Command;
pub use config::Config;
pub use config::CycleBinding;
pub use key_event::KeyEvent;
pub use models::Cycler;
pub use models::View;
pub use models::ViewFilter;
pub use models::ViewState;
pub use reconcile::reconcile;
pub use view_servers::KeyboardGrab;
pub use view_servers::ViewServer;
