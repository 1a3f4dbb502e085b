pub mod command_handler;
mod cycle_handler;
mod toggle_handler;

use super::command::Command;
use super::config::Config;
use super::models::{Cycler, ViewFilter};
use super::view_servers::ViewServer;
