//! Spyglass host console.
//!
//! One UDP socket, two tasks, one dispatcher: the listener task receives
//! framed log datagrams from the game client, the command task forwards
//! operator lines back over the same socket, and the dispatcher owns every
//! side effect (stdout, session log, peer notices). The peer address the
//! command channel targets lives in a single synchronized slot written by
//! the listener.

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod listener;
pub mod peer;
pub mod render;
pub mod session_log;

pub use crate::config::ConsoleConfig;
pub use crate::console::{Dispatcher, Event, run};
pub use crate::error::ConsoleError;
pub use crate::peer::PeerSlot;
pub use crate::session_log::SessionLog;
