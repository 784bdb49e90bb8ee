//! Shared wire types for Spyglass.
//!
//! This crate hosts the protocol primitives shared between the console and
//! game clients:
//! - message: log message kinds/origins and the decoded message struct
//! - frame: the framed datagram codec (header + UTF-8 payload)
//!
//! Keep this crate lean: no async, no I/O. The command channel needs no
//! module of its own — operator commands travel as raw UTF-8 datagram
//! bodies with no framing, in every protocol revision.

pub mod frame;
pub mod message;

pub use crate::frame::{HEADER_LEN, DecodeError, Packet, decode, encode_announcement, encode_log};
pub use crate::message::{LogMessage, MessageKind, MessageOrigin};
