//! Bridge room detection and announcement.
//!
//! Classifies new rooms by name and sends the relay commands that hand
//! a bridge room over to the on-duty bot.

pub mod actions;
pub mod announcer;
pub mod classify;

pub use announcer::BridgeAnnouncer;
