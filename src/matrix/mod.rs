//! Matrix client integration.

pub mod handler;
pub mod session;

#[cfg(test)]
mod test_support;

pub use handler::register_room_created_handler;
pub use session::{MatrixSession, RoomActions};
