//! Matrix event dispatch.
//!
//! Hooks the bridge announcer up to `m.room.create` events that arrive in a
//! room timeline. The state section of a sync also carries `m.room.create`
//! for every joined room, so state-section events are ignored.

use matrix_sdk::event_handler::EventHandlerHandle;
use matrix_sdk::ruma::events::AnySyncTimelineEvent;
use matrix_sdk::ruma::serde::Raw;
use matrix_sdk::{Client, Room};
use tracing::debug;

use crate::bridge::BridgeAnnouncer;
use crate::matrix::session::MatrixSession;

const ROOM_CREATE_EVENT: &str = "m.room.create";

/// Register the room-creation handler on the session's client.
pub fn register_room_created_handler(session: &MatrixSession) -> EventHandlerHandle {
    session.client().add_event_handler(on_timeline_event)
}

async fn on_timeline_event(event: Raw<AnySyncTimelineEvent>, room: Room, client: Client) {
    if !is_room_create(&event) {
        return;
    }

    let sender = event.get_field::<String>("sender").ok().flatten().unwrap_or_default();
    debug!("m.room.create from {} in {}", sender, room.room_id());

    // The handler gets its own view of the session per event.
    let announcer = BridgeAnnouncer::new(MatrixSession::from_client(client));
    announcer.handle_room_created(room.room_id()).await;
}

fn is_room_create(event: &Raw<AnySyncTimelineEvent>) -> bool {
    matches!(event.get_field::<String>("type"), Ok(Some(kind)) if kind == ROOM_CREATE_EVENT)
}
