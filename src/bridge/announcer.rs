//! Room-creation handling.
//!
//! For every new room the announcer reads the room name, decides which
//! bridge the room belongs to, and posts the relay commands plus the
//! on-duty bot invite. Failures are logged and never propagated.

use matrix_sdk::ruma::RoomId;
use tracing::{error, info, warn};

use crate::bridge::actions::{plan_actions, OutboundAction};
use crate::bridge::classify::BridgeClassification;
use crate::common::MatrixResult;
use crate::matrix::RoomActions;

/// How handling a room ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceOutcome {
    /// All actions for this bridge type were sent.
    Announced(BridgeClassification),
    /// The room name matched no bridge; nothing was sent.
    Skipped,
    /// A request failed; later actions were not attempted.
    Failed,
}

/// Handler for newly created rooms.
pub struct BridgeAnnouncer<S> {
    session: S,
}

impl<S: RoomActions> BridgeAnnouncer<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Handle a room-creation notification.
    pub async fn handle_room_created(&self, room_id: &RoomId) -> AnnounceOutcome {
        info!("New room detected with ID: {}", room_id);

        match self.announce(room_id).await {
            Ok(BridgeClassification::Unknown) => {
                warn!("Could not determine bridge type for room {}", room_id);
                AnnounceOutcome::Skipped
            }
            Ok(classification) => {
                info!("Room {} set up as {} bridge", room_id, classification);
                AnnounceOutcome::Announced(classification)
            }
            Err(e) => {
                error!("Error handling room {}: {}", room_id, e);
                AnnounceOutcome::Failed
            }
        }
    }

    async fn announce(&self, room_id: &RoomId) -> MatrixResult<BridgeClassification> {
        // No name state reads as an empty name
        let name = self.session.room_name(room_id).await?.unwrap_or_default();

        let classification = BridgeClassification::from_room_name(&name);
        if classification != BridgeClassification::Unknown {
            info!("Room {} detected as {} bridge", room_id, classification);
        }

        for action in plan_actions(classification) {
            match action {
                OutboundAction::SendText { body } => {
                    info!("Posting '{}' to room {}", body, room_id);
                    self.session.send_text(room_id, body).await?;
                }
                OutboundAction::Invite { user_id } => {
                    info!("Inviting {} to room {}", user_id, room_id);
                    self.session.invite(room_id, user_id).await?;
                }
            }
        }

        Ok(classification)
    }
}
