//! The fixed action sequence sent into a classified bridge room.

use matrix_sdk::ruma::{user_id, UserId};

use crate::bridge::classify::BridgeClassification;

/// Command asking the on-duty bot to attach the room to a Mattermost channel.
pub const BRIDGE_CHANNEL_COMMAND: &str = "!od_bridge mmchannel";

/// The on-duty bot invited into every bridge room.
pub fn onduty_bot() -> &'static UserId {
    user_id!("@ondutybot:mtrx.mil.intl")
}

/// A single outbound request against a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundAction {
    /// Send an `m.text` message with this body.
    SendText { body: &'static str },
    /// Invite this user.
    Invite { user_id: &'static UserId },
}

/// Build the ordered actions for a room.
///
/// Unknown rooms get nothing.
pub fn plan_actions(classification: BridgeClassification) -> Vec<OutboundAction> {
    let Some(relay) = classification.relay_command() else {
        return Vec::new();
    };

    vec![
        OutboundAction::SendText { body: relay },
        OutboundAction::Invite { user_id: onduty_bot() },
        OutboundAction::SendText { body: BRIDGE_CHANNEL_COMMAND },
    ]
}
