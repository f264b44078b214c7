//! Bridge type detection from room names.
//!
//! Bridges name their portal rooms with a network marker, e.g.
//! "WA Bridge 123" or "Signal-support". Matching is case-sensitive
//! substring containment.

use std::fmt;

/// Markers identifying a WhatsApp bridge room.
pub const WHATSAPP_MARKERS: [&str; 2] = ["WA", "WhatsApp"];

/// Markers identifying a Signal bridge room.
pub const SIGNAL_MARKERS: [&str; 2] = ["SIG", "Signal"];

/// What kind of bridge a room belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeClassification {
    WhatsApp,
    Signal,
    Unknown,
}

impl BridgeClassification {
    /// Classify a room by its display name.
    ///
    /// WhatsApp is tested first, so a name carrying both markers is WhatsApp.
    pub fn from_room_name(name: &str) -> Self {
        let contains_any = |markers: &[&str]| markers.iter().any(|m| name.contains(m));

        if contains_any(&WHATSAPP_MARKERS) {
            Self::WhatsApp
        } else if contains_any(&SIGNAL_MARKERS) {
            Self::Signal
        } else {
            Self::Unknown
        }
    }

    /// Relay command for the bridge bot, if the bridge type is known.
    pub fn relay_command(self) -> Option<&'static str> {
        match self {
            Self::WhatsApp => Some("!wa_od set-relay"),
            Self::Signal => Some("!signal_od set-relay"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for BridgeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WhatsApp => "WhatsApp",
            Self::Signal => "Signal",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
