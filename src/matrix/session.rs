//! Matrix session: login, room requests, sync and shutdown.

use std::time::Duration;

use async_trait::async_trait;
use matrix_sdk::config::SyncSettings;
use matrix_sdk::ruma::api::client::error::ErrorKind;
use matrix_sdk::ruma::api::client::state::get_state_events_for_key;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;
use matrix_sdk::ruma::events::StateEventType;
use matrix_sdk::ruma::{RoomId, UserId};
use matrix_sdk::{Client, Room};
use tracing::{debug, info};

use crate::common::{MatrixError, MatrixResult};
use crate::config::Config;

/// Long-poll timeout for each sync request.
pub const SYNC_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Device name shown in the account's session list.
const DEVICE_DISPLAY_NAME: &str = "bridge-announcer";

/// Room requests the announcer needs from the homeserver.
#[async_trait]
pub trait RoomActions: Send + Sync {
    /// Fetch the room's `m.room.name`, or `None` if it has no name.
    async fn room_name(&self, room_id: &RoomId) -> MatrixResult<Option<String>>;

    /// Send a plain `m.text` message.
    async fn send_text(&self, room_id: &RoomId, body: &str) -> MatrixResult<()>;

    /// Invite a user to the room.
    async fn invite(&self, room_id: &RoomId, user_id: &UserId) -> MatrixResult<()>;
}

/// Authenticated connection to the homeserver.
#[derive(Debug, Clone)]
pub struct MatrixSession {
    client: Client,
}

impl MatrixSession {
    /// Build a client for the configured homeserver.
    pub async fn connect(config: &Config) -> MatrixResult<Self> {
        let client = Client::builder()
            .homeserver_url(&config.homeserver)
            .build()
            .await
            .map_err(|source| MatrixError::ClientBuild {
                homeserver: config.homeserver.clone(),
                source,
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one handed to an event handler.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Log in with the configured password.
    pub async fn login(&self, config: &Config) -> MatrixResult<()> {
        let response = self
            .client
            .matrix_auth()
            .login_username(&config.user, &config.password)
            .initial_device_display_name(DEVICE_DISPLAY_NAME)
            .await
            .map_err(|source| MatrixError::LoginFailed {
                user: config.user.clone(),
                source,
            })?;

        info!("Logged in to Matrix as {} (device {})", response.user_id, response.device_id);
        Ok(())
    }

    /// Run one sync to absorb rooms that already exist.
    ///
    /// Must run before any handler is registered. Returns the token that
    /// live syncing continues from.
    pub async fn catch_up(&self) -> MatrixResult<String> {
        let response = self.client.sync_once(SyncSettings::default()).await?;
        debug!("Initial sync done, continuing from {}", response.next_batch);
        Ok(response.next_batch)
    }

    /// Sync from `since` until the connection fails.
    ///
    /// Event handlers run one at a time as each sync response is processed.
    pub async fn sync_forever(&self, since: String) -> MatrixResult<()> {
        let settings = SyncSettings::default().timeout(SYNC_TIMEOUT).token(since);
        self.client.sync(settings).await?;
        Ok(())
    }

    /// Release the client.
    pub fn close(self) {
        debug!("Closing Matrix session for {}", self.client.homeserver());
        drop(self.client);
        info!("Matrix session closed");
    }

    fn room(&self, room_id: &RoomId) -> MatrixResult<Room> {
        self.client
            .get_room(room_id)
            .ok_or_else(|| MatrixError::UnknownRoom {
                room_id: room_id.to_owned(),
            })
    }
}

#[async_trait]
impl RoomActions for MatrixSession {
    async fn room_name(&self, room_id: &RoomId) -> MatrixResult<Option<String>> {
        let request = get_state_events_for_key::v3::Request::new(
            room_id.to_owned(),
            StateEventType::RoomName,
            String::new(),
        );

        let response = match self.client.send(request).await {
            Ok(response) => response,
            Err(e) if matches!(e.client_api_error_kind(), Some(ErrorKind::NotFound)) => {
                debug!("Room {} has no name state", room_id);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let content: serde_json::Value = response.content.deserialize_as()?;
        Ok(content
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned))
    }

    async fn send_text(&self, room_id: &RoomId, body: &str) -> MatrixResult<()> {
        let room = self.room(room_id)?;
        room.send(RoomMessageEventContent::text_plain(body)).await?;
        Ok(())
    }

    async fn invite(&self, room_id: &RoomId, user_id: &UserId) -> MatrixResult<()> {
        let room = self.room(room_id)?;
        room.invite_user_by_id(user_id).await?;
        Ok(())
    }
}
