//! Mock homeserver helpers for Matrix tests.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::Config;
use crate::matrix::session::MatrixSession;

pub const BOT_USER: &str = "@announcer:example.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Send,
    Invite,
}

/// A send or invite request the client made, in arrival order.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub kind: ActionKind,
    pub path: String,
    pub body: Value,
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "errcode": "M_NOT_FOUND",
        "error": "Event not found."
    }))
}

/// Homeserver answering versions, login, sends and invites.
pub async fn mock_homeserver() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_matrix/client/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "versions": ["v1.1", "v1.2", "v1.3", "v1.4", "v1.5", "v1.6"]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/_matrix/client/v3/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": BOT_USER,
            "access_token": "announcer-token",
            "device_id": "ANNOUNCER"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"/rooms/.+/send/m\.room\.message/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "event_id": "$sent" })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(r"/rooms/.+/invite$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"/rooms/.+/state/m\.room\.encryption"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    server
}

/// Answer `m.room.name` state requests with this name, or 404 for `None`.
pub async fn mock_room_name(server: &MockServer, name: Option<&str>) {
    let response = match name {
        Some(name) => ResponseTemplate::new(200).set_body_json(json!({ "name": name })),
        None => not_found(),
    };
    mock_room_name_response(server, response).await;
}

pub async fn mock_room_name_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path_regex(r"/rooms/.+/state/m\.room\.name"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Answer `/sync` with `body`, for the first sync or the one from `since`.
pub async fn mock_sync(server: &MockServer, since: Option<&str>, body: Value) {
    let mock = Mock::given(method("GET")).and(path("/_matrix/client/v3/sync"));
    let mock = match since {
        Some(token) => mock.and(query_param("since", token)),
        None => mock.and(query_param_is_missing("since")),
    };

    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Sync body with joined rooms given as (room id, state events, timeline events).
pub fn sync_response(next_batch: &str, rooms: &[(&str, Vec<Value>, Vec<Value>)]) -> Value {
    let join: serde_json::Map<String, Value> = rooms
        .iter()
        .map(|(room_id, state, timeline)| {
            (
                room_id.to_string(),
                json!({
                    "state": { "events": state },
                    "timeline": { "events": timeline, "limited": false, "prev_batch": "p0" }
                }),
            )
        })
        .collect();

    json!({
        "next_batch": next_batch,
        "rooms": { "join": join }
    })
}

pub fn create_event(creator: &str) -> Value {
    json!({
        "type": "m.room.create",
        "state_key": "",
        "event_id": "$create",
        "sender": creator,
        "origin_server_ts": 1_700_000_000_000u64,
        "content": { "creator": creator, "room_version": "10" }
    })
}

pub async fn logged_in_session(server: &MockServer) -> MatrixSession {
    let config = Config {
        homeserver: server.uri(),
        user: "announcer".to_string(),
        password: "secret".to_string(),
    };

    let session = MatrixSession::connect(&config).await.unwrap();
    session.login(&config).await.unwrap();
    session
}

/// Sends and invites received so far.
pub async fn outbound_actions(server: &MockServer) -> Vec<OutboundRequest> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter_map(|request| {
            let path = request.url.path().to_string();
            let kind = match request.method.as_str() {
                "PUT" if path.contains("/send/") => ActionKind::Send,
                "POST" if path.ends_with("/invite") => ActionKind::Invite,
                _ => return None,
            };
            let body = request.body_json::<Value>().unwrap_or(Value::Null);
            Some(OutboundRequest { kind, path, body })
        })
        .collect()
}
