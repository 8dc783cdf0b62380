//! In-process stand-in for a TV, used by the client tests.

use super::{AliasTable, DeviceAddress, Timing, TvClient};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::time::Instant;

type Shared = Arc<Mutex<MockState>>;

struct MockState {
    key_statuses: HashMap<String, VecDeque<u16>>,
    default_key_status: u16,
    system: (u16, String),
    key_list: String,
    pressed: Vec<String>,
    press_times: Vec<Instant>,
    last_content_type: Option<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            key_statuses: HashMap::new(),
            default_key_status: 200,
            system: (200, r#"{"name":"Philips","nettvversion":"6.0"}"#.to_string()),
            key_list: "[]".to_string(),
            pressed: Vec::new(),
            press_times: Vec::new(),
            last_content_type: None,
        }
    }
}

impl MockState {
    /// Status for a key press; the last status of a sequence sticks.
    fn status_for(&mut self, key: &str) -> u16 {
        match self.key_statuses.get_mut(key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(500),
            Some(queue) => queue.front().copied().unwrap_or(500),
            None => self.default_key_status,
        }
    }
}

#[derive(Deserialize)]
struct KeyPress {
    key: String,
}

/// Builder for a mock TV.
#[derive(Default)]
pub(crate) struct MockTv {
    state: MockState,
}

impl MockTv {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn key_status(self, key: &str, status: u16) -> Self {
        self.key_sequence(key, &[status])
    }

    pub(crate) fn key_sequence(mut self, key: &str, statuses: &[u16]) -> Self {
        self.state
            .key_statuses
            .insert(key.to_string(), statuses.iter().copied().collect());
        self
    }

    pub(crate) fn default_key_status(mut self, status: u16) -> Self {
        self.state.default_key_status = status;
        self
    }

    pub(crate) fn system(mut self, status: u16, body: &str) -> Self {
        self.state.system = (status, body.to_string());
        self
    }

    pub(crate) fn key_list(mut self, body: &str) -> Self {
        self.state.key_list = body.to_string();
        self
    }

    pub(crate) async fn spawn(self) -> RunningTv {
        let state: Shared = Arc::new(Mutex::new(self.state));
        let app = Router::new()
            .route("/1/input/key", get(list_keys).post(press_key))
            .route("/1/system", get(system))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        RunningTv {
            address: DeviceAddress::new("127.0.0.1", port),
            state,
        }
    }
}

pub(crate) struct RunningTv {
    address: DeviceAddress,
    state: Shared,
}

impl RunningTv {
    /// Keys received so far, in arrival order.
    pub(crate) fn pressed(&self) -> Vec<String> {
        self.state.lock().unwrap().pressed.clone()
    }

    /// When each key press arrived, in arrival order.
    pub(crate) fn press_times(&self) -> Vec<Instant> {
        self.state.lock().unwrap().press_times.clone()
    }

    pub(crate) fn last_content_type(&self) -> Option<String> {
        self.state.lock().unwrap().last_content_type.clone()
    }
}

async fn press_key(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(press): Json<KeyPress>,
) -> (StatusCode, String) {
    let mut state = state.lock().unwrap();
    state.last_content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let status = state.status_for(&press.key);
    state.pressed.push(press.key);
    state.press_times.push(Instant::now());
    (StatusCode::from_u16(status).unwrap(), String::new())
}

async fn system(State(state): State<Shared>) -> (StatusCode, String) {
    let state = state.lock().unwrap();
    let (status, body) = &state.system;
    (StatusCode::from_u16(*status).unwrap(), body.clone())
}

async fn list_keys(State(state): State<Shared>) -> (StatusCode, String) {
    (StatusCode::OK, state.lock().unwrap().key_list.clone())
}

/// Client for a running mock with default timing.
pub(crate) fn client(tv: &RunningTv, aliases: AliasTable) -> TvClient {
    client_for(tv.address.clone(), aliases)
}

pub(crate) fn client_for(address: DeviceAddress, aliases: AliasTable) -> TvClient {
    TvClient::new(address, aliases, Timing::default())
}

pub(crate) fn client_with_timing(tv: &RunningTv, timing: Timing) -> TvClient {
    TvClient::new(tv.address.clone(), AliasTable::builtin(), timing)
}

/// Address where nothing is listening.
pub(crate) async fn closed_port() -> DeviceAddress {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    DeviceAddress::new("127.0.0.1", port)
}

/// Bare TCP device for paused-clock tests.
///
/// Every connection has its request head read in full. With `reply` set, a
/// complete `200` response carrying that body is written and flushed;
/// without it the connection is held open and never answered. The returned
/// receiver fires once the first connection has reached that point, so a
/// test can stop the clock knowing nothing is left in flight but the reply.
pub(crate) async fn scripted_device(
    reply: Option<&'static str>,
) -> (DeviceAddress, oneshot::Receiver<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (ready_tx, ready_rx) = oneshot::channel();

    tokio::spawn(async move {
        let mut ready = Some(ready_tx);
        let mut held = Vec::new();
        while let Ok((mut socket, _)) = listener.accept().await {
            read_request_head(&mut socket).await;
            if let Some(body) = reply {
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.flush().await;
            }
            if let Some(tx) = ready.take() {
                let _ = tx.send(());
            }
            held.push(socket);
        }
    });

    (DeviceAddress::new("127.0.0.1", port), ready_rx)
}

async fn read_request_head(socket: &mut TcpStream) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}
