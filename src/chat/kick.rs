//! Kick chat adapter: chatroom discovery plus a Pusher websocket.
//!
//! Kick pushes chat through Pusher. Connecting takes two steps: a
//! one-shot HTTP lookup resolving the channel name to a numeric
//! chatroom id, then a websocket to the shared Pusher endpoint with a
//! subscribe frame for `chatrooms.<id>.v2`. Every inbound frame is
//! JSON; chat messages arrive with their payload JSON-encoded a second
//! time as a string.

use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpStream;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::chat::{make_event, ChatHandle, CONNECT_TIMEOUT};
use crate::common::error::TransportError;
use crate::common::{GuessEvent, Platform};

const PUSHER_URL: &str =
    "wss://ws-us2.pusher.com/app/32cbd69e4b950bf97679?protocol=7&client=js&version=8.4.0-rc2&flash=false";
const CHAT_MESSAGE_EVENT: &str = "App\\Events\\ChatMessageEvent";
const PUSHER_PING_EVENT: &str = "pusher:ping";

type KickSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Any Pusher frame: an event name plus an event-specific payload.
#[derive(Debug, Deserialize)]
struct PusherFrame {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// The twice-encoded chat message payload.
#[derive(Debug, Deserialize)]
struct ChatPayload {
    sender: ChatSender,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatSender {
    username: String,
}

#[derive(Debug, Deserialize)]
struct ChatroomResponse {
    id: u64,
}

/// Resolve the channel's chatroom and subscribe to its message stream.
pub async fn connect(
    channel: &str,
) -> Result<(UnboundedReceiver<GuessEvent>, ChatHandle), TransportError> {
    let channel = channel.to_lowercase();
    let room = resolve_chatroom(&channel).await?;

    let (mut socket, _response) = tokio::time::timeout(CONNECT_TIMEOUT, connect_async(PUSHER_URL))
        .await
        .map_err(|_| TransportError::ConnectTimeout {
            endpoint: PUSHER_URL.to_string(),
            seconds: CONNECT_TIMEOUT.as_secs(),
        })??;

    let subscribe = json!({
        "event": "pusher:subscribe",
        "data": { "auth": "", "channel": room },
    });
    socket.send(Message::Text(subscribe.to_string())).await?;

    info!("Connected to Kick chat, subscribed to {}", room);

    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(read_loop(socket, tx));
    Ok((rx, ChatHandle::new(task)))
}

/// One-shot lookup from channel name to the Pusher channel token.
async fn resolve_chatroom(channel: &str) -> Result<String, TransportError> {
    let url = format!("https://kick.com/api/v2/channels/{channel}/chatroom");
    let chatroom: ChatroomResponse = reqwest::Client::new()
        .get(&url)
        .timeout(CONNECT_TIMEOUT)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| TransportError::Discovery {
            channel: channel.to_string(),
            source,
        })?
        .json()
        .await
        .map_err(|source| TransportError::Discovery {
            channel: channel.to_string(),
            source,
        })?;

    Ok(format!("chatrooms.{}.v2", chatroom.id))
}

/// Pump websocket frames into guess events. Malformed frames are logged
/// and skipped; only a closed socket or dropped receiver ends the loop.
async fn read_loop(mut socket: KickSocket, tx: UnboundedSender<GuessEvent>) {
    while let Some(frame) = socket.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                let frame = match serde_json::from_str::<PusherFrame>(&text) {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("Dropping malformed Kick frame: {}", e);
                        continue;
                    }
                };

                if frame.event == PUSHER_PING_EVENT {
                    let pong = json!({ "event": "pusher:pong", "data": {} });
                    if let Err(e) = socket.send(Message::Text(pong.to_string())).await {
                        warn!("Failed to answer pusher:ping: {}", e);
                        break;
                    }
                    continue;
                }

                if frame.event != CHAT_MESSAGE_EVENT {
                    debug!("Ignoring Kick event '{}'", frame.event);
                    continue;
                }

                match unwrap_chat_payload(&frame.data) {
                    Ok((username, content)) => {
                        if let Some(event) = make_event(Platform::Kick, &username, &content) {
                            if tx.send(event).is_err() {
                                debug!("Guess receiver dropped, closing Kick stream");
                                break;
                            }
                        }
                    }
                    Err(e) => warn!("Dropping malformed Kick chat payload: {}", e),
                }
            }
            Ok(Message::Ping(payload)) => {
                if let Err(e) = socket.send(Message::Pong(payload)).await {
                    warn!("Failed to answer websocket ping: {}", e);
                    break;
                }
            }
            Ok(Message::Close(close)) => {
                info!("Kick websocket closed: {:?}", close);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Kick websocket error: {}", e);
                break;
            }
        }
    }
    info!("Kick chat stream ended");
}

/// Decode the inner chat payload: a JSON-encoded string that must be
/// parsed a second time.
fn unwrap_chat_payload(data: &serde_json::Value) -> Result<(String, String), serde_json::Error> {
    let raw = data.as_str().unwrap_or_default();
    let payload: ChatPayload = serde_json::from_str(raw)?;
    Ok((payload.sender.username, payload.content))
}
