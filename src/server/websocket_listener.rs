use crate::model::{ClientEvent, SessionId};
use crate::server::SignalingHandler;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info};
use uuid::Uuid;

pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(handler): State<SignalingHandler>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| listen(socket, handler))
}

async fn listen(socket: WebSocket, handler: SignalingHandler) {
    // The session id lives exactly as long as this connection.
    let session_id: SessionId = Uuid::new_v4();
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    if let Err(e) = handler.connect(session_id, tx).await {
        error!(?session_id, error = ?e, "Failed to register session");
        return;
    }

    // Handle outgoing messages
    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if ws_sender.send(message).await.is_err() {
                break;
            }
        }
    });

    // Handle incoming messages
    while let Some(Ok(message)) = ws_receiver.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                Ok(event) => {
                    if let Err(e) = handler.handle_event(session_id, event).await {
                        error!(?session_id, error = ?e, "Failed to handle event");
                    }
                }
                Err(e) => {
                    error!(?session_id, error = ?e, "Failed to parse event");
                }
            },
            Message::Close(_) => {
                info!(?session_id, "Client closed connection");
                break;
            }
            _ => {}
        }
    }

    // Cleanup
    if let Err(e) = handler.disconnect(session_id).await {
        error!(?session_id, error = ?e, "Failed to disconnect session");
    }
    send_task.abort();
}
