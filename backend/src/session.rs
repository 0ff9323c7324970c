use crate::protocol;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{sink::SinkExt, stream::StreamExt};
use layout_core::collision::CollisionEngine;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

/// One editing session: the socket task owns its engine for the connection's lifetime.
async fn handle_socket(socket: WebSocket) {
    let session_id = Uuid::new_v4();
    info!("Collision session {} opened", session_id);

    let (mut sender, mut receiver) = socket.split();
    let mut engine = CollisionEngine::new();

    while let Some(msg) = receiver.next().await {
        let text = match msg {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                warn!("Session {} socket error: {}", session_id, e);
                break;
            }
        };

        debug!("Session {} received: {}", session_id, text);
        let reply = protocol::respond(&mut engine, &text);
        if reply.starts_with("ERROR_UPDATE:") {
            warn!("Session {} rejected command: {}", session_id, text);
        }

        if sender.send(Message::Text(reply)).await.is_err() {
            break;
        }
    }

    info!("Collision session {} closed with {} boxes", session_id, engine.len());
}
