//! WebSocket handlers.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tracing::{info, warn};

use shotdeck_models::{Shotlist, WsMessage};
use shotdeck_sketch::DEFAULT_STYLE;

use crate::metrics;
use crate::state::AppState;

/// WebSocket sketch batch request.
#[derive(Debug, Deserialize)]
pub struct WsSketchRequest {
    pub shotlist: Shotlist,
    #[serde(default)]
    pub style: Option<String>,
}

/// WebSocket endpoint rendering sketches for a whole shot list.
pub async fn ws_sketches(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_sketch_socket(socket, state))
}

async fn send_json<S>(sender: &mut S, msg: &WsMessage) -> bool
where
    S: futures_util::Sink<Message> + Unpin,
{
    match serde_json::to_string(msg) {
        Ok(json) => sender.send(Message::Text(json)).await.is_ok(),
        Err(_) => false,
    }
}

/// Handle a sketch-render WebSocket connection.
///
/// Protocol: the client sends one JSON request, the server streams
/// `progress` and `sketch_ready` messages per shot and closes with
/// `done`.
async fn handle_sketch_socket(socket: WebSocket, state: AppState) {
    metrics::record_ws_connection("sketches");

    let (mut sender, mut receiver) = socket.split();

    // Wait for initial request message
    let request: WsSketchRequest = match receiver.next().await {
        Some(Ok(Message::Text(text))) => match serde_json::from_str(&text) {
            Ok(req) => req,
            Err(e) => {
                let error = WsMessage::error(format!("Invalid request: {}", e));
                let _ = send_json(&mut sender, &error).await;
                return;
            }
        },
        _ => {
            let error = WsMessage::error("Expected JSON message");
            let _ = send_json(&mut sender, &error).await;
            return;
        }
    };

    if !state.sketch.enabled() {
        let error = WsMessage::error("Sketch rendering is not configured");
        let _ = send_json(&mut sender, &error).await;
        return;
    }

    let shots = request.shotlist.shots;
    let total = shots.len() as u32;
    if total == 0 {
        let _ = send_json(&mut sender, &WsMessage::done(0)).await;
        return;
    }

    info!("WebSocket sketch batch started: {} shots", total);

    let log = WsMessage::log(format!("Rendering {} storyboard sketches...", total));
    if !send_json(&mut sender, &log).await {
        return;
    }

    // Render in a task; per-shot results stream back over a channel so
    // the socket keeps flushing while the next render is in flight.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<WsMessage>();
    let sketch = state.sketch.clone();
    let style = request.style.unwrap_or_else(|| DEFAULT_STYLE.to_string());

    let render_task = tokio::spawn(async move {
        sketch
            .generate_all(shots, &style, |shot, current, total| {
                let message = match (&shot.sketch_image_url, &shot.sketch_error) {
                    (Some(url), _) => {
                        metrics::record_sketch_rendered(true);
                        WsMessage::sketch_ready(shot.shot_id.as_str(), url.as_str(), current, total)
                    }
                    (None, error) => {
                        metrics::record_sketch_rendered(false);
                        WsMessage::sketch_failed(
                            shot.shot_id.as_str(),
                            error.as_deref().unwrap_or("Generation failed"),
                            current,
                            total,
                        )
                    }
                };
                let _ = tx.send(WsMessage::progress(
                    ((current as f64 / total as f64) * 100.0) as u8,
                ));
                let _ = tx.send(message);
            })
            .await
    });

    while let Some(message) = rx.recv().await {
        if !send_json(&mut sender, &message).await {
            warn!("WebSocket send failed, client disconnected");
            render_task.abort();
            return;
        }
    }

    match render_task.await {
        Ok(_updated) => {
            let _ = send_json(&mut sender, &WsMessage::done(total)).await;
        }
        Err(e) => {
            let error = WsMessage::error(format!("Sketch batch failed: {}", e));
            let _ = send_json(&mut sender, &error).await;
        }
    }

    info!("WebSocket sketch batch ended");
}
