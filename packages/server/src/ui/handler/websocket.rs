//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{MessageFactory, MessageText, RoomName, SessionId, SessionIdFactory, UserName},
    infrastructure::dto::websocket::{ClientEvent, ServerEvent},
    ui::state::AppState,
    usecase::{DisconnectUseCase, EnterRoomUseCase, RelayMessageUseCase, SignalActivityUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // The transport assigns the session identifier; the client never picks it.
    let session_id = SessionIdFactory::generate();
    tracing::info!("Session '{}' connected", session_id);

    ws.on_upgrade(move |socket| handle_socket(socket, state, session_id))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, session_id: SessionId) {
    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this session to receive events
    let (tx, mut rx) = mpsc::unbounded_channel();
    state.outbox.register(session_id.clone(), tx).await;

    // Upon connection - only to the new session
    state
        .outbox
        .send_to(
            &session_id,
            &MessageFactory::from_system("Welcome to Chat App!").into(),
        )
        .await;

    let recv_state = state.clone();
    let recv_session = session_id.clone();

    // Spawn a task to receive events from this session
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            // Malformed payloads are a transport problem, not
                            // ours: log and keep the connection alive.
                            tracing::warn!(
                                "Ignoring malformed frame from '{}': {}",
                                recv_session,
                                e
                            );
                            continue;
                        }
                    };

                    dispatch_event(&recv_state, &recv_session, event).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", recv_session);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward events addressed to this session
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Teardown: the session can no longer be reached
    state.outbox.unregister(&session_id).await;

    let disconnect_usecase = DisconnectUseCase::new(state.registry.clone());
    match disconnect_usecase.execute(&session_id).await {
        Some(outcome) => {
            let notice =
                MessageFactory::from_system(format!("{} has left the room", outcome.user.name));
            state.outbox.send_to_many(&outcome.peers, &notice.into()).await;
            state
                .outbox
                .send_to_many(&outcome.peers, &ServerEvent::UserList { users: outcome.users })
                .await;
            state
                .outbox
                .send_all(&ServerEvent::RoomList { rooms: outcome.rooms })
                .await;

            tracing::info!(
                "Session '{}' disconnected from room '{}'",
                session_id,
                outcome.user.room
            );
        }
        // Never entered a room: transport cleanup is all there is to do
        None => tracing::info!("Session '{}' disconnected", session_id),
    }
}

/// Dispatch one inbound event to its use case.
async fn dispatch_event(state: &Arc<AppState>, session_id: &SessionId, event: ClientEvent) {
    match event {
        ClientEvent::EnterRoom { name, room } => {
            match (UserName::try_from(name), RoomName::try_from(room)) {
                (Ok(name), Ok(room)) => handle_enter_room(state, session_id, name, room).await,
                _ => tracing::warn!("Invalid enterRoom payload from '{}'", session_id),
            }
        }
        ClientEvent::Message { name, text } => {
            match (UserName::try_from(name), MessageText::try_from(text)) {
                (Ok(name), Ok(text)) => handle_message(state, session_id, name, text).await,
                _ => tracing::warn!("Invalid message payload from '{}'", session_id),
            }
        }
        ClientEvent::Activity { name } => handle_activity(state, session_id, name).await,
    }
}

async fn handle_enter_room(
    state: &Arc<AppState>,
    session_id: &SessionId,
    name: UserName,
    room: RoomName,
) {
    let usecase = EnterRoomUseCase::new(state.registry.clone());
    let outcome = usecase.execute(session_id.clone(), name, room).await;

    // Old room first: the leave notice goes to the members it had before the
    // record was overwritten, then the refreshed list reflects the removal.
    if let Some(departed) = &outcome.departed {
        let notice =
            MessageFactory::from_system(format!("{} has left the room", outcome.user.name));
        state.outbox.send_to_many(&departed.peers, &notice.into()).await;
        state
            .outbox
            .send_to_many(
                &departed.peers,
                &ServerEvent::UserList {
                    users: departed.users.clone(),
                },
            )
            .await;
    }

    // To the session that joined
    state
        .outbox
        .send_to(
            session_id,
            &MessageFactory::from_system(format!(
                "You have joined the {} chat room",
                outcome.user.room
            ))
            .into(),
        )
        .await;

    // To everyone else in the new room
    let joined = MessageFactory::from_system(format!("{} has joined the room", outcome.user.name));
    state.outbox.send_to_many(&outcome.peers, &joined.into()).await;

    // Refreshed user list for the new room, joiner included
    let mut members = outcome.peers.clone();
    members.push(session_id.clone());
    state
        .outbox
        .send_to_many(
            &members,
            &ServerEvent::UserList {
                users: outcome.users,
            },
        )
        .await;

    // Refreshed room list for everyone
    state
        .outbox
        .send_all(&ServerEvent::RoomList {
            rooms: outcome.rooms,
        })
        .await;

    tracing::info!(
        "Session '{}' entered room '{}' as '{}'",
        session_id,
        outcome.user.room,
        outcome.user.name
    );
}

async fn handle_message(
    state: &Arc<AppState>,
    session_id: &SessionId,
    name: UserName,
    text: MessageText,
) {
    let usecase = RelayMessageUseCase::new(state.registry.clone());

    if let Some(relayed) = usecase.execute(session_id, name, text).await {
        tracing::info!(
            "Relaying message from '{}' to room '{}'",
            relayed.message.name,
            relayed.room
        );
        state
            .outbox
            .send_to_many(&relayed.targets, &relayed.message.into())
            .await;
    }
}

async fn handle_activity(state: &Arc<AppState>, session_id: &SessionId, name: String) {
    let usecase = SignalActivityUseCase::new(state.registry.clone());

    if let Some(signal) = usecase.execute(session_id).await {
        state
            .outbox
            .send_to_many(&signal.targets, &ServerEvent::Activity { name })
            .await;
    }
}
