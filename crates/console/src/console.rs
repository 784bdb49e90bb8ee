//! Zentrale Ablaufsteuerung: Socket binden, Tasks starten, Events verteilen.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use protocol::LogMessage;
use tokio::{
    net::UdpSocket,
    sync::mpsc::{self, UnboundedReceiver},
};
use tracing::info;

use crate::command::CommandSender;
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::listener::Listener;
use crate::peer::PeerSlot;
use crate::render;
use crate::session_log::SessionLog;

/// Everything the listener and command tasks report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A connection announcement set the peer slot to this address.
    PeerAnnounced(IpAddr),
    /// One decoded log message.
    Log(LogMessage),
    /// An operator line was dropped because no peer is known.
    SendSkipped,
    /// Stdin reached EOF; the console should shut down.
    InputClosed,
}

/// Single consumer of the event queue; owns stdout and the session log.
#[derive(Debug)]
pub struct Dispatcher {
    session_log: SessionLog,
}

impl Dispatcher {
    pub fn new(session_log: SessionLog) -> Self {
        Self { session_log }
    }

    /// Applies one event. Returns `false` when the console should exit.
    pub fn handle(&self, event: Event) -> bool {
        match event {
            Event::PeerAnnounced(ip) => {
                println!("{}", render::render_notice(&format!("client connected {ip}")));
            }
            Event::Log(message) => {
                self.session_log.append(&message.text);
                println!("{}", render::render_line(message.kind, &message.text));
            }
            Event::SendSkipped => {
                println!(
                    "{}",
                    render::render_notice("client not connected, command dropped")
                );
            }
            Event::InputClosed => return false,
        }
        true
    }

    /// Drains the queue until Ctrl+C, stdin EOF or all senders are gone.
    pub async fn run_until_shutdown(&self, mut events: UnboundedReceiver<Event>) {
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("{}", render::render_notice("shutting down"));
                    break;
                }
                event = events.recv() => match event {
                    Some(event) => {
                        if !self.handle(event) {
                            break;
                        }
                    }
                    // Beide Sender weg; nichts mehr zu verteilen.
                    None => break,
                },
            }
        }
    }
}

/// Binds the socket and runs the console until Ctrl+C or stdin EOF.
///
/// Bind failure is the one fatal startup error; everything after that is
/// per-message and survivable.
pub async fn run(config: ConsoleConfig) -> Result<(), ConsoleError> {
    let session_log = SessionLog::create(&config.log_dir, &config.log_prefix)?;
    info!(target: "console", "session log at {}", session_log.path().display());

    let bind_addr = SocketAddr::new(config.bind_ip, config.local_port);
    let socket = Arc::new(UdpSocket::bind(bind_addr).await?);
    info!(target: "console", "listening on {}", socket.local_addr()?);

    let peer = match config.peer_ip {
        Some(ip) => PeerSlot::fixed(ip),
        None => PeerSlot::new(),
    };

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let listener = Listener::spawn(socket.clone(), peer.clone(), events_tx.clone());
    let commands = CommandSender::spawn(socket, peer, config.game_port, events_tx);

    Dispatcher::new(session_log).run_until_shutdown(events_rx).await;

    listener.abort();
    commands.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::{MessageKind, MessageOrigin};

    fn dispatcher_in(dir: &std::path::Path) -> Dispatcher {
        Dispatcher::new(SessionLog::create(dir, "client_log").unwrap())
    }

    #[test]
    fn log_events_reach_the_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = dispatcher_in(dir.path());

        let message = LogMessage::new(MessageKind::Error, MessageOrigin::Game, "boom");
        assert!(dispatcher.handle(Event::Log(message)));

        let contents = std::fs::read_to_string(dispatcher.session_log.path()).unwrap();
        assert_eq!(contents, "boom\n");
    }

    #[test]
    fn notices_do_not_touch_the_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = dispatcher_in(dir.path());

        assert!(dispatcher.handle(Event::PeerAnnounced("10.0.0.5".parse().unwrap())));
        assert!(dispatcher.handle(Event::SendSkipped));

        let contents = std::fs::read_to_string(dispatcher.session_log.path()).unwrap();
        assert_eq!(contents, "");
    }

    #[test]
    fn input_closed_requests_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!dispatcher_in(dir.path()).handle(Event::InputClosed));
    }
}
