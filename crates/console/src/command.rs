//! Kommandokanal: Konsoleneingaben an den Client weiterleiten.
//!
//! Ein Task liest Zeilen von stdin und schickt jede als ungerahmtes UTF-8-
//! Datagramm an `(peer, game_port)`. Ohne bekannten Peer wird der Versand
//! übersprungen und der Dispatcher benachrichtigt; es geht nie ein Datagramm
//! an eine leere Adresse.

use std::{net::SocketAddr, sync::Arc};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    net::UdpSocket,
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::console::Event;
use crate::peer::PeerSlot;

/// What became of one operator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Sent as one raw UTF-8 datagram to this address.
    Sent(SocketAddr),
    /// No peer known yet; nothing was sent.
    NotConnected,
}

/// Sends one command line to the known peer, if any.
///
/// Commands are never framed: the datagram body is the line's UTF-8 bytes.
pub async fn send_command(
    socket: &UdpSocket,
    peer: &PeerSlot,
    game_port: u16,
    line: &str,
) -> std::io::Result<CommandOutcome> {
    let Some(ip) = peer.get() else {
        return Ok(CommandOutcome::NotConnected);
    };
    let target = SocketAddr::new(ip, game_port);
    socket.send_to(line.as_bytes(), target).await?;
    Ok(CommandOutcome::Sent(target))
}

/// Handle auf den Eingabe-Task.
#[derive(Debug)]
pub struct CommandSender {
    handle: JoinHandle<()>,
}

impl CommandSender {
    /// Startet die stdin-Schleife: eine Zeile rein, höchstens ein Datagramm
    /// raus. EOF meldet [`Event::InputClosed`] und beendet den Task.
    pub fn spawn(
        socket: Arc<UdpSocket>,
        peer: PeerSlot,
        game_port: u16,
        events: UnboundedSender<Event>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        match send_command(&socket, &peer, game_port, line).await {
                            Ok(CommandOutcome::Sent(target)) => {
                                debug!(target: "console::command", "sent {line:?} to {target}");
                            }
                            Ok(CommandOutcome::NotConnected) => {
                                let _ = events.send(Event::SendSkipped);
                            }
                            Err(err) => {
                                warn!(target: "console::command", "send failed: {err}");
                            }
                        }
                    }
                    Ok(None) => {
                        let _ = events.send(Event::InputClosed);
                        break;
                    }
                    Err(err) => {
                        warn!(target: "console::command", "stdin read failed: {err}");
                        let _ = events.send(Event::InputClosed);
                        break;
                    }
                }
            }
        });
        Self { handle }
    }

    pub fn abort(self) {
        self.handle.abort();
    }
}

impl Drop for CommandSender {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
