//! Empfangsschleife für Client-Datagramme.
//!
//! Ein Task liest vom geteilten UDP-Socket, dekodiert jedes Datagramm und
//! meldet das Ergebnis über die Event-Queue an den Dispatcher. Ankündigungen
//! aktualisieren zusätzlich den Peer-Slot. Ein Dekodierfehler verwirft nur
//! das eine Datagramm; die Schleife läuft weiter.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use protocol::{Packet, decode};
use tokio::{net::UdpSocket, sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, warn};

use crate::console::Event;
use crate::peer::PeerSlot;

/// Empfangspuffer; längere Datagramme kappt bereits der Transport.
const RECV_BUFFER_SIZE: usize = 2048;

/// Handle auf den Empfangs-Task.
#[derive(Debug)]
pub struct Listener {
    handle: JoinHandle<()>,
}

impl Listener {
    /// Startet die Empfangsschleife auf dem geteilten Socket.
    pub fn spawn(
        socket: Arc<UdpSocket>,
        peer: PeerSlot,
        events: UnboundedSender<Event>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut buf = [0u8; RECV_BUFFER_SIZE];
            loop {
                match socket.recv_from(&mut buf).await {
                    Ok((len, source)) => {
                        handle_datagram(&buf[..len], source, &peer, &events);
                    }
                    Err(err) => {
                        warn!(target: "console::listener", "recv error: {err}");
                        tokio::time::sleep(Duration::from_millis(200)).await;
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

impl Drop for Listener {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn handle_datagram(
    bytes: &[u8],
    source: SocketAddr,
    peer: &PeerSlot,
    events: &UnboundedSender<Event>,
) {
    match decode(bytes) {
        Ok(Packet::Announce { addr }) => {
            let ip = announced_ip(&addr, source);
            peer.store(ip);
            debug!(target: "console::listener", "announcement from {source}, peer set to {ip}");
            let _ = events.send(Event::PeerAnnounced(ip));
        }
        Ok(Packet::Log(message)) => {
            let _ = events.send(Event::Log(message));
        }
        Err(err) => {
            warn!(target: "console::listener", "dropped datagram from {source}: {err}");
        }
    }
}

/// Die Ankündigung trägt die Client-IP als Text; parst sie nicht, zählt die
/// Absenderadresse des Datagramms.
fn announced_ip(payload: &str, source: SocketAddr) -> IpAddr {
    match payload.trim().parse() {
        Ok(ip) => ip,
        Err(_) => {
            warn!(
                target: "console::listener",
                "unparseable announce payload {payload:?}, falling back to {}",
                source.ip()
            );
            source.ip()
        }
    }
}
