//! Codec für gerahmte Datagramme.
//!
//! Ein Datagramm trägt einen 12-Byte-Header — Kind, Origin und Nutzlast-
//! Länge als i32, little-endian — gefolgt vom UTF-8-Text. Verbindungs-
//! Ankündigungen nutzen auf dem Draht negative Kind-/Origin-Werte; der
//! Decoder prüft das vor dem generischen Pfad und liefert eine getaggte
//! [`Packet`]-Variante, damit Aufrufer nie selbst Zahlenbereiche
//! interpretieren müssen.

use thiserror::Error;

use crate::message::{LogMessage, MessageKind, MessageOrigin};

/// Header-Größe: Kind + Origin + Länge, je ein i32.
pub const HEADER_LEN: usize = 12;

/// Sentinel-Wert für Kind und Origin einer Verbindungs-Ankündigung.
const ANNOUNCE_SENTINEL: i32 = -1;

/// Ein dekodiertes Datagramm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    /// Verbindungs-Ankündigung; die Nutzlast ist die IP des Clients als Text.
    Announce { addr: String },
    /// Reguläre Log-Nachricht.
    Log(LogMessage),
}

/// Fehler, die beim Dekodieren eines Datagramms auftreten können.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("datagram too short for header: {0} bytes")]
    HeaderTooShort(usize),
    #[error("negative payload length {0}")]
    InvalidLength(i32),
    #[error("payload truncated: header declares {declared} bytes, {available} present")]
    Truncated { declared: usize, available: usize },
}

/// Kodiert eine Log-Nachricht inkl. Header.
pub fn encode_log(message: &LogMessage) -> Vec<u8> {
    encode_frame(
        message.kind.to_raw(),
        message.origin.to_raw(),
        message.text.as_bytes(),
    )
}

/// Kodiert eine Verbindungs-Ankündigung mit der IP des Absenders als Text.
pub fn encode_announcement(addr: &str) -> Vec<u8> {
    encode_frame(ANNOUNCE_SENTINEL, ANNOUNCE_SENTINEL, addr.as_bytes())
}

fn encode_frame(kind: i32, origin: i32, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(&kind.to_le_bytes());
    buf.extend_from_slice(&origin.to_le_bytes());
    buf.extend_from_slice(&(payload.len() as i32).to_le_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Dekodiert ein Datagramm (inkl. Sentinel-Prüfung).
///
/// Ungültiges UTF-8 in der Nutzlast wird ersetzt, nie als Fehler gemeldet.
/// Bytes jenseits der deklarierten Länge werden ignoriert.
pub fn decode(bytes: &[u8]) -> Result<Packet, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::HeaderTooShort(bytes.len()));
    }
    let kind_raw = header_field(bytes, 0);
    let origin_raw = header_field(bytes, 4);
    let len_raw = header_field(bytes, 8);

    let declared = usize::try_from(len_raw).map_err(|_| DecodeError::InvalidLength(len_raw))?;
    let available = bytes.len() - HEADER_LEN;
    if available < declared {
        return Err(DecodeError::Truncated {
            declared,
            available,
        });
    }

    let text = String::from_utf8_lossy(&bytes[HEADER_LEN..HEADER_LEN + declared]).into_owned();
    if kind_raw < 0 && origin_raw < 0 {
        return Ok(Packet::Announce { addr: text });
    }
    Ok(Packet::Log(LogMessage {
        kind: MessageKind::from_raw(kind_raw),
        origin: MessageOrigin::from_raw(origin_raw),
        text,
    }))
}

fn header_field(bytes: &[u8], offset: usize) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[offset..offset + 4]);
    i32::from_le_bytes(raw)
}
