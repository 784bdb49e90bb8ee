//! Console rendering: the fixed kind→color table.

use protocol::MessageKind;

// SGR codes as the deployed clients expect them rendered; part of the
// external contract, not a styling choice.
const SGR_RED: &str = "31";
const SGR_GREEN: &str = "32";
const SGR_YELLOW: &str = "33";

/// Returns the SGR code for a message kind, or `None` for kinds printed
/// unstyled.
pub fn color_for(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Warning => Some(SGR_YELLOW),
        MessageKind::Error => Some(SGR_RED),
        MessageKind::System | MessageKind::Input => Some(SGR_GREEN),
        _ => None,
    }
}

/// Wraps `text` in the SGR escape for `kind`, if any.
pub fn render_line(kind: MessageKind, text: &str) -> String {
    match color_for(kind) {
        Some(code) => format!("\x1b[{code}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

/// Operator-facing notices (connects, skipped sends) render like System
/// lines.
pub fn render_notice(text: &str) -> String {
    render_line(MessageKind::System, text)
}
