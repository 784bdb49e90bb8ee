/// Severity/category of a log line, carried as a raw i32 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Normal,
    Warning,
    Error,
    System,
    Input,
    Output,
    Engine,
    /// Raw value outside the defined table, kept verbatim so re-encoding a
    /// decoded message is lossless.
    Unknown(i32),
}

impl MessageKind {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Normal,
            1 => Self::Warning,
            2 => Self::Error,
            3 => Self::System,
            4 => Self::Input,
            5 => Self::Output,
            6 => Self::Engine,
            other => Self::Unknown(other),
        }
    }

    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Warning => 1,
            Self::Error => 2,
            Self::System => 3,
            Self::Input => 4,
            Self::Output => 5,
            Self::Engine => 6,
            Self::Unknown(other) => other,
        }
    }
}

/// Which side of the relay produced a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageOrigin {
    Console,
    Game,
    /// Raw value outside the defined table, kept verbatim.
    Unknown(i32),
}

impl MessageOrigin {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Console,
            1 => Self::Game,
            other => Self::Unknown(other),
        }
    }

    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Console => 0,
            Self::Game => 1,
            Self::Unknown(other) => other,
        }
    }
}

/// One decoded log line as the client framed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub kind: MessageKind,
    pub origin: MessageOrigin,
    pub text: String,
}

impl LogMessage {
    pub fn new(kind: MessageKind, origin: MessageOrigin, text: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_kinds_map_both_ways() {
        for raw in 0..=6 {
            assert_eq!(MessageKind::from_raw(raw).to_raw(), raw);
        }
        assert_eq!(MessageKind::from_raw(2), MessageKind::Error);
        assert_eq!(MessageOrigin::from_raw(1), MessageOrigin::Game);
    }

    #[test]
    fn undefined_values_survive_verbatim() {
        assert_eq!(MessageKind::from_raw(42), MessageKind::Unknown(42));
        assert_eq!(MessageKind::Unknown(42).to_raw(), 42);
        assert_eq!(MessageOrigin::from_raw(-7).to_raw(), -7);
    }
}
