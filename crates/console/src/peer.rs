//! The single mutable slot shared between the receive and send paths.

use std::{
    net::IpAddr,
    sync::{Arc, RwLock},
};

/// Holds the client address the command channel targets.
///
/// Write side: the listener task, on every connection announcement.
/// Read side: the command task, before each send. The lock is held only for
/// the copy, never across I/O.
#[derive(Debug, Clone, Default)]
pub struct PeerSlot {
    inner: Arc<RwLock<Option<IpAddr>>>,
}

impl PeerSlot {
    /// An empty slot; sends are refused until a client announces itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled from configuration.
    pub fn fixed(addr: IpAddr) -> Self {
        let slot = Self::new();
        slot.store(addr);
        slot
    }

    pub fn store(&self, addr: IpAddr) {
        *self.inner.write().unwrap() = Some(addr);
    }

    pub fn get(&self) -> Option<IpAddr> {
        *self.inner.read().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn starts_empty_until_stored() {
        let slot = PeerSlot::new();
        assert_eq!(slot.get(), None);

        let addr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5));
        slot.store(addr);
        assert_eq!(slot.get(), Some(addr));
    }

    #[test]
    fn clones_share_the_slot() {
        let writer = PeerSlot::new();
        let reader = writer.clone();
        writer.store(IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(reader.get(), Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    }

    #[test]
    fn fixed_slot_is_populated_immediately() {
        let addr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20));
        assert_eq!(PeerSlot::fixed(addr).get(), Some(addr));
    }
}
