//! Fixed-capacity history of the last `period` symbols
//!
//! Slots are addressed by absolute sequence position reduced modulo the
//! capacity, so a read at position `p` before writing `p` returns the symbol
//! seen exactly `capacity` positions earlier.

/// Largest supported repeat period
pub const MAX_PERIOD: usize = 4;

/// Circular buffer of the most recent `capacity` symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRing {
    capacity: usize,
    storage: [u8; MAX_PERIOD],
}

impl HistoryRing {
    /// Create a ring holding `capacity` symbols.
    ///
    /// `capacity` must be in `1..=MAX_PERIOD`; the configuration layer
    /// guarantees this before any scanner is built.
    pub fn new(capacity: usize) -> Self {
        debug_assert!((1..=MAX_PERIOD).contains(&capacity));
        Self {
            capacity,
            storage: [0; MAX_PERIOD],
        }
    }

    /// Number of symbols the ring holds
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store `symbol` in the slot for `position`
    #[inline]
    pub fn write(&mut self, position: u64, symbol: u8) {
        let slot = self.slot(position);
        self.storage[slot] = symbol;
    }

    /// Last symbol written to the slot for `position`
    #[inline]
    pub fn read(&self, position: u64) -> u8 {
        self.storage[self.slot(position)]
    }

    /// Raw slot contents, slot 0 first
    #[inline]
    pub fn slots(&self) -> &[u8] {
        &self.storage[..self.capacity]
    }

    /// Copy `capacity` symbols into `out`, starting at the slot for `position`
    ///
    /// Used to recover a repeat unit in its phase within the run.
    pub fn unit_from(&self, position: u64, out: &mut [u8; MAX_PERIOD]) {
        for (j, dst) in out.iter_mut().take(self.capacity).enumerate() {
            *dst = self.read(position + j as u64);
        }
    }

    #[inline]
    fn slot(&self, position: u64) -> usize {
        (position % self.capacity as u64) as usize
    }
}
