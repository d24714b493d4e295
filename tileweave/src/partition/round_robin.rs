//! Cyclic assignment counter.

/// Distributes a sequence of assignments cyclically over `len` slots.
///
/// [`next`](RoundRobin::next) yields the current slot and advances;
/// [`advance`](RoundRobin::advance) skips a slot without yielding. The
/// windowed partitioner uses the skip at each row boundary so a different
/// image leads every row.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    len: usize,
    next: usize,
}

impl RoundRobin {
    /// A counter over `len` slots, starting at slot 0.
    ///
    /// `len` must be nonzero; the partition drivers only construct a
    /// counter after confirming the image list is non-empty.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "round-robin over zero slots");
        Self { len, next: 0 }
    }

    /// Yield the current slot and advance to the next one.
    pub fn next(&mut self) -> usize {
        let current = self.next;
        self.next = (self.next + 1) % self.len;
        current
    }

    /// Advance one slot without yielding it.
    pub fn advance(&mut self) {
        self.next = (self.next + 1) % self.len;
    }

    /// Number of slots in the cycle.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a counter has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
