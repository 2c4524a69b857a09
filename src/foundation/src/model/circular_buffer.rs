/* A fixed-capacity circular buffer (ring buffer) over zero-initialized slots.

The `CircularBuffer<T>` owns `capacity` storage slots, a write cursor, and a
live-entry count. New items are written at the cursor; once the buffer is
full, each write evicts the oldest retained item. Eviction is expected
behavior, never an error.

Key details:
- `new` allocates all slots up front, filled with `T::default()`.
- `reset` returns the buffer to the freshly-constructed empty state.
- `push` inserts a new element, overwriting the oldest when full. O(1).
- `iter` walks the live elements oldest-first without consuming them.
- `len` / `capacity` / `is_empty` / `is_full` report occupancy.
- `cursor` and `get` expose raw state for diagnostics and white-box tests.
*/

#[derive(Debug)]
pub struct CircularBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    cursor: usize,
    len: usize,
}

impl<T: Clone + Default> CircularBuffer<T> {
    /// Creates a buffer of `capacity` zero-value slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");
        Self {
            slots: vec![T::default(); capacity],
            capacity,
            cursor: 0,
            len: 0,
        }
    }

    /// Returns the buffer to the empty state: cursor and live count to
    /// zero, every slot back to `T::default()`. Idempotent.
    pub fn reset(&mut self) {
        self.slots.fill(T::default());
        self.cursor = 0;
        self.len = 0;
    }

    /// Inserts `item`, evicting the oldest retained element once full.
    /// Never fails and never allocates.
    pub fn push(&mut self, item: T) {
        self.slots[self.cursor] = item;
        self.cursor = (self.cursor + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Iterates over the live elements in insertion order, oldest first.
    ///
    /// Each call starts an independent traversal of the current state;
    /// iterating never mutates the buffer. Yields exactly `len()` items.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        // While partially filled the oldest element sits at index 0;
        // once full it sits at the slot the cursor is about to overwrite.
        let start = if self.len < self.capacity {
            0
        } else {
            self.cursor
        };
        (0..self.len).map(move |i| &self.slots[(start + i) % self.capacity])
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Diagnostic: the next slot index to be written.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Diagnostic: raw slot access, bounds-checked against capacity.
    /// Slots beyond `len()` still hold their cleared `T::default()` value.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }
}
