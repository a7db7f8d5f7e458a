//! Fixed-Capacity Ring Buffer for Rolling Gait Windows
//!
//! ## Overview
//!
//! Every rolling window in the engine (step history, step-length samples,
//! stride speeds, feature samples, floor heights, inertial channels) is a
//! `RingBuffer<T, N>`. Capacity is a const generic, so per-session state has a
//! fixed size and pushing never allocates.
//!
//! ## Why a Ring?
//!
//! Rolling gait metrics only care about the most recent strides:
//! - Cadence looks back 10 seconds
//! - Variability needs a few dozen steps
//! - Outlier rejection needs a running mean of recent lengths
//!
//! A ring gives exactly that with constant-time operations:
//! - O(1) insertion (evicts the oldest entry when full)
//! - O(1) access by logical index and to the newest entry
//! - O(n) iteration, oldest to newest
//!
//! ### Memory Layout
//!
//! ```text
//! RingBuffer<T, 5> after 7 pushes (a..g):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  f  │  g  │  c  │  d  │  e  │  ← physical slots
//! └─────┴─────┴─────┴─────┴─────┘
//!                ↑
//!                └── write_pos = 2 (oldest entry, next overwrite)
//!
//! Logical view (iter): c, d, e, f, g
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use gaitguard_core::buffer::RingBuffer;
//!
//! let mut lengths: RingBuffer<f64, 3> = RingBuffer::new();
//! lengths.push(0.61);
//! lengths.push(0.63);
//! lengths.push(0.60);
//! let evicted = lengths.push(0.62);
//!
//! assert_eq!(evicted, Some(0.61));
//! assert_eq!(lengths.last(), Some(&0.62));
//! assert_eq!(lengths.iter().copied().collect::<Vec<_>>(), vec![0.63, 0.60, 0.62]);
//! ```

/// Fixed-capacity ring buffer, oldest entry evicted first
///
/// ## Internal Invariants
///
/// - `write_pos < N` (next write position is always valid)
/// - `len <= N` (never claim more items than capacity)
/// - Logical index 0 is the oldest entry, `len - 1` the newest
///
/// ## Thread Safety
///
/// Not synchronized. Shared managers wrap their rings in a mutex (see
/// [`crate::shared`]).
#[derive(Clone, Debug)]
pub struct RingBuffer<T: Copy, const N: usize> {
    /// Storage; `None` marks slots never written
    data: [Option<T>; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid entries
    len: usize,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    /// Creates an empty ring
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds an entry, returning the evicted oldest entry when the ring was full
    pub fn push(&mut self, item: T) -> Option<T> {
        if N == 0 {
            return Some(item);
        }

        let evicted = if self.len == N {
            self.data[self.write_pos]
        } else {
            None
        };

        self.data[self.write_pos] = Some(item);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }

        evicted
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the next push evicts
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of entries
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Newest entry
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Oldest entry
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Entry by logical index (0 = oldest, len-1 = newest)
    ///
    /// When the ring is full the oldest entry sits at `write_pos`:
    ///
    /// ```text
    /// Physical:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical:   [A, B, C, D, E]
    /// logical[i] = physical[(write_pos + i) % N]
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index].as_ref()
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> RingBufferIter<'_, T, N> {
        RingBufferIter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.data = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }
}

impl<T: Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ring contents, oldest to newest
pub struct RingBufferIter<'a, T: Copy, const N: usize> {
    buffer: &'a RingBuffer<T, N>,
    front: usize,
    back: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for RingBufferIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.get(self.front)?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Copy, const N: usize> DoubleEndedIterator for RingBufferIter<'a, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<'a, T: Copy, const N: usize> ExactSizeIterator for RingBufferIter<'a, T, N> {}
