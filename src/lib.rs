//! A cyclic selector over a sequence.
//!
//! [`CycleSelector`] keeps a current index into a sequence and moves it with
//! [`next`](CycleSelector::next) and [`prev`](CycleSelector::prev), wrapping
//! around at either end. The sequence itself is never owned: it is read
//! through a [`Source`], which may be a fixed list, a shared cell that someone
//! else mutates, or a function called on demand.
//!
//! The selected value is derived on every read. If the sequence changed so
//! that the stored index no longer points at an element, the read resets the
//! index to 0 and returns the first element instead.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use cyclist::CycleSelector;
//!
//! let items = Rc::new(RefCell::new(vec![1, 2, 3]));
//! let selector = CycleSelector::new(Rc::clone(&items));
//!
//! selector.prev();
//! assert_eq!(selector.state(), Some(3));
//!
//! *items.borrow_mut() = vec![1, 2];
//! assert_eq!(selector.state(), Some(1));
//! ```
//!
//! Nothing is recomputed automatically: callers re-read
//! [`state`](CycleSelector::state) whenever they need the current value.

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    }};
}

use core::cell::Cell;

pub use crate::error::CycleError;
pub use crate::iter::Rotation;
pub use crate::source::Source;

use crate::helpers::{mod_cycle_offset, step_backward, step_forward};

mod error;
mod helpers;
mod iter;
mod source;

#[derive(Clone, Debug)]
pub struct CycleSelector<T> {
    source: Source<T>,
    index: Cell<usize>,
}

impl<T> CycleSelector<T> {
    /// Creates a selector over `source`, positioned at index 0.
    ///
    /// An empty sequence is accepted; reads from it yield nothing until it
    /// gains elements.
    pub fn new<S>(source: S) -> Self
    where
        S: Into<Source<T>>,
    {
        Self {
            source: source.into(),
            index: Cell::new(0),
        }
    }

    /// Creates a selector whose sequence is produced by calling `func` each
    /// time it is needed.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn() -> Vec<T> + 'static,
    {
        Self::new(Source::supplier(func))
    }

    /// Moves to the next position, wrapping from the last position to 0.
    ///
    /// The wrap is computed against the length of the sequence right now.
    /// A stored index left out of range by a shrinking sequence is not
    /// corrected here; the next read does that.
    pub fn next(&self) {
        let len = self.source.len();
        let index = self.index.get();

        match step_forward(index, len) {
            Some(next) => {
                log_trace!("cycle next: {} -> {} (len {})", index, next, len);
                self.index.set(next);
            }
            None => log_debug!("cycle next: sequence is empty, index stays at {}", index),
        }
    }

    /// Moves to the previous position, wrapping from 0 to the last position.
    pub fn prev(&self) {
        let len = self.source.len();
        let index = self.index.get();

        match step_backward(index, len) {
            Some(prev) => {
                log_trace!("cycle prev: {} -> {} (len {})", index, prev, len);
                self.index.set(prev);
            }
            None => log_debug!("cycle prev: sequence is empty, index stays at {}", index),
        }
    }

    /// Moves `n` positions forward, wrapping as many times as needed.
    pub fn advance_by(&self, n: usize) {
        self.offset_by(n, true);
    }

    /// Moves `n` positions backward, wrapping as many times as needed.
    pub fn retreat_by(&self, n: usize) {
        self.offset_by(n, false);
    }

    fn offset_by(&self, n: usize, forward: bool) {
        let len = self.source.len();

        // Out-of-range positions count from 0, as a read would.
        let index = match self.index.get() {
            i if i < len => i,
            _ => 0,
        };

        match mod_cycle_offset(index, len, n, forward) {
            Some(target) => {
                log_trace!("cycle offset by {} (forward: {}): {} -> {} (len {})", n, forward, index, target, len);
                self.index.set(target);
            }
            None => {
                log_debug!("cycle offset: sequence is empty, index reset to 0");
                self.index.set(0);
            }
        }
    }

    /// Moves back to index 0.
    pub fn reset(&self) {
        self.index.set(0);
    }

    /// Resolves the current sequence and hands the selected element to
    /// `func`, or [`None`] if the sequence is empty.
    ///
    /// If the stored index is out of range for the sequence as it is now, it
    /// is reset to 0 and the first element is used.
    ///
    /// # Panics
    ///
    /// Panics if the source is a [`Source::Shared`] cell that is mutably
    /// borrowed, including from inside `func`.
    pub fn with_state<R, F>(&self, func: F) -> R
    where
        F: FnOnce(Option<&T>) -> R,
    {
        self.source.with(|seq| {
            let index = self.index.get();

            match seq.get(index) {
                Some(item) => func(Some(item)),
                None => {
                    if index != 0 {
                        log_debug!("cycle index {} out of range for len {}, reset to 0", index, seq.len());
                    }
                    self.index.set(0);
                    func(seq.first())
                }
            }
        })
    }

    /// Returns the stored index. This is not checked against the current
    /// sequence; it may be out of range until the next read.
    #[inline]
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Returns the current length of the underlying sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    #[inline]
    pub fn source(&self) -> &Source<T> {
        &self.source
    }
}

impl<T: Clone> CycleSelector<T> {
    /// Returns the currently selected element, or [`None`] if the sequence
    /// is empty. See [`Self::with_state`] for the reset behaviour.
    pub fn state(&self) -> Option<T> {
        self.with_state(|item| item.cloned())
    }

    /// Similar to [`Self::state`], but reports an empty sequence as
    /// [`CycleError::EmptySequence`].
    pub fn try_state(&self) -> Result<T, CycleError> {
        self.state().ok_or(CycleError::EmptySequence)
    }

    /// Returns a plain copy of the sequence as it is right now.
    pub fn get_plain(&self) -> Vec<T> {
        self.source.snapshot()
    }

    /// Returns an iterator over a copy of the sequence, starting at the
    /// selected element and wrapping around once.
    pub fn rotation(&self) -> Rotation<T> {
        self.source.with(|seq| {
            if self.index.get() >= seq.len() {
                self.index.set(0);
            }
            Rotation::new(seq.to_vec(), self.index.get())
        })
    }
}
