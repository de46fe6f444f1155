use core::iter::FusedIterator;
use std::vec::IntoIter as VecIntoIter;

/// Owning iterator over a snapshot of a sequence, starting at a given
/// position and wrapping around once.
///
/// Returned by [`CycleSelector::rotation`](crate::CycleSelector::rotation).
#[derive(Clone, Debug)]
pub struct Rotation<T> {
    pub(crate) head: VecIntoIter<T>,
    pub(crate) tail: VecIntoIter<T>,
}

impl<T> Rotation<T> {
    /// Splits `seq` so iteration yields `seq[start..]` followed by
    /// `seq[..start]`. A `start` past the end yields `seq` unrotated.
    pub(crate) fn new(mut seq: Vec<T>, start: usize) -> Self {
        let start = if start < seq.len() { start } else { 0 };
        let head = seq.split_off(start);

        Self {
            head: head.into_iter(),
            tail: seq.into_iter(),
        }
    }
}

impl<T> Iterator for Rotation<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.next().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Rotation<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.next_back())
    }
}

impl<T> ExactSizeIterator for Rotation<T> {}
impl<T> FusedIterator for Rotation<T> {}
