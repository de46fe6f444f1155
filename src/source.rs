use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

/// Where a [`CycleSelector`](crate::CycleSelector) reads its sequence from.
///
/// Every variant is resolved again on each access, so a selector always sees
/// the sequence as it is right now. Cloning a `Source` is cheap and shares the
/// underlying sequence.
pub enum Source<T> {
    /// A sequence that never changes.
    Fixed(Rc<[T]>),
    /// A sequence held in a shared cell. Whoever holds another handle to the
    /// cell may replace or mutate it between selector calls.
    Shared(Rc<RefCell<Vec<T>>>),
    /// A function producing the sequence on demand.
    Supplier(Rc<dyn Fn() -> Vec<T>>),
}

impl<T> Source<T> {
    /// Wraps a function that is called to produce the sequence every time
    /// it is needed.
    pub fn supplier<F>(func: F) -> Self
    where
        F: Fn() -> Vec<T> + 'static,
    {
        Self::Supplier(Rc::new(func))
    }

    /// Resolves the sequence and hands a borrow of it to `func`.
    ///
    /// # Panics
    ///
    /// For [`Source::Shared`], panics if the cell is currently mutably
    /// borrowed, e.g. when called from inside a `borrow_mut` scope on the same
    /// cell.
    pub fn with<R, F>(&self, func: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        match self {
            Self::Fixed(seq) => func(&**seq),
            Self::Shared(cell) => func(cell.borrow().as_slice()),
            Self::Supplier(supplier) => func(supplier().as_slice()),
        }
    }

    /// Returns the current length of the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.with(<[T]>::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Source<T> {
    /// Copies the current sequence out into a plain vector, detached from
    /// the source.
    pub fn snapshot(&self) -> Vec<T> {
        self.with(<[T]>::to_vec)
    }
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(seq) => Self::Fixed(Rc::clone(seq)),
            Self::Shared(cell) => Self::Shared(Rc::clone(cell)),
            Self::Supplier(supplier) => Self::Supplier(Rc::clone(supplier)),
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Fixed(..) => "Fixed",
            Self::Shared(..) => "Shared",
            Self::Supplier(..) => "Supplier",
        };
        f.debug_struct("Source")
            .field("kind", &kind)
            .field("len", &self.len())
            .finish()
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(seq: Vec<T>) -> Self {
        Self::Fixed(seq.into())
    }
}

impl<T> From<Rc<[T]>> for Source<T> {
    fn from(seq: Rc<[T]>) -> Self {
        Self::Fixed(seq)
    }
}

impl<T: Clone> From<&[T]> for Source<T> {
    fn from(seq: &[T]) -> Self {
        Self::Fixed(seq.into())
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Source<T> {
    fn from(seq: [T; N]) -> Self {
        Self::Fixed(Rc::from(seq.to_vec()))
    }
}

impl<T> From<Rc<RefCell<Vec<T>>>> for Source<T> {
    fn from(cell: Rc<RefCell<Vec<T>>>) -> Self {
        Self::Shared(cell)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    use core::cell::Cell;

    use cool_asserts::assert_matches;
    use proptest::prelude::*;

    #[test]
    fn test_from__picks_variant() {
        assert_matches!(Source::from(vec![1, 2, 3]), Source::Fixed(..));
        assert_matches!(Source::from([1, 2, 3]), Source::Fixed(..));
        assert_matches!(Source::from(&[1, 2, 3][..]), Source::Fixed(..));
        assert_matches!(
            Source::from(Rc::new(RefCell::new(vec![1, 2, 3]))),
            Source::Shared(..)
        );
        assert_matches!(Source::supplier(|| vec![1, 2, 3]), Source::Supplier(..));
    }

    #[test]
    fn test_with__shared_sees_mutation() {
        let cell = Rc::new(RefCell::new(vec![1, 2, 3]));
        let source = Source::from(Rc::clone(&cell));

        assert_eq!(source.len(), 3);

        cell.borrow_mut().push(4);
        assert_eq!(source.snapshot(), vec![1, 2, 3, 4]);

        *cell.borrow_mut() = vec![9];
        assert_eq!(source.snapshot(), vec![9]);
    }

    #[test]
    fn test_with__supplier_called_each_time() {
        let calls = Rc::new(Cell::new(0usize));
        let source = Source::supplier({
            let calls = Rc::clone(&calls);
            move || {
                calls.set(calls.get() + 1);
                vec![0; calls.get()]
            }
        });

        assert_eq!(source.len(), 1);
        assert_eq!(source.len(), 2);
        assert_eq!(source.snapshot().len(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_clone__shares_sequence() {
        let cell = Rc::new(RefCell::new(vec!['a']));
        let source = Source::from(Rc::clone(&cell));
        let cloned = source.clone();

        cell.borrow_mut().push('b');
        assert_eq!(cloned.snapshot(), vec!['a', 'b']);
    }

    #[test]
    fn test_debug__shows_kind_and_len() {
        let source = Source::from(vec![1, 2]);
        assert_eq!(format!("{source:?}"), r#"Source { kind: "Fixed", len: 2 }"#);
    }

    proptest! {
        #[test]
        fn test_snapshot__equals_input(values in prop::collection::vec(any::<i32>(), 0..100)) {
            let fixed = Source::from(values.clone());
            let shared = Source::from(Rc::new(RefCell::new(values.clone())));
            let supplied = Source::supplier({
                let values = values.clone();
                move || values.clone()
            });

            assert_eq!(fixed.snapshot(), values);
            assert_eq!(shared.snapshot(), values);
            assert_eq!(supplied.snapshot(), values);
            assert_eq!(fixed.is_empty(), values.is_empty());
        }
    }
}
