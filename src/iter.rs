use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::mem::MaybeUninit;

use crate::container::Container;
use crate::error::Error;
use crate::vector::Vector;

/// Borrowed iterator over a [`Vector`]'s live elements, front to back.
///
/// Traverses the half-open range that was live when the iterator was
/// created; the borrow prevents the vector from reallocating underneath it
pub struct Iter<'a, T> {
    slots: &'a [T],
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self { slots }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (first, rest) = self.slots.split_first()?;
        self.slots = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        let (last, rest) = self.slots.split_last()?;
        self.slots = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { slots: self.slots }
    }
}

/// Mutable counterpart of [`Iter`]
pub struct IterMut<'a, T> {
    slots: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [T]) -> Self {
        Self { slots }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let slots = mem::take(&mut self.slots);
        let (first, rest) = slots.split_first_mut()?;
        self.slots = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        let slots = mem::take(&mut self.slots);
        let (last, rest) = slots.split_last_mut()?;
        self.slots = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator produced by consuming a [`Vector`]
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: Box<[MaybeUninit<T>]>, len: usize) -> Self {
        Self {
            buf,
            front: 0,
            back: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let value = unsafe { self.buf[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Only the unvisited slots still hold live values
        for i in self.front..self.back {
            unsafe {
                self.buf[i].assume_init_drop();
            }
        }
    }
}

/// Iterator yielding only the elements matching a predicate.
///
/// Non-matching elements are skipped during `next`, so a full traversal
/// costs O(n) overall rather than per step, and the exhausted state is
/// reached without advancing past the underlying bound
pub struct FilterIter<'a, T, P> {
    inner: Iter<'a, T>,
    predicate: P,
}

impl<'a, T, P: FnMut(&T) -> bool> FilterIter<'a, T, P> {
    pub(crate) fn new(inner: Iter<'a, T>, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for FilterIter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        for value in self.inner.by_ref() {
            if (self.predicate)(value) {
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<T, P: FnMut(&T) -> bool> FusedIterator for FilterIter<'_, T, P> {}

/// Explicit cursor over any [`Container`], for callers that want to drive
/// the traversal themselves instead of going through [`Iterator`].
///
/// Unlike [`Iterator::next`], [`advance`](Cursor::advance) past the end is
/// an error, not a `None`
pub struct Cursor<'a, T, C: ?Sized = Vector<T>> {
    container: &'a C,
    index: usize,
    marker: PhantomData<fn() -> T>,
}

impl<'a, T, C: Container<T> + ?Sized> Cursor<'a, T, C> {
    /// A cursor positioned at the container's first element
    pub fn new(container: &'a C) -> Self {
        Self {
            container,
            index: 0,
            marker: PhantomData,
        }
    }

    /// Whether the cursor has moved past the last element
    pub fn done(&self) -> bool {
        self.index >= self.container.len()
    }

    /// The element under the cursor, or [`Error::OutOfRange`] when done
    pub fn current(&self) -> Result<&'a T, Error> {
        self.container.element(self.index)
    }

    /// Moves to the next element. Advancing a finished cursor fails with
    /// [`Error::OutOfRange`]
    pub fn advance(&mut self) -> Result<(), Error> {
        if self.done() {
            return Err(Error::OutOfRange {
                index: self.index,
                len: self.container.len(),
            });
        }

        self.index += 1;
        Ok(())
    }
}
