use crate::error::Error;

/// The contract every sequence-like structure satisfies, independent of its
/// storage strategy.
///
/// Implementors provide only the unchecked primitives; every bounds and
/// emptiness check lives in the provided methods, so a structure cannot get
/// the checking wrong by construction. The unsafe primitives follow the
/// usual precondition convention: `slot` and `slot_mut` require
/// `index < len()`, `take_last` requires a non-empty container.
pub trait Container<T> {
    /// Number of live elements
    fn len(&self) -> usize;

    /// # Safety
    ///
    /// `index` must be less than `len()`
    unsafe fn slot(&self, index: usize) -> &T;

    /// # Safety
    ///
    /// `index` must be less than `len()`
    unsafe fn slot_mut(&mut self, index: usize) -> &mut T;

    /// Appends `value` as the new last element. Amortized O(1); growth is
    /// the implementor's problem and never fails for valid input
    fn append(&mut self, value: T);

    /// Removes and returns the last element.
    ///
    /// # Safety
    ///
    /// The container must not be empty
    unsafe fn take_last(&mut self) -> T;

    /// Drops all live elements. Capacity, if any, is retained
    fn wipe(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(unsafe { self.slot(index) })
    }

    fn element_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(unsafe { self.slot_mut(index) })
    }

    fn front(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        Ok(unsafe { self.slot(0) })
    }

    fn front_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        Ok(unsafe { self.slot_mut(0) })
    }

    fn back(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        Ok(unsafe { self.slot(self.len() - 1) })
    }

    fn back_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        let last = self.len() - 1;
        Ok(unsafe { self.slot_mut(last) })
    }

    fn push_back(&mut self, value: T) {
        self.append(value);
    }

    /// Removes and returns the last element, or [`Error::Empty`]
    fn pop_back(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        Ok(unsafe { self.take_last() })
    }

    fn clear(&mut self) {
        self.wipe();
    }
}
