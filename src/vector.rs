use std::fmt::{self, Debug, Formatter};
use std::iter::repeat_with;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::container::Container;
use crate::error::Error;
use crate::iter::{Cursor, FilterIter, IntoIter, Iter, IterMut};

/// Contiguous growable storage satisfying the [`Container`] contract.
///
/// The buffer is exclusively owned: cloning deep-copies every element and the
/// clone never shares storage with the original. Slots `[0, len)` hold live
/// elements, slots `[len, capacity)` are reserved but uninitialized. Growth
/// doubles the capacity (`max(1, capacity * 2)`), so `push_back` is
/// amortized O(1); a reallocation moves the live elements in order and
/// discards the old buffer
pub struct Vector<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self {
            buf: alloc_slots(0),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: alloc_slots(capacity),
            len: 0,
        }
    }

    /// Number of slots available before the next reallocation
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The live elements as a slice
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr() as *mut T, self.len) }
    }

    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.as_slice())
    }

    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Iterates over the elements matching `predicate`, skipping the rest
    pub fn iter_filtered<P: FnMut(&T) -> bool>(&self, predicate: P) -> FilterIter<T, P> {
        FilterIter::new(self.iter(), predicate)
    }

    /// An explicit cursor positioned at the first element
    pub fn cursor(&self) -> Cursor<T, Self> {
        Cursor::new(self)
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot to the
    /// right. `index == len` appends
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        if self.len == self.capacity() {
            self.grow();
        }

        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            base.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot to the left
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        unsafe {
            let base = self.buf.as_mut_ptr();
            let value = base.add(index).read().assume_init();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    fn grow(&mut self) {
        let new_capacity = usize::max(1, self.capacity() * 2);
        self.reallocate(new_capacity);
    }

    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);

        let mut new_buf = alloc_slots(new_capacity);

        for i in 0..self.len {
            new_buf[i] = MaybeUninit::new(unsafe { self.buf[i].assume_init_read() });
        }

        // The old buffer now holds moved-out slots; dropping the box frees
        // the allocation without touching them
        self.buf = new_buf;
    }

    pub(crate) fn into_parts(self) -> (Box<[MaybeUninit<T>]>, usize) {
        let mut this = ManuallyDrop::new(self);
        let buf = mem::take(&mut this.buf);
        (buf, this.len)
    }
}

impl<T: Clone> Vector<T> {
    /// A vector of `len` clones of `value`, with capacity `max(len, 1)`
    pub fn with_fill(len: usize, value: T) -> Self {
        let mut result = Self::with_capacity(usize::max(len, 1));

        for _ in 0..len {
            result.append(value.clone());
        }

        result
    }
}

fn alloc_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    repeat_with(MaybeUninit::uninit).take(capacity).collect()
}

impl<T> Container<T> for Vector<T> {
    fn len(&self) -> usize {
        self.len
    }

    unsafe fn slot(&self, index: usize) -> &T {
        self.buf.get_unchecked(index).assume_init_ref()
    }

    unsafe fn slot_mut(&mut self, index: usize) -> &mut T {
        self.buf.get_unchecked_mut(index).assume_init_mut()
    }

    fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.buf[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    unsafe fn take_last(&mut self) -> T {
        self.len -= 1;
        self.buf.get_unchecked(self.len).assume_init_read()
    }

    fn wipe(&mut self) {
        // Zero the length first so a panicking destructor cannot lead to a
        // double drop
        let len = self.len;
        self.len = 0;

        for i in 0..len {
            unsafe {
                self.buf.get_unchecked_mut(i).assume_init_drop();
            }
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut result = Self::with_capacity(self.capacity());

        for value in self.iter() {
            result.append(value.clone());
        }

        result
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.element(index).unwrap()
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.element_mut(index).unwrap()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.as_slice(), f)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_parts();
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: Serialize> Serialize for Vector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;

        for value in self.iter() {
            seq.serialize_element(value)?;
        }

        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::deserialize(deserializer).map(Self::from)
    }
}
