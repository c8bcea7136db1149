use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::container::Container;
use crate::error::Error;
use crate::vector::Vector;

/// A LIFO-only view over a backing container, chosen at compile time.
///
/// The backing container is held by value and its indexed operations are not
/// re-exported, so the only way in or out is through the stack discipline.
/// `pop` and `top` on an empty stack fail with [`Error::Empty`]
pub struct Stack<T, C: Container<T> = Vector<T>> {
    inner: C,
    marker: PhantomData<fn() -> T>,
}

impl<T, C: Container<T> + Default> Stack<T, C> {
    pub fn new() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C: Container<T>> Stack<T, C> {
    /// Adapts an existing container. Elements already present become the
    /// bottom of the stack, in order
    pub fn from_container(inner: C) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.inner.push_back(value);
    }

    pub fn pop(&mut self) -> Result<T, Error> {
        self.inner.pop_back()
    }

    pub fn top(&self) -> Result<&T, Error> {
        self.inner.back()
    }

    pub fn top_mut(&mut self) -> Result<&mut T, Error> {
        self.inner.back_mut()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Releases the backing container, bottom element first
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C: Container<T> + Default> Default for Stack<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Container<T> + Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Self {
        Self::from_container(self.inner.clone())
    }
}

impl<T, C: Container<T> + Debug> Debug for Stack<T, C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.inner).finish()
    }
}

/// A LIFO-only view over a boxed container chosen at runtime.
///
/// Behaves exactly like [`Stack`]; the backing storage is a trait object so
/// callers can swap implementations without changing the stack's type
pub struct DynStack<T> {
    inner: Box<dyn Container<T>>,
}

impl<T: 'static> DynStack<T> {
    /// A stack backed by a fresh [`Vector`]
    pub fn new() -> Self {
        Self::with_container(Box::new(Vector::new()))
    }
}

impl<T> DynStack<T> {
    pub fn with_container(inner: Box<dyn Container<T>>) -> Self {
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.inner.push_back(value);
    }

    pub fn pop(&mut self) -> Result<T, Error> {
        self.inner.pop_back()
    }

    pub fn top(&self) -> Result<&T, Error> {
        self.inner.back()
    }

    pub fn top_mut(&mut self) -> Result<&mut T, Error> {
        self.inner.back_mut()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T: 'static> Default for DynStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
