//! Iterators over a [`GrowableArray`].

use std::iter::FusedIterator;

use crate::array::GrowableArray;

/// Borrowing iterator over the elements of a [`GrowableArray`].
///
/// Created by [`GrowableArray::iter`]. Each call produces an independent cursor, so
/// traversals can be restarted at will.
pub struct Iter<'a, T> {
    array: &'a GrowableArray<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(array: &'a GrowableArray<T>) -> Self {
        Iter {
            array,
            front: 0,
            back: array.len(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            array: self.array,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let item = self.array.as_slice().get(self.front);
        self.front += 1;
        item
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        self.array.as_slice().get(self.back)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator over the elements of a [`GrowableArray`].
///
/// Spare slots are dropped up front; only the elements are yielded.
pub struct IntoIter<T>(std::vec::IntoIter<T>);

impl<T> IntoIter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        IntoIter(items.into_iter())
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    impl_iter!();
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
