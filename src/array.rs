//! A growable, contiguous array with an explicit capacity growth policy.
//!
//! [`GrowableArray`] keeps its elements in a single boxed slice. The slice is the
//! *capacity* of the array; the leading `len` slots hold the elements and the rest
//! are spare slots holding `T::default()`.
//!
//! # Growth
//!
//! The backing store is only ever replaced by a larger one, and each mutating
//! operation grows it its own way:
//!
//! * [`add`](GrowableArray::add) doubles the capacity (an empty store grows to one slot).
//! * [`add_range`](GrowableArray::add_range) grows to exactly fit the incoming elements.
//! * [`insert`](GrowableArray::insert) grows by exactly one slot.
//!
//! Existing elements keep their indices across a reallocation.

use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FromIterator,
    mem,
    ops::{Index, IndexMut},
};

use crate::{
    error::{Error, Result},
    iter::{IntoIter, Iter},
};

/// Capacity of an array built with [`GrowableArray::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// A resizable array that tracks its logical length separately from the size of
/// its backing store.
///
/// Operations that create or vacate slots require `T: Default`, since unused
/// slots are filled with default values. Reading never requires it.
///
/// # Examples
///
/// ```
/// # use growable_array::GrowableArray;
/// let mut array = GrowableArray::with_capacity(2);
/// array.add(1);
/// array.add(2);
/// array.add(3);
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.capacity(), 4);
/// assert_eq!(array, [1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct GrowableArray<T> {
    store: Box<[T]>,
    len: usize,
}

impl<T> GrowableArray<T> {
    /// The number of elements in the array.
    ///
    /// Time: O(1)
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of slots in the backing store.
    ///
    /// Time: O(1)
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if both arguments are the same array.
    ///
    /// Equality through `==` compares elements; this compares identity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growable_array::{growable, GrowableArray};
    /// let left = growable![1, 2, 3];
    /// let right = left.clone();
    ///
    /// assert_eq!(left, right);
    /// assert!(GrowableArray::ptr_eq(&left, &left));
    /// assert!(!GrowableArray::ptr_eq(&left, &right));
    /// ```
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        std::ptr::eq(this, other)
    }

    /// The elements of the array, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.store[..self.len]
    }

    /// The elements of the array, mutably. Spare slots are not included.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.store[..self.len]
    }

    /// The unused tail of the backing store, `len..capacity`.
    pub fn spare_capacity(&self) -> &[T] {
        &self.store[self.len..]
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a reference to the slot at `index`.
    ///
    /// Bounds are checked against the capacity of the backing store, not the length:
    /// spare slots past the last element are addressable and hold default values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growable_array::{ErrorKind, GrowableArray};
    /// let array: GrowableArray<i32> = GrowableArray::new();
    ///
    /// assert_eq!(array.get(7), Ok(&0));
    /// assert_eq!(array.get(8).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let capacity = self.capacity();
        self.store
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, capacity })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let capacity = self.capacity();
        self.store
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, capacity })
    }

    /// Overwrites the slot at `index`, returning the value it held.
    ///
    /// Writing to a spare slot does not change the length of the array.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Returns a fresh iterator over the elements of the array.
    ///
    /// Spare slots are not visited.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growable_array::GrowableArray;
    /// let mut array = GrowableArray::new();
    /// array.add(1usize);
    /// array.add(2);
    ///
    /// assert_eq!(array.capacity(), 8);
    /// assert_eq!(array.iter().sum::<usize>(), 3);
    /// assert_eq!(array.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(
            self.len <= self.capacity(),
            "length {} exceeds capacity {}",
            self.len,
            self.capacity()
        );
    }
}

#[cfg(test)]
impl<T: Default + PartialEq + fmt::Debug> GrowableArray<T> {
    pub(crate) fn assert_spare_slots_default(&self) {
        assert!(
            self.spare_capacity().iter().all(|slot| *slot == T::default()),
            "spare slots hold non-default values: {:?}",
            self.spare_capacity()
        );
    }
}

impl<T: Default> GrowableArray<T> {
    /// Construct an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Construct an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        GrowableArray {
            store: default_slots(capacity),
            len: 0,
        }
    }

    /// Construct an empty array from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCapacity`] if `capacity` is below zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growable_array::{ErrorKind, GrowableArray};
    /// let array = GrowableArray::<u8>::try_with_capacity(2).unwrap();
    /// assert_eq!(array.capacity(), 2);
    ///
    /// let err = GrowableArray::<u8>::try_with_capacity(-1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn try_with_capacity(capacity: isize) -> Result<Self> {
        usize::try_from(capacity)
            .map(Self::with_capacity)
            .map_err(|_| Error::NegativeCapacity(capacity))
    }

    /// Append a value to the end of the array.
    ///
    /// A full array doubles its capacity first; an array with no capacity at all
    /// grows to a single slot.
    ///
    /// Time: amortized O(1)
    pub fn add(&mut self, value: T) {
        if self.len == self.capacity() {
            let capacity = match self.capacity() {
                0 => 1,
                capacity => capacity * 2,
            };
            self.grow_to(capacity, "add");
        }

        self.store[self.len] = value;
        self.len += 1;
    }

    /// Append every element of `sequence`, in order.
    ///
    /// When the spare capacity cannot hold the whole sequence, the store is resized
    /// once to fit it exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] if `sequence` has no elements. The array is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growable_array::growable;
    /// let mut array = growable![1, 2];
    /// array.add_range(vec![3, 4, 5]).unwrap();
    ///
    /// assert_eq!(array, [1, 2, 3, 4, 5]);
    /// assert_eq!(array.capacity(), 5);
    /// assert!(array.add_range(Vec::new()).is_err());
    /// ```
    pub fn add_range<I>(&mut self, sequence: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut items = sequence.into_iter();
        let count = items.len();

        if count == 0 {
            return Err(Error::EmptySequence);
        }

        if self.capacity() - self.len < count {
            self.grow_to(self.len + count, "add_range");
        }

        let start = self.len;
        for (slot, item) in self.store[start..start + count]
            .iter_mut()
            .zip(items.by_ref())
        {
            *slot = item;
            self.len += 1;
        }

        debug_assert_eq!(
            self.len,
            start + count,
            "sequence yielded fewer items than it reported"
        );
        debug_assert!(
            items.next().is_none(),
            "sequence yielded more items than it reported"
        );

        Ok(())
    }

    /// Remove the element at `index`, shifting everything after it one slot left.
    ///
    /// `index == len` is accepted and drops the last element. Returns `false`
    /// without touching the array when `index > len` or the array is empty.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use growable_array::growable;
    /// let mut array = growable![1, 2, 3];
    ///
    /// assert!(array.remove(1));
    /// assert_eq!(array, [1, 3]);
    /// assert!(!array.remove(5));
    /// ```
    pub fn remove(&mut self, index: usize) -> bool {
        if self.len == 0 || index > self.len {
            return false;
        }

        if index < self.len {
            self.store[index..self.len].rotate_left(1);
        }

        self.len -= 1;
        self.store[self.len] = T::default();
        true
    }

    /// Insert `item` at `index`, shifting everything from `index` onward one slot
    /// right.
    ///
    /// A full array grows by exactly one slot.
    ///
    /// Time: O(n)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`. The array is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growable_array::growable;
    /// let mut array = growable![1, 2, 3, 4, 5];
    /// array.insert(3, 2).unwrap();
    ///
    /// assert_eq!(array, [1, 2, 3, 2, 4, 5]);
    /// assert_eq!(array.capacity(), 6);
    /// assert!(array.insert(7, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        if self.len == self.capacity() {
            self.grow_to(self.len + 1, "insert");
        }

        self.len += 1;

        // Carry the displaced value right until it lands in the old spare slot
        let mut displaced = mem::replace(&mut self.store[index], item);
        for slot in &mut self.store[index + 1..self.len] {
            displaced = mem::replace(slot, displaced);
        }

        Ok(())
    }

    fn grow_to(&mut self, capacity: usize, reason: &'static str) {
        debug_assert!(capacity >= self.capacity());

        tracing::trace!(
            from = self.capacity(),
            to = capacity,
            reason,
            "growing backing store"
        );

        let mut store = mem::take(&mut self.store).into_vec();
        store.resize_with(capacity, T::default);
        self.store = store.into_boxed_slice();
    }
}

fn default_slots<T: Default>(capacity: usize) -> Box<[T]> {
    std::iter::repeat_with(T::default).take(capacity).collect()
}

impl<T: Default> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.store[index]
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.store[index]
    }
}

/// Views the elements, like [`GrowableArray::as_slice`].
impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for GrowableArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowableArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for GrowableArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        GrowableArray {
            store: vec.into_boxed_slice(),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(array: [T; N]) -> Self {
        Vec::from(array).into()
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(slice: &[T]) -> Self {
        slice.to_vec().into()
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T: Default> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut items = self.store.into_vec();
        items.truncate(self.len);
        IntoIter::new(items)
    }
}

#[cfg(test)]
mod proptests;


#[cfg(test)]
mod string_api_tests {
    public_api_tests!(String, |i: usize| format!("item-{}", i));
}
