// SPDX-License-Identifier: Apache-2.0

//! A fixed-capacity contiguous vector, stored inline.
//!
//! [`FixedSizeVector`] keeps its live elements at the front of its slot array and
//! dereferences to a slice of them. Capacity overflow never panics or allocates:
//! single-element operations hand back the value, or an end cursor, and bulk
//! operations keep as many elements as fit.
//!
//! ```
//! use fixcap::FixedSizeVector;
//!
//! let mut vector = FixedSizeVector::<i32, 4>::new();
//! vector.insert(0, 0);
//! vector.insert(vector.len(), 1);
//! vector.insert(0, 2);
//! vector.insert(1, 3);
//! assert_eq!(vector, [2, 3, 0, 1]);
//! assert!(vector.insert(0, 4).is_end());
//! ```

use std::{fmt, iter, slice};
use std::cmp::{min, Ordering};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Deref, DerefMut, Range};
use all_asserts::debug_assert_le;
use crate::cursor::{CursorMut, Navigable, NavigableMut};
use crate::slot::{self, Slot};
use crate::traits::RandomAccessTag;
use crate::{trace, Error, MAX_CAPACITY};

/// A vector of at most `N` elements, stored inline.
pub struct FixedSizeVector<T, const N: usize> {
	slots: [Slot<T>; N],
	len: usize,
}

/// An owning iterator over the elements of a vector.
pub struct IntoIter<T, const N: usize> {
	vector: FixedSizeVector<T, N>,
	start: usize,
	end: usize,
}

impl<T, const N: usize> FixedSizeVector<T, N> {
	/// The maximum number of elements.
	pub const CAPACITY: usize = N;

	const VALID: () = assert!(N <= MAX_CAPACITY, "vector capacity exceeds MAX_CAPACITY");

	/// Creates an empty vector.
	pub const fn new() -> Self {
		let () = Self::VALID;
		Self {
			slots: slot::array(),
			len: 0,
		}
	}

	/// Creates a vector of `count` clones of `value`, clamped to the capacity.
	pub fn from_elem(count: usize, value: T) -> Self where T: Clone {
		let mut vector = Self::new();
		vector.assign(count, value);
		vector
	}

	/// Creates a vector of clones of the elements in `values`, clamped to the
	/// capacity.
	pub fn from_slice(values: &[T]) -> Self where T: Clone {
		values.iter().cloned().collect()
	}

	pub const fn capacity(&self) -> usize { N }

	pub const fn max_size(&self) -> usize { N }

	pub const fn len(&self) -> usize { self.len }

	pub const fn is_empty(&self) -> bool { self.len == 0 }

	pub const fn is_full(&self) -> bool { self.len == N }

	/// Returns the number of elements which can be added before the vector is
	/// full.
	pub const fn remaining(&self) -> usize { N - self.len }

	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slot::assume_init_slice(&self.slots[..self.len])
		}
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slot::assume_init_slice_mut(&mut self.slots[..self.len])
		}
	}

	/// Returns the live elements. Equivalent to [`as_slice`](Self::as_slice).
	pub fn data(&self) -> &[T] { self.as_slice() }

	pub fn front(&self) -> Option<&T> { self.as_slice().first() }

	pub fn front_mut(&mut self) -> Option<&mut T> { self.as_mut_slice().first_mut() }

	pub fn back(&self) -> Option<&T> { self.as_slice().last() }

	pub fn back_mut(&mut self) -> Option<&mut T> { self.as_mut_slice().last_mut() }

	/// Returns a reference to the element at `index`, or [`Error::OutOfRange`] if
	/// `index` is not less than the length.
	pub fn at(&self, index: usize) -> crate::Result<&T> {
		let len = self.len;
		self.as_slice()
			.get(index)
			.ok_or(Error::out_of_range(index, len))
	}

	/// Returns a mutable reference to the element at `index`, or
	/// [`Error::OutOfRange`] if `index` is not less than the length.
	pub fn at_mut(&mut self, index: usize) -> crate::Result<&mut T> {
		let len = self.len;
		self.as_mut_slice()
			.get_mut(index)
			.ok_or(Error::out_of_range(index, len))
	}

	/// Appends `value`, returning it if the vector is full.
	pub fn push_back(&mut self, value: T) -> Result<(), T> {
		if self.is_full() { return Err(value) }
		unsafe {
			self.push_unchecked(value);
		}
		Ok(())
	}

	/// Constructs a value with `f` at the back of the vector, returning a reference
	/// to it, or `None` without calling `f` if the vector is full.
	pub fn emplace_back(&mut self, f: impl FnOnce() -> T) -> Option<&mut T> {
		if self.is_full() { return None }
		let value = f();
		Some(unsafe { self.push_unchecked(value) })
	}

	/// Removes the last element and returns it, or `None` if the vector is empty.
	pub fn pop_back(&mut self) -> Option<T> {
		if self.is_empty() { return None }
		self.len -= 1;
		Some(unsafe { self.slots[self.len].read() })
	}

	/// Drops every element.
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Shortens the vector to `len` elements, dropping the rest. Does nothing if
	/// `len` is not less than the current length.
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len { return }

		let end = self.len;
		self.len = len;
		unsafe {
			slot::drop_slice(&mut self.slots[len..end]);
		}
	}

	/// Resizes the vector to `new_len` elements, clamped to the capacity. Grows
	/// with clones of `fill`, or shrinks by dropping the tail.
	pub fn resize(&mut self, new_len: usize, fill: T) where T: Clone {
		if new_len > N {
			trace!("resize to {new_len} clamped to capacity {}", N);
		}

		let new_len = min(new_len, N);
		if new_len <= self.len {
			self.truncate(new_len);
		} else {
			let count = new_len - self.len;
			self.extend(iter::repeat(fill).take(count));
		}
	}

	/// Replaces the contents with `count` clones of `value`, clamped to the
	/// capacity. Returns the new length.
	pub fn assign(&mut self, count: usize, value: T) -> usize where T: Clone {
		if count > N {
			trace!("assigning {count} elements, keeping {}", N);
		}

		self.clear();
		self.extend(iter::repeat(value).take(min(count, N)));
		self.len
	}

	/// Replaces the contents with the items of `iter`, keeping as many as fit.
	/// Returns the new length.
	pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> usize {
		self.clear();
		self.extend(iter);
		self.len
	}

	/// Replaces the contents with clones of `values`, keeping as many as fit.
	/// Returns the new length.
	pub fn assign_slice(&mut self, values: &[T]) -> usize where T: Clone {
		self.assign_iter(values.iter().cloned())
	}

	/// Swaps the contents of two vectors. Elements are swapped pairwise up to the
	/// shorter length, then the longer vector's remaining elements are moved over.
	pub fn swap(&mut self, other: &mut Self) {
		let (long, short) = if self.len >= other.len {
			(self, other)
		} else {
			(other, self)
		};

		let shared = short.len;
		let remaining = long.len;
		long.as_mut_slice()[..shared].swap_with_slice(short.as_mut_slice());

		long.len = shared;
		for i in shared..remaining {
			unsafe {
				let value = long.slots[i].read();
				short.slots[i].write(value);
			}
		}
		short.len = remaining;
	}

	/// Inserts `value` at `pos`, shifting the elements after it toward the back.
	/// Positions past the end are clamped to the end.
	///
	/// Returns a cursor at the inserted element, or an end cursor if the vector is
	/// full, in which case `value` is dropped.
	pub fn insert(&mut self, pos: usize, value: T) -> CursorMut<'_, Self> {
		self.emplace(pos, || value)
	}

	/// Constructs a value with `f` at `pos`, shifting the elements after it toward
	/// the back. Positions past the end are clamped to the end.
	///
	/// Returns a cursor at the new element, or an end cursor without calling `f` if
	/// the vector is full.
	pub fn emplace(&mut self, pos: usize, f: impl FnOnce() -> T) -> CursorMut<'_, Self> {
		if self.is_full() {
			return CursorMut::end(self)
		}

		let pos = min(pos, self.len);
		let value = f();
		unsafe {
			self.push_unchecked(value);
		}
		self.slots[pos..self.len].rotate_right(1);
		CursorMut::at(self, pos)
	}

	/// Inserts `count` clones of `value` at `pos`.
	///
	/// See [`insert_iter`](Self::insert_iter).
	pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> CursorMut<'_, Self>
	where T: Clone {
		self.insert_iter(pos, iter::repeat(value).take(count))
	}

	/// Inserts clones of `values` at `pos`.
	///
	/// See [`insert_iter`](Self::insert_iter).
	pub fn insert_slice(&mut self, pos: usize, values: &[T]) -> CursorMut<'_, Self>
	where T: Clone {
		self.insert_iter(pos, values.iter().cloned())
	}

	/// Inserts the items of `iter` at `pos`, in order, shifting the elements after
	/// `pos` toward the back. Positions past the end are clamped to the end.
	///
	/// Only as many items as there is room for are taken from `iter`, the rest are
	/// left unconsumed. Elements already in the vector are always kept. Returns a cursor at the
	/// first inserted element, or an end cursor if nothing was inserted.
	pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, pos: usize, iter: I) -> CursorMut<'_, Self> {
		let pos = min(pos, self.len);
		let start = self.len;

		let mut iter = iter.into_iter();
		for value in iter.by_ref().take(N - start) {
			unsafe {
				self.push_unchecked(value);
			}
		}

		let inserted = self.len - start;
		if iter.size_hint().0 > 0 {
			trace!("insert at {pos} truncated to {inserted} elements");
		}

		if inserted == 0 {
			return CursorMut::end(self)
		}

		self.slots[pos..self.len].rotate_right(inserted);
		CursorMut::at(self, pos)
	}

	/// Removes the element at `index`, shifting the elements after it toward the
	/// front. Returns `false` if `index` is out of range.
	pub fn erase(&mut self, index: usize) -> bool {
		self.erase_n(index, 1) == 1
	}

	/// Removes up to `count` elements starting at `index`, returning the number
	/// removed.
	pub fn erase_n(&mut self, index: usize, count: usize) -> usize {
		let len = self.len;
		if index >= len { return 0 }

		let count = min(count, len - index);
		let end = index + count;

		// Leak the tail if a destructor panics.
		self.len = index;
		unsafe {
			slot::drop_slice(&mut self.slots[index..end]);
		}
		self.slots[index..len].rotate_left(count);
		self.len = len - count;
		count
	}

	/// Removes the element at `pos`, returning a cursor at the element which
	/// followed it, or an end cursor.
	pub fn erase_at(&mut self, pos: usize) -> CursorMut<'_, Self> {
		self.erase(pos);
		CursorMut::at(self, pos)
	}

	/// Removes the elements in `range`, clamped to the length. Returns a cursor at
	/// the element which followed the range, or an end cursor. Empty or
	/// out-of-range ranges remove nothing.
	pub fn erase_range(&mut self, range: Range<usize>) -> CursorMut<'_, Self> {
		let Range { start, end } = range;
		if start >= end || start >= self.len {
			return CursorMut::end(self)
		}

		self.erase_n(start, end - start);
		CursorMut::at(self, start)
	}

	/// Removes the element at `index` and returns it, or `None` if `index` is out
	/// of range.
	pub fn remove(&mut self, index: usize) -> Option<T> {
		let len = self.len;
		if index >= len { return None }

		let value = unsafe { self.slots[index].read() };
		self.slots[index..len].rotate_left(1);
		self.len = len - 1;
		Some(value)
	}

	/// Iterates over elements front-to-back.
	pub fn iter(&self) -> slice::Iter<'_, T> {
		self.as_slice().iter()
	}

	/// Iterates mutably over elements front-to-back.
	pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
		self.as_mut_slice().iter_mut()
	}

	/// Writes `value` after the last element.
	///
	/// # Safety
	///
	/// The vector must not be full.
	unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
		debug_assert_le!(self.len + 1, N);
		let index = self.len;
		self.len += 1;
		self.slots[index].write(value)
	}
}

impl<T, const N: usize> Drop for FixedSizeVector<T, N> {
	fn drop(&mut self) {
		self.clear()
	}
}

impl<T, const N: usize> Default for FixedSizeVector<T, N> {
	fn default() -> Self { Self::new() }
}

impl<T: Clone, const N: usize> Clone for FixedSizeVector<T, N> {
	fn clone(&self) -> Self {
		self.iter().cloned().collect()
	}

	fn clone_from(&mut self, source: &Self) {
		self.clear();
		self.extend(source.iter().cloned());
	}
}

impl<T, const N: usize> Deref for FixedSizeVector<T, N> {
	type Target = [T];

	fn deref(&self) -> &[T] { self.as_slice() }
}

impl<T, const N: usize> DerefMut for FixedSizeVector<T, N> {
	fn deref_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, const N: usize> AsRef<[T]> for FixedSizeVector<T, N> {
	fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T, const N: usize> AsMut<[T]> for FixedSizeVector<T, N> {
	fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedSizeVector<T, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: PartialEq<U>, U, const N: usize, const M: usize> PartialEq<FixedSizeVector<U, M>> for FixedSizeVector<T, N> {
	fn eq(&self, other: &FixedSizeVector<U, M>) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for FixedSizeVector<T, N> {
	fn eq(&self, other: &[U]) -> bool {
		self.as_slice() == other
	}
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<&[U]> for FixedSizeVector<T, N> {
	fn eq(&self, other: &&[U]) -> bool {
		self.as_slice() == *other
	}
}

impl<T: PartialEq<U>, U, const N: usize, const M: usize> PartialEq<[U; M]> for FixedSizeVector<T, N> {
	fn eq(&self, other: &[U; M]) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Eq, const N: usize> Eq for FixedSizeVector<T, N> { }

/// Lexicographic order over the elements.
impl<T: PartialOrd, const N: usize> PartialOrd for FixedSizeVector<T, N> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.as_slice().partial_cmp(other.as_slice())
	}
}

impl<T: Ord, const N: usize> Ord for FixedSizeVector<T, N> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_slice().cmp(other.as_slice())
	}
}

impl<T: Hash, const N: usize> Hash for FixedSizeVector<T, N> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_slice().hash(state)
	}
}

/// Appends items until the vector is full. Items past the capacity are left in
/// the source iterator.
impl<T, const N: usize> Extend<T> for FixedSizeVector<T, N> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		let mut iter = iter.into_iter();
		for value in iter.by_ref().take(self.remaining()) {
			unsafe {
				self.push_unchecked(value);
			}
		}

		if iter.size_hint().0 > 0 {
			trace!("vector of capacity {} is full, ignoring remaining items", N);
		}
	}
}

impl<T, const N: usize> FromIterator<T> for FixedSizeVector<T, N> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut vector = Self::new();
		vector.extend(iter);
		vector
	}
}

impl<T, const N: usize, const M: usize> From<[T; M]> for FixedSizeVector<T, N> {
	fn from(value: [T; M]) -> Self {
		value.into_iter().collect()
	}
}

impl<T, const N: usize> IntoIterator for FixedSizeVector<T, N> {
	type Item = T;
	type IntoIter = IntoIter<T, N>;

	fn into_iter(mut self) -> IntoIter<T, N> {
		let end = self.len;
		// The iterator now owns the elements.
		self.len = 0;
		IntoIter {
			vector: self,
			start: 0,
			end,
		}
	}
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSizeVector<T, N> {
	type Item = &'a T;
	type IntoIter = slice::Iter<'a, T>;

	fn into_iter(self) -> slice::Iter<'a, T> { self.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedSizeVector<T, N> {
	type Item = &'a mut T;
	type IntoIter = slice::IterMut<'a, T>;

	fn into_iter(self) -> slice::IterMut<'a, T> { self.iter_mut() }
}

impl<T, const N: usize> Navigable for FixedSizeVector<T, N> {
	type Item = T;
	type Category = RandomAccessTag;

	fn size(&self) -> usize { self.len }

	fn item(&self, index: usize) -> Option<&T> { self.as_slice().get(index) }

	fn previous_index(&self, index: usize, offset: usize) -> Option<usize> {
		index.checked_sub(offset)
	}
}

impl<T, const N: usize> NavigableMut for FixedSizeVector<T, N> {
	fn item_mut(&mut self, index: usize) -> Option<&mut T> { self.as_mut_slice().get_mut(index) }
}

impl<T, const N: usize> IntoIter<T, N> {
	/// Returns the remaining elements as a slice.
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slot::assume_init_slice(&self.vector.slots[self.start..self.end])
		}
	}
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.start == self.end { return None }
		let index = self.start;
		self.start += 1;
		Some(unsafe { self.vector.slots[index].read() })
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end - self.start;
		(len, Some(len))
	}
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
	fn next_back(&mut self) -> Option<T> {
		if self.start == self.end { return None }
		self.end -= 1;
		Some(unsafe { self.vector.slots[self.end].read() })
	}
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> { }

impl<T, const N: usize> FusedIterator for IntoIter<T, N> { }

impl<T, const N: usize> Drop for IntoIter<T, N> {
	fn drop(&mut self) {
		let range = self.start..self.end;
		self.start = self.end;
		unsafe {
			slot::drop_slice(&mut self.vector.slots[range]);
		}
	}
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}
