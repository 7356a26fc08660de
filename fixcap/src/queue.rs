// SPDX-License-Identifier: Apache-2.0

//! A fixed-capacity FIFO ring buffer, stored inline.

use std::{fmt, mem, slice};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut, Range};
use all_asserts::{debug_assert_le, debug_assert_lt};
use crate::cursor::{Navigable, NavigableMut};
use crate::slot::{self, Slot};
use crate::traits::ForwardTag;
use crate::{trace, MAX_CAPACITY};

/// A first-in-first-out queue of at most `N` elements, based on a ring buffer.
///
/// Elements are pushed at the back and popped from the front. Logical index `i`
/// lives at physical slot `(head + i) % N`; the head moves forward on every pop,
/// wrapping around at the end of the slot array.
pub struct CircularQueue<T, const N: usize> {
	slots: [Slot<T>; N],
	head: usize,
	len: usize,
}

pub struct Iter<'a, T: 'a> {
	a: slice::Iter<'a, T>,
	b: slice::Iter<'a, T>,
}

pub struct IterMut<'a, T: 'a> {
	a: slice::IterMut<'a, T>,
	b: slice::IterMut<'a, T>,
}

/// An owning iterator, popping elements front-to-back.
pub struct IntoIter<T, const N: usize> {
	queue: CircularQueue<T, N>,
}

impl<T, const N: usize> CircularQueue<T, N> {
	/// The maximum number of elements.
	pub const CAPACITY: usize = N;

	const VALID: () = assert!(N <= MAX_CAPACITY, "queue capacity exceeds MAX_CAPACITY");

	/// Creates an empty queue.
	pub const fn new() -> Self {
		let () = Self::VALID;
		Self {
			slots: slot::array(),
			head: 0,
			len: 0,
		}
	}

	pub const fn capacity(&self) -> usize { N }

	pub const fn max_size(&self) -> usize { N }

	pub const fn len(&self) -> usize { self.len }

	pub const fn is_empty(&self) -> bool { self.len == 0 }

	pub const fn is_full(&self) -> bool { self.len == N }

	/// Returns a reference to the element at logical `index`.
	pub fn get(&self, index: usize) -> Option<&T> {
		(index < self.len).then(|| unsafe {
			self.slots[self.wrap(index)].assume_init_ref()
		})
	}

	/// Returns a mutable reference to the element at logical `index`.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		if index < self.len {
			let index = self.wrap(index);
			Some(unsafe { self.slots[index].assume_init_mut() })
		} else {
			None
		}
	}

	/// Returns a reference to the front element, or `None` if the queue is empty.
	pub fn front(&self) -> Option<&T> {
		self.get(0)
	}

	/// Returns a mutable reference to the front element, or `None` if the queue is
	/// empty.
	pub fn front_mut(&mut self) -> Option<&mut T> {
		self.get_mut(0)
	}

	/// Returns a reference to the back element, or `None` if the queue is empty.
	pub fn back(&self) -> Option<&T> {
		self.get(self.len.wrapping_sub(1))
	}

	/// Returns a mutable reference to the back element, or `None` if the queue is
	/// empty.
	pub fn back_mut(&mut self) -> Option<&mut T> {
		self.get_mut(self.len.wrapping_sub(1))
	}

	/// Appends `value` to the back of the queue, returning it if the queue is full.
	pub fn push_back(&mut self, value: T) -> Result<(), T> {
		if self.is_full() { return Err(value) }
		unsafe {
			self.push_unchecked(value);
		}
		Ok(())
	}

	/// Alias of [`push_back`](Self::push_back).
	pub fn push(&mut self, value: T) -> Result<(), T> {
		self.push_back(value)
	}

	/// Constructs a value with `f` at the back of the queue, returning a reference
	/// to it, or `None` without calling `f` if the queue is full.
	pub fn emplace_back(&mut self, f: impl FnOnce() -> T) -> Option<&mut T> {
		if self.is_full() { return None }
		let value = f();
		Some(unsafe { self.push_unchecked(value) })
	}

	/// Alias of [`emplace_back`](Self::emplace_back).
	pub fn emplace(&mut self, f: impl FnOnce() -> T) -> Option<&mut T> {
		self.emplace_back(f)
	}

	/// Removes the front element and returns it, or `None` if the queue is empty.
	pub fn pop_front(&mut self) -> Option<T> {
		if self.is_empty() { return None }

		let head = self.head;
		self.head = self.wrap(1);
		self.len -= 1;
		Some(unsafe { self.slots[head].read() })
	}

	/// Alias of [`pop_front`](Self::pop_front).
	pub fn pop(&mut self) -> Option<T> {
		self.pop_front()
	}

	/// Drops every element. The next push writes to the first slot.
	pub fn clear(&mut self) {
		let (a, b) = self.slice_ranges();
		// Emptied first: a panicking destructor leaks the rest.
		self.head = 0;
		self.len = 0;
		unsafe {
			slot::drop_slice(&mut self.slots[a]);
			slot::drop_slice(&mut self.slots[b]);
		}
	}

	/// Swaps the contents of two queues. Elements are swapped pairwise up to the
	/// shorter length, then the longer queue's remaining elements are moved over.
	pub fn swap(&mut self, other: &mut Self) {
		let (long, short) = if self.len >= other.len {
			(self, other)
		} else {
			(other, self)
		};

		let shared = short.len;
		for i in 0..shared {
			mem::swap(&mut long[i], &mut short[i]);
		}

		let remaining = long.len;
		long.len = shared;
		for i in shared..remaining {
			let index = long.wrap(i);
			unsafe {
				let value = long.slots[index].read();
				short.push_unchecked(value);
			}
		}
	}

	/// Iterates over elements front-to-back.
	pub fn iter(&self) -> Iter<'_, T> {
		let (a, b) = self.as_slices();
		Iter {
			a: a.iter(),
			b: b.iter()
		}
	}

	/// Iterates mutably over elements front-to-back.
	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		let (a, b) = self.as_mut_slices();
		IterMut {
			a: a.iter_mut(),
			b: b.iter_mut()
		}
	}

	/// Returns a pair of slices which contain the contents of the queue, in order.
	/// The second slice is empty unless the contents wrap around the end of the
	/// slot array.
	pub fn as_slices(&self) -> (&[T], &[T]) {
		let (a, b) = self.slice_ranges();
		unsafe {
			(slot::assume_init_slice(&self.slots[a]),
			 slot::assume_init_slice(&self.slots[b]))
		}
	}

	/// Returns a pair of mutable slices which contain the contents of the queue.
	pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
		let (a, b) = self.slice_ranges();
		// The wrapped range ends at or before the head, so splitting at the head
		// separates the two.
		let (front, back) = self.slots.split_at_mut(a.start);
		unsafe {
			(slot::assume_init_slice_mut(&mut back[..a.len()]),
			 slot::assume_init_slice_mut(&mut front[b]))
		}
	}
}

impl<T, const N: usize> CircularQueue<T, N> {
	/// Writes `value` after the back element.
	///
	/// # Safety
	///
	/// The queue must not be full.
	unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
		debug_assert_lt!(self.len, N);
		let index = self.wrap(self.len);
		self.len += 1;
		self.slots[index].write(value)
	}

	fn wrap(&self, index: usize) -> usize {
		Self::wrap_idx(self.head + index)
	}

	fn wrap_idx(index: usize) -> usize {
		debug_assert_lt!(index, 2 * N);
		if index >= N {
			index - N
		} else {
			index
		}
	}

	fn slice_ranges(&self) -> (Range<usize>, Range<usize>) {
		let len = self.len;
		if len == 0 {
			return (0..0, 0..0)
		}

		let start = self.head;
		let head_len = N - start;
		if head_len >= len {
			(start..start + len, 0..0)
		} else {
			let tail_len = len - head_len;
			debug_assert_le!(tail_len, start);
			(start..N, 0..tail_len)
		}
	}
}

impl<T, const N: usize> Drop for CircularQueue<T, N> {
	fn drop(&mut self) {
		self.clear()
	}
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
	fn default() -> Self { Self::new() }
}

/// Copies element-wise in logical order. The copy starts at the first slot,
/// regardless of where the source's head is.
impl<T: Clone, const N: usize> Clone for CircularQueue<T, N> {
	fn clone(&self) -> Self {
		self.iter().cloned().collect()
	}

	fn clone_from(&mut self, source: &Self) {
		self.clear();
		self.extend(source.iter().cloned());
	}
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for CircularQueue<T, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T, const N: usize> Index<usize> for CircularQueue<T, N> {
	type Output = T;

	fn index(&self, index: usize) -> &T {
		let len = self.len;
		match self.get(index) {
			Some(value) => value,
			None => panic!("index {index} is out of range for length {len}")
		}
	}
}

impl<T, const N: usize> IndexMut<usize> for CircularQueue<T, N> {
	fn index_mut(&mut self, index: usize) -> &mut T {
		let len = self.len;
		match self.get_mut(index) {
			Some(value) => value,
			None => panic!("index {index} is out of range for length {len}")
		}
	}
}

impl<T: Eq, const N: usize> Eq for CircularQueue<T, N> { }

impl<T: PartialEq<U>, U, const N: usize, const M: usize> PartialEq<CircularQueue<U, M>> for CircularQueue<T, N> {
	fn eq(&self, other: &CircularQueue<U, M>) -> bool {
		self.len == other.len &&
		self.iter().eq(other.iter())
	}
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for CircularQueue<T, N> {
	fn eq(&self, other: &[U]) -> bool {
		self.len == other.len() && self.iter().eq(other)
	}
}

impl<T: PartialEq<U>, U, const N: usize, const M: usize> PartialEq<[U; M]> for CircularQueue<T, N> {
	fn eq(&self, other: &[U; M]) -> bool {
		self == other.as_slice()
	}
}

/// Pushes items until the queue is full. Items past the capacity are left in
/// the source iterator.
impl<T, const N: usize> Extend<T> for CircularQueue<T, N> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		let mut iter = iter.into_iter();
		for value in iter.by_ref().take(N - self.len) {
			unsafe {
				self.push_unchecked(value);
			}
		}

		if iter.size_hint().0 > 0 {
			trace!("queue of capacity {} is full, ignoring remaining items", N);
		}
	}
}

impl<T, const N: usize> FromIterator<T> for CircularQueue<T, N> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut queue = Self::new();
		queue.extend(iter);
		queue
	}
}

impl<T, const N: usize> IntoIterator for CircularQueue<T, N> {
	type Item = T;
	type IntoIter = IntoIter<T, N>;

	fn into_iter(self) -> IntoIter<T, N> {
		IntoIter { queue: self }
	}
}

impl<'a, T, const N: usize> IntoIterator for &'a CircularQueue<T, N> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut CircularQueue<T, N> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	fn into_iter(self) -> IterMut<'a, T> { self.iter_mut() }
}

impl<T, const N: usize> Navigable for CircularQueue<T, N> {
	type Item = T;
	type Category = ForwardTag;

	fn size(&self) -> usize { self.len }

	fn item(&self, index: usize) -> Option<&T> { self.get(index) }
}

impl<T, const N: usize> NavigableMut for CircularQueue<T, N> {
	fn item_mut(&mut self, index: usize) -> Option<&mut T> { self.get_mut(index) }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		if self.a.len() == 0 {
			self.a = mem::take(&mut self.b);
		}
		self.a.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	fn last(mut self) -> Option<&'a T> { self.next_back() }

	fn fold<B, F>(self, init: B, mut f: F) -> B
	where F: FnMut(B, Self::Item) -> B {
		let acc = self.a.fold(init, &mut f);
		self.b.fold(acc, f)
	}
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
	fn next_back(&mut self) -> Option<&'a T> {
		if self.b.len() == 0 {
			self.b = mem::take(&mut self.a);
		}
		self.b.next_back()
	}

	fn rfold<B, F>(self, init: B, mut f: F) -> B
	where F: FnMut(B, Self::Item) -> B {
		let acc = self.b.rfold(init, &mut f);
		self.a.rfold(acc, f)
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {
	fn len(&self) -> usize {
		self.a.len() + self.b.len()
	}
}

impl<T> FusedIterator for Iter<'_, T> { }

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self {
			a: self.a.clone(),
			b: self.b.clone()
		}
	}
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
	type Item = &'a mut T;

	fn next(&mut self) -> Option<&'a mut T> {
		if self.a.len() == 0 {
			self.a = mem::take(&mut self.b);
		}
		self.a.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	fn last(mut self) -> Option<&'a mut T> { self.next_back() }

	fn fold<B, F>(self, init: B, mut f: F) -> B
	where F: FnMut(B, Self::Item) -> B {
		let acc = self.a.fold(init, &mut f);
		self.b.fold(acc, f)
	}
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
	fn next_back(&mut self) -> Option<&'a mut T> {
		if self.b.len() == 0 {
			self.b = mem::take(&mut self.a);
		}
		self.b.next_back()
	}

	fn rfold<B, F>(self, init: B, mut f: F) -> B
	where F: FnMut(B, Self::Item) -> B {
		let acc = self.b.rfold(init, &mut f);
		self.a.rfold(acc, f)
	}
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
	fn len(&self) -> usize {
		self.a.len() + self.b.len()
	}
}

impl<T> FusedIterator for IterMut<'_, T> { }

impl<T, const N: usize> Iterator for IntoIter<T, N> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		self.queue.pop_front()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.queue.len();
		(len, Some(len))
	}
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> { }

impl<T, const N: usize> FusedIterator for IntoIter<T, N> { }

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.queue).finish()
	}
}
