// SPDX-License-Identifier: Apache-2.0

//! A generic cursor engine. Collections implement [`Navigable`], a neighbor-lookup
//! contract over logical indices; [`Cursor`] and [`CursorMut`] drive it in either
//! direction.
//!
//! A cursor holds a reference to its collection and a 32-bit index relative to its
//! direction, with `u32::MAX` reserved for the end position. Reverse cursors count
//! from the last element, so `rbegin` has index `0` and `rend` index `len`. Moving
//! a cursor past either end of the collection turns it into an end cursor; moving
//! an end cursor does nothing.
//!
//! Cursors borrow their collection, so any mutation of the collection ends the
//! lifetime of every cursor over it.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};
use std::ptr;
use crate::traits::{Category, RandomAccess, Reversible};
use crate::{Error, Result};

/// The raw index of an end cursor.
pub const END: u32 = u32::MAX;

/// A collection which cursors can move through, by looking up the neighbors of
/// an element at a logical index.
pub trait Navigable {
	type Item;
	type Category: Category;

	/// Returns the number of elements in the collection.
	fn size(&self) -> usize;

	/// Returns a reference to the element at logical `index`.
	fn item(&self, index: usize) -> Option<&Self::Item>;

	/// Returns the index `offset` elements after `index`, or `None` if it is past
	/// the last element.
	fn next_index(&self, index: usize, offset: usize) -> Option<usize> {
		index.checked_add(offset)
			 .filter(|&next| next < self.size())
	}

	/// Returns the index `offset` elements before `index`, or `None` if it is
	/// before the first element. Forward-only collections keep the default, which
	/// never finds a neighbor.
	fn previous_index(&self, index: usize, offset: usize) -> Option<usize> {
		let _ = (index, offset);
		None
	}

	/// Returns a cursor at the first element.
	fn begin(&self) -> Cursor<'_, Self> {
		Cursor::begin(self)
	}

	/// Returns a cursor past the last element.
	fn end(&self) -> Cursor<'_, Self> {
		Cursor::end(self)
	}

	fn cbegin(&self) -> Cursor<'_, Self> { self.begin() }

	fn cend(&self) -> Cursor<'_, Self> { self.end() }

	/// Returns a reverse cursor at the last element.
	fn rbegin(&self) -> RevCursor<'_, Self>
	where Self::Category: Reversible {
		Cursor::begin(self)
	}

	/// Returns a reverse cursor before the first element.
	fn rend(&self) -> RevCursor<'_, Self>
	where Self::Category: Reversible {
		Cursor::end(self)
	}

	fn crbegin(&self) -> RevCursor<'_, Self>
	where Self::Category: Reversible {
		self.rbegin()
	}

	fn crend(&self) -> RevCursor<'_, Self>
	where Self::Category: Reversible {
		self.rend()
	}
}

/// A [`Navigable`] collection whose elements can be mutated through cursors.
pub trait NavigableMut: Navigable {
	/// Returns a mutable reference to the element at logical `index`.
	fn item_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

	fn begin_mut(&mut self) -> CursorMut<'_, Self> {
		CursorMut::begin(self)
	}

	fn end_mut(&mut self) -> CursorMut<'_, Self> {
		CursorMut::end(self)
	}

	fn rbegin_mut(&mut self) -> RevCursorMut<'_, Self>
	where Self::Category: Reversible {
		CursorMut::begin(self)
	}

	fn rend_mut(&mut self) -> RevCursorMut<'_, Self>
	where Self::Category: Reversible {
		CursorMut::end(self)
	}
}

/// A cursor traversal direction.
pub trait Direction: Copy + Default + fmt::Debug + 'static {
	const REVERSED: bool;
	/// The opposite direction.
	type Flip: Direction<Flip = Self>;
}

/// Front-to-back traversal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Forward;

/// Back-to-front traversal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Reverse;

impl Direction for Forward {
	const REVERSED: bool = false;
	type Flip = Reverse;
}

impl Direction for Reverse {
	const REVERSED: bool = true;
	type Flip = Forward;
}

pub type RevCursor<'a, C> = Cursor<'a, C, Reverse>;
pub type RevCursorMut<'a, C> = CursorMut<'a, C, Reverse>;

/// Mirrors a logical index into a reverse-relative one, and vice versa.
fn mirror(len: usize, index: usize) -> usize {
	len - index - 1
}

/// Converts a direction-relative raw index into a logical index.
fn logical<C: Navigable + ?Sized, D: Direction>(collection: &C, index: u32) -> Option<usize> {
	if index == END {
		return None
	}

	let index = index as usize;
	Some(if D::REVERSED { mirror(collection.size(), index) } else { index })
}

/// Converts a logical index into a direction-relative raw index, clamping to the
/// end index if out of range.
fn relative<C: Navigable + ?Sized, D: Direction>(collection: &C, index: usize) -> u32 {
	let len = collection.size();
	match index {
		i if i >= len => END,
		i if D::REVERSED => mirror(len, i) as u32,
		i => i as u32
	}
}

/// Moves `index` by `offset`, ahead in the cursor direction if `ahead` is `true`,
/// or back otherwise. Reverse cursors look up previous neighbors to move ahead.
fn step<C: Navigable + ?Sized, D: Direction>(
	collection: &C,
	index: u32,
	offset: usize,
	ahead: bool
) -> u32 {
	let Some(current) = logical::<C, D>(collection, index) else {
		return END
	};

	let target = if ahead != D::REVERSED {
		collection.next_index(current, offset)
	} else {
		collection.previous_index(current, offset)
	};
	target.map_or(END, |target| relative::<C, D>(collection, target))
}

// Cursor

/// A read-only cursor over a [`Navigable`] collection.
pub struct Cursor<'a, C: ?Sized, D = Forward> {
	collection: Option<&'a C>,
	index: u32,
	_direction: PhantomData<D>,
}

impl<'a, C: Navigable + ?Sized, D: Direction> Cursor<'a, C, D> {
	/// Creates a cursor at the first element in direction `D`, or at the end if
	/// the collection is empty.
	pub fn begin(collection: &'a C) -> Self {
		let index = if collection.size() > 0 { 0 } else { END };
		Self::new(collection, index)
	}

	/// Creates an end cursor.
	pub fn end(collection: &'a C) -> Self {
		Self::new(collection, END)
	}

	/// Creates a cursor at logical `index`, or at the end if `index` is out of
	/// range.
	pub fn at(collection: &'a C, index: usize) -> Self {
		Self::new(collection, relative::<C, D>(collection, index))
	}

	fn new(collection: &'a C, index: u32) -> Self {
		Self {
			collection: Some(collection),
			index,
			_direction: PhantomData,
		}
	}

	/// Returns the collection, or `None` for a detached cursor.
	pub fn collection(&self) -> Option<&'a C> { self.collection }

	/// Returns `true` if the cursor is past the last element.
	pub fn is_end(&self) -> bool { self.index == END }

	/// Returns `true` if the cursor points to an element.
	pub fn has_value(&self) -> bool { !self.is_end() }

	/// Returns the current element, or `None` at the end.
	pub fn get(&self) -> Option<&'a C::Item> {
		let collection = self.collection?;
		collection.item(logical::<C, D>(collection, self.index)?)
	}

	/// Returns the direction-relative index: `0` at the first element in the
	/// cursor direction, the collection length at the end, `0` when detached.
	pub fn index(&self) -> usize {
		match self.collection {
			Some(collection) if self.is_end() => collection.size(),
			Some(_) => self.index as usize,
			None => 0
		}
	}

	/// Returns the raw direction-relative index, [`END`] at the end.
	pub fn raw_index(&self) -> u32 { self.index }

	/// Returns the logical index of the current element in its collection, or
	/// `None` at the end.
	pub fn position(&self) -> Option<usize> {
		logical::<C, D>(self.collection?, self.index)
	}

	/// Moves the cursor `offset` elements ahead.
	pub fn advance(&mut self, offset: usize) -> &mut Self {
		if let Some(collection) = self.collection {
			self.index = step::<C, D>(collection, self.index, offset, true);
		}
		self
	}

	/// Moves the cursor `offset` elements back. Cursors over forward-only
	/// collections fail with [`Error::ForwardOnly`].
	pub fn try_retreat(&mut self, offset: usize) -> Result<&mut Self> {
		if !C::Category::IS_BIDIRECTIONAL {
			return Err(Error::ForwardOnly)
		}

		if let Some(collection) = self.collection {
			self.index = step::<C, D>(collection, self.index, offset, false);
		}
		Ok(self)
	}

	/// Returns the element `offset` elements ahead of the cursor, without moving.
	pub fn peek(&self, offset: usize) -> Option<&'a C::Item> {
		let mut copy = *self;
		copy.advance(offset);
		copy.get()
	}
}

impl<C: Navigable + ?Sized, D: Direction> Cursor<'_, C, D>
where C::Category: RandomAccess {
	/// Returns the index distance from `other` to this cursor.
	pub fn distance(&self, other: &Self) -> isize {
		self.index() as isize - other.index() as isize
	}
}

impl<'a, C: Navigable + ?Sized, D: Direction> Cursor<'a, C, D>
where C::Category: Reversible {
	/// Moves the cursor `offset` elements back.
	pub fn retreat(&mut self, offset: usize) -> &mut Self {
		if let Some(collection) = self.collection {
			self.index = step::<C, D>(collection, self.index, offset, false);
		}
		self
	}

	/// Converts into a cursor in the opposite direction, at the same element.
	pub fn reversed(self) -> Cursor<'a, C, D::Flip> {
		let index = match self.collection {
			Some(collection) if !self.is_end() =>
				mirror(collection.size(), self.index as usize) as u32,
			_ => END
		};
		Cursor {
			collection: self.collection,
			index,
			_direction: PhantomData,
		}
	}
}

impl<C: ?Sized, D> Default for Cursor<'_, C, D> {
	/// Creates a detached end cursor.
	fn default() -> Self {
		Self {
			collection: None,
			index: END,
			_direction: PhantomData,
		}
	}
}

impl<C: ?Sized, D> Clone for Cursor<'_, C, D> {
	fn clone(&self) -> Self { *self }
}

impl<C: ?Sized, D> Copy for Cursor<'_, C, D> { }

impl<C: ?Sized, D> fmt::Debug for Cursor<'_, C, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut debug = f.debug_struct("Cursor");
		if self.index == END {
			debug.field("index", &"end");
		} else {
			debug.field("index", &self.index);
		}
		debug.field("attached", &self.collection.is_some())
			 .finish()
	}
}

impl<'a, C: Navigable + ?Sized, D: Direction> Deref for Cursor<'a, C, D> {
	type Target = C::Item;

	fn deref(&self) -> &Self::Target {
		self.get().expect("dereferenced an end cursor")
	}
}

/// Cursors are equal if they point to the same element of the same collection, or
/// are both at the end.
impl<C: ?Sized, D> PartialEq for Cursor<'_, C, D> {
	fn eq(&self, other: &Self) -> bool {
		match (self.index == END, other.index == END) {
			(true, true) => true,
			(false, false) =>
				self.index == other.index &&
				same_collection(self.collection, other.collection),
			_ => false
		}
	}
}

/// Cursors are ordered by index, with end after every element.
impl<C: ?Sized, D> PartialOrd for Cursor<'_, C, D> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		if self == other {
			Some(Ordering::Equal)
		} else {
			match self.index.cmp(&other.index) {
				Ordering::Equal => None,
				ordering => Some(ordering)
			}
		}
	}
}

fn same_collection<C: ?Sized>(a: Option<&C>, b: Option<&C>) -> bool {
	match (a, b) {
		(Some(a), Some(b)) => ptr::eq(a, b),
		(None, None) => true,
		_ => false
	}
}

impl<C: Navigable + ?Sized, D: Direction> AddAssign<usize> for Cursor<'_, C, D> {
	fn add_assign(&mut self, offset: usize) {
		self.advance(offset);
	}
}

impl<C: Navigable + ?Sized, D: Direction> Add<usize> for Cursor<'_, C, D> {
	type Output = Self;

	fn add(mut self, offset: usize) -> Self {
		self.advance(offset);
		self
	}
}

impl<C: Navigable + ?Sized, D: Direction> SubAssign<usize> for Cursor<'_, C, D>
where C::Category: Reversible {
	fn sub_assign(&mut self, offset: usize) {
		self.retreat(offset);
	}
}

impl<C: Navigable + ?Sized, D: Direction> Sub<usize> for Cursor<'_, C, D>
where C::Category: Reversible {
	type Output = Self;

	fn sub(mut self, offset: usize) -> Self {
		self.retreat(offset);
		self
	}
}

impl<C: Navigable + ?Sized, D: Direction> Sub for Cursor<'_, C, D>
where C::Category: RandomAccess {
	type Output = isize;

	fn sub(self, other: Self) -> isize {
		self.distance(&other)
	}
}

/// Yields the current element, then advances.
impl<'a, C: Navigable + ?Sized, D: Direction> Iterator for Cursor<'a, C, D> {
	type Item = &'a C::Item;

	fn next(&mut self) -> Option<Self::Item> {
		let item = self.get()?;
		self.advance(1);
		Some(item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = match self.collection {
			Some(collection) if !self.is_end() => collection.size() - self.index as usize,
			_ => 0
		};
		(0, Some(remaining))
	}
}

// CursorMut

/// A cursor with mutable access to the elements of a [`NavigableMut`] collection.
pub struct CursorMut<'a, C: ?Sized, D = Forward> {
	collection: Option<&'a mut C>,
	index: u32,
	_direction: PhantomData<D>,
}

impl<'a, C: NavigableMut + ?Sized, D: Direction> CursorMut<'a, C, D> {
	/// Creates a cursor at the first element in direction `D`, or at the end if
	/// the collection is empty.
	pub fn begin(collection: &'a mut C) -> Self {
		let index = if collection.size() > 0 { 0 } else { END };
		Self::new(collection, index)
	}

	/// Creates an end cursor.
	pub fn end(collection: &'a mut C) -> Self {
		Self::new(collection, END)
	}

	/// Creates a cursor at logical `index`, or at the end if `index` is out of
	/// range.
	pub fn at(collection: &'a mut C, index: usize) -> Self {
		let index = relative::<C, D>(collection, index);
		Self::new(collection, index)
	}

	fn new(collection: &'a mut C, index: u32) -> Self {
		Self {
			collection: Some(collection),
			index,
			_direction: PhantomData,
		}
	}

	/// Returns `true` if the cursor is past the last element.
	pub fn is_end(&self) -> bool { self.index == END }

	/// Returns `true` if the cursor points to an element.
	pub fn has_value(&self) -> bool { !self.is_end() }

	/// Returns the current element, or `None` at the end.
	pub fn get(&self) -> Option<&C::Item> {
		self.as_cursor().get()
	}

	/// Returns the current element mutably, or `None` at the end.
	pub fn get_mut(&mut self) -> Option<&mut C::Item> {
		let collection = self.collection.as_deref_mut()?;
		let index = logical::<C, D>(collection, self.index)?;
		collection.item_mut(index)
	}

	/// Converts into a mutable reference to the current element, or `None` at the
	/// end.
	pub fn into_mut(self) -> Option<&'a mut C::Item> {
		let collection = self.collection?;
		let index = logical::<C, D>(collection, self.index)?;
		collection.item_mut(index)
	}

	/// Returns the direction-relative index: `0` at the first element in the
	/// cursor direction, the collection length at the end.
	pub fn index(&self) -> usize { self.as_cursor().index() }

	/// Returns the raw direction-relative index, [`END`] at the end.
	pub fn raw_index(&self) -> u32 { self.index }

	/// Returns the logical index of the current element in its collection, or
	/// `None` at the end.
	pub fn position(&self) -> Option<usize> { self.as_cursor().position() }

	/// Moves the cursor `offset` elements ahead.
	pub fn advance(&mut self, offset: usize) -> &mut Self {
		if let Some(collection) = self.collection.as_deref() {
			self.index = step::<C, D>(collection, self.index, offset, true);
		}
		self
	}

	/// Moves the cursor `offset` elements back. Cursors over forward-only
	/// collections fail with [`Error::ForwardOnly`].
	pub fn try_retreat(&mut self, offset: usize) -> Result<&mut Self> {
		if !C::Category::IS_BIDIRECTIONAL {
			return Err(Error::ForwardOnly)
		}

		if let Some(collection) = self.collection.as_deref() {
			self.index = step::<C, D>(collection, self.index, offset, false);
		}
		Ok(self)
	}

	/// Borrows as a read-only cursor.
	pub fn as_cursor(&self) -> Cursor<'_, C, D> {
		Cursor {
			collection: self.collection.as_deref(),
			index: self.index,
			_direction: PhantomData,
		}
	}

	/// Converts into a read-only cursor at the same position.
	pub fn into_cursor(self) -> Cursor<'a, C, D> {
		Cursor {
			collection: self.collection.map(|c| &*c),
			index: self.index,
			_direction: PhantomData,
		}
	}
}

impl<'a, C: NavigableMut + ?Sized, D: Direction> CursorMut<'a, C, D>
where C::Category: Reversible {
	/// Moves the cursor `offset` elements back.
	pub fn retreat(&mut self, offset: usize) -> &mut Self {
		if let Some(collection) = self.collection.as_deref() {
			self.index = step::<C, D>(collection, self.index, offset, false);
		}
		self
	}
}

impl<C: ?Sized, D> Default for CursorMut<'_, C, D> {
	/// Creates a detached end cursor.
	fn default() -> Self {
		Self {
			collection: None,
			index: END,
			_direction: PhantomData,
		}
	}
}

impl<C: ?Sized, D> fmt::Debug for CursorMut<'_, C, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut debug = f.debug_struct("CursorMut");
		if self.index == END {
			debug.field("index", &"end");
		} else {
			debug.field("index", &self.index);
		}
		debug.field("attached", &self.collection.is_some())
			 .finish()
	}
}

impl<'a, C: NavigableMut + ?Sized, D: Direction> From<CursorMut<'a, C, D>> for Cursor<'a, C, D> {
	fn from(value: CursorMut<'a, C, D>) -> Self {
		value.into_cursor()
	}
}

impl<C: NavigableMut + ?Sized, D: Direction> Deref for CursorMut<'_, C, D> {
	type Target = C::Item;

	fn deref(&self) -> &Self::Target {
		self.get().expect("dereferenced an end cursor")
	}
}

impl<C: NavigableMut + ?Sized, D: Direction> DerefMut for CursorMut<'_, C, D> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.get_mut().expect("dereferenced an end cursor")
	}
}

impl<C: NavigableMut + ?Sized, D: Direction> AddAssign<usize> for CursorMut<'_, C, D> {
	fn add_assign(&mut self, offset: usize) {
		self.advance(offset);
	}
}

impl<C: NavigableMut + ?Sized, D: Direction> SubAssign<usize> for CursorMut<'_, C, D>
where C::Category: Reversible {
	fn sub_assign(&mut self, offset: usize) {
		self.retreat(offset);
	}
}

#[cfg(test)]
mod test {
	use crate::traits::{ForwardTag, RandomAccessTag};
	use crate::Error;
	use super::*;

	/// A vector-backed collection with a configurable category.
	struct Mock<K> {
		items: Vec<i32>,
		_category: PhantomData<K>,
	}

	impl<K> Mock<K> {
		fn new(items: &[i32]) -> Self {
			Self { items: items.to_vec(), _category: PhantomData }
		}
	}

	impl Navigable for Mock<ForwardTag> {
		type Item = i32;
		type Category = ForwardTag;

		fn size(&self) -> usize { self.items.len() }
		fn item(&self, index: usize) -> Option<&i32> { self.items.get(index) }
	}

	impl NavigableMut for Mock<ForwardTag> {
		fn item_mut(&mut self, index: usize) -> Option<&mut i32> { self.items.get_mut(index) }
	}

	impl Navigable for Mock<RandomAccessTag> {
		type Item = i32;
		type Category = RandomAccessTag;

		fn size(&self) -> usize { self.items.len() }
		fn item(&self, index: usize) -> Option<&i32> { self.items.get(index) }

		fn previous_index(&self, index: usize, offset: usize) -> Option<usize> {
			index.checked_sub(offset)
		}
	}

	impl NavigableMut for Mock<RandomAccessTag> {
		fn item_mut(&mut self, index: usize) -> Option<&mut i32> { self.items.get_mut(index) }
	}

	type Forwards = Mock<ForwardTag>;
	type Randoms = Mock<RandomAccessTag>;

	#[test]
	fn detached() {
		let cursor = Cursor::<Randoms>::default();
		let items = Randoms::new(&[5, 7, 42]);
		assert!(cursor.is_end());
		assert!(!cursor.has_value());
		assert_eq!(cursor, items.end());
		assert_eq!(cursor.index(), 0);
		assert_eq!(cursor.get(), None);
	}

	#[test]
	fn forward_traversal() {
		let items = Forwards::new(&[5, 7, 42]);
		let mut cursor = items.begin();
		assert_eq!(*cursor, 5);
		assert_eq!(cursor.index(), 0);
		cursor += 1;
		assert_eq!(*cursor, 7);
		assert_eq!(cursor.peek(1), Some(&42));
		assert_eq!(cursor.peek(2), None);
		cursor += 2;
		assert_eq!(cursor, items.end());
		assert_eq!(cursor.index(), 3);
		cursor += 1;
		assert!(cursor.is_end());
	}

	#[test]
	fn forward_only_retreat() {
		let items = Forwards::new(&[5, 7]);
		let mut cursor = items.begin() + 1;
		assert_eq!(cursor.try_retreat(1).err(), Some(Error::ForwardOnly));
		assert_eq!(*cursor, 7);
	}

	#[test]
	fn bidirectional_traversal() {
		let items = Randoms::new(&[5, 7, 42]);
		let mut cursor = items.end();
		cursor -= 1;
		assert!(cursor.is_end(), "moving an end cursor should do nothing");

		cursor = items.begin() + 2;
		assert_eq!(*cursor, 42);
		cursor -= 2;
		assert_eq!(cursor, items.begin());
		cursor -= 1;
		assert!(cursor.is_end());
		assert!(items.begin().try_retreat(0).is_ok());
	}

	#[test]
	fn reverse_traversal() {
		let items = Randoms::new(&[5, 7, 42]);
		let values: Vec<_> = items.rbegin().copied().collect();
		assert_eq!(values, [42, 7, 5]);

		let mut cursor = items.rbegin();
		assert_eq!(cursor.index(), 0);
		assert_eq!(cursor.position(), Some(2));
		cursor += 1;
		assert_eq!(*cursor, 7);
		cursor -= 1;
		assert_eq!(*cursor, 42);
		cursor -= 1;
		assert_eq!(cursor, items.rend());
		assert_eq!(items.rend().index(), 3);
	}

	#[test]
	fn reversal_keeps_element() {
		let items = Randoms::new(&[5, 7, 42]);
		let forward = items.begin() + 1;
		let reverse = forward.reversed();
		assert_eq!(*reverse, 7);
		assert_eq!(reverse.index(), 1);
		assert_eq!(reverse.reversed(), forward);
		assert!(items.end().reversed().is_end());
	}

	#[test]
	fn at_clamps() {
		let items = Randoms::new(&[5, 7, 42]);
		assert_eq!(*Cursor::<_>::at(&items, 2), 42);
		assert!(Cursor::<_>::at(&items, 3).is_end());
		assert_eq!(*RevCursor::at(&items, 0), 5);
		assert_eq!(RevCursor::at(&items, 0).index(), 2);
	}

	#[test]
	fn compare() {
		let items = Randoms::new(&[5, 7, 42]);
		let other = Randoms::new(&[5, 7, 42]);
		let first = items.begin();
		let second = first + 1;
		assert!(first < second);
		assert!(second > first);
		assert!(second < items.end());
		assert!(first <= first);
		assert_eq!(second - first, 1);
		assert_eq!(items.end() - first, 3);
		assert_ne!(first, other.begin(), "cursors over distinct collections");
		assert_eq!(PartialOrd::partial_cmp(&first, &other.begin()), None);
		assert_eq!(items.end(), other.end());
		assert_eq!(items.cbegin(), items.begin());
		assert_eq!(items.crend(), items.rend());
		assert_eq!(items.crbegin(), items.rbegin());
	}

	#[test]
	fn empty() {
		let items = Randoms::new(&[]);
		assert_eq!(items.begin(), items.end());
		assert_eq!(items.rbegin(), items.rend());
		assert_eq!(items.begin() + 1, items.end());
		assert_eq!(items.begin().count(), 0);
	}

	#[test]
	fn jump_to_end() {
		let items = Randoms::new(&(0..20).collect::<Vec<_>>());
		let mut cursor = items.begin();
		let mut jumps = 0;
		while cursor != items.end() {
			cursor += 4;
			jumps += 1;
		}
		assert_eq!(jumps, 5);
	}

	#[test]
	fn mutate() {
		let mut items = Randoms::new(&[5, 7, 42]);
		let mut cursor = items.begin_mut();
		*cursor += 1;
		cursor += 2;
		*cursor.get_mut().unwrap() = 0;
		cursor.retreat(1);
		assert_eq!(cursor.position(), Some(1));
		let cursor: Cursor<_> = cursor.into();
		assert_eq!(*cursor, 7);
		assert_eq!(items.items, [6, 7, 0]);

		let mut reverse = items.rbegin_mut();
		*reverse = 1;
		assert!(items.end_mut().get_mut().is_none());
		assert_eq!(items.rend_mut().index(), 3);
		assert_eq!(items.items, [6, 7, 1]);
	}

	#[test]
	#[should_panic(expected = "dereferenced an end cursor")]
	fn deref_end() {
		let items = Randoms::new(&[5]);
		let _ = *items.end();
	}
}
