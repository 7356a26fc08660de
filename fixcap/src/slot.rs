// SPDX-License-Identifier: Apache-2.0

//! Element-sized storage regions which are either live or uninitialized.

use std::mem::MaybeUninit;
use std::{ptr, slice};

/// A single element-sized region of memory. Whether the slot holds a live value is
/// tracked by its container; the slot itself only constructs, reads, and destroys.
#[repr(transparent)]
pub(crate) struct Slot<T>(MaybeUninit<T>);

/// Creates an array of `N` empty slots.
pub(crate) const fn array<T, const N: usize>() -> [Slot<T>; N] {
	[const { Slot::empty() }; N]
}

impl<T> Slot<T> {
	pub const fn empty() -> Self {
		Self(MaybeUninit::uninit())
	}

	/// Constructs `value` in the slot, returning a reference to it.
	///
	/// # Safety
	///
	/// The slot must be empty, otherwise its previous value is leaked.
	pub unsafe fn write(&mut self, value: T) -> &mut T {
		self.0.write(value)
	}

	/// Moves the value out of the slot, leaving it empty.
	///
	/// # Safety
	///
	/// The slot must be live, and must be treated as empty afterward.
	pub unsafe fn read(&mut self) -> T {
		self.0.assume_init_read()
	}

	/// Destroys the value in place, leaving the slot empty.
	///
	/// # Safety
	///
	/// The slot must be live, and must be treated as empty afterward.
	pub unsafe fn drop_in_place(&mut self) {
		self.0.assume_init_drop()
	}

	/// # Safety
	///
	/// The slot must be live.
	pub unsafe fn assume_init_ref(&self) -> &T {
		self.0.assume_init_ref()
	}

	/// # Safety
	///
	/// The slot must be live.
	pub unsafe fn assume_init_mut(&mut self) -> &mut T {
		self.0.assume_init_mut()
	}
}

/// Views a run of slots as a slice of their values.
///
/// # Safety
///
/// Every slot in `slots` must be live.
pub(crate) unsafe fn assume_init_slice<T>(slots: &[Slot<T>]) -> &[T] {
	// Slot<T> is transparent over MaybeUninit<T>, which has the layout of T.
	slice::from_raw_parts(slots.as_ptr().cast(), slots.len())
}

/// Views a run of slots as a mutable slice of their values.
///
/// # Safety
///
/// Every slot in `slots` must be live.
pub(crate) unsafe fn assume_init_slice_mut<T>(slots: &mut [Slot<T>]) -> &mut [T] {
	slice::from_raw_parts_mut(slots.as_mut_ptr().cast(), slots.len())
}

/// Destroys every value in a run of slots.
///
/// # Safety
///
/// Every slot in `slots` must be live, and must be treated as empty afterward.
pub(crate) unsafe fn drop_slice<T>(slots: &mut [Slot<T>]) {
	ptr::drop_in_place(assume_init_slice_mut(slots))
}
