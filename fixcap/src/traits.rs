// SPDX-License-Identifier: Apache-2.0

//! Capability traits: cursor category tags, call-site probes for element
//! capabilities, and the copy/move enabler matrix.
//!
//! Containers enable operations statically with trait bounds: copying requires
//! `T: Clone`, equality `T: PartialEq`, ordering `T: PartialOrd`, and stepping a
//! cursor backwards a [`Reversible`] category. The probes in this module answer the
//! same questions as values, for concrete types at the call site:
//!
//! ```
//! use fixcap::{capabilities, has_eq, is_copyable};
//!
//! struct Handle(u32);
//!
//! assert!(is_copyable!(String));
//! assert!(!is_copyable!(Handle));
//! assert!(has_eq!(i32));
//! assert!(!capabilities!(Handle).enablers().copy_construct);
//! ```

use std::fmt;

/// A cursor ordering category.
pub trait Category: Copy + Default + fmt::Debug + 'static {
	const IS_INPUT: bool = false;
	const IS_OUTPUT: bool = false;
	const IS_FORWARD: bool = false;
	const IS_BIDIRECTIONAL: bool = false;
	const IS_RANDOM_ACCESS: bool = false;

	/// Returns the category flags as a value.
	fn info() -> CategoryInfo {
		CategoryInfo {
			input: Self::IS_INPUT,
			output: Self::IS_OUTPUT,
			forward: Self::IS_FORWARD,
			bidirectional: Self::IS_BIDIRECTIONAL,
			random_access: Self::IS_RANDOM_ACCESS,
		}
	}
}

/// A category whose cursors can move backwards.
pub trait Reversible: Category { }

/// A category whose cursors can jump by arbitrary offsets in constant time.
pub trait RandomAccess: Reversible { }

/// Single-pass, read-only traversal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct InputTag;
/// Single-pass, write-only traversal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct OutputTag;
/// Multi-pass traversal in one direction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ForwardTag;
/// Multi-pass traversal in both directions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BidirectionalTag;
/// Bidirectional traversal with constant-time jumps.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RandomAccessTag;

impl Category for InputTag {
	const IS_INPUT: bool = true;
}

impl Category for OutputTag {
	const IS_OUTPUT: bool = true;
}

impl Category for ForwardTag {
	const IS_INPUT: bool = true;
	const IS_FORWARD: bool = true;
}

impl Category for BidirectionalTag {
	const IS_INPUT: bool = true;
	const IS_FORWARD: bool = true;
	const IS_BIDIRECTIONAL: bool = true;
}

impl Category for RandomAccessTag {
	const IS_INPUT: bool = true;
	const IS_FORWARD: bool = true;
	const IS_BIDIRECTIONAL: bool = true;
	const IS_RANDOM_ACCESS: bool = true;
}

impl Reversible for BidirectionalTag { }
impl Reversible for RandomAccessTag { }
impl RandomAccess for RandomAccessTag { }

/// Category flags of a cursor type, cumulative: random access implies
/// bidirectional, which implies forward, which implies input.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CategoryInfo {
	pub input: bool,
	pub output: bool,
	pub forward: bool,
	pub bidirectional: bool,
	pub random_access: bool,
}

/// Returns the category of cursors over the collection `C`.
pub fn category_of<C: crate::Navigable + ?Sized>() -> CategoryInfo {
	C::Category::info()
}

/// The capabilities of an element type, as detected by [`capabilities!`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Capabilities {
	/// The type can be duplicated (`Clone`).
	pub copyable: bool,
	/// The type can be moved. Always `true` for sized Rust types.
	pub movable: bool,
	/// The type is duplicated by a bitwise copy (`Copy`).
	pub trivial: bool,
	/// The type supports `==` (`PartialEq`).
	pub equatable: bool,
	/// The type supports `<`, `<=`, `>` and `>=` (`PartialOrd`).
	pub orderable: bool,
}

impl Capabilities {
	/// Returns which copy and move operations a container of this type exposes.
	pub const fn enablers(&self) -> Enablers {
		Enablers::select(self.copyable, self.movable)
	}
}

/// Copy and move operations available on a generic container, derived from the
/// element type. A container of a movable-only type is itself movable-only.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Enablers {
	pub copy_construct: bool,
	pub copy_assign: bool,
	pub move_construct: bool,
	pub move_assign: bool,
}

impl Enablers {
	/// Selects the enabled operations for a `copyable` and `movable` element type.
	pub const fn select(copyable: bool, movable: bool) -> Self {
		match (copyable, movable) {
			(false, false) => Self {
				copy_construct: false,
				copy_assign: false,
				move_construct: false,
				move_assign: false,
			},
			(true, false) => Self {
				copy_construct: true,
				copy_assign: true,
				move_construct: false,
				move_assign: false,
			},
			(false, true) => Self {
				copy_construct: false,
				copy_assign: false,
				move_construct: true,
				move_assign: true,
			},
			(true, true) => Self {
				copy_construct: true,
				copy_assign: true,
				move_construct: true,
				move_assign: true,
			},
		}
	}

	/// Returns `true` if no copy or move is possible.
	pub const fn is_pinned(&self) -> bool {
		!(self.copy_construct || self.move_construct)
	}
}

/// Call-site capability probes.
///
/// Each probe pairs a trait implemented on `&Probe<T>` when `T` has the
/// capability with a fallback implemented on `Probe<T>`. Calling the probe method
/// on `&&Probe<T>` picks the former when its bound holds, the latter otherwise.
/// This only resolves for concrete types, so the probes are used through the
/// macros.
#[doc(hidden)]
pub mod probe {
	use std::marker::PhantomData;

	pub struct Probe<T: ?Sized>(PhantomData<fn() -> *const T>);

	impl<T: ?Sized> Probe<T> {
		pub const fn new() -> Self { Self(PhantomData) }
	}

	macro_rules! probe {
		($($name:ident $fallback:ident $method:ident [$($bound:tt)+];)+) => {
			$(
			pub trait $name {
				fn $method(&self) -> bool { true }
			}

			pub trait $fallback {
				fn $method(&self) -> bool { false }
			}

			impl<T: $($bound)+> $name for &Probe<T> { }
			impl<T: ?Sized> $fallback for Probe<T> { }
			)+
		};
	}

	probe! {
		CloneProbe CloneFallback probe_clone [Clone];
		CopyProbe CopyFallback probe_copy [Copy];
		EqProbe EqFallback probe_eq [PartialEq];
		OrdProbe OrdFallback probe_ord [PartialOrd];
	}
}

#[doc(hidden)]
#[macro_export]
macro_rules! __probe {
	($ty:ty, $probe:ident, $fallback:ident, $method:ident) => {{
		#[allow(unused_imports)]
		use $crate::traits::probe::{$probe as _, $fallback as _};
		(&&$crate::traits::probe::Probe::<$ty>::new()).$method()
	}};
}

/// Returns `true` if the type implements `Clone`.
#[macro_export]
macro_rules! is_copyable {
	($ty:ty) => { $crate::__probe!($ty, CloneProbe, CloneFallback, probe_clone) };
}

/// Returns `true` if the type implements `Copy`.
#[macro_export]
macro_rules! is_trivial {
	($ty:ty) => { $crate::__probe!($ty, CopyProbe, CopyFallback, probe_copy) };
}

/// Returns `true` if the type supports `==`.
#[macro_export]
macro_rules! has_eq {
	($ty:ty) => { $crate::__probe!($ty, EqProbe, EqFallback, probe_eq) };
}

/// Returns `true` if the type supports `<`.
#[macro_export]
macro_rules! has_lt {
	($ty:ty) => { $crate::__probe!($ty, OrdProbe, OrdFallback, probe_ord) };
}

/// Returns `true` if the type supports `<=`.
#[macro_export]
macro_rules! has_le {
	($ty:ty) => { $crate::__probe!($ty, OrdProbe, OrdFallback, probe_ord) };
}

/// Returns `true` if the type supports `>`.
#[macro_export]
macro_rules! has_gt {
	($ty:ty) => { $crate::__probe!($ty, OrdProbe, OrdFallback, probe_ord) };
}

/// Returns `true` if the type supports `>=`.
#[macro_export]
macro_rules! has_ge {
	($ty:ty) => { $crate::__probe!($ty, OrdProbe, OrdFallback, probe_ord) };
}

/// Probes every capability of a type, returning [`Capabilities`].
#[macro_export]
macro_rules! capabilities {
	($ty:ty) => {
		$crate::traits::Capabilities {
			copyable: $crate::is_copyable!($ty),
			movable: true,
			trivial: $crate::is_trivial!($ty),
			equatable: $crate::has_eq!($ty),
			orderable: $crate::has_lt!($ty),
		}
	};
}
