// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ## How it works
//!
//! Both containers store their elements inline, in an array of *slots* sized by a
//! const generic capacity. A slot is a single element-sized region of memory that
//! is either live or uninitialized; which slots are live is tracked by the owning
//! container, never by the slot itself. Nothing is ever allocated on the heap, and
//! nothing is ever reallocated, so containers can live in stack frames or be
//! embedded in other structures on latency-sensitive paths.
//!
//! ### Queue
//!
//! [`CircularQueue`] is a ring buffer: a head index and a length over its slots.
//! Logical index `i` lives at physical slot `(head + i) % N`. Pushing writes to the
//! slot after the back, popping reads the head slot and moves the head forward,
//! wrapping around at the end of the array. Clearing restarts the head at slot 0.
//!
//! ### Vector
//!
//! [`FixedSizeVector`] keeps its elements contiguous at the front of its slots, so
//! it dereferences to a slice. Positional inserts and erases shift the tail by
//! rotating slot ranges.
//!
//! ### Capacity overflow
//!
//! Single-element operations report overflow without panicking: pushes hand the
//! value back, positional inserts return an end cursor. Bulk operations clamp to
//! the capacity, leaving what doesn't fit in the source. The one checked accessor is
//! [`FixedSizeVector::at`], which returns [`Error::OutOfRange`].
//!
//! ### Cursors
//!
//! Both containers implement [`Navigable`], a neighbor-lookup contract that the
//! [`Cursor`] engine drives. A cursor is a collection reference plus an index,
//! with a sentinel index standing for the position past the last element. Cursors
//! over the vector are random-access and come in forward and reverse flavors;
//! cursors over the queue are forward-only.
//!
//! ### Capabilities
//!
//! What a container exposes follows from its element type: copying requires
//! `T: Clone`, comparisons require `T: PartialEq` or `T: PartialOrd`. The [`traits`]
//! module also provides call-site probes for these capabilities, see
//! [`capabilities!`].

pub mod cursor;
mod error;
mod queue;
mod slot;
pub mod traits;
pub mod vector;

pub use cursor::{Cursor, CursorMut, Navigable, NavigableMut, RevCursor, RevCursorMut};
pub use error::*;
pub use queue::{CircularQueue, IntoIter as QueueIntoIter, Iter as QueueIter, IterMut as QueueIterMut};
pub use vector::FixedSizeVector;

/// The largest capacity a container may have. Cursor indices are 32-bit and
/// reserve `u32::MAX` as the end sentinel.
pub const MAX_CAPACITY: usize = 0x7FFF_FFFE;

#[cfg(feature = "log")]
macro_rules! trace {
	($($arg:tt)+) => { log::trace!(target: "fixcap", $($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
	($($arg:tt)+) => {{
		if false {
			let _ = format_args!($($arg)+);
		}
	}};
}

pub(crate) use trace;
