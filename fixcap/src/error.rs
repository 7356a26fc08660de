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

use std::result;

/// A container or cursor error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
	/// A checked access was made at or past the container length.
	#[error("index {index} is out of range for length {len}")]
	OutOfRange {
		index: usize,
		len: usize,
	},
	/// A forward-only cursor was moved backwards.
	#[error("cannot move a forward-only cursor backwards")]
	ForwardOnly,
}

pub type Result<T = ()> = result::Result<T, Error>;

impl Error {
	pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
		Self::OutOfRange { index, len }
	}

	/// Returns `true` if the error is [`OutOfRange`](Self::OutOfRange).
	pub fn is_out_of_range(&self) -> bool {
		matches!(self, Self::OutOfRange { .. })
	}
}
