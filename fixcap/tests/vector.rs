// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use pretty_assertions::assert_eq;
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use fixcap::{Error, FixedSizeVector, Navigable};

#[macro_use]
mod common;

/// A vector operation, applied to both the fixed vector and a [`Vec`] model.
#[derive(Copy, Clone, Debug)]
enum Op {
	Push(i32),
	Pop,
	Insert(usize, i32),
	InsertN(usize, usize, i32),
	Erase(usize),
	EraseRange(usize, usize),
	Resize(usize, i32),
	Clear,
}

impl Arbitrary for Op {
	fn arbitrary(g: &mut Gen) -> Self {
		match u8::arbitrary(g) % 16 {
			0     => Op::Clear,
			1..=2 => Op::Pop,
			3..=4 => Op::Insert(usize::arbitrary(g) % 24, i32::arbitrary(g)),
			5     => Op::InsertN(usize::arbitrary(g) % 24, usize::arbitrary(g) % 24, i32::arbitrary(g)),
			6..=7 => Op::Erase(usize::arbitrary(g) % 24),
			8     => Op::EraseRange(usize::arbitrary(g) % 24, usize::arbitrary(g) % 24),
			9     => Op::Resize(usize::arbitrary(g) % 24, i32::arbitrary(g)),
			_     => Op::Push(i32::arbitrary(g))
		}
	}
}

macro_rules! capacities {
	($($cap:literal)+) => {
		$(
		paste::paste! {
			#[test]
			fn [<fresh_ $cap>]() {
				fresh::<$cap>();
			}

			#[test]
			fn [<checked_access_ $cap>]() {
				checked_access::<$cap>();
			}

			#[test]
			fn [<swap_ $cap>]() {
				swap::<$cap>();
			}

			#[test]
			fn [<bulk_clamps_ $cap>]() {
				bulk_clamps::<$cap>();
			}

			#[quickcheck]
			fn [<model_ $cap>](ops: Vec<Op>) -> TestResult {
				model::<$cap>(ops)
			}
		}
		)+
	};
}

capacities! { 1 2 7 20 }

fn fresh<const N: usize>() {
	let vector = FixedSizeVector::<i32, N>::new();
	assert_eq!(vector.len(), 0);
	assert_eq!(vector.capacity(), N);
	assert_eq!(vector.max_size(), N);
	assert!(vector.is_empty());
	assert!(!vector.is_full());
	assert!(vector.data().is_empty());
	assert!(vector.begin() == vector.end());
	assert!(vector.rbegin() == vector.rend());
}

fn checked_access<const N: usize>() {
	let mut vector = FixedSizeVector::<i32, N>::new();
	for len in 0..=N {
		for index in 0..=N {
			match vector.at(index) {
				Ok(&value) => assert_eq!(value, index as i32),
				Err(error) => assert_eq!(error, Error::OutOfRange { index, len })
			}
			assert_eq!(vector.at(index).is_err(), index >= len);
		}
		let _ = vector.push_back(len as i32);
	}
}

fn swap<const N: usize>() {
	let full: FixedSizeVector<i32, N> = (0..N as i32).collect();
	let partial: FixedSizeVector<i32, N> = (100..100 + N as i32 / 2).collect();
	let empty = FixedSizeVector::<i32, N>::new();

	let cases = [
		(&full, &partial),
		(&full, &empty),
		(&partial, &empty),
		(&empty, &empty),
		(&full, &full),
	];
	for (a, b) in cases {
		let (mut x, mut y) = (a.clone(), b.clone());
		x.swap(&mut y);
		assert_eq!(&x, b);
		assert_eq!(&y, a);
		y.swap(&mut x);
		assert_eq!(&x, a);
		assert_eq!(&y, b);
	}
}

fn bulk_clamps<const N: usize>() {
	let mut vector = FixedSizeVector::<i32, N>::new();
	vector.insert_n(0, N + 10, 42);
	assert_eq!(vector.len(), N);
	assert!(vector.iter().all(|&v| v == 42));

	assert_eq!(vector.assign_iter(0..), N, "infinite sources should be cut off");
	assert_eq!(FixedSizeVector::<i32, N>::from_elem(N * 2, 1).len(), N);
	vector.resize(N * 3, 0);
	assert_eq!(vector.len(), N);
}

fn model<const N: usize>(ops: Vec<Op>) -> TestResult {
	let mut vector = FixedSizeVector::<i32, N>::new();
	let mut model = Vec::with_capacity(N);

	for (i, op) in ops.into_iter().enumerate() {
		match op {
			Op::Push(value) => {
				let expected = if model.len() < N {
					model.push(value);
					Ok(())
				} else {
					Err(value)
				};
				if vector.push_back(value) != expected {
					return TestResult::error(format!("push {i} returned an unexpected result"))
				}
			}
			Op::Pop =>
				if vector.pop_back() != model.pop() {
					return TestResult::error(format!("pop {i} returned an unexpected value"))
				}
			Op::Insert(pos, value) => {
				let inserted = vector.insert(pos, value).position();
				let pos = min(pos, model.len());
				let expected = if model.len() < N {
					model.insert(pos, value);
					Some(pos)
				} else {
					None
				};
				if inserted != expected {
					return TestResult::error(format!("insert {i} returned a cursor at {inserted:?}"))
				}
			}
			Op::InsertN(pos, count, value) => {
				let inserted = vector.insert_n(pos, count, value).position();
				let pos = min(pos, model.len());
				let count = min(count, N - model.len());
				model.splice(pos..pos, std::iter::repeat(value).take(count));
				if inserted != (count > 0).then_some(pos) {
					return TestResult::error(format!("insert_n {i} returned a cursor at {inserted:?}"))
				}
			}
			Op::Erase(index) => {
				let erased = vector.erase(index);
				if erased != (index < model.len()) {
					return TestResult::error(format!("erase {i} returned {erased}"))
				}
				if erased {
					model.remove(index);
				}
			}
			Op::EraseRange(start, end) => {
				let len = model.len();
				let cursor = vector.erase_range(start..end).position();
				if start < end && start < len {
					model.drain(start..min(end, len));
				}
				if cursor != (start < model.len() && start < end).then_some(start) {
					return TestResult::error(format!("erase_range {i} returned a cursor at {cursor:?}"))
				}
			}
			Op::Resize(len, fill) => {
				vector.resize(len, fill);
				model.resize(min(len, N), fill);
			}
			Op::Clear => {
				vector.clear();
				model.clear();
			}
		}

		if vector.as_slice() != model.as_slice() {
			return TestResult::error(format!("contents diverged after operation {i}: {op:?}"))
		}
	}

	qc_assert_eq!(common::collect(vector.rbegin()), model.into_iter().rev().collect::<Vec<_>>(), "reverse traversal")
}

#[test]
fn insert_positions() {
	let mut vector = FixedSizeVector::<i32, 4>::new();
	vector.insert(0, 0);
	let end = vector.len();
	vector.insert(end, 1);
	vector.insert(0, 2);
	vector.insert(1, 3);
	assert_eq!(vector, [2, 3, 0, 1]);
}

#[test]
fn middle_insert_over_capacity() {
	let mut vector = FixedSizeVector::<i32, 20>::from_slice(&[42, 42]);
	let first = vector.insert_iter(1, 0..40).position();
	assert_eq!(first, Some(1));

	let mut expected = vec![42];
	expected.extend(0..18);
	expected.push(42);
	assert_eq!(vector.to_vec(), expected);
}

#[test]
fn cursor_jumps() {
	let vector: FixedSizeVector<i32, 20> = (0..20).collect();
	for stride in 1..=20 {
		let mut cursor = vector.begin();
		let mut jumps = 0;
		while cursor != vector.end() {
			cursor += stride;
			jumps += 1;
		}
		assert_eq!(jumps, common::jumps(20, stride), "stride {stride}");

		let mut cursor = vector.rbegin();
		jumps = 0;
		while cursor != vector.rend() {
			cursor += stride;
			jumps += 1;
		}
		assert_eq!(jumps, common::jumps(20, stride), "reverse stride {stride}");
	}
}

#[test]
fn element_capabilities() {
	#[derive(Debug, PartialEq)]
	struct Unordered(i32);

	let mut vector = FixedSizeVector::<Unordered, 2>::new();
	vector.push_back(Unordered(1)).unwrap();
	assert_eq!(vector, [Unordered(1)]);
	assert!(!fixcap::has_lt!(FixedSizeVector<Unordered, 2>));
	assert!(!fixcap::is_copyable!(FixedSizeVector<Unordered, 2>));
	assert!(fixcap::is_copyable!(FixedSizeVector<i32, 2>));
}
