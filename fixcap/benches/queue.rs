// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use criterion::{black_box, BatchSize, Criterion, criterion_group, criterion_main};
use pretty_assertions::assert_eq;
use fixcap::{CircularQueue, Navigable};

const SIZE: usize = 4096;

fn push(c: &mut Criterion) {
	let mut group = c.benchmark_group("push");

	group.bench_function("circular queue", |b| b.iter_batched_ref(
		CircularQueue::<u64, SIZE>::new,
		|queue| {
			for i in 0..SIZE as u64 {
				let _ = queue.push(i);
			}
			assert_eq!(queue.len(), SIZE);
		},
		BatchSize::LargeInput
	));
	group.bench_function("vec deque", |b| b.iter_batched_ref(
		|| VecDeque::<u64>::with_capacity(SIZE),
		|queue| {
			for i in 0..SIZE as u64 {
				queue.push_back(i);
			}
			assert_eq!(queue.len(), SIZE);
		},
		BatchSize::LargeInput
	));
	group.finish();
}

fn cycle(c: &mut Criterion) {
	let mut group = c.benchmark_group("push_pop_cycle");

	let mut queue = CircularQueue::<u64, 64>::new();
	group.bench_function("circular queue", |b| b.iter(|| {
		for i in 0..SIZE as u64 {
			if queue.is_full() {
				black_box(queue.pop());
			}
			let _ = queue.push(i);
		}
	}));

	let mut deque = VecDeque::<u64>::with_capacity(64);
	group.bench_function("vec deque", |b| b.iter(|| {
		for i in 0..SIZE as u64 {
			if deque.len() == 64 {
				black_box(deque.pop_front());
			}
			deque.push_back(i);
		}
	}));
	group.finish();
}

fn traverse(c: &mut Criterion) {
	let queue: CircularQueue<u64, SIZE> = (0..SIZE as u64).collect();
	let mut group = c.benchmark_group("traverse");

	group.bench_function("iterator", |b| b.iter(||
		black_box(queue.iter().sum::<u64>())
	));
	group.bench_function("cursor", |b| b.iter(||
		black_box(queue.begin().sum::<u64>())
	));
	group.finish();
}

criterion_group!(benches, push, cycle, traverse);
criterion_main!(benches);
