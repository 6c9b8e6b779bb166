//! Hardware counters for the push and pop phases of a linked heap
//!
//! Every push and pop walks one root-to-leaf path of boxed nodes, so the
//! interesting number is how many cache misses each element costs compared
//! with the contiguous `std::collections::BinaryHeap`. Push and pop are
//! counted separately because they touch the tree differently: push follows
//! one path and sifts up, pop detaches the last leaf and sifts down.
//!
//! ```bash
//! # Requires perf_event_paranoid <= 1 or CAP_PERFMON
//! cargo bench --features perf-counters --bench heap_perf
//! ```

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
mod phases {
    use perf_event::events::Hardware;
    use perf_event::{Builder, Counter, Group};
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;
    use std::hint::black_box;
    use std::io;
    use tree_heap::TreeHeap;

    /// Counter totals for one phase, already divided by the element count
    #[derive(Debug, Clone, Copy, Default)]
    struct PerElement {
        instructions: f64,
        cycles: f64,
        cache_misses: f64,
    }

    /// One perf group reused for every phase measurement
    struct PhaseCounters {
        group: Group,
        instructions: Counter,
        cycles: Counter,
        cache_misses: Counter,
    }

    impl PhaseCounters {
        fn open() -> io::Result<Self> {
            let mut group = Group::new()?;
            let instructions = Builder::new()
                .group(&mut group)
                .kind(Hardware::INSTRUCTIONS)
                .build()?;
            let cycles = Builder::new()
                .group(&mut group)
                .kind(Hardware::CPU_CYCLES)
                .build()?;
            let cache_misses = Builder::new()
                .group(&mut group)
                .kind(Hardware::CACHE_MISSES)
                .build()?;
            Ok(Self {
                group,
                instructions,
                cycles,
                cache_misses,
            })
        }

        /// Counts `phase` and scales the totals down to one of `n` elements
        fn per_element(&mut self, n: u32, phase: impl FnOnce()) -> io::Result<PerElement> {
            self.group.reset()?;
            self.group.enable()?;
            phase();
            self.group.disable()?;
            let counts = self.group.read()?;
            let n = f64::from(n);
            Ok(PerElement {
                instructions: counts[&self.instructions] as f64 / n,
                cycles: counts[&self.cycles] as f64 / n,
                cache_misses: counts[&self.cache_misses] as f64 / n,
            })
        }
    }

    /// The two calls a phase needs, so both heaps run the same workload
    trait MinQueue {
        fn insert(&mut self, key: u32);
        fn remove_min(&mut self) -> Option<u32>;
    }

    impl MinQueue for TreeHeap<u32> {
        fn insert(&mut self, key: u32) {
            self.push(key);
        }

        fn remove_min(&mut self) -> Option<u32> {
            self.try_pop().ok()
        }
    }

    impl MinQueue for BinaryHeap<Reverse<u32>> {
        fn insert(&mut self, key: u32) {
            self.push(Reverse(key));
        }

        fn remove_min(&mut self) -> Option<u32> {
            self.pop().map(|Reverse(key)| key)
        }
    }

    /// Keys in a scattered but fixed order so sift-up depth varies per push
    fn keys(n: u32) -> impl Iterator<Item = u32> {
        (0..n).map(move |i| i.wrapping_mul(2_654_435_761) % n)
    }

    fn measure<Q: MinQueue + Default>(
        counters: &mut PhaseCounters,
        n: u32,
    ) -> io::Result<(PerElement, PerElement)> {
        let mut queue = Q::default();
        let push = counters.per_element(n, || {
            for key in keys(n) {
                queue.insert(key);
            }
        })?;
        let pop = counters.per_element(n, || {
            while let Some(key) = queue.remove_min() {
                black_box(key);
            }
        })?;
        Ok((push, pop))
    }

    fn row(name: &str, phase: &str, m: PerElement) {
        println!(
            "{:16} {:5} | {:>10.1} | {:>10.1} | {:>8.3}",
            name, phase, m.instructions, m.cycles, m.cache_misses
        );
    }

    pub fn run() -> io::Result<()> {
        let mut counters = PhaseCounters::open()?;

        for log_n in [10u32, 14, 18] {
            let n = 1u32 << log_n;
            println!("\nN = 2^{} (per element)", log_n);
            println!(
                "{:22} | {:>10} | {:>10} | {:>8}",
                "", "instr", "cycles", "LLC miss"
            );

            let (push, pop) = measure::<TreeHeap<u32>>(&mut counters, n)?;
            row("TreeHeap", "push", push);
            row("TreeHeap", "pop", pop);
            let (push, pop) = measure::<BinaryHeap<Reverse<u32>>>(&mut counters, n)?;
            row("std BinaryHeap", "push", push);
            row("std BinaryHeap", "pop", pop);
        }
        Ok(())
    }
}

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
fn main() {
    if let Err(e) = phases::run() {
        eprintln!("heap_perf: cannot read hardware counters: {}", e);
        eprintln!("try `sudo sysctl kernel.perf_event_paranoid=1`");
        std::process::exit(1);
    }
}

#[cfg(not(all(feature = "perf-counters", target_os = "linux")))]
fn main() {
    eprintln!("heap_perf needs Linux and `--features perf-counters`");
}
