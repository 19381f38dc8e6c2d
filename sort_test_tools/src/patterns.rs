//! Seeded input patterns for testing and benchmarking the sorts.
//!
//! All patterns produce `i32` values, callers map them into other types while preserving their
//! order. The seed is drawn once per process and printed by the test harness, set
//! `OVERRIDE_SEED=<u64>` to replay a failing run.

use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    // : . : :
    // :.:::.::

    new_rng().sample_iter(rand::distributions::Standard).take(len).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let dist: Uniform<i32> = range.into();
    new_rng().sample_iter(dist).take(len).collect()
}

/// Small signed values, lots of duplicates and negatives. The shape of hand written test tables.
pub fn random_signed_dense(len: usize) -> Vec<i32> {
    // . :  .:
    // ::.::::.  <- 0
    //  :  :

    random_uniform(len, -100..=100)
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    new_rng()
        .sample_iter(dist)
        .take(len)
        .map(|val| val as i32)
        .collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [sorted][random]

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| false)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| true)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw(len, saw_count, |i| directions[i] == 1)
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (first_half, second_half) = v.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Replaces the once-per-process seed with a fresh one for every pattern. Benchmarks want this,
/// tests don't because it makes failures unreproducible.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(seed) => (
                SeedType::ExternalOverride,
                u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"),
            ),
            Err(_) => (SeedType::RandomOncePerProcess, thread_rng().gen()),
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (seed_type, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Random values cut into `saw_count` chunks, each sorted ascending or, if `is_descending(i)`,
/// descending.
fn saw(len: usize, saw_count: usize, mut is_descending: impl FnMut(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if is_descending(i.min(saw_count)) {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        } else {
            chunk.sort_unstable();
        }
    }

    v
}
