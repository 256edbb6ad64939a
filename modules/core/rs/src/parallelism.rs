use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};
use rayon::{ThreadPool, ThreadPoolBuilder};

// Negative requests are counted from the number of available cores: -1 means all of them
fn normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads to use for the requested degree of parallelism.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()
        .wrap_err("Failed to query available parallelism")?
        .get() as isize;
    Ok(normalize(requested, max))
}

/// Dedicated thread pool with the requested degree of parallelism.
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .wrap_err_with(|| format!("Failed to start a thread pool with {threads} threads"))
}
