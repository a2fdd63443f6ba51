//! Derived performance metrics computed elementwise from table columns.
//!
//! All functions propagate NaN instead of failing: a missing timing in the
//! input yields a missing point in the output.

/// Speedup of each row relative to the first row run on a single thread.
///
/// `threads` and `times` are parallel columns of one group. The reference time is
/// taken from the first row whose thread count equals one, so that row's own
/// speedup is exactly `1.0` (unless its time is NaN, in which case every speedup
/// is NaN).
///
/// # Returns
/// `None` when the group contains no single-thread row.
pub fn speedup(threads: &[f64], times: &[f64]) -> Option<Vec<f64>> {
    let baseline_index = threads.iter().position(|&t| t == 1.0)?;
    let baseline = *times.get(baseline_index)?;
    Some(times.iter().map(|&t| baseline / t).collect())
}

/// Millions of lattice updates per second for a cubic grid of edge `n`.
///
/// `MLUP/s = n^3 * iterations / (time * 1e6)`.
pub fn mlups(n: f64, iterations: f64, time: f64) -> f64 {
    n.powi(3) * iterations / (time * 1e6)
}

/// Work per unit time.
pub fn throughput(volume: f64, time: f64) -> f64 {
    volume / time
}

/// The ideal linear-scaling reference line: speedup equal to the thread count.
pub fn ideal_speedup(threads: &[f64]) -> Vec<(f64, f64)> {
    threads.iter().map(|&t| (t, t)).collect()
}
