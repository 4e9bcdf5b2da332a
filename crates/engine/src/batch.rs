//! Batch coordinator
//!
//! Runs one closure per item and returns the outcomes in input order.
//! Items are independent: one failing never affects another. Batches at or
//! above the parallel threshold fan out over the rayon pool.

use docgraph_core::Result;
use rayon::prelude::*;
use tracing::debug;

/// Process `items` and return one outcome per item, in order
pub(crate) fn run_batch<I, T, F>(op: &'static str, items: Vec<I>, threshold: usize, f: F) -> Vec<Result<T>>
where
    I: Send,
    T: Send,
    F: Fn(I) -> Result<T> + Sync + Send,
{
    let parallel = items.len() >= threshold;
    let results: Vec<Result<T>> = if parallel {
        items.into_par_iter().map(&f).collect()
    } else {
        items.into_iter().map(&f).collect()
    };
    let failed = results.iter().filter(|r| r.is_err()).count();
    debug!(
        target: "docgraph::batch",
        op,
        items = results.len(),
        failed,
        parallel,
        "batch complete"
    );
    results
}
