use eyre::{Result, WrapErr};
use rayon::prelude::*;

use globalign_core_rs::parallelism;

use crate::Alignable;

use super::{scoring, Alignment, Config, Engine};

/// Globally align independent sequence pairs on a dedicated thread pool.
/// `threads` follows [`parallelism::available`]: `-1` uses every core, `-2` all but one, and so on.
/// Results are returned in the input order; the first failed pair aborts the whole batch.
pub fn align_all<S, Smb, S1, S2>(
    pairs: &[(S1, S2)],
    config: &Config<S>,
    threads: isize,
) -> Result<Vec<Alignment<S>>>
where
    S: scoring::Score,
    Smb: PartialEq + Send + Sync,
    S1: Alignable<Symbol = Smb> + Sync,
    S2: Alignable<Symbol = Smb> + Sync,
{
    let engine = Engine::<S, Smb, _>::from_config(config);
    let pool = parallelism::pool(threads)?;
    log::debug!(
        "Aligning {} sequence pairs using {} threads",
        pairs.len(),
        pool.current_num_threads()
    );

    pool.install(|| {
        pairs
            .par_iter()
            .enumerate()
            .map(|(ind, (seq1, seq2))| {
                engine
                    .align(seq1, seq2)
                    .wrap_err_with(|| format!("Failed to align sequence pair #{ind}"))
            })
            .collect()
    })
}
