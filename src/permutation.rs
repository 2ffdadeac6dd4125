//! Print `k` tokens taken from the iterator of one of the containers.

use crate::deque::Deque;
use crate::error::{Error, Result};
use crate::randomized_queue::RandomizedQueue;
use rand::rngs::StdRng;
use rand::Rng;
use std::io::Write;
use tracing::debug;

/// The container the tokens are loaded into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Tokens are enqueued in input order and printed in a uniformly
    /// random order.
    #[default]
    RandomizedQueue,
    /// Each token is added to the front or the back on a coin flip and
    /// printed from front to back.
    Deque,
}

/// Write the first `k` items of a container built from `tokens` to
/// `out`, one per line. Fails with `Error::InvalidArgument` when `k`
/// exceeds the number of tokens.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use randqueue::permutation::{permutation, Backend};
///
/// let tokens = vec!["a", "b", "c"].into_iter().map(String::from).collect();
/// let rng = rand::rngs::StdRng::seed_from_u64(0);
/// let mut out = Vec::new();
///
/// permutation(2, tokens, Backend::RandomizedQueue, rng, &mut out).unwrap();
/// assert_eq!(2, String::from_utf8(out).unwrap().lines().count());
/// ```
pub fn permutation<W: Write>(
    k: usize,
    tokens: Vec<String>,
    backend: Backend,
    mut rng: StdRng,
    out: &mut W,
) -> Result<()> {
    if k > tokens.len() {
        return Err(Error::InvalidArgument(format!(
            "cannot print {} of {} tokens",
            k,
            tokens.len()
        )));
    }
    debug!(k, tokens = tokens.len(), ?backend, "permutation");

    match backend {
        Backend::RandomizedQueue => {
            let mut q = RandomizedQueue::with_rng(rng);
            q.extend(tokens);
            for token in q.iter().take(k) {
                writeln!(out, "{}", token)?;
            }
        }
        Backend::Deque => {
            let mut d = Deque::new();
            for token in tokens {
                if rng.gen_bool(0.5) {
                    d.add_first(token);
                } else {
                    d.add_last(token);
                }
            }
            for token in d.iter().take(k) {
                writeln!(out, "{}", token)?;
            }
        }
    }
    Ok(())
}
