//! Blocks of integers separated by blank lines, and the totals of the largest ones.

use std::path::Path;

use itertools::Itertools;
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::parser::{parse_token, read_input};

/// Where the binary looks for its input, relative to the working directory.
pub const INPUT_PATH: &str = "inputs/day01a";

/// How many of the largest block sums make up the answer.
pub const TOP_N: usize = 3;

/// Splits the trimmed text on blank lines. Text with no non-whitespace content
/// has no blocks at all.
pub fn split_blocks(text: &str) -> impl Iterator<Item = &str> {
    let text = text.trim();

    (!text.is_empty())
        .then(|| text.split("\n\n"))
        .into_iter()
        .flatten()
}

/// Parses every whitespace-separated token of a block. `block` is the 1-based
/// position of the block, used for error reporting only.
pub fn parse_block(block: usize, text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            parse_token(token).map_err(|source| Error::Parse {
                block,
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

pub fn block_sum(block: usize, values: &[i64]) -> Result<i64> {
    values
        .iter()
        .try_fold(0i64, |acc, &n| acc.checked_add(n))
        .ok_or(Error::BlockOverflow { block })
}

/// One sum per block, in input order. An empty block sums to zero.
pub fn block_sums(text: &str) -> Result<Vec<i64>> {
    let sums = split_blocks(text)
        .enumerate()
        .map(|(i, block_text)| {
            let block = i + 1;
            let values = parse_block(block, block_text)?;
            block_sum(block, &values)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("parsed {} blocks", sums.len());
    trace!("block sums: {:?}", sums);

    Ok(sums)
}

/// Sum of the `n` largest values, or of all of them when there are fewer than `n`.
pub fn top_n_total(sums: &[i64], n: usize) -> Result<i64> {
    let selected = sums
        .iter()
        .copied()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(n)
        .collect::<Vec<_>>();

    debug!("largest {} of {} block sums: {:?}", n, sums.len(), selected);

    selected
        .iter()
        .try_fold(0i64, |acc, &s| acc.checked_add(s))
        .ok_or(Error::TotalOverflow { n })
}

pub fn top_three_total(text: &str) -> Result<i64> {
    top_n_total(&block_sums(text)?, TOP_N)
}

pub fn solve(path: impl AsRef<Path>) -> Result<i64> {
    let path = path.as_ref();
    debug!("reading {}", path.display());

    top_three_total(&read_input(path)?)
}
