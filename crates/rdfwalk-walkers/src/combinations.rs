//! Lazy `k`-combinations over an index range.

use std::iter::FusedIterator;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// Every `k`-subset of `range`, as ascending index vectors, in lexicographic
/// order.
///
/// Finite and restartable: clone a fresh generator to enumerate again.
/// `k = 0` yields the empty subset once; `k` larger than the range yields
/// nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    indices: Vec<usize>,
    end: usize,
    state: State,
}

impl Combinations {
    pub fn new(range: Range<usize>, k: usize) -> Self {
        let len = range.end.saturating_sub(range.start);
        let state = if k > len { State::Done } else { State::Fresh };
        Self {
            indices: (range.start..range.start + k).collect(),
            end: range.end,
            state,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => None,
            State::Fresh => {
                self.state = State::Running;
                Some(self.indices.clone())
            }
            State::Running => {
                let k = self.indices.len();
                // Rightmost slot that can still move right.
                let Some(i) = (0..k)
                    .rev()
                    .find(|&i| self.indices[i] < self.end - k + i)
                else {
                    self.state = State::Done;
                    return None;
                };
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                Some(self.indices.clone())
            }
        }
    }
}

impl FusedIterator for Combinations {}

/// `C(n, k)`, saturating at `usize::MAX`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    acc as usize
}
