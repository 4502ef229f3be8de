//! lcs-diff: a character-level diff engine built on the Longest Common Subsequence dynamic program.
//!
//! Goals
//! - Produce a minimal edit script (insert/delete/equal) turning one string into another.
//! - Deterministic output, with deletions placed before insertions wherever scores tie.
//! - Bounded stack use on long inputs; the backtrace is an explicit loop.
//!
//! Core Capabilities
//! - Short-circuits: empty or identical inputs yield a single operation without tabulation.
//! - Affix trimming: common prefix/suffix are split off and returned as whole `Equal` runs.
//! - Tabulation: O(m·n) time and space `EditGraph`, owned by one call and dropped after it.
//! - Backtrace: one operation per character for the differing middle.
//!
//! Modules
//! - `diff`: `DiffCalculator`, `compute_diff`, and the graph/affix/tabulate/backtrack stages.
//! - `operation`: `EditOperation` and `EditKind`.
//! - `render`: `+`/`-` rendering, run coalescing, old/new reconstruction.
//! - `config`: `DiffConfig`.
//! - `errors`: unified error type.
//!
//! Typical Usage
//! ```
//! use lcs_diff::{compute_diff, render::render};
//!
//! let ops: Vec<_> = compute_diff("ABCABBA", "CBABAC").unwrap().collect();
//! assert_eq!(render(&ops), "-A-BC-AB+ABA+C");
//! ```

pub mod config;
pub mod diff;
pub mod errors;
pub mod operation;
pub mod render;

pub use config::DiffConfig;
pub use diff::{DiffCalculator, DiffResult, compute_diff};
pub use errors::DiffError;
pub use operation::{EditKind, EditOperation};
