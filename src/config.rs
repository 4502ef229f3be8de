//! Serde-backed configuration for the diff calculator, including human-readable size limits.

use serde::{Deserialize, Deserializer, Serialize};

/// Tuning knobs for [`DiffCalculator`](crate::diff::DiffCalculator).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DiffConfig {
    /// Strip the common prefix/suffix before tabulating the remainder.
    pub trim_affixes: bool,
    /// Upper bound on `(m + 1) * (n + 1)` for the tabulated sub-problem.
    /// Accepts a plain integer or a string such as `"4M"`.
    #[serde(deserialize_with = "cells_limit")]
    pub max_table_cells: Option<usize>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            trim_affixes: true,
            max_table_cells: None,
        }
    }
}

/// Parse `"512"`, `"64K"`, `"4M"` or `"1G"` (binary multiples) into a cell count.
fn parse_cells(value: &str) -> Option<usize> {
    let value = value.trim();
    let (digits, multiplier) = match value.char_indices().last()? {
        (idx, 'k' | 'K') => (&value[..idx], 1usize << 10),
        (idx, 'm' | 'M') => (&value[..idx], 1usize << 20),
        (idx, 'g' | 'G') => (&value[..idx], 1usize << 30),
        _ => (value, 1),
    };
    digits.trim().parse::<usize>().ok()?.checked_mul(multiplier)
}

fn cells_limit<'deserialize, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'deserialize>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrUSize {
        String(String),
        USize(usize),
    }

    match Option::<StringOrUSize>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrUSize::USize(v)) => Ok(Some(v)),
        Some(StringOrUSize::String(v)) => parse_cells(&v)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid cell limit `{v}`"))),
    }
}
