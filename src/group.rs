//! Grouping of table rows by one or more key columns.
//!
//! A [`Key`] names a column and how its cells are compared: numerically (after
//! coercion, so `64` and `64.0` are the same grid size) or as raw text (for
//! categorical columns such as thread placement). [`group_by`] enumerates the
//! cross-product of the distinct values of every key and selects, for each
//! combination, the rows matching all of them.

use crate::{
    error::Result,
    table::{Table, parse_numeric},
};
use std::fmt;

/// How a key column is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Numeric,
    Text,
}

/// A grouping key: a column position and its comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub column: usize,
    pub kind: KeyKind,
}

impl Key {
    pub fn numeric(column: usize) -> Self {
        Key {
            column,
            kind: KeyKind::Numeric,
        }
    }

    pub fn text(column: usize) -> Self {
        Key {
            column,
            kind: KeyKind::Text,
        }
    }
}

/// One distinct value of a key column.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue {
    Number(f64),
    Text(String),
}

impl KeyValue {
    /// The numeric value, or NaN for a text key.
    pub fn as_f64(&self) -> f64 {
        match self {
            KeyValue::Number(v) => *v,
            KeyValue::Text(_) => f64::NAN,
        }
    }

    fn matches(&self, cell: &str) -> bool {
        match self {
            KeyValue::Number(v) => parse_numeric(cell) == *v,
            KeyValue::Text(t) => cell == t,
        }
    }
}

impl fmt::Display for KeyValue {
    /// Integral numbers print without a fractional part, so a grid size of
    /// `64.0` reads as `64` in legends.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            KeyValue::Number(v) => write!(f, "{v}"),
            KeyValue::Text(t) => f.write_str(t),
        }
    }
}

/// The rows sharing one combination of key values.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// One value per key, in key order.
    pub values: Vec<KeyValue>,
    /// Matching row indices in file order.
    pub rows: Vec<usize>,
}

impl Group {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Numeric values of `col` restricted to this group's rows.
    pub fn numeric(&self, table: &Table, col: usize) -> Result<Vec<f64>> {
        table.numeric_at(&self.rows, col)
    }
}

/// Distinct numeric values of a column, sorted ascending, NaN excluded.
pub fn unique_numeric(table: &Table, col: usize) -> Result<Vec<f64>> {
    let mut values: Vec<f64> = table
        .numeric(col)?
        .into_iter()
        .filter(|v| !v.is_nan())
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    Ok(values)
}

/// Distinct text values of a column, sorted lexically.
pub fn unique_text(table: &Table, col: usize) -> Result<Vec<String>> {
    let mut values: Vec<String> = table.text(col)?.into_iter().map(str::to_string).collect();
    values.sort();
    values.dedup();
    Ok(values)
}

/// Distinct values of a key column in ascending order.
pub fn unique_values(table: &Table, key: Key) -> Result<Vec<KeyValue>> {
    Ok(match key.kind {
        KeyKind::Numeric => unique_numeric(table, key.column)?
            .into_iter()
            .map(KeyValue::Number)
            .collect(),
        KeyKind::Text => unique_text(table, key.column)?
            .into_iter()
            .map(KeyValue::Text)
            .collect(),
    })
}

/// Row indices matching every `(key, value)` predicate, in file order.
pub fn select(table: &Table, predicates: &[(Key, KeyValue)]) -> Result<Vec<usize>> {
    for (key, _) in predicates {
        table.check_column(key.column)?;
    }
    let columns: Vec<Vec<&str>> = predicates
        .iter()
        .map(|(key, _)| table.text(key.column))
        .collect::<Result<_>>()?;

    Ok((0..table.len())
        .filter(|&row| {
            predicates
                .iter()
                .zip(&columns)
                .all(|((_, value), cells)| value.matches(cells[row]))
        })
        .collect())
}

/// Groups rows by the cross-product of the distinct values of `keys`.
///
/// Groups are returned in lexicographic order of their key tuples, the first key
/// varying slowest. Combinations with no matching rows are kept as empty groups so
/// callers can iterate the full product; renderers simply skip them.
pub fn group_by(table: &Table, keys: &[Key]) -> Result<Vec<Group>> {
    let domains: Vec<Vec<KeyValue>> = keys
        .iter()
        .map(|&key| unique_values(table, key))
        .collect::<Result<_>>()?;

    let mut groups = Vec::new();
    for values in cross_product(&domains) {
        let predicates: Vec<(Key, KeyValue)> =
            keys.iter().copied().zip(values.iter().cloned()).collect();
        let rows = select(table, &predicates)?;
        groups.push(Group { values, rows });
    }
    log::debug!(
        "Grouped {} rows into {} key combinations ({} non-empty)",
        table.len(),
        groups.len(),
        groups.iter().filter(|g| !g.is_empty()).count()
    );
    Ok(groups)
}

fn cross_product(domains: &[Vec<KeyValue>]) -> Vec<Vec<KeyValue>> {
    domains.iter().fold(vec![Vec::new()], |acc, domain| {
        acc.iter()
            .flat_map(|prefix| {
                domain.iter().map(move |value| {
                    let mut next = prefix.clone();
                    next.push(value.clone());
                    next
                })
            })
            .collect()
    })
}
