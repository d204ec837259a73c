//! Unit tests mirroring the `src/` layout, one file per source file

mod analysis;
mod io;

use mdpattern::Dataset;

/// Build a dataset from string cells where `NA` marks a missing value
fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
    let columns = columns.iter().map(ToString::to_string).collect();
    let rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| (cell != "NA").then(|| cell.to_string()))
                .collect()
        })
        .collect();
    Dataset::new(columns, rows).unwrap()
}

/// Six rows over `a`, `b`, `c` with four distinct patterns
///
/// Missing counts are a: 2, b: 3, c: 1, so variables display as `c, a, b`.
/// Patterns in order: complete (2 rows), `b` missing (2), `a,b` missing (1),
/// `c,a` missing (1).
fn sample_dataset() -> Dataset {
    dataset(
        &["a", "b", "c"],
        &[
            &["1", "2", "3"],
            &["1", "NA", "3"],
            &["NA", "NA", "3"],
            &["1", "2", "3"],
            &["1", "NA", "3"],
            &["NA", "2", "NA"],
        ],
    )
}

/// Four rows over `a`, `b` and cluster `g` with clusters `x` and `y`
fn clustered_dataset() -> Dataset {
    dataset(
        &["a", "b", "g"],
        &[
            &["1", "2", "x"],
            &["NA", "2", "x"],
            &["1", "NA", "y"],
            &["1", "2", "y"],
        ],
    )
}
