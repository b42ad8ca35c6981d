//! skeltrace-test - Shared helpers for regression tests
//!
//! Fixtures in this workspace are small synthetic bitmaps, so the helpers
//! here build them from ASCII art and measure simple topological
//! properties instead of comparing against golden files.
//!
//! # Usage
//!
//! ```
//! use skeltrace_test::{bitmap_from_ascii, count_components_4};
//!
//! let im = bitmap_from_ascii(
//!     "....\n\
//!      .##.\n\
//!      ....",
//! )
//! .unwrap();
//! assert_eq!(im.width(), 4);
//! assert_eq!(count_components_4(&im), 1);
//! ```

use skeltrace_core::Bitmap;
use thiserror::Error;

/// Errors from test fixture construction
#[derive(Debug, Error)]
pub enum TestError {
    /// ASCII art rows have different lengths
    #[error("ragged ascii art: row {row} has {len} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Unrecognized character in ASCII art
    #[error("unrecognized character {ch:?} at row {row}, column {col}")]
    BadCharacter { ch: char, row: usize, col: usize },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] skeltrace_core::Error),
}

/// Result type for test helpers
pub type TestResult<T> = Result<T, TestError>;

/// Build a bitmap from ASCII art.
///
/// `#` and `1` are foreground; `.`, `0` and space are background. Rows
/// are newline-separated and must all have the same length.
pub fn bitmap_from_ascii(art: &str) -> TestResult<Bitmap> {
    let rows: Vec<&str> = art
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut data = Vec::with_capacity(width * height);
    for (row, line) in rows.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            return Err(TestError::RaggedRows {
                row,
                len,
                expected: width,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            data.push(match ch {
                '#' | '1' => 1,
                '.' | '0' | ' ' => 0,
                ch => return Err(TestError::BadCharacter { ch, row, col }),
            });
        }
    }
    Ok(Bitmap::from_raw(width as u32, height as u32, data)?)
}

/// Count 4-connected foreground components.
pub fn count_components_4(im: &Bitmap) -> usize {
    count_components(im, &[(-1, 0), (1, 0), (0, -1), (0, 1)])
}

/// Count 8-connected foreground components.
pub fn count_components_8(im: &Bitmap) -> usize {
    count_components(
        im,
        &[
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ],
    )
}

fn count_components(im: &Bitmap, neighbors: &[(i32, i32)]) -> usize {
    let w = im.width() as usize;
    let h = im.height() as usize;
    let mut seen = vec![false; w * h];
    let mut count = 0;
    let mut stack = Vec::new();
    for start in 0..w * h {
        if seen[start] || im.data()[start] == 0 {
            continue;
        }
        count += 1;
        seen[start] = true;
        stack.push(start);
        while let Some(idx) = stack.pop() {
            let (x, y) = ((idx % w) as i32, (idx / w) as i32);
            for &(dx, dy) in neighbors {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                    continue;
                }
                let nidx = ny as usize * w + nx as usize;
                if !seen[nidx] && im.data()[nidx] != 0 {
                    seen[nidx] = true;
                    stack.push(nidx);
                }
            }
        }
    }
    count
}

/// Render a bitmap back to ASCII art (for failure diagnostics).
pub fn bitmap_to_ascii(im: &Bitmap) -> String {
    let mut out = String::with_capacity((im.width() as usize + 1) * im.height() as usize);
    for y in 0..im.height() {
        for &v in im.row(y) {
            out.push(if v != 0 { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
