//! CSV tokenizer and aligned-grid builder.
//!
//! This crate turns raw CSV text into a [`Grid`]: a flat, row-major block
//! of cells with precomputed dimensions and printable row width, ready for
//! column-aligned rendering. The dialect is deliberately small: comma
//! delimiters, double-quote quoting with no escape mechanism, optional CRLF
//! line endings, and a mandatory final newline.
//!
//! # Example
//!
//! ```rust
//! use tabcat_grid::parse;
//!
//! let grid = parse("name,color\nzig,orange\n").unwrap();
//! assert_eq!(grid.width(), 2);
//! assert_eq!(grid.height(), 2);
//! assert_eq!(grid.cell(1, 1), "orange");
//! ```
//!
//! Ragged rows are padded with empty cells up to the widest row, so
//! `width * height` always equals the number of stored cells:
//!
//! ```rust
//! use tabcat_grid::parse;
//!
//! let grid = parse("a,b,c\nd\n").unwrap();
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.cell(2, 1), "");
//! ```

mod builder;
mod error;
mod grid;
mod lexer;

pub use builder::parse;
pub use error::GridError;
pub use grid::{Grid, SEPARATOR};
