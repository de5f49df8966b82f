//! Recursive-descent parser for the SQLite SQL dialect.
//!
//! [`core`] owns the token-stream plumbing, the top-level statement
//! loop, and panic-mode recovery. Each grammar area gets its own
//! sibling module contributing further `impl<'a> Parser<'a>` methods:
//! [`expr`] (operator-precedence expressions), [`select`]
//! (`SELECT`/`WITH`/joins/windows), [`dml`] (`INSERT`/`UPDATE`/
//! `DELETE`/upserts), [`ddl`] (`CREATE`/`ALTER TABLE`/`DROP` and the
//! column/table constraint grammar), and [`misc`] (transaction control
//! and database-management statements).

mod core;
mod ddl;
mod dml;
mod expr;
mod misc;
mod select;

pub use core::{parse, Parser};
