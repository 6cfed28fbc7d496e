//! Core catalog types

mod book;
mod lookup;

pub use book::Book;
pub use lookup::{Lookup, UNKNOWN};
