//! Errors at the few fallible edges of the type layer.
//!
//! Every query on a well-formed [`TypePtr`](crate::TypePtr) is total. These
//! errors only arise when a caller asks for a specific variant it does not
//! have, builds a shape with mismatched key/value lists, or exhausts a
//! symbol-table id space.

use crate::tag::Tag;
use thiserror::Error;

/// Errors raised by typed access and checked construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("expected {expected}, found {found}")]
    VariantMismatch { expected: Tag, found: Tag },

    #[error("shape has {keys} keys but {values} values")]
    ShapeArity { keys: usize, values: usize },
}

/// Errors raised by [`SymbolTable`](crate::SymbolTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("symbol table `{table}` exhausted its id space")]
    Overflow { table: &'static str },
}
