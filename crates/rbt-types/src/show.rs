//! Compact rendering of types for diagnostics and test output.
//!
//! This is not the user-facing printer: it exists so that assertion messages
//! and trace events can say `T.any(Integer, String)` instead of dumping the
//! `Debug` tree. Long lists are elided after
//! [`MAX_SHOW_ELEMENTS`](rbt_common::limits::MAX_SHOW_ELEMENTS).

use crate::ordering::{flatten_and, flatten_or};
use crate::symbols::{ClassOrModuleRef, NameRef, SymbolTable};
use crate::type_ptr::TypePtr;
use crate::types::{LiteralType, LiteralValue};
use rbt_common::limits::{MAX_SHOW_ELEMENTS, SHOW_STACK_GROW, SHOW_STACK_RED_ZONE};
use std::fmt::{self, Write};

impl TypePtr {
    /// Render this type using class and name text from `symbols`.
    pub fn show(&self, symbols: &SymbolTable) -> String {
        self.display(symbols).to_string()
    }

    /// Lazy form of [`show`](Self::show) for use in `format!` and tracing
    /// fields, writing straight into the formatter.
    pub fn display<'a>(&'a self, symbols: &'a SymbolTable) -> impl fmt::Display + 'a {
        Shown { ty: self, symbols }
    }
}

struct Shown<'a> {
    ty: &'a TypePtr,
    symbols: &'a SymbolTable,
}

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        show_into(f, self.ty, self.symbols)
    }
}

fn write_class<W: Write>(
    out: &mut W,
    symbols: &SymbolTable,
    klass: ClassOrModuleRef,
) -> fmt::Result {
    match symbols.class_name(klass) {
        Some(name) => out.write_str(name),
        None => write!(out, "<class {}>", klass.0),
    }
}

fn write_name<W: Write>(out: &mut W, symbols: &SymbolTable, name: NameRef) -> fmt::Result {
    match symbols.name_text(name) {
        Some(text) => out.write_str(text),
        None => write!(out, "<name {}>", name.0),
    }
}

fn show_literal<W: Write>(
    out: &mut W,
    symbols: &SymbolTable,
    value: LiteralValue,
) -> fmt::Result {
    match value {
        LiteralValue::Integer(v) => write!(out, "Integer({v})"),
        LiteralValue::Float(bits) => write!(out, "Float({})", f64::from_bits(bits)),
        LiteralValue::String(name) => match symbols.name_text(name) {
            Some(text) => write!(out, "String({text:?})"),
            None => write!(out, "String(\"<name {}>\")", name.0),
        },
        LiteralValue::Symbol(name) => {
            out.write_str("Symbol(:")?;
            write_name(out, symbols, name)?;
            out.write_char(')')
        }
        LiteralValue::True => out.write_str("TrueClass"),
        LiteralValue::False => out.write_str("FalseClass"),
    }
}

fn write_elided<W: Write>(out: &mut W, total: usize) -> fmt::Result {
    if total > MAX_SHOW_ELEMENTS {
        write!(out, ", ... ({} more)", total - MAX_SHOW_ELEMENTS)?;
    }
    Ok(())
}

/// Render `items` separated by `", "`, eliding past the display limit.
fn show_list<'a, W: Write>(
    out: &mut W,
    items: impl ExactSizeIterator<Item = &'a TypePtr>,
    symbols: &SymbolTable,
) -> fmt::Result {
    let total = items.len();
    for (i, item) in items.take(MAX_SHOW_ELEMENTS).enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        show_into(out, item, symbols)?;
    }
    write_elided(out, total)
}

fn show_into<W: Write>(out: &mut W, ty: &TypePtr, symbols: &SymbolTable) -> fmt::Result {
    stacker::maybe_grow(SHOW_STACK_RED_ZONE, SHOW_STACK_GROW, || match ty {
        TypePtr::ClassType(class) => write_class(out, symbols, class.symbol),
        TypePtr::LambdaParam(param) => write!(out, "<LambdaParam {}>", param.definition.0),
        TypePtr::SelfTypeParam(param) => write!(out, "<SelfTypeParam {}>", param.definition.0),
        TypePtr::AliasType(alias) => write!(out, "<Alias {}>", alias.symbol.0),
        TypePtr::SelfType(_) => out.write_str("T.self_type"),
        TypePtr::LiteralType(lit) => show_literal(out, symbols, lit.value),
        TypePtr::TypeVar(var) => write!(out, "<TypeVar {}>", var.id.0),
        TypePtr::OrType(_) => {
            out.write_str("T.any(")?;
            show_list(out, flatten_or(ty).into_iter(), symbols)?;
            out.write_char(')')
        }
        TypePtr::AndType(_) => {
            out.write_str("T.all(")?;
            show_list(out, flatten_and(ty).into_iter(), symbols)?;
            out.write_char(')')
        }
        TypePtr::ShapeType(shape) => {
            out.write_char('{')?;
            for (i, (key, value)) in shape.entries().take(MAX_SHOW_ELEMENTS).enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                let symbol_key = key.cast::<LiteralType>().and_then(|lit| match lit.value {
                    LiteralValue::Symbol(name) => Some(name),
                    _ => None,
                });
                match symbol_key {
                    Some(name) => {
                        write_name(out, symbols, name)?;
                        out.write_str(": ")?;
                    }
                    None => {
                        show_into(out, key, symbols)?;
                        out.write_str(" => ")?;
                    }
                }
                show_into(out, value, symbols)?;
            }
            // Count what `entries` yields, not either list alone.
            write_elided(out, shape.keys.len().min(shape.values.len()))?;
            out.write_char('}')
        }
        TypePtr::TupleType(tuple) => {
            out.write_char('[')?;
            show_list(out, tuple.elems.iter(), symbols)?;
            out.write_char(']')
        }
        TypePtr::AppliedType(app) => {
            write_class(out, symbols, app.klass)?;
            out.write_char('[')?;
            show_list(out, app.targs.iter(), symbols)?;
            out.write_char(']')
        }
        TypePtr::MetaType(meta) => {
            out.write_str("<Type: ")?;
            show_into(out, &meta.wrapped, symbols)?;
            out.write_char('>')
        }
        TypePtr::BlamedUntyped(_) => out.write_str("T.untyped"),
        TypePtr::UnresolvedClassType(unresolved) => {
            for (i, &name) in unresolved.names.iter().enumerate() {
                if i > 0 {
                    out.write_str("::")?;
                }
                write_name(out, symbols, name)?;
            }
            out.write_str(" (unresolved)")
        }
        TypePtr::UnresolvedAppliedType(app) => {
            write_name(out, symbols, app.name)?;
            out.write_char('[')?;
            show_list(out, app.targs.iter(), symbols)?;
            out.write_str("] (unresolved)")
        }
    })
}

#[cfg(test)]
#[path = "../tests/show_tests.rs"]
mod tests;
