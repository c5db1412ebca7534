//! Symbol identities consumed by the type layer.
//!
//! The type layer never owns the checker's global symbol table. It only needs
//! cheap, comparable identities for the symbols a type refers to, plus the
//! three well-known sentinels used by the variant predicates. Those sentinels
//! are reached through [`WellKnownSymbols`], passed explicitly into every API
//! that needs them, so tests can substitute their own table.
//!
//! [`SymbolTable`] is a minimal implementation of that trait: enough to name
//! classes for diagnostics and to build types in tests and tools.

use crate::error::SymbolError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Identities
// =============================================================================

/// Reference to a class or module symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassOrModuleRef(pub u32);

/// Reference to any symbol (class, method, field, type alias target).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolRef(pub u32);

/// Reference to a type member (generic parameter of a method or class).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeMemberRef(pub u32);

/// Reference to an interned name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NameRef(pub u32);

/// Identifier of an inference variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeVarId(pub u32);

impl From<ClassOrModuleRef> for SymbolRef {
    fn from(klass: ClassOrModuleRef) -> Self {
        SymbolRef(klass.0)
    }
}

// =============================================================================
// Sentinels
// =============================================================================

/// Access to the well-known sentinel classes.
///
/// Implemented by whatever owns the symbol table. The type layer compares
/// against these by value, so an implementation must return the same
/// identity on every call.
pub trait WellKnownSymbols {
    /// The gradual "untyped" class (`T.untyped`).
    fn untyped(&self) -> ClassOrModuleRef;

    /// `NilClass`.
    fn nil_class(&self) -> ClassOrModuleRef;

    /// The empty type (`T.noreturn`).
    fn bottom(&self) -> ClassOrModuleRef;
}

// =============================================================================
// SymbolTable
// =============================================================================

/// Names registered by [`SymbolTable::new`], in id order.
const WELL_KNOWN_CLASSES: [&str; 11] = [
    "<none>",
    "T.untyped",
    "NilClass",
    "T.noreturn",
    "Integer",
    "Float",
    "String",
    "Symbol",
    "TrueClass",
    "FalseClass",
    "Array",
];

/// Minimal class/name registry implementing [`WellKnownSymbols`].
///
/// Class ids are dense and stable: `new()` always registers the well-known
/// classes first, in a fixed order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    names: Vec<Box<str>>,
    name_ids: FxHashMap<Box<str>, NameRef>,
    class_names: Vec<NameRef>,
    class_ids: FxHashMap<NameRef, ClassOrModuleRef>,
}

impl SymbolTable {
    /// Create a table with the well-known classes pre-registered.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            names: Vec::new(),
            name_ids: FxHashMap::default(),
            class_names: Vec::new(),
            class_ids: FxHashMap::default(),
        };
        for name in WELL_KNOWN_CLASSES {
            let name_ref = NameRef(table.names.len() as u32);
            table.names.push(name.into());
            table.name_ids.insert(name.into(), name_ref);
            let class_ref = ClassOrModuleRef(table.class_names.len() as u32);
            table.class_names.push(name_ref);
            table.class_ids.insert(name_ref, class_ref);
        }
        table
    }

    /// Intern `text`, returning the existing id if it was seen before.
    pub fn intern_name(&mut self, text: &str) -> Result<NameRef, SymbolError> {
        if let Some(&existing) = self.name_ids.get(text) {
            return Ok(existing);
        }
        let id = u32::try_from(self.names.len()).map_err(|_| SymbolError::Overflow {
            table: "names",
        })?;
        let name_ref = NameRef(id);
        self.names.push(text.into());
        self.name_ids.insert(text.into(), name_ref);
        Ok(name_ref)
    }

    /// Look up an already-interned name.
    pub fn lookup_name(&self, text: &str) -> Option<NameRef> {
        self.name_ids.get(text).copied()
    }

    /// Text of an interned name.
    pub fn name_text(&self, name: NameRef) -> Option<&str> {
        self.names.get(name.0 as usize).map(|text| &**text)
    }

    /// Register a class by name. Entering an existing name returns its id.
    pub fn enter_class(&mut self, name: &str) -> Result<ClassOrModuleRef, SymbolError> {
        let name_ref = self.intern_name(name)?;
        if let Some(&existing) = self.class_ids.get(&name_ref) {
            return Ok(existing);
        }
        let id = u32::try_from(self.class_names.len()).map_err(|_| SymbolError::Overflow {
            table: "classes",
        })?;
        let class_ref = ClassOrModuleRef(id);
        self.class_names.push(name_ref);
        self.class_ids.insert(name_ref, class_ref);
        Ok(class_ref)
    }

    /// Look up a registered class by name.
    pub fn lookup_class(&self, name: &str) -> Option<ClassOrModuleRef> {
        let name_ref = self.lookup_name(name)?;
        self.class_ids.get(&name_ref).copied()
    }

    /// Name of a registered class.
    pub fn class_name(&self, klass: ClassOrModuleRef) -> Option<&str> {
        let name_ref = *self.class_names.get(klass.0 as usize)?;
        self.name_text(name_ref)
    }

    /// Number of registered classes, including the well-known ones.
    pub fn class_count(&self) -> usize {
        self.class_names.len()
    }

    pub fn integer(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(4)
    }

    pub fn float(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(5)
    }

    pub fn string(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(6)
    }

    pub fn symbol(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(7)
    }

    pub fn true_class(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(8)
    }

    pub fn false_class(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(9)
    }

    pub fn array(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(10)
    }
}

impl WellKnownSymbols for SymbolTable {
    fn untyped(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(1)
    }

    fn nil_class(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(2)
    }

    fn bottom(&self) -> ClassOrModuleRef {
        ClassOrModuleRef(3)
    }
}

#[cfg(test)]
#[path = "../tests/symbols_tests.rs"]
mod tests;
