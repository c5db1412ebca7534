//! Structural traversal helpers.
//!
//! [`TypePtr::children`] is the one place that knows which fields of each
//! payload hold nested types; the measurements below are built on it and
//! walk an explicit stack instead of recursing.

use crate::type_ptr::TypePtr;
use rbt_common::limits::DEFAULT_WORKLIST_CAPACITY;
use smallvec::SmallVec;

/// Immediate children of a type, in field order.
pub type Children<'a> = SmallVec<[&'a TypePtr; 4]>;

impl TypePtr {
    /// Immediate nested types, in field order.
    ///
    /// Shapes yield all keys followed by all values. Lambda parameters yield
    /// their lower then upper bound.
    pub fn children(&self) -> Children<'_> {
        let mut out = Children::new();
        match self {
            TypePtr::ClassType(_)
            | TypePtr::SelfTypeParam(_)
            | TypePtr::AliasType(_)
            | TypePtr::SelfType(_)
            | TypePtr::LiteralType(_)
            | TypePtr::TypeVar(_)
            | TypePtr::BlamedUntyped(_)
            | TypePtr::UnresolvedClassType(_) => {}

            TypePtr::LambdaParam(param) => {
                out.push(&param.lower_bound);
                out.push(&param.upper_bound);
            }
            TypePtr::OrType(or) => {
                out.push(&or.left);
                out.push(&or.right);
            }
            TypePtr::AndType(and) => {
                out.push(&and.left);
                out.push(&and.right);
            }
            TypePtr::ShapeType(shape) => {
                out.extend(shape.keys.iter());
                out.extend(shape.values.iter());
            }
            TypePtr::TupleType(tuple) => out.extend(tuple.elems.iter()),
            TypePtr::AppliedType(app) => out.extend(app.targs.iter()),
            TypePtr::MetaType(meta) => out.push(&meta.wrapped),
            TypePtr::UnresolvedAppliedType(app) => out.extend(app.targs.iter()),
        }
        out
    }

    /// Nesting depth. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut pending: SmallVec<[(&TypePtr, usize); DEFAULT_WORKLIST_CAPACITY]> =
            SmallVec::new();
        pending.push((self, 1));

        while let Some((ty, level)) = pending.pop() {
            max_depth = max_depth.max(level);
            pending.extend(ty.children().into_iter().map(|child| (child, level + 1)));
        }
        max_depth
    }

    /// Total number of nodes, counting shared subtrees once per occurrence.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending: SmallVec<[&TypePtr; DEFAULT_WORKLIST_CAPACITY]> = SmallVec::new();
        pending.push(self);

        while let Some(ty) = pending.pop() {
            count += 1;
            pending.extend(ty.children());
        }
        count
    }

    /// Whether `predicate` holds for this type or any type nested in it.
    pub fn any_node(&self, mut predicate: impl FnMut(&TypePtr) -> bool) -> bool {
        let mut pending: SmallVec<[&TypePtr; DEFAULT_WORKLIST_CAPACITY]> = SmallVec::new();
        pending.push(self);

        while let Some(ty) = pending.pop() {
            if predicate(ty) {
                return true;
            }
            pending.extend(ty.children());
        }
        false
    }
}

#[cfg(test)]
#[path = "../tests/walk_tests.rs"]
mod tests;
