//! Tag-directed release of type payloads.
//!
//! Leaf payloads need no destruction logic. Composite payloads own nested
//! types, and the default recursive drop of a long `OrType` chain (or a deeply
//! nested tuple) would recurse once per level. Instead, each composite
//! payload moves its children onto a worklist when it is dropped, and
//! [`release_all`] drains that worklist, detaching the children of every
//! payload it holds the last reference to before letting it go. Payloads
//! still shared with another owner only lose a reference count.
//!
//! The dispatch in [`TypePtr::detach_children`] is an exhaustive match over
//! every variant, so a new variant cannot be added without deciding how it
//! releases its children.

use crate::type_ptr::TypePtr;
use crate::types::{
    AndType, AppliedType, LambdaParam, MetaType, OrType, ShapeType, TupleType,
    UnresolvedAppliedType,
};
use rbt_common::limits::RELEASE_TRACE_THRESHOLD;
use std::mem;
use std::sync::Arc;
use tracing::trace;

/// Payloads that own nested types.
trait Dismantle {
    /// Whether any child could own further nested types.
    fn has_composite_children(&self) -> bool;

    /// Move every child onto `out`, leaving leaf placeholders behind.
    fn dismantle(&mut self, out: &mut Vec<TypePtr>);
}

fn take(slot: &mut TypePtr) -> TypePtr {
    mem::replace(slot, TypePtr::PLACEHOLDER)
}

impl Dismantle for LambdaParam {
    fn has_composite_children(&self) -> bool {
        self.lower_bound.is_composite() || self.upper_bound.is_composite()
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.push(take(&mut self.lower_bound));
        out.push(take(&mut self.upper_bound));
    }
}

impl Dismantle for OrType {
    fn has_composite_children(&self) -> bool {
        self.left.is_composite() || self.right.is_composite()
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.push(take(&mut self.left));
        out.push(take(&mut self.right));
    }
}

impl Dismantle for AndType {
    fn has_composite_children(&self) -> bool {
        self.left.is_composite() || self.right.is_composite()
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.push(take(&mut self.left));
        out.push(take(&mut self.right));
    }
}

impl Dismantle for ShapeType {
    fn has_composite_children(&self) -> bool {
        self.keys.iter().chain(&self.values).any(TypePtr::is_composite)
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.append(&mut self.keys);
        out.append(&mut self.values);
    }
}

impl Dismantle for TupleType {
    fn has_composite_children(&self) -> bool {
        self.elems.iter().any(TypePtr::is_composite)
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.append(&mut self.elems);
    }
}

impl Dismantle for AppliedType {
    fn has_composite_children(&self) -> bool {
        self.targs.iter().any(TypePtr::is_composite)
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.append(&mut self.targs);
    }
}

impl Dismantle for MetaType {
    fn has_composite_children(&self) -> bool {
        self.wrapped.is_composite()
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.push(take(&mut self.wrapped));
    }
}

impl Dismantle for UnresolvedAppliedType {
    fn has_composite_children(&self) -> bool {
        self.targs.iter().any(TypePtr::is_composite)
    }

    fn dismantle(&mut self, out: &mut Vec<TypePtr>) {
        out.append(&mut self.targs);
    }
}

/// Detach the children of a uniquely owned payload.
fn detach<T: Dismantle>(payload: &mut Arc<T>, out: &mut Vec<TypePtr>) {
    if let Some(inner) = Arc::get_mut(payload) {
        inner.dismantle(out);
    }
}

impl TypePtr {
    /// Move the children of this value's payload onto `out` if this is the
    /// last reference to it. Leaves and shared payloads are left untouched.
    fn detach_children(&mut self, out: &mut Vec<TypePtr>) {
        match self {
            TypePtr::ClassType(_)
            | TypePtr::SelfTypeParam(_)
            | TypePtr::AliasType(_)
            | TypePtr::SelfType(_)
            | TypePtr::LiteralType(_)
            | TypePtr::TypeVar(_)
            | TypePtr::BlamedUntyped(_)
            | TypePtr::UnresolvedClassType(_) => {}

            TypePtr::LambdaParam(param) => detach(param, out),
            TypePtr::OrType(or) => detach(or, out),
            TypePtr::AndType(and) => detach(and, out),
            TypePtr::ShapeType(shape) => detach(shape, out),
            TypePtr::TupleType(tuple) => detach(tuple, out),
            TypePtr::AppliedType(app) => detach(app, out),
            TypePtr::MetaType(meta) => detach(meta, out),
            TypePtr::UnresolvedAppliedType(app) => detach(app, out),
        }
    }
}

/// Release every value in `pending` without recursing into nested payloads.
///
/// Returns the number of values released, including nested ones reached
/// through uniquely owned payloads.
pub fn release_all(mut pending: Vec<TypePtr>) -> usize {
    let mut released = 0usize;
    while let Some(mut ty) = pending.pop() {
        ty.detach_children(&mut pending);
        // `ty` now owns at most leaf placeholders; dropping it is shallow.
        drop(ty);
        released += 1;
    }
    if released > RELEASE_TRACE_THRESHOLD {
        trace!(released, "released nested type payloads");
    }
    released
}

fn release_payload<T: Dismantle>(payload: &mut T) {
    if !payload.has_composite_children() {
        return;
    }
    let mut pending = Vec::new();
    payload.dismantle(&mut pending);
    release_all(pending);
}

macro_rules! impl_iterative_drop {
    ($($payload:ident),* $(,)?) => {$(
        impl Drop for $payload {
            fn drop(&mut self) {
                release_payload(self);
            }
        }
    )*};
}

impl_iterative_drop!(
    LambdaParam,
    OrType,
    AndType,
    ShapeType,
    TupleType,
    AppliedType,
    MetaType,
    UnresolvedAppliedType,
);

#[cfg(test)]
#[path = "../tests/release_tests.rs"]
mod tests;
