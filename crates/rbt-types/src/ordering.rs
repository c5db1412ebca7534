//! Canonical ordering across heterogeneous type variants.
//!
//! Ordering only looks at the kind bucket ([`Tag::kind_bucket`]); variants
//! that share a bucket compare equal and keep their relative order under the
//! stable sort. Flattening walks a union or intersection chain left to right
//! without recursing.

use crate::tag::Tag;
use crate::type_ptr::TypePtr;
use rbt_common::limits::DEFAULT_WORKLIST_CAPACITY;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Compare two types by canonical kind bucket.
#[inline]
pub fn compare_kind(a: &TypePtr, b: &TypePtr) -> Ordering {
    a.type_kind().cmp(&b.type_kind())
}

/// Stable sort by canonical kind bucket.
pub fn sort_canonical(types: &mut [TypePtr]) {
    types.sort_by(compare_kind);
}

/// Flattened members of a union or intersection chain.
pub type Members<'a> = SmallVec<[&'a TypePtr; 8]>;

fn flatten(ty: &TypePtr, tag: Tag) -> Members<'_> {
    let mut members = Members::new();
    let mut pending: SmallVec<[&TypePtr; DEFAULT_WORKLIST_CAPACITY]> = SmallVec::new();
    pending.push(ty);

    while let Some(current) = pending.pop() {
        match current {
            TypePtr::OrType(or) if tag == Tag::OrType => {
                pending.push(&or.right);
                pending.push(&or.left);
            }
            TypePtr::AndType(and) if tag == Tag::AndType => {
                pending.push(&and.right);
                pending.push(&and.left);
            }
            _ => members.push(current),
        }
    }
    members
}

/// Members of a union chain, left to right. A non-union yields itself.
///
/// Intersections nested in the chain are members, not flattened.
pub fn flatten_or(ty: &TypePtr) -> Members<'_> {
    flatten(ty, Tag::OrType)
}

/// Members of an intersection chain, left to right. A non-intersection
/// yields itself.
pub fn flatten_and(ty: &TypePtr) -> Members<'_> {
    flatten(ty, Tag::AndType)
}

#[cfg(test)]
#[path = "../tests/ordering_tests.rs"]
mod tests;
