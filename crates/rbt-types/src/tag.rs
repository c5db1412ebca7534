//! Type-expression tags.
//!
//! `Tag` is the discriminator of [`TypePtr`](crate::TypePtr). Every query that
//! only depends on the kind of a type (ordering bucket, diagnostic name) lives
//! here as an exhaustive `match`, so adding a variant fails the build until
//! each table is extended.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of type-expression kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tag {
    ClassType,
    LambdaParam,
    SelfTypeParam,
    AliasType,
    SelfType,
    LiteralType,
    TypeVar,
    OrType,
    AndType,
    ShapeType,
    TupleType,
    AppliedType,
    MetaType,
    BlamedUntyped,
    UnresolvedClassType,
    UnresolvedAppliedType,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 16] = [
        Tag::ClassType,
        Tag::LambdaParam,
        Tag::SelfTypeParam,
        Tag::AliasType,
        Tag::SelfType,
        Tag::LiteralType,
        Tag::TypeVar,
        Tag::OrType,
        Tag::AndType,
        Tag::ShapeType,
        Tag::TupleType,
        Tag::AppliedType,
        Tag::MetaType,
        Tag::BlamedUntyped,
        Tag::UnresolvedClassType,
        Tag::UnresolvedAppliedType,
    ];

    /// Canonical ordering bucket.
    ///
    /// Used wherever heterogeneous types need a deterministic order: stable
    /// printing, flattening of union/intersection chains, type-keyed maps.
    /// Resolved and unresolved nominal forms share bucket 2 so that ordering
    /// logic treats them uniformly.
    pub const fn kind_bucket(self) -> u8 {
        match self {
            Tag::AppliedType => 1,
            Tag::BlamedUntyped
            | Tag::UnresolvedAppliedType
            | Tag::UnresolvedClassType
            | Tag::ClassType => 2,
            Tag::LiteralType => 3,
            Tag::ShapeType => 4,
            Tag::TupleType => 5,
            Tag::LambdaParam | Tag::SelfTypeParam => 6,
            Tag::MetaType => 7,
            Tag::TypeVar => 8,
            Tag::AliasType => 9,
            Tag::OrType => 10,
            Tag::AndType => 11,
            Tag::SelfType => 12,
        }
    }

    /// Stable diagnostic name, identical to the variant identifier.
    ///
    /// For diagnostics and assertions only; never branch on it.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::AppliedType => "AppliedType",
            Tag::BlamedUntyped => "BlamedUntyped",
            Tag::UnresolvedAppliedType => "UnresolvedAppliedType",
            Tag::UnresolvedClassType => "UnresolvedClassType",
            Tag::ClassType => "ClassType",
            Tag::LiteralType => "LiteralType",
            Tag::ShapeType => "ShapeType",
            Tag::TupleType => "TupleType",
            Tag::LambdaParam => "LambdaParam",
            Tag::SelfTypeParam => "SelfTypeParam",
            Tag::MetaType => "MetaType",
            Tag::TypeVar => "TypeVar",
            Tag::AliasType => "AliasType",
            Tag::OrType => "OrType",
            Tag::AndType => "AndType",
            Tag::SelfType => "SelfType",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../tests/tag_tests.rs"]
mod tests;
