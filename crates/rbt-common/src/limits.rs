//! Centralized limits and thresholds for the type representation layer.
//!
//! Traversals over type trees in `rbt-types` are iterative wherever the
//! result is a plain boolean or count, so there is no depth limit on
//! construction. The constants here size the worklists those traversals use
//! and bound the few walks that remain recursive (diagnostic rendering and
//! `Debug` output).

// =============================================================================
// Worklist sizing
// =============================================================================

/// Initial capacity for traversal worklists.
///
/// Most types seen during inference are shallow (a class, a union of two
/// classes, a small tuple), so the worklist rarely spills past this size.
pub const DEFAULT_WORKLIST_CAPACITY: usize = 16;

/// Number of released values above which a release is logged at `trace`.
pub const RELEASE_TRACE_THRESHOLD: usize = 1024;

// =============================================================================
// Recursive rendering
// =============================================================================

/// Remaining stack below which recursive rendering (`show`, `Debug`) switches
/// to a fresh segment.
///
/// Passed as the red zone to `stacker::maybe_grow`.
pub const SHOW_STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated by `stacker` during rendering.
pub const SHOW_STACK_GROW: usize = 2 * 1024 * 1024;

/// Maximum number of elements rendered for a tuple, shape, union chain, or
/// type-argument list before the rest is elided with `...`.
///
/// A 500-element tuple renders its first 10 elements followed by
/// `, ... (490 more)`.
pub const MAX_SHOW_ELEMENTS: usize = 10;
