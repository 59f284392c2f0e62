//! Explicit game trees for exercising the search.
//!
//! Positions are nodes, moves are edges. Trees can be written out by hand
//! with `TreeGameBuilder` or generated from a seed with `RandomTree`, which
//! can also share subtrees to create transpositions.

mod game;

pub use game::{NodeId, RandomTree, TreeGame, TreeGameBuilder, TreeNode};
