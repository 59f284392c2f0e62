//! Explicit game tree implementation.

use anyhow::{bail, ensure, Context};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules::{DepthCutoff, Game};

/// Index of a node in a `TreeGame`. This is the game's state type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Get the raw node index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node of the tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Terminal position with a fixed utility for the maximizer.
    Leaf { utility: f64 },
    /// Position with moves. `heuristic` is reported when the search is cut
    /// off here.
    Interior {
        heuristic: f64,
        children: SmallVec<[NodeId; 4]>,
    },
}

/// A game whose positions and moves are an explicit tree or DAG.
///
/// Actions are child indices: action `i` from a node leads to its `i`-th
/// child. Perspective alternates with depth, so a node shared between
/// parents should be reachable only at depths of the same parity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeGame {
    nodes: Vec<TreeNode>,
    root: NodeId,
    cutoff: DepthCutoff,
}

impl TreeGame {
    /// The starting node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Children of a node in action order. Empty for leaves.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Interior { children, .. } => children.as_slice(),
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes. Never true for a built tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The search horizon.
    #[must_use]
    pub fn cutoff(&self) -> DepthCutoff {
        self.cutoff
    }

    /// Replace the search horizon.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: DepthCutoff) -> Self {
        self.cutoff = cutoff;
        self
    }
}

impl Game for TreeGame {
    type State = NodeId;
    type Action = usize;

    fn actions(&self, state: &NodeId) -> Vec<usize> {
        (0..self.children(*state).len()).collect()
    }

    fn result(&self, state: &NodeId, action: &usize) -> NodeId {
        self.children(*state)[*action]
    }

    fn is_terminal(&self, state: &NodeId) -> bool {
        matches!(self.node(*state), TreeNode::Leaf { .. })
    }

    /// Leaf utility. Interior nodes report their heuristic.
    fn utility(&self, state: &NodeId) -> f64 {
        match self.node(*state) {
            TreeNode::Leaf { utility } => *utility,
            TreeNode::Interior { heuristic, .. } => *heuristic,
        }
    }

    fn should_cut_off(&self, depth: u32) -> bool {
        self.cutoff.should_cut_off(depth)
    }

    fn evaluate(&self, state: &NodeId) -> f64 {
        self.utility(state)
    }
}

/// Builder for creating a TreeGame bottom-up.
///
/// Children must be added before their parents, which keeps every built
/// graph acyclic.
///
/// ```
/// use rust_minimax::games::tree::TreeGameBuilder;
///
/// let mut builder = TreeGameBuilder::new();
/// let low = builder.leaf(3.0);
/// let high = builder.leaf(5.0);
/// let root = builder.interior(0.0, &[low, high]);
/// let game = builder.build(root).unwrap();
/// assert_eq!(game.children(root), &[low, high]);
/// ```
#[derive(Clone, Debug)]
pub struct TreeGameBuilder {
    nodes: Vec<TreeNode>,
    cutoff: DepthCutoff,
}

impl Default for TreeGameBuilder {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            cutoff: DepthCutoff::unlimited(),
        }
    }
}

impl TreeGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search horizon of the built game (default: unlimited).
    pub fn cutoff(mut self, cutoff: DepthCutoff) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Add a terminal node.
    pub fn leaf(&mut self, utility: f64) -> NodeId {
        self.push(TreeNode::Leaf { utility })
    }

    /// Add a node with moves to `children`, in that order.
    pub fn interior(&mut self, heuristic: f64, children: &[NodeId]) -> NodeId {
        self.push(TreeNode::Interior {
            heuristic,
            children: SmallVec::from_slice(children),
        })
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Build the game rooted at `root`.
    ///
    /// Fails if the root is unknown, an interior node has no children, or a
    /// child was not added before its parent.
    pub fn build(self, root: NodeId) -> anyhow::Result<TreeGame> {
        ensure!(
            root.index() < self.nodes.len(),
            "root {} out of range ({} nodes)",
            root,
            self.nodes.len()
        );

        for (index, node) in self.nodes.iter().enumerate() {
            let TreeNode::Interior { children, .. } = node else {
                continue;
            };
            if children.is_empty() {
                bail!("interior node n{} has no children", index);
            }
            for child in children {
                ensure!(
                    child.index() < index,
                    "node n{} refers to {} which was not added before it",
                    index,
                    child
                );
            }
        }

        Ok(TreeGame {
            nodes: self.nodes,
            root,
            cutoff: self.cutoff,
        })
    }
}

/// Parameters for generating random trees.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RandomTree {
    /// Plies from the root to the deepest leaves.
    pub depth: u32,

    /// Maximum children per interior node (at least 1).
    pub max_branching: usize,

    /// Chance that a non-root node becomes a leaf early.
    pub leaf_probability: f64,

    /// Chance that a child reuses an existing node from the same level,
    /// creating a transposition.
    pub share_probability: f64,

    /// Leaf utilities are integers in `[-value_range, value_range]`.
    pub value_range: i32,
}

impl Default for RandomTree {
    fn default() -> Self {
        Self {
            depth: 4,
            max_branching: 3,
            leaf_probability: 0.15,
            share_probability: 0.0,
            value_range: 10,
        }
    }
}

impl RandomTree {
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn max_branching(mut self, branching: usize) -> Self {
        self.max_branching = branching.max(1);
        self
    }

    pub fn leaf_probability(mut self, probability: f64) -> Self {
        self.leaf_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn share_probability(mut self, probability: f64) -> Self {
        self.share_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Generate a tree. The same seed always produces the same tree.
    ///
    /// Shared nodes are only drawn from the same depth, so every node keeps
    /// a single depth and perspective.
    pub fn generate(&self, seed: u64) -> anyhow::Result<TreeGame> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut builder = TreeGameBuilder::new();
        let mut levels: Vec<Vec<NodeId>> = vec![Vec::new(); self.depth as usize + 1];

        let root = self.grow(&mut builder, &mut rng, &mut levels, 0);
        builder
            .build(root)
            .with_context(|| format!("generating random tree from seed {}", seed))
    }

    fn grow(
        &self,
        builder: &mut TreeGameBuilder,
        rng: &mut ChaCha8Rng,
        levels: &mut [Vec<NodeId>],
        depth: u32,
    ) -> NodeId {
        let level = depth as usize;
        let early_leaf = depth > 0 && rng.gen_bool(self.leaf_probability);

        let id = if depth >= self.depth || early_leaf {
            let utility = rng.gen_range(-self.value_range..=self.value_range);
            builder.leaf(f64::from(utility))
        } else {
            let branching = rng.gen_range(1..=self.max_branching.max(1));
            let mut children: SmallVec<[NodeId; 4]> = SmallVec::new();
            for _ in 0..branching {
                let below = &levels[level + 1];
                let shared = if !below.is_empty() && rng.gen_bool(self.share_probability) {
                    Some(below[rng.gen_range(0..below.len())])
                } else {
                    None
                };
                let child = match shared {
                    Some(existing) => existing,
                    None => self.grow(builder, rng, levels, depth + 1),
                };
                children.push(child);
            }
            let heuristic = rng.gen_range(-self.value_range..=self.value_range);
            builder.interior(f64::from(heuristic), &children)
        };

        levels[level].push(id);
        id
    }
}
