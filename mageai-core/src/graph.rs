//! Dependency-graph view over a pipeline's blocks
//!
//! Each block carries unordered sets of upstream and downstream sibling
//! identifiers; together they form a directed graph over one pipeline's
//! blocks. Acyclicity is enforced server-side, not here. The graph is rebuilt
//! wholesale whenever a pipeline is read; partial edge edits are not
//! supported at this layer.

use std::collections::{BTreeSet, HashMap};

use crate::domain::block::Block;

/// Upstream/downstream lookup table for the blocks of one pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockGraph {
    upstream: HashMap<String, BTreeSet<String>>,
    downstream: HashMap<String, BTreeSet<String>>,
}

impl BlockGraph {
    /// Build the lookup table from a pipeline's block list.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut graph = BlockGraph::default();
        for block in blocks {
            graph
                .upstream
                .insert(block.uuid.clone(), block.upstream_blocks.clone());
            graph
                .downstream
                .insert(block.uuid.clone(), block.downstream_blocks.clone());
        }
        graph
    }

    /// Identifiers of the blocks directly upstream of `uuid`.
    ///
    /// Unknown identifiers yield the empty set.
    pub fn upstream_of(&self, uuid: &str) -> BTreeSet<String> {
        self.upstream.get(uuid).cloned().unwrap_or_default()
    }

    /// Identifiers of the blocks directly downstream of `uuid`.
    pub fn downstream_of(&self, uuid: &str) -> BTreeSet<String> {
        self.downstream.get(uuid).cloned().unwrap_or_default()
    }

    /// Whether the pipeline contains a block with this identifier.
    pub fn contains(&self, uuid: &str) -> bool {
        self.upstream.contains_key(uuid)
    }

    /// Number of blocks in the pipeline.
    pub fn len(&self) -> usize {
        self.upstream.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upstream.is_empty()
    }
}
