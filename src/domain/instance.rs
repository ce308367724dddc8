// Problem instance: a graph with grouped vertices and per-group weights

/// Error raised when an instance violates a structural precondition.
///
/// Always raised before any solving is attempted; the caller can recover
/// by fixing the instance data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InstanceError {
    #[error("instance has no vertices")]
    NoVertices,

    #[error("vertex {0} has an empty adjacency list and can never be dominated")]
    EmptyAdjacency(usize),

    #[error("vertex {0} belongs to no group")]
    EmptyGroupMembership(usize),

    #[error("adjacency lists cover {lists} vertices but group memberships cover {memberships}")]
    VertexCountMismatch { lists: usize, memberships: usize },

    #[error("vertex {vertex} lists neighbor {neighbor}, outside the vertex range 0..{count}")]
    NeighborOutOfRange {
        vertex: usize,
        neighbor: usize,
        count: usize,
    },

    #[error("vertex {vertex} belongs to group {group}, outside the group range 0..{count}")]
    GroupOutOfRange {
        vertex: usize,
        group: usize,
        count: usize,
    },

    #[error("group {0} has negative weight {1}")]
    NegativeWeight(usize, f64),
}

/// A weighted group domination instance.
///
/// `adjacency[i]` is the set of vertices that dominate vertex `i` when
/// selected; by convention it includes `i` itself. `groups[i]` is the
/// non-empty set of groups vertex `i` belongs to, and `weights[k]` is the
/// cost of selecting group `k`. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Instance {
    adjacency: Vec<Vec<usize>>,
    groups: Vec<Vec<usize>>,
    weights: Vec<f64>,
}

impl Instance {
    pub fn new(adjacency: Vec<Vec<usize>>, groups: Vec<Vec<usize>>, weights: Vec<f64>) -> Self {
        Self {
            adjacency,
            groups,
            weights,
        }
    }

    /// Number of vertices in the graph.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of groups.
    pub fn num_groups(&self) -> usize {
        self.weights.len()
    }

    /// Vertices dominating vertex `i` when selected, including `i` itself.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjacency[i]
    }

    /// Groups containing vertex `i`.
    pub fn groups_of(&self, i: usize) -> &[usize] {
        &self.groups[i]
    }

    /// Cost of selecting group `k`.
    pub fn weight(&self, k: usize) -> f64 {
        self.weights[k]
    }

    /// Sum of all group weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Check the structural preconditions every instance must satisfy.
    ///
    /// A vertex with no coverer (not even itself) makes the problem
    /// infeasible by construction, and a vertex with no group makes the
    /// selection rule ill-formed for zero operands; both are rejected here
    /// rather than handed to a solver.
    pub fn validate(&self) -> Result<(), InstanceError> {
        let n = self.num_vertices();
        let m = self.num_groups();

        if n == 0 {
            return Err(InstanceError::NoVertices);
        }
        if self.groups.len() != n {
            return Err(InstanceError::VertexCountMismatch {
                lists: n,
                memberships: self.groups.len(),
            });
        }

        for (i, neighbors) in self.adjacency.iter().enumerate() {
            if neighbors.is_empty() {
                return Err(InstanceError::EmptyAdjacency(i));
            }
            for &j in neighbors {
                if j >= n {
                    return Err(InstanceError::NeighborOutOfRange {
                        vertex: i,
                        neighbor: j,
                        count: n,
                    });
                }
            }
        }

        for (i, memberships) in self.groups.iter().enumerate() {
            if memberships.is_empty() {
                return Err(InstanceError::EmptyGroupMembership(i));
            }
            for &k in memberships {
                if k >= m {
                    return Err(InstanceError::GroupOutOfRange {
                        vertex: i,
                        group: k,
                        count: m,
                    });
                }
            }
        }

        for (k, &w) in self.weights.iter().enumerate() {
            if w < 0.0 {
                return Err(InstanceError::NegativeWeight(k, w));
            }
        }

        Ok(())
    }
}
