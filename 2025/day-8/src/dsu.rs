/// A standard Disjoint Set Union (DSU) with path compression and union by size.
///
/// Also tracks how many disjoint sets currently exist, so callers can tell
/// when everything has collapsed into one set without scanning.
#[derive(Debug, Clone)]
pub struct Dsu {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    components: usize,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets left.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            i
        } else {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
            root
        }
    }

    /// Unifies sets. Returns `true` if a merge actually occurred (sets were disjoint).
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        // Smaller tree goes under the larger one; on a tie `i` keeps its root.
        if self.sizes[root_i] < self.sizes[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent[root_j] = root_i;
        self.sizes[root_i] += self.sizes[root_j];
        self.components -= 1;
        true
    }

    /// Size of the set containing `i`.
    pub fn size_of(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.sizes[root]
    }
}
