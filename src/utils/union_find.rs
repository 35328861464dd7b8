use crate::node::{Node, NumNodes};

/// Disjoint-set forest with path compression and union by rank, giving
/// near-constant amortized `find`/`union`. Owned exclusively by one
/// Kruskal invocation; also doubles as a cheap component counter.
pub struct UnionFind {
    /// parent[u] = parent of u, or u itself if u is a root
    parent: Vec<Node>,
    /// upper bound on tree height, only meaningful for roots
    rank: Vec<u8>,
    num_sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n as usize,
        }
    }

    /// Returns the number of disjoint sets
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the representative of the set containing `u`,
    /// compressing the walked path.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut walk = u;
        while self.parent[walk as usize] != root {
            walk = std::mem::replace(&mut self.parent[walk as usize], root);
        }

        root
    }

    /// Returns *true* if `u` and `v` are in the same set
    /// ** Panics if `u >= n || v >= n` **
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merges the sets containing `u` and `v`. Returns *true* exactly
    /// if the sets were distinct, i.e. if an edge `(u, v)` does not
    /// close a cycle.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        let (child, parent) = if self.rank[ru as usize] < self.rank[rv as usize] {
            (ru, rv)
        } else {
            (rv, ru)
        };

        self.parent[child as usize] = parent;
        if self.rank[child as usize] == self.rank[parent as usize] {
            self.rank[parent as usize] += 1;
        }
        self.num_sets -= 1;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.num_sets(), 4);
        for u in 0..4 {
            assert_eq!(uf.find(u), u);
        }
    }

    #[test]
    fn union_reports_cycles() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert!(uf.union(0, 3));
        assert!(!uf.union(2, 1));
        assert_eq!(uf.num_sets(), 1);
    }

    #[test]
    fn self_union_is_a_cycle() {
        let mut uf = UnionFind::new(2);
        assert!(!uf.union(1, 1));
        assert_eq!(uf.num_sets(), 2);
    }

    #[test]
    fn path_compression_flattens() {
        let mut uf = UnionFind::new(16);
        for u in 0..15 {
            uf.union(u, u + 1);
        }
        let root = uf.find(0);
        assert!((0..16).all(|u| uf.find(u) == root));
        assert_eq!(uf.num_sets(), 1);
    }
}
