// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Disjoint-set forest with union-by-size and path compression.

/// State of a single element of the forest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Component {
    /// The root element with the size of its component.
    Root(usize),
    /// An inner element with its parent.
    Node(usize),
}

/// A union-find data structure over the elements `0..n`.
///
/// Components are merged by size and `find` compresses every path it
/// walks, so a sequence of operations runs in almost linear time.
/// Accessing an element that has never been created panics.
///
/// # Example
///
/// ```
/// use rs_powergrid::collections::UnionFind;
///
/// let mut comps = UnionFind::new(4);
/// assert!(comps.union(0, 1));
/// assert!(comps.union(2, 3));
/// assert!(!comps.union(1, 0));
///
/// assert_eq!(comps.num_components(), 2);
/// assert!(comps.same(0, 1));
/// assert!(!comps.same(1, 2));
/// assert_eq!(comps.size(3), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    comps: Vec<Component>,
    ncomps: usize,
}

impl UnionFind {
    /// Create a forest of `n` singleton components `0..n`.
    pub fn new(n: usize) -> Self {
        UnionFind {
            comps: vec![Component::Root(1); n],
            ncomps: n,
        }
    }

    /// Add a new singleton component and return its element.
    pub fn make_set(&mut self) -> usize {
        self.comps.push(Component::Root(1));
        self.ncomps += 1;
        self.comps.len() - 1
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.comps.len()
    }

    /// Return `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    /// Return the current number of components.
    pub fn num_components(&self) -> usize {
        self.ncomps
    }

    /// Return the representative of the component containing `u`.
    ///
    /// All elements on the path from `u` to the root are re-linked to
    /// point directly to the root.
    pub fn find(&mut self, u: usize) -> usize {
        let (root, _) = self.find_root(u);
        let mut v = u;
        while let Component::Node(parent) = self.comps[v] {
            self.comps[v] = Component::Node(root);
            v = parent;
        }
        root
    }

    /// Merge the components containing `u` and `v`.
    ///
    /// Returns `false` if both already are in the same component.
    /// Otherwise the root of the smaller component is attached to the
    /// root of the larger one and `true` is returned.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let uroot = self.find(u);
        let vroot = self.find(v);
        if uroot == vroot {
            return false;
        }

        let usz = self.root_size(uroot);
        let vsz = self.root_size(vroot);
        let (big, small) = if usz < vsz { (vroot, uroot) } else { (uroot, vroot) };
        self.comps[small] = Component::Node(big);
        self.comps[big] = Component::Root(usz + vsz);
        self.ncomps -= 1;
        true
    }

    /// Return `true` if `u` and `v` are in the same component.
    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Return the number of elements in the component containing `u`.
    pub fn size(&mut self, u: usize) -> usize {
        let root = self.find(u);
        self.root_size(root)
    }

    /// Return the root node and the component's size of element `u`.
    fn find_root(&self, u: usize) -> (usize, usize) {
        let mut v = u;
        loop {
            match self.comps[v] {
                Component::Node(parent) => v = parent,
                Component::Root(size) => return (v, size),
            }
        }
    }

    fn root_size(&self, root: usize) -> usize {
        match self.comps[root] {
            Component::Root(size) => size,
            Component::Node(_) => unreachable!("not a root element"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Component, UnionFind};

    #[test]
    fn singletons() {
        let mut comps = UnionFind::new(3);
        assert_eq!(comps.len(), 3);
        assert_eq!(comps.num_components(), 3);
        for u in 0..3 {
            assert_eq!(comps.find(u), u);
            assert_eq!(comps.size(u), 1);
        }
    }

    #[test]
    fn make_set() {
        let mut comps = UnionFind::default();
        assert!(comps.is_empty());
        assert_eq!(comps.make_set(), 0);
        assert_eq!(comps.make_set(), 1);
        assert_eq!(comps.num_components(), 2);
        assert!(comps.union(0, 1));
        assert_eq!(comps.make_set(), 2);
        assert_eq!(comps.num_components(), 2);
        assert!(!comps.same(2, 0));
    }

    #[test]
    fn union_by_size() {
        let mut comps = UnionFind::new(5);
        assert!(comps.union(0, 1));
        assert!(comps.union(1, 2));
        assert_eq!(comps.find(2), 0);
        // the larger component keeps its root
        assert!(comps.union(4, 0));
        assert_eq!(comps.find(4), 0);
        assert_eq!(comps.size(4), 4);
        assert_eq!(comps.size(3), 1);
        assert_eq!(comps.num_components(), 2);

        assert!(!comps.union(2, 4));
        assert_eq!(comps.num_components(), 2);
    }

    #[test]
    fn path_compression() {
        let mut comps = UnionFind {
            comps: vec![
                Component::Node(1),
                Component::Node(2),
                Component::Node(3),
                Component::Root(4),
            ],
            ncomps: 1,
        };
        assert_eq!(comps.find(0), 3);
        assert_eq!(comps.comps[0], Component::Node(3));
        assert_eq!(comps.comps[1], Component::Node(3));
        assert_eq!(comps.comps[2], Component::Node(3));
        assert_eq!(comps.comps[3], Component::Root(4));
    }

    #[test]
    fn find_is_idempotent() {
        let mut comps = UnionFind::new(8);
        for &(u, v) in &[(0, 1), (2, 3), (1, 3), (5, 6), (7, 5)] {
            comps.union(u, v);
        }
        for u in 0..8 {
            let r = comps.find(u);
            assert_eq!(comps.find(u), r);
            assert_eq!(comps.find(r), r);
        }
        assert!(comps.same(0, 2));
        assert!(comps.same(6, 7));
        assert!(!comps.same(4, 0));
        assert_eq!(comps.num_components(), 3);
    }

    #[test]
    fn long_chain() {
        let n = 100_000;
        let mut comps = UnionFind::new(n);
        for u in 1..n {
            assert!(comps.union(u - 1, u));
        }
        assert_eq!(comps.num_components(), 1);
        assert_eq!(comps.size(n - 1), n);
        let root = comps.find(0);
        assert_eq!(comps.find(n - 1), root);
    }
}
