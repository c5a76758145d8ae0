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

//! Implementation of Kruskal's algorithm

use crate::collections::UnionFind;
use crate::grid::{candidates, Candidate, Connection, Cost, Site};
use crate::plan::Plan;

use num_traits::Zero;

/// Compute a minimum cost plan for the given sites.
///
/// This generates all candidate edges and runs [`kruskal`] on them.
///
/// # Example
///
/// ```
/// use rs_powergrid::grid::Site;
/// use rs_powergrid::mst::plan;
///
/// let sites = [
///     Site::new(2, 1, 23, 3),
///     Site::new(1, 2, 2, 2),
///     Site::new(3, 3, 23, 3),
/// ];
/// let p = plan(&sites);
/// assert_eq!(p.cost, 27);
/// assert_eq!(p.sources, vec![1]);
/// assert_eq!(p.links, vec![(0, 1), (1, 2)]);
/// ```
pub fn plan(sites: &[Site]) -> Plan<Cost> {
    kruskal(sites.len(), candidates(sites))
}

/// Run Kruskal's algorithm on the candidate edges of a grid with
/// `nsites` sites.
///
/// The virtual source gets the element `nsites` of the union-find
/// structure.
///
/// # Example
///
/// ```
/// use rs_powergrid::grid::Candidate;
/// use rs_powergrid::mst::kruskal;
///
/// let plan = kruskal(
///     3,
///     vec![
///         Candidate::install(0, 7),
///         Candidate::install(1, 3),
///         Candidate::install(2, 9),
///         Candidate::link(0, 1, 2),
///         Candidate::link(0, 2, 5),
///         Candidate::link(1, 2, 4),
///     ],
/// );
/// assert_eq!(plan.cost, 9);
/// assert_eq!(plan.sources, vec![1]);
/// assert_eq!(plan.links, vec![(0, 1), (1, 2)]);
/// ```
pub fn kruskal<W>(nsites: usize, candidates: Vec<Candidate<W>>) -> Plan<W>
where
    W: Ord + Copy + Zero,
{
    let mut comps = UnionFind::new(nsites + 1);
    select(&mut comps, nsites, candidates)
}

/// Greedily select a minimum spanning tree from `candidates`.
///
/// * `comps` is the union-find structure over all sites and the
///   virtual source
/// * `source` is the element representing the virtual source
///
/// The candidates are sorted by cost (ties keep their relative order)
/// and each candidate joining two different components is accepted.
/// The algorithm stops as soon as `comps` has a single component left.
pub fn select<W>(comps: &mut UnionFind, source: usize, mut candidates: Vec<Candidate<W>>) -> Plan<W>
where
    W: Ord + Copy + Zero,
{
    candidates.sort_by_key(|c| c.cost);

    let mut plan = Plan::default();
    for c in candidates {
        if comps.num_components() <= 1 {
            break;
        }
        let (u, v) = match c.conn {
            Connection::Install(u) => (source, u),
            Connection::Link(u, v) => (u, v),
        };
        if comps.union(u, v) {
            plan.cost = plan.cost + c.cost;
            match c.conn {
                Connection::Install(u) => plan.sources.push(u),
                Connection::Link(u, v) => plan.links.push((u, v)),
            }
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::{kruskal, plan, select};
    use crate::collections::UnionFind;
    use crate::grid::{Candidate, Site};

    #[test]
    fn single_site() {
        let p = plan(&[Site::new(0, 0, 5, 1)]);
        assert_eq!(p.cost, 5);
        assert_eq!(p.sources, vec![0]);
        assert!(p.links.is_empty());
    }

    #[test]
    fn two_sites() {
        let p = plan(&[Site::new(0, 0, 100, 1), Site::new(0, 1, 100, 1)]);
        assert_eq!(p.cost, 102);
        assert_eq!(p.sources, vec![0]);
        assert_eq!(p.links, vec![(0, 1)]);
    }

    #[test]
    fn colinear() {
        let sites = [
            Site::new(0, 0, 1000, 1),
            Site::new(1, 0, 900, 1),
            Site::new(2, 0, 1000, 1),
        ];
        let p = plan(&sites);
        assert_eq!(p.cost, 904);
        assert_eq!(p.sources, vec![1]);
        assert_eq!(p.links, vec![(0, 1), (1, 2)]);
        assert_eq!(p.verify(&sites), Ok(()));
    }

    #[test]
    fn all_stations() {
        let sites = [Site::new(2, 3, 3, 3), Site::new(1, 1, 2, 2), Site::new(3, 2, 3, 3)];
        let p = plan(&sites);
        assert_eq!(p.cost, 8);
        assert_eq!(p.sources, vec![1, 0, 2]);
        assert!(p.links.is_empty());
    }

    #[test]
    fn zero_cost_link() {
        let sites = [Site::new(4, 4, 10, 1_000_000_000), Site::new(4, 4, 50, 1_000_000_000)];
        let p = plan(&sites);
        assert_eq!(p.cost, 10);
        assert_eq!(p.links, vec![(0, 1)]);
        assert_eq!(p.sources, vec![0]);
    }

    #[test]
    fn empty() {
        let p = plan(&[]);
        assert_eq!(p.cost, 0);
        assert_eq!(p.num_edges(), 0);
    }

    #[test]
    fn single_component() {
        let sites = (0..20)
            .map(|i| Site::new(i * 7 % 11, i * 5 % 13, 50 + (i as u64 * 37) % 29, 1 + i as u64 % 3))
            .collect::<Vec<_>>();
        let n = sites.len();
        let mut comps = UnionFind::new(n + 1);
        let p = select(&mut comps, n, crate::grid::candidates(&sites));
        assert_eq!(p.num_edges(), n);
        assert_eq!(comps.num_components(), 1);
        let root = comps.find(n);
        for u in 0..n {
            assert_eq!(comps.find(u), root);
        }
        assert_eq!(p.verify(&sites), Ok(()));
    }

    #[test]
    fn ties() {
        // all edges have the same cost, any spanning tree is optimal
        let edges = vec![
            Candidate::install(0, 1),
            Candidate::install(1, 1),
            Candidate::link(0, 1, 1),
            Candidate::install(2, 1),
            Candidate::link(1, 2, 1),
        ];
        let mut rev = edges.clone();
        rev.reverse();

        let p = kruskal(3, edges);
        let q = kruskal(3, rev);
        assert_eq!(p.cost, 3);
        assert_eq!(q.cost, 3);
        assert_eq!(p.sources, vec![0, 1, 2]);
        assert_eq!(q.sources, vec![2]);
        assert_eq!(q.links, vec![(1, 2), (0, 1)]);
    }

    #[test]
    fn signed_weights() {
        let p = kruskal(
            2,
            vec![
                Candidate::install(0, -3i64),
                Candidate::install(1, -2),
                Candidate::link(0, 1, -5),
            ],
        );
        assert_eq!(p.cost, -8);
        assert_eq!(p.links, vec![(0, 1)]);
        assert_eq!(p.sources, vec![0]);
    }
}
