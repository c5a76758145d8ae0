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

//! Implementation of Prim's algorithm on the complete grid graph

use crate::grid::{Cost, Site};
use crate::plan::Plan;

/// Run Prim's algorithm on the complete graph of the sites and the
/// virtual source.
///
/// The tree is grown from the virtual source. Because the graph is
/// complete no candidate list is built: each round scans all sites not
/// in the tree, so the algorithm needs `O(n^2)` time and `O(n)` memory.
/// The returned plan has the same cost as the one computed by
/// [`kruskal`](super::kruskal) but may differ in the chosen edges.
///
/// # Example
///
/// ```
/// use rs_powergrid::grid::Site;
/// use rs_powergrid::mst::prim;
///
/// let sites = [
///     Site::new(0, 0, 1000, 1),
///     Site::new(1, 0, 900, 1),
///     Site::new(2, 0, 1000, 1),
/// ];
/// let plan = prim(&sites);
/// assert_eq!(plan.cost, 904);
/// assert_eq!(plan.sources, vec![1]);
/// assert_eq!(plan.links, vec![(0, 1), (1, 2)]);
/// ```
pub fn prim(sites: &[Site]) -> Plan<Cost> {
    let n = sites.len();

    // cheapest known connection of each site, `None` is the source
    let mut dist: Vec<Cost> = sites.iter().map(|s| s.install).collect();
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut intree = vec![false; n];

    let mut plan = Plan::default();
    for _ in 0..n {
        let mut best = None;
        for u in (0..n).filter(|&u| !intree[u]) {
            match best {
                Some(b) if dist[b] <= dist[u] => {}
                _ => best = Some(u),
            }
        }
        let u = match best {
            Some(u) => u,
            None => break,
        };

        intree[u] = true;
        plan.cost += dist[u];
        match pred[u] {
            None => plan.sources.push(u),
            Some(v) => plan.links.push((u.min(v), u.max(v))),
        }

        for v in 0..n {
            if !intree[v] {
                let c = sites[u].link_cost(&sites[v]);
                if c < dist[v] {
                    dist[v] = c;
                    pred[v] = Some(u);
                }
            }
        }
    }

    plan
}
