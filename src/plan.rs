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

//! Solutions of the power grid problem.

use crate::collections::UnionFind;
use crate::grid::{Connection, Cost, Site};

use num_traits::Zero;

use std::error;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A plan of power stations and wires.
///
/// Sites are identified by their (0-based) index.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Plan<W> {
    /// The total cost of all stations and wires.
    pub cost: W,
    /// The sites with a power station.
    pub sources: Vec<usize>,
    /// The wired pairs of sites.
    pub links: Vec<(usize, usize)>,
}

impl<W: Zero> Default for Plan<W> {
    fn default() -> Self {
        Plan {
            cost: W::zero(),
            sources: vec![],
            links: vec![],
        }
    }
}

impl<W> Plan<W> {
    /// Return the number of accepted edges.
    pub fn num_edges(&self) -> usize {
        self.sources.len() + self.links.len()
    }

    /// Return all accepted edges, stations first.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        self.sources
            .iter()
            .map(|&u| Connection::Install(u))
            .chain(self.links.iter().map(|&(u, v)| Connection::Link(u, v)))
    }
}

impl Plan<Cost> {
    /// Check that this is a feasible plan for `sites` with correct cost.
    ///
    /// A plan is feasible if its stations and wires form a spanning
    /// tree of the sites and the virtual source, i.e. every site is
    /// connected to exactly one station by exactly one path.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_powergrid::grid::Site;
    /// use rs_powergrid::plan::{InvalidPlan, Plan};
    ///
    /// let sites = [Site::new(0, 0, 100, 1), Site::new(0, 1, 100, 1)];
    /// let plan = Plan { cost: 102, sources: vec![0], links: vec![(0, 1)] };
    /// assert_eq!(plan.verify(&sites), Ok(()));
    ///
    /// let plan = Plan { cost: 100, sources: vec![0], links: vec![] };
    /// assert_eq!(plan.verify(&sites), Err(InvalidPlan::EdgeCount { expected: 2, found: 1 }));
    /// ```
    pub fn verify(&self, sites: &[Site]) -> Result<(), InvalidPlan> {
        let n = sites.len();
        let source = n;
        let mut comps = UnionFind::new(n + 1);
        // a sum of up to n link costs does not fit into `Cost`
        let mut cost: u128 = 0;

        for conn in self.connections() {
            let (u, v) = match conn {
                Connection::Install(u) => {
                    check_node(u, n)?;
                    cost += u128::from(sites[u].install);
                    (source, u)
                }
                Connection::Link(u, v) => {
                    check_node(u, n)?;
                    check_node(v, n)?;
                    if u == v {
                        return Err(InvalidPlan::Loop(u));
                    }
                    cost += u128::from(sites[u].link_cost(&sites[v]));
                    (u, v)
                }
            };
            if !comps.union(u, v) {
                return Err(match conn {
                    Connection::Install(u) => InvalidPlan::Cycle(u, u),
                    Connection::Link(u, v) => InvalidPlan::Cycle(u, v),
                });
            }
        }

        if self.num_edges() != n {
            return Err(InvalidPlan::EdgeCount {
                expected: n,
                found: self.num_edges(),
            });
        }

        if cost != u128::from(self.cost) {
            return Err(InvalidPlan::Cost {
                expected: cost,
                found: self.cost,
            });
        }

        Ok(())
    }
}

fn check_node(u: usize, n: usize) -> Result<(), InvalidPlan> {
    if u < n {
        Ok(())
    } else {
        Err(InvalidPlan::NodeOutOfRange(u))
    }
}

/// Reason why a plan is not a feasible solution.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InvalidPlan {
    /// A site index is out of range.
    NodeOutOfRange(usize),
    /// A wire connects a site to itself.
    Loop(usize),
    /// An edge closes a cycle. A repeated station `u` is reported as `(u,u)`.
    Cycle(usize, usize),
    /// The plan has the wrong number of edges.
    EdgeCount { expected: usize, found: usize },
    /// The stated cost differs from the cost of the edges.
    ///
    /// `expected` may exceed the range of [`Cost`].
    Cost { expected: u128, found: Cost },
}

impl fmt::Display for InvalidPlan {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            InvalidPlan::NodeOutOfRange(u) => write!(fmt, "invalid site {}", u + 1),
            InvalidPlan::Loop(u) => write!(fmt, "site {} is wired to itself", u + 1),
            InvalidPlan::Cycle(u, v) if u == v => write!(fmt, "site {} has more than one station", u + 1),
            InvalidPlan::Cycle(u, v) => write!(fmt, "wire ({},{}) closes a cycle", u + 1, v + 1),
            InvalidPlan::EdgeCount { expected, found } => write!(fmt, "expected {} edges, got {}", expected, found),
            InvalidPlan::Cost { expected, found } => {
                write!(fmt, "wrong cost {} (edges sum up to {})", found, expected)
            }
        }
    }
}

impl error::Error for InvalidPlan {}
