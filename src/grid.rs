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

//! Sites of a power grid and the candidate edges between them.
//!
//! Each site can either get its own power station (an *install* edge
//! to a virtual source) or be wired to another site (a *link* edge).
//! Any minimum spanning tree over the sites plus the virtual source is
//! an optimal plan.

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The cost type of the grid.
pub type Cost = u64;

/// Largest absolute coordinate value accepted by the readers.
pub const MAX_COORD: i64 = 1_000_000_000;

/// Largest install cost and demand accepted by the readers.
///
/// Together with [`MAX_COORD`] this bounds every link cost by
/// `4e9 * 2e9 < 2^63`. Any accepted link costs at most the larger
/// install cost of its endpoints, so the total cost of a plan is
/// bounded by `n * MAX_WEIGHT`.
pub const MAX_WEIGHT: Cost = 1_000_000_000;

/// A site of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Site {
    /// The x-coordinate.
    pub x: i64,
    /// The y-coordinate.
    pub y: i64,
    /// Cost of building a power station at this site.
    pub install: Cost,
    /// Cost factor of each wire touching this site.
    pub demand: Cost,
}

impl Site {
    /// Create a site at `(x,y)` with the given install cost and demand.
    pub fn new(x: i64, y: i64, install: Cost, demand: Cost) -> Self {
        Site { x, y, install, demand }
    }

    /// Return the Manhattan distance to another site.
    pub fn distance(&self, other: &Site) -> Cost {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Return the cost of wiring this site to another site.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_powergrid::grid::Site;
    ///
    /// let a = Site::new(0, 0, 10, 2);
    /// let b = Site::new(3, -1, 10, 5);
    /// assert_eq!(a.link_cost(&b), 4 * 7);
    /// ```
    pub fn link_cost(&self, other: &Site) -> Cost {
        self.distance(other) * (self.demand + other.demand)
    }
}

/// The two kinds of edges of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Connection {
    /// Build a power station at the site.
    Install(usize),
    /// Wire two different sites.
    Link(usize, usize),
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Connection::Install(u) => write!(f, "install({})", u),
            Connection::Link(u, v) => write!(f, "link({},{})", u, v),
        }
    }
}

/// A weighted candidate edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Candidate<W> {
    /// The cost of the edge.
    pub cost: W,
    /// The endpoints of the edge.
    pub conn: Connection,
}

impl<W> Candidate<W> {
    /// Return the candidate building a power station at site `u`.
    pub fn install(u: usize, cost: W) -> Self {
        Candidate {
            cost,
            conn: Connection::Install(u),
        }
    }

    /// Return the candidate wiring the sites `u` and `v`.
    pub fn link(u: usize, v: usize, cost: W) -> Self {
        Candidate {
            cost,
            conn: Connection::Link(u, v),
        }
    }
}

/// Return the number of candidate edges of a grid with `n` sites.
///
/// The number of pairs is computed without the intermediate product
/// `n * (n-1)`, so the result is exact whenever it fits into `usize`.
pub fn num_candidates(n: usize) -> usize {
    if n % 2 == 0 {
        n + n / 2 * n.saturating_sub(1)
    } else {
        n + n * ((n - 1) / 2)
    }
}

/// Generate all candidate edges of a grid.
///
/// The first `n` candidates are the install edges of the sites in
/// order, followed by one link edge `(i,j)` with `i < j` for each pair
/// of sites in lexicographic order.
///
/// # Example
///
/// ```
/// use rs_powergrid::grid::{candidates, Candidate, Site};
///
/// let sites = [Site::new(0, 0, 100, 1), Site::new(0, 1, 100, 1)];
/// assert_eq!(
///     candidates(&sites),
///     vec![
///         Candidate::install(0, 100),
///         Candidate::install(1, 100),
///         Candidate::link(0, 1, 2),
///     ]
/// );
/// ```
pub fn candidates(sites: &[Site]) -> Vec<Candidate<Cost>> {
    let mut edges = Vec::with_capacity(num_candidates(sites.len()));
    edges.extend(sites.iter().enumerate().map(|(i, s)| Candidate::install(i, s.install)));
    for (i, u) in sites.iter().enumerate() {
        for (j, v) in sites.iter().enumerate().skip(i + 1) {
            edges.push(Candidate::link(i, j, u.link_cost(v)));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Site::new(-MAX_COORD, MAX_COORD, 0, MAX_WEIGHT);
        let b = Site::new(MAX_COORD, -MAX_COORD, 0, MAX_WEIGHT);
        assert_eq!(a.distance(&b), 4_000_000_000);
        assert_eq!(a.link_cost(&b), 8_000_000_000_000_000_000);
        assert_eq!(b.link_cost(&a), a.link_cost(&b));
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn same_position_is_free() {
        let a = Site::new(4, 4, 10, 1_000_000);
        let b = Site::new(4, 4, 50, 7);
        assert_eq!(a.link_cost(&b), 0);
    }

    #[test]
    fn candidate_count() {
        assert_eq!(num_candidates(0), 0);
        assert_eq!(num_candidates(1), 1);
        assert_eq!(num_candidates(4), 10);
        assert_eq!(num_candidates(5), 15);
        assert_eq!(num_candidates(65_536), 65_536 + 32_768 * 65_535);
        // n * (n-1) alone would exceed the range
        let n = 1usize << (usize::BITS / 2);
        assert_eq!(num_candidates(n + 1), (n + 1) + (n + 1) * (n / 2));

        let sites = (0..7).map(|i| Site::new(i, 2 * i, 1, 1)).collect::<Vec<_>>();
        let edges = candidates(&sites);
        assert_eq!(edges.len(), num_candidates(7));
        assert_eq!(edges.capacity(), num_candidates(7));
    }

    #[test]
    fn candidate_order() {
        let sites = [
            Site::new(0, 0, 3, 1),
            Site::new(1, 0, 4, 2),
            Site::new(0, 2, 5, 3),
        ];
        assert_eq!(
            candidates(&sites),
            vec![
                Candidate::install(0, 3),
                Candidate::install(1, 4),
                Candidate::install(2, 5),
                Candidate::link(0, 1, 3),
                Candidate::link(0, 2, 8),
                Candidate::link(1, 2, 15),
            ]
        );
    }

    #[test]
    fn no_sites() {
        assert!(candidates(&[]).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Connection::Install(3).to_string(), "install(3)");
        assert_eq!(Connection::Link(0, 5).to_string(), "link(0,5)");
    }
}
