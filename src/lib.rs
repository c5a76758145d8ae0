// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Minimum cost placement of power stations and wires.
//!
//! Given a set of sites in the plane, each site either gets its own
//! power station or is wired to another site that is (directly or
//! transitively) connected to a station. Building a station at a site
//! has a fixed cost, a wire costs the Manhattan distance of its
//! endpoints times the sum of their demands.
//!
//! Adding a virtual source that is adjacent to every site (with the
//! install cost as weight) turns the problem into a minimum spanning
//! tree problem on the complete graph of the sites plus the source.
//!
//! # Example
//!
//! ```
//! use rs_powergrid::format::{read_instance, write_solution};
//! use rs_powergrid::mst::plan;
//!
//! let instance = read_instance("3  2 1  1 2  3 3  23 2 23  3 2 3".as_bytes()).unwrap();
//! let p = plan(&instance.sites);
//! assert_eq!(p.verify(&instance.sites), Ok(()));
//!
//! let mut out = Vec::new();
//! write_solution(&mut out, &p).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "27\n1\n2\n2\n1 2\n2 3\n");
//! ```

// # Data structures

pub mod collections;
pub use self::collections::UnionFind;

pub mod grid;
pub use self::grid::{Candidate, Connection, Cost, Site};

pub mod plan;
pub use self::plan::Plan;

// # Algorithms

pub mod mst;

// # Input and output

pub mod format;
