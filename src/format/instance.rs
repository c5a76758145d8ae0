/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! This module implements read and write functions for grid instances.
//! An instance file must look as follows.
//!
//! 1. the first number is the number of sites `<n>`
//! 2. then follow `n` coordinate pairs `<x> <y>`, one for each site
//! 3. then follow `n` install costs `<c>`, one for each site
//! 4. then follow `n` demands `<k>`, one for each site
//!
//! All numbers are integers. Coordinates must be in
//! `-MAX_COORD..=MAX_COORD`, install costs and demands in
//! `0..=MAX_WEIGHT`. Apart from separating the numbers whitespace is
//! ignored. Nothing may follow the last demand.

use super::{Result, TokenReader};
use crate::grid::{Cost, Site, MAX_COORD, MAX_WEIGHT};

use std::io::{Read, Write};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A grid instance.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Instance {
    /// The sites in input order.
    pub sites: Vec<Site>,
}

/// Read an instance.
///
/// # Example
///
/// ```
/// use rs_powergrid::format::instance;
/// use rs_powergrid::grid::Site;
///
/// let inst = instance::read("2\n0 0\n0 1\n100 100\n1 1\n".as_bytes()).unwrap();
/// assert_eq!(inst.sites, vec![Site::new(0, 0, 100, 1), Site::new(0, 1, 100, 1)]);
/// ```
pub fn read<R: Read>(r: R) -> Result<Instance> {
    let mut reader = TokenReader::new(r);

    let n: usize = reader.number("number of sites")?;
    let mut sites = Vec::new();
    for _ in 0..n {
        let x = reader.bounded("coordinate", -MAX_COORD, MAX_COORD)?;
        let y = reader.bounded("coordinate", -MAX_COORD, MAX_COORD)?;
        sites.push(Site {
            x,
            y,
            ..Site::default()
        });
    }
    for s in &mut sites {
        s.install = reader.bounded("install cost", 0, MAX_WEIGHT as i64)? as Cost;
    }
    for s in &mut sites {
        s.demand = reader.bounded("demand", 0, MAX_WEIGHT as i64)? as Cost;
    }
    reader.end()?;

    Ok(Instance { sites })
}

pub fn read_from_file(filename: &str) -> Result<Instance> {
    read(std::fs::File::open(filename)?)
}

/// Write an instance.
pub fn write<W: Write>(mut w: W, instance: &Instance) -> std::io::Result<()> {
    let sites = &instance.sites;
    writeln!(w, "{}", sites.len())?;
    for s in sites {
        writeln!(w, "{} {}", s.x, s.y)?;
    }
    write_row(&mut w, sites.iter().map(|s| s.install))?;
    write_row(&mut w, sites.iter().map(|s| s.demand))?;
    Ok(())
}

/// Write an instance to a named file.
pub fn write_to_file(filename: &str, instance: &Instance) -> std::io::Result<()> {
    write(&mut std::fs::File::create(filename)?, instance)
}

fn write_row<W, I>(w: &mut W, values: I) -> std::io::Result<()>
where
    W: Write,
    I: Iterator<Item = Cost>,
{
    for (i, x) in values.enumerate() {
        if i > 0 {
            write!(w, " ")?;
        }
        write!(w, "{}", x)?;
    }
    writeln!(w)
}
