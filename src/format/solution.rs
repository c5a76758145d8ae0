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

//! This module implements read and write functions for solutions. A
//! solution file looks as follows.
//!
//! 1. a line with the total cost
//! 2. a line with the number of power stations `<k>`
//! 3. a line with the `k` (1-based) sites having a power station
//!    (empty if `k = 0`)
//! 4. a line with the number of wires `<m>`
//! 5. `m` lines `<u> <v>` with the (1-based) sites connected by a wire

use super::{Error, Result, TokenReader};
use crate::plan::Plan;

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

/// Write a solution.
///
/// # Example
///
/// ```
/// use rs_powergrid::format::write_solution;
/// use rs_powergrid::plan::Plan;
///
/// let plan = Plan { cost: 27, sources: vec![1], links: vec![(0, 1), (1, 2)] };
/// let mut buf = Vec::new();
/// write_solution(&mut buf, &plan).unwrap();
/// assert_eq!(String::from_utf8(buf).unwrap(), "27\n1\n2\n2\n1 2\n2 3\n");
/// ```
pub fn write_solution<W, T>(mut w: W, plan: &Plan<T>) -> std::io::Result<()>
where
    W: Write,
    T: Display,
{
    writeln!(w, "{}", plan.cost)?;
    writeln!(w, "{}", plan.sources.len())?;
    for (i, u) in plan.sources.iter().enumerate() {
        if i > 0 {
            write!(w, " ")?;
        }
        write!(w, "{}", u + 1)?;
    }
    writeln!(w)?;
    writeln!(w, "{}", plan.links.len())?;
    for &(u, v) in &plan.links {
        writeln!(w, "{} {}", u + 1, v + 1)?;
    }

    Ok(())
}

/// Write a solution to a named file.
pub fn write_solution_to_file<T: Display>(filename: &str, plan: &Plan<T>) -> std::io::Result<()> {
    write_solution(&mut std::fs::File::create(filename)?, plan)
}

/// Read a solution.
///
/// The site numbers in the returned plan are 0-based.
pub fn read_solution<R, T>(r: R) -> Result<Plan<T>>
where
    R: Read,
    T: FromStr,
    T::Err: Display,
{
    let mut reader = TokenReader::new(r);

    let cost = reader.number("cost")?;
    let nsources: usize = reader.number("number of stations")?;
    let mut sources = Vec::new();
    for _ in 0..nsources {
        sources.push(site(&mut reader)?);
    }
    let nlinks: usize = reader.number("number of wires")?;
    let mut links = Vec::new();
    for _ in 0..nlinks {
        let u = site(&mut reader)?;
        let v = site(&mut reader)?;
        links.push((u, v));
    }
    reader.end()?;

    Ok(Plan { cost, sources, links })
}

/// Read a solution from a named file.
pub fn read_solution_from_file<T>(filename: &str) -> Result<Plan<T>>
where
    T: FromStr,
    T::Err: Display,
{
    read_solution(std::fs::File::open(filename)?)
}

fn site<R: Read>(reader: &mut TokenReader<R>) -> Result<usize> {
    let u: usize = reader.number("site")?;
    if u < 1 {
        return Err(Error::Data {
            line: reader.line(),
            msg: "site numbers must be >= 1".to_string(),
        });
    }
    Ok(u - 1)
}
