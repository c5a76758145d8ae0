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

use rs_powergrid::format::{instance, solution};
use rs_powergrid::grid::num_candidates;
use rs_powergrid::mst::{plan, prim};

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::result::Result;

use rustop::opts;
use time::OffsetDateTime;

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute a minimum cost plan of power stations and wires.";
        param file:Option<String>, desc:"Instance file name (default: read from stdin)";
        opt prim:bool, desc:"Use Prim's algorithm instead of Kruskal's";
        opt check:bool, desc:"Verify the computed plan";
        opt stats:bool, desc:"Print statistics to stderr";
        opt output:Option<String>, desc:"Write the solution to this file";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let instance = match &args.file {
        Some(file) => instance::read(zopen::read(file)?)?,
        None => instance::read(io::stdin())?,
    };
    let tend = OffsetDateTime::now_utc();
    let sites = &instance.sites;

    if args.stats {
        eprintln!("Instance            : {}", args.file.as_deref().unwrap_or("<stdin>"));
        eprintln!("Read Time (seconds) : {}", (tend - tstart).as_seconds_f64());
        eprintln!("Number of sites     : {}", sites.len());
        if !args.prim {
            eprintln!("Number of candidates: {}", num_candidates(sites.len()));
        }
    }

    let tstart = OffsetDateTime::now_utc();
    let p = if args.prim { prim(sites) } else { plan(sites) };
    let tend = OffsetDateTime::now_utc();

    if args.stats {
        eprintln!();
        eprintln!("Algorithm           : {}", if args.prim { "prim" } else { "kruskal" });
        eprintln!("Time (seconds)      : {:.2}", (tend - tstart).as_seconds_f64());
        eprintln!("Cost                : {}", p.cost);
        eprintln!("Power stations      : {}", p.sources.len());
        eprintln!("Wires               : {}", p.links.len());
    }

    if args.check {
        p.verify(sites)?;
        if args.stats {
            eprintln!("Check               : ok");
        }
    }

    match &args.output {
        Some(file) => solution::write_solution_to_file(file, &p)?,
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            solution::write_solution(&mut out, &p)?;
            out.flush()?;
        }
    }

    Ok(())
}
