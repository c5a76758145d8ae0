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

use std::collections::HashMap;
use std::error::Error;
use std::fs::read_dir;
use std::path::Path;

use rs_powergrid::format::{instance, solution};
use rs_powergrid::mst::{plan, prim};
use rs_powergrid::Plan;

fn solutions() -> Result<HashMap<String, Plan<u64>>, Box<dyn Error>> {
    let mut sols = HashMap::new();
    for entry in read_dir(Path::new("tests/powergrid"))? {
        let entry = entry?;
        if entry.path().extension().map(|ext| ext == "sol").unwrap_or(false) {
            let sol = solution::read_solution_from_file(&entry.path().to_string_lossy())?;
            if let Some(file_stem) = entry.path().file_stem().map(|s| s.to_string_lossy().to_string()) {
                sols.insert(file_stem, sol);
            }
        }
    }
    Ok(sols)
}

#[test]
fn test_kruskal() -> Result<(), Box<dyn Error>> {
    let sols = solutions()?;
    let mut ninstances = 0;

    for entry in read_dir(Path::new("tests/powergrid"))? {
        let entry = entry?;
        if entry.path().extension().map(|ext| ext == "in").unwrap_or(false) {
            let inst = instance::read_from_file(&entry.path().to_string_lossy())?;
            let p = plan(&inst.sites);
            assert_eq!(p.num_edges(), inst.sites.len());
            assert_eq!(p.verify(&inst.sites), Ok(()), "Instance: {:?}", entry.path());

            if let Some(sol) = entry
                .path()
                .file_stem()
                .and_then(|s| sols.get(s.to_string_lossy().as_ref()))
            {
                assert_eq!(sol.verify(&inst.sites), Ok(()), "Instance: {:?}", entry.path());
                assert_eq!(&p, sol, "Instance: {:?}", entry.path());
            } else {
                panic!("Can't find solution file for {:?}", entry.path());
            }
            ninstances += 1;
        }
    }

    assert_eq!(ninstances, sols.len());
    Ok(())
}

#[test]
fn test_prim() -> Result<(), Box<dyn Error>> {
    let sols = solutions()?;

    for entry in read_dir(Path::new("tests/powergrid"))? {
        let entry = entry?;
        if entry.path().extension().map(|ext| ext == "in").unwrap_or(false) {
            let inst = instance::read_from_file(&entry.path().to_string_lossy())?;
            let p = prim(&inst.sites);
            assert_eq!(p.verify(&inst.sites), Ok(()), "Instance: {:?}", entry.path());

            if let Some(sol) = entry
                .path()
                .file_stem()
                .and_then(|s| sols.get(s.to_string_lossy().as_ref()))
            {
                assert_eq!(p.cost, sol.cost, "Instance: {:?}", entry.path());
            } else {
                panic!("Can't find solution file for {:?}", entry.path());
            }
        }
    }

    Ok(())
}

#[test]
fn test_write_solution() -> Result<(), Box<dyn Error>> {
    let inst = instance::read_from_file("tests/powergrid/cf_sample2.in")?;
    let mut buf = Vec::new();
    solution::write_solution(&mut buf, &plan(&inst.sites))?;
    assert_eq!(String::from_utf8(buf)?, std::fs::read_to_string("tests/powergrid/cf_sample2.sol")?);
    Ok(())
}
