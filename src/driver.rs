use std::fmt::Display;
use std::hash::Hash;
use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compact::CompactDsu;
use crate::config::{Config, Generator, Variant};
use crate::contract::Dsu;
use crate::error::DriverError;
use crate::sparse::SparseDsu;
use crate::workload::{self, Op};

/// Runs a workload against the configured variant, writing one result line
/// per op to `out`. Returns `false` only when verification was requested
/// and failed.
///
/// Scripted sparse runs use string keys; every other run uses integer
/// elements, and generated workloads draw them from `[0, capacity)`.
pub fn run<I, S, W>(config: &Config, lines: I, out: &mut W) -> Result<bool, DriverError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    info!("variant {:?}, capacity {}", config.variant, config.capacity);
    match (config.variant, config.generate) {
        (Variant::Sparse, None) => {
            let ops: Vec<Op<String>> = workload::parse(lines)?;
            execute(&mut SparseDsu::new(), &ops, config.verify, out)
        }
        (Variant::Sparse, Some(_)) => {
            let ops = index_ops(config, lines)?;
            execute(&mut SparseDsu::new(), &ops, config.verify, out)
        }
        (Variant::Compact, _) => {
            let ops = index_ops(config, lines)?;
            check_range(&ops, config.capacity)?;
            execute(&mut CompactDsu::new(config.capacity), &ops, config.verify, out)
        }
    }
}

/// Reads every line of `reader`. A line that cannot be read, including one
/// that is not valid UTF-8, is an error rather than the end of input.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, DriverError> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    Ok(lines)
}

fn index_ops<I, S>(config: &Config, lines: I) -> Result<Vec<Op<usize>>, DriverError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ops = match config.generate {
        None => workload::parse(lines)?,
        Some(Generator::Chain) => workload::chain(config.capacity),
        Some(Generator::Mixed) => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            workload::mixed(config.capacity, config.ops, &mut rng)
        }
    };
    debug!("{} ops loaded", ops.len());
    Ok(ops)
}

// CompactDsu panics on out-of-range input, so reject it up front.
fn check_range(ops: &[Op<usize>], capacity: usize) -> Result<(), DriverError> {
    for op in ops {
        let (x, y) = match *op {
            Op::Find(x) => (x, x),
            Op::Union(x, y) | Op::Connected(x, y) => (x, y),
            Op::Groups => continue,
        };
        if let Some(&index) = [x, y].iter().find(|&&i| i >= capacity) {
            return Err(DriverError::OutOfRange { index, capacity });
        }
    }
    Ok(())
}

fn execute<T, D, W>(dsu: &mut D, ops: &[Op<T>], verify: bool, out: &mut W) -> Result<bool, DriverError>
where
    T: Eq + Hash + Clone + Display,
    D: Dsu<T>,
    W: Write,
{
    let outcomes = workload::replay(dsu, ops);
    for outcome in &outcomes {
        writeln!(out, "{}", outcome)?;
    }
    info!("replayed {} ops", outcomes.len());

    if !verify {
        return Ok(true);
    }
    let ok = workload::verify_partition(dsu, &workload::union_edges(ops));
    if ok {
        info!("verify: partition matches");
    } else {
        error!("verify: partition mismatch");
    }
    Ok(ok)
}
