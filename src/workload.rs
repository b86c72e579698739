use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use pathfinding::prelude::connected_components;
use rand::Rng;

use crate::contract::Dsu;
use crate::error::WorkloadError;

/// One step of a scripted workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op<T> {
    Find(T),
    Union(T, T),
    Connected(T, T),
    Groups,
}

/// What an `Op` returned when replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Root(T),
    Merged(bool),
    Connected(bool),
    Groups(usize),
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Root(x) => write!(f, "{}", x),
            Outcome::Merged(b) => write!(f, "{}", b),
            Outcome::Connected(b) => write!(f, "{}", b),
            Outcome::Groups(n) => write!(f, "{}", n),
        }
    }
}

impl<T: FromStr> Op<T> {
    /// Parses `find x`, `union x y`, `connected x y` or `groups`.
    /// Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Op<T>>, WorkloadError> {
        let mut words = line.split_whitespace();
        let op = match words.next() {
            None => return Ok(None),
            Some(w) if w.starts_with('#') => return Ok(None),
            Some(w) => w,
        };
        let args: Vec<&str> = words.collect();

        let expected = match op {
            "find" => 1,
            "union" | "connected" => 2,
            "groups" => 0,
            _ => return Err(WorkloadError::UnknownOp { line: line_no, op: op.to_string() }),
        };
        if args.len() != expected {
            return Err(WorkloadError::Arity {
                line: line_no,
                op: op.to_string(),
                expected,
                got: args.len(),
            });
        }

        let elem = |arg: &str| {
            arg.parse::<T>().map_err(|_| WorkloadError::BadElement { line: line_no, arg: arg.to_string() })
        };
        let parsed = match op {
            "find" => Op::Find(elem(args[0])?),
            "union" => Op::Union(elem(args[0])?, elem(args[1])?),
            "connected" => Op::Connected(elem(args[0])?, elem(args[1])?),
            _ => Op::Groups,
        };
        Ok(Some(parsed))
    }
}

/// Parses a whole script, one op per line. Line numbers in errors start at 1.
pub fn parse<T: FromStr, I: IntoIterator<Item = S>, S: AsRef<str>>(lines: I) -> Result<Vec<Op<T>>, WorkloadError> {
    let mut ops = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        if let Some(op) = Op::parse_line(line.as_ref(), i + 1)? {
            ops.push(op);
        }
    }
    Ok(ops)
}

pub fn replay<T: PartialEq + Clone, D: Dsu<T>>(dsu: &mut D, ops: &[Op<T>]) -> Vec<Outcome<T>> {
    ops.iter()
        .map(|op| match op {
            Op::Find(x) => Outcome::Root(dsu.find(x.clone())),
            Op::Union(x, y) => Outcome::Merged(dsu.union(x.clone(), y.clone())),
            Op::Connected(x, y) => Outcome::Connected(dsu.connected(x.clone(), y.clone())),
            Op::Groups => Outcome::Groups(dsu.group_count()),
        })
        .collect()
}

/// Every `(x, y)` pair passed to a union in `ops`.
pub fn union_edges<T: Clone>(ops: &[Op<T>]) -> Vec<(T, T)> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Union(x, y) => Some((x.clone(), y.clone())),
            _ => None,
        })
        .collect()
}

/// The degenerate sequential chain `union(i, i + 1)` over `n` elements.
pub fn chain(n: usize) -> Vec<Op<usize>> {
    (1..n).map(|i| Op::Union(i - 1, i)).collect()
}

/// `count` random ops over `[0, n)`, half unions and half connectivity queries.
pub fn mixed<R: Rng>(n: usize, count: usize, rng: &mut R) -> Vec<Op<usize>> {
    if n == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..n);
            let y = rng.gen_range(0..n);
            if rng.gen_bool(0.5) {
                Op::Union(x, y)
            } else {
                Op::Connected(x, y)
            }
        })
        .collect()
}

/// Checks `dsu.groups()` against the connected components of the graph
/// formed by `edges`, computed independently.
pub fn verify_partition<T, D>(dsu: &mut D, edges: &[(T, T)]) -> bool
where
    T: Eq + Hash + Clone,
    D: Dsu<T>,
{
    let groups = dsu.groups();
    let universe: Vec<T> = groups.values().flat_map(|members| members.iter().cloned()).collect();

    let mut adjacent: HashMap<T, Vec<T>> = HashMap::new();
    for (x, y) in edges {
        adjacent.entry(x.clone()).or_insert_with(Vec::new).push(y.clone());
        adjacent.entry(y.clone()).or_insert_with(Vec::new).push(x.clone());
    }
    let known: HashSet<&T> = universe.iter().collect();
    if adjacent.keys().any(|k| !known.contains(k)) {
        warn!("verify: union edges mention keys the structure does not know");
        return false;
    }

    let components = connected_components(&universe, |n| adjacent.get(n).cloned().unwrap_or_default());
    if components.len() != groups.len() {
        warn!("verify: {} groups but {} components", groups.len(), components.len());
        return false;
    }

    components.iter().all(|component| {
        let any = match component.iter().next() {
            Some(any) => any.clone(),
            None => return true,
        };
        let root = dsu.find(any);
        match groups.get(&root) {
            Some(members) => members.len() == component.len() && members.iter().all(|m| component.contains(m)),
            None => false,
        }
    })
}
