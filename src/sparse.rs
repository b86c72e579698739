use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::contract::Dsu;

/// Map-backed disjoint sets over any hashable key.
///
/// Keys need no registration: the first `find`, `union` or `connected`
/// that mentions a key creates it as a singleton.
#[derive(Debug, Clone)]
pub struct SparseDsu<T: Eq + Hash + Clone> {
	parent: HashMap<T, T>,
	rank: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> SparseDsu<T> {
	pub fn new() -> SparseDsu<T> {
		SparseDsu {
			parent: HashMap::new(),
			rank: HashMap::new(),
		}
	}

	/// Starts with every element of `elems` as its own set.
	pub fn with_elements<I: IntoIterator<Item = T>>(elems: I) -> SparseDsu<T> {
		let elems = elems.into_iter();
		let mut dsu = SparseDsu {
			parent: HashMap::with_capacity(elems.size_hint().0),
			rank: HashMap::with_capacity(elems.size_hint().0),
		};
		for e in elems {
			dsu.insert(e);
		}
		dsu
	}

	/// Number of keys seen so far.
	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Whether `x` has been seen. Unlike `find`, never adds it.
	pub fn contains(&self, x: &T) -> bool {
		self.parent.contains_key(x)
	}

	fn insert(&mut self, x: T) {
		if !self.parent.contains_key(&x) {
			self.parent.insert(x.clone(), x.clone());
			self.rank.insert(x, 0);
		}
	}

	fn rank_of(&self, x: &T) -> usize {
		self.rank.get(x).cloned().unwrap_or(0)
	}

	fn root_of(&mut self, x: T) -> T {
		if !self.parent.contains_key(&x) {
			self.insert(x.clone());
			return x;
		}

		let mut root = x.clone();
		while let Some(p) = self.parent.get(&root).filter(|p| **p != root).cloned() {
			root = p;
		}

		let mut cur = x;
		while cur != root {
			let next = match self.parent.insert(cur, root.clone()) {
				Some(next) => next,
				None => break,
			};
			cur = next;
		}
		root
	}
}

impl<T: Eq + Hash + Clone> Default for SparseDsu<T> {
	fn default() -> SparseDsu<T> {
		SparseDsu::new()
	}
}

impl<T: Eq + Hash + Clone> FromIterator<T> for SparseDsu<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SparseDsu<T> {
		SparseDsu::with_elements(iter)
	}
}

impl<T: Eq + Hash + Clone> Dsu<T> for SparseDsu<T> {
	fn find(&mut self, x: T) -> T {
		self.root_of(x)
	}

	fn union(&mut self, x: T, y: T) -> bool {
		let mut x_root = self.root_of(x);
		let mut y_root = self.root_of(y);
		if x_root == y_root {
			return false;
		}
		let x_rank = self.rank_of(&x_root);
		let y_rank = self.rank_of(&y_root);
		if x_rank < y_rank {
			::std::mem::swap(&mut x_root, &mut y_root);
		}
		if x_rank == y_rank {
			self.rank.insert(x_root.clone(), x_rank + 1);
		}
		self.parent.insert(y_root, x_root);
		trace!("sparse: merged two roots ({} keys known)", self.parent.len());
		true
	}

	fn groups(&mut self) -> HashMap<T, Vec<T>> {
		let keys: Vec<T> = self.parent.keys().cloned().collect();
		let mut groups: HashMap<T, Vec<T>> = HashMap::new();
		for x in keys {
			let root = self.root_of(x.clone());
			groups.entry(root).or_insert_with(Vec::new).push(x);
		}
		debug!("sparse: {} keys in {} groups", self.parent.len(), groups.len());
		groups
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	struct Point {
		x: isize,
		y: isize,
	}

	#[test]
	fn basic_ints() {
		let mut dsu = SparseDsu::with_elements(vec![1, 2, 3, 4, 5]);
		assert!(!dsu.connected(1, 2));

		dsu.union(1, 2);
		dsu.union(3, 4);
		assert!(dsu.connected(1, 2));
		assert!(!dsu.connected(1, 3));

		dsu.union(2, 3);
		assert!(dsu.connected(1, 4));
		assert_eq!(dsu.len(), 5);
	}

	#[test]
	fn string_keys() {
		let mut dsu: SparseDsu<&str> = vec!["a", "b", "c", "d"].into_iter().collect();
		dsu.union("a", "b");
		dsu.union("c", "d");
		assert!(dsu.connected("a", "b"));
		assert!(!dsu.connected("a", "c"));
		assert_eq!(dsu.groups().len(), 2);
	}

	#[test]
	fn struct_keys() {
		let a = Point { x: 1, y: 1 };
		let b = Point { x: 1, y: 2 };
		let c = Point { x: 2, y: 3 };
		let mut dsu = SparseDsu::new();
		assert!(dsu.union(a, b));
		assert!(dsu.connected(b, a));
		assert!(!dsu.connected(a, c));
		assert_eq!(dsu.len(), 3);
	}

	#[test]
	fn find_creates_unseen_key() {
		let mut dsu: SparseDsu<String> = SparseDsu::new();
		assert!(!dsu.contains(&"x".to_string()));
		assert_eq!(dsu.find("x".to_string()), "x");
		assert!(dsu.contains(&"x".to_string()));

		let groups = dsu.groups();
		assert_eq!(groups.len(), 1);
		assert_eq!(groups["x"], vec!["x".to_string()]);
	}

	#[test]
	fn connected_creates_both_keys() {
		let mut dsu = SparseDsu::new();
		dsu.find(10);
		assert!(!dsu.connected(10, 20));
		assert_eq!(dsu.len(), 2);
		assert_eq!(dsu.find(20), 20);

		dsu.union(20, 10);
		assert!(dsu.connected(10, 20));
	}

	#[test]
	fn union_on_new_keys() {
		let mut dsu = SparseDsu::new();
		assert!(dsu.union(10, 20));
		assert!(dsu.connected(10, 20));
		assert!(dsu.union(20, 35));
		assert!(!dsu.union(10, 35));
	}

	#[test]
	fn idempotent_union() {
		let mut dsu = SparseDsu::new();
		dsu.union(1, 2);
		assert!(!dsu.union(1, 2));
		assert!(!dsu.union(2, 1));
		assert!(dsu.connected(1, 2));
		assert_eq!(dsu.groups().len(), 1);
	}

	#[test]
	fn duplicate_seeds_are_one_key() {
		let dsu = SparseDsu::with_elements(vec![7, 7, 7]);
		assert_eq!(dsu.len(), 1);
	}

	#[test]
	fn rank_decides_the_surviving_root() {
		let mut dsu = SparseDsu::with_elements(vec!["a", "b", "c"]);
		dsu.union("a", "b");
		assert_eq!(dsu.rank["a"], 1);
		assert_eq!(dsu.find("c"), "c");

		// rank[a] = 1 beats rank[c] = 0 even though c is the first operand
		dsu.union("c", "a");
		assert!(dsu.connected("b", "c"));
		assert_eq!(dsu.find("c"), "a");
		assert_eq!(dsu.rank["a"], 1);
	}

	#[test]
	fn deep_chain_compresses() {
		let mut dsu = SparseDsu::new();
		// hand-built chain 4 -> 3 -> 2 -> 1
		for (k, p) in vec![(1, 1), (2, 1), (3, 2), (4, 3)] {
			dsu.parent.insert(k, p);
			dsu.rank.insert(k, 0);
		}
		assert_eq!(dsu.find(4), 1);
		for k in 1..5 {
			assert_eq!(dsu.parent[&k], 1);
		}
	}

	#[test]
	fn groups_cover_every_key_once() {
		let mut dsu = SparseDsu::with_elements(vec!["mozart", "bach", "gauss", "euler"]);
		dsu.union("mozart", "bach");
		dsu.union("beethoven", "bach");
		dsu.union("mozart", "barman");

		dsu.union("fermat", "ramanujan");
		dsu.union("gauss", "euler");
		dsu.union("gauss", "fermat");

		dsu.union("gallileo", "newton");
		dsu.union("newton", "einstein");
		dsu.union("einstein", "bose");

		let mut lines: Vec<Vec<&str>> = dsu.groups().into_iter()
			.map(|(_, mut members)| { members.sort(); members })
			.collect();
		lines.sort();
		assert_eq!(lines, vec![
			vec!["bach", "barman", "beethoven", "mozart"],
			vec!["bose", "einstein", "gallileo", "newton"],
			vec!["euler", "fermat", "gauss", "ramanujan"],
		]);
	}
}
