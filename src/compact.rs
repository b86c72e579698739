use std::collections::HashMap;

use crate::contract::Dsu;

// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// Array-backed disjoint sets over the fixed universe `[0, capacity)`.
///
/// Every element exists from construction. Indices outside the universe are
/// a caller bug and panic.
#[derive(Debug, Clone)]
pub struct CompactDsu {
	parent: Vec<usize>,
	rank: Vec<usize>,
}

impl CompactDsu {
	pub fn new(size: usize) -> CompactDsu {
		CompactDsu {
			parent: (0..size).collect(),
			rank: vec![0; size],
		}
	}

	/// Size of the fixed universe; every index below it is an element.
	pub fn capacity(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	fn check(&self, x: usize, op: &str) {
		if x >= self.parent.len() {
			panic!("CompactDsu: index {} out of range in {} (capacity {})",
				x, op, self.parent.len());
		}
	}

	fn root_of(&mut self, mut x: usize) -> usize {
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}

		// compress
		while x != root {
			let next = self.parent[x];
			self.parent[x] = root;
			x = next;
		}
		root
	}
}

impl Dsu<usize> for CompactDsu {
	fn find(&mut self, x: usize) -> usize {
		self.check(x, "find");
		self.root_of(x)
	}

	fn union(&mut self, x: usize, y: usize) -> bool {
		self.check(x, "union");
		self.check(y, "union");
		let mut x_root = self.root_of(x);
		let mut y_root = self.root_of(y);
		if x_root == y_root {
			return false;
		}
		if self.rank[x_root] < self.rank[y_root] {
			::std::mem::swap(&mut x_root, &mut y_root);
		}
		self.parent[y_root] = x_root;
		if self.rank[x_root] == self.rank[y_root] {
			self.rank[x_root] += 1;
		}
		trace!("compact: {} attached under {} (rank {})", y_root, x_root, self.rank[x_root]);
		true
	}

	fn connected(&mut self, x: usize, y: usize) -> bool {
		self.check(x, "connected");
		self.check(y, "connected");
		self.root_of(x) == self.root_of(y)
	}

	fn groups(&mut self) -> HashMap<usize, Vec<usize>> {
		let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
		for x in 0..self.parent.len() {
			let root = self.root_of(x);
			groups.entry(root).or_insert_with(Vec::new).push(x);
		}
		debug!("compact: {} elements in {} groups", self.parent.len(), groups.len());
		groups
	}
}
