use std::collections::HashMap;

/// Disjoint-set union over keys of type `T`.
///
/// Every method takes `&mut self`: lookups compress paths, and the sparse
/// variant creates keys it has not seen yet.
pub trait Dsu<T: PartialEq> {
	/// Representative (root) of the set containing `x`.
	fn find(&mut self, x: T) -> T;

	/// Merges the sets containing `x` and `y`. Returns `false` if they were
	/// already one set.
	fn union(&mut self, x: T, y: T) -> bool;

	fn connected(&mut self, x: T, y: T) -> bool {
		self.find(x) == self.find(y)
	}

	/// Every known key bucketed under its root.
	fn groups(&mut self) -> HashMap<T, Vec<T>>;

	fn group_count(&mut self) -> usize {
		self.groups().len()
	}
}
