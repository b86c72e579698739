//! Disjoint-set union (union-find) with two interchangeable variants:
//!
//! - [`CompactDsu`]: integer elements in a fixed range `[0, n)`, array-backed.
//!   Out-of-range indices panic.
//! - [`SparseDsu`]: any hashable key, map-backed. Unseen keys become
//!   singleton sets the first time they are mentioned.
//!
//! Both implement [`Dsu`] with union by rank and full path compression.
//!
//! ```
//! use gdsu::{CompactDsu, Dsu, SparseDsu};
//!
//! let mut dsu = CompactDsu::new(5);
//! dsu.union(0, 1);
//! dsu.union(3, 4);
//! assert!(dsu.connected(0, 1));
//! assert!(!dsu.connected(0, 3));
//! assert_eq!(dsu.groups().len(), 3);
//!
//! let mut names = SparseDsu::new();
//! assert!(names.union("apple", "banana"));
//! assert!(names.union("banana", "cherry"));
//! assert!(!names.union("apple", "cherry"));
//! ```

#[macro_use] extern crate log;
extern crate pathfinding;
extern crate rand;
extern crate serde_json;
extern crate simplelog;
extern crate thiserror;

mod contract;
mod compact;
mod sparse;
pub mod config;
pub mod driver;
pub mod error;
pub mod workload;

pub use contract::Dsu;
pub use compact::CompactDsu;
pub use sparse::SparseDsu;
