//! Disjoint set union (union-find) over a fixed universe of integers,
//! with union by size and path compression.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod dsu;

pub use dsu::Dsu;
