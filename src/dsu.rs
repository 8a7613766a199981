//! This module implements a disjoint set union (union-find) over a
//! fixed universe of integers `0..n`.
//! Each element owns one signed word, read as a tagged value:
//! - a negative word marks a group leader (root); its magnitude is the
//!   number of elements in the group
//! - a non-negative word marks a child; it is the index of an ancestor
//!   in the same group, not necessarily the root, since chains are
//!   shortened lazily on lookup (path compression)
//!
//! Merges attach the smaller group under the larger one (union by
//! size), which together with compression gives amortized
//! inverse-Ackermann time per operation.
//! Reference:
//! Zvi Galil and Giuseppe F. Italiano,
//! Data structures and algorithms for disjoint set union problems

use std::mem;

/// A partition of `0..n` into disjoint groups, parameterized by the
/// signed word holding each element's parent-or-size value.
#[derive(Clone, Debug, Default)]
pub struct Dsu<T> {
    data: Vec<T>,
}

macro_rules! impl_Dsu {
    ( $( $i:ty ),* ) => ($(
        impl Dsu<$i> {
            /// Creates `n` singleton groups, each element its own
            /// leader.
            ///
            /// # Panics
            /// If `n` exceeds the positive range of the word type.
            pub fn new(n: usize) -> Self {
                assert!(n <= <$i>::max_value() as usize);
                Dsu { data: vec![-1; n] }
            }

            /// Returns the number of elements in the universe.
            pub fn len(&self) -> usize {
                self.data.len()
            }

            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            /// Returns the leader (root) of the group containing `a`,
            /// rewriting every pointer on the walked chain directly to
            /// the root so later lookups from those elements are O(1).
            ///
            /// # Panics
            /// If `a` is out of range.
            pub fn leader(&mut self, a: usize) -> usize {
                assert!(a < self.data.len());

                let mut root = a;
                while self.data[root] >= 0 {
                    root = self.data[root] as usize;
                }

                let mut i = a;
                while i != root {
                    i = mem::replace(&mut self.data[i], root as $i) as usize;
                }
                root
            }

            /// Unions the groups containing `a` and `b` and returns the
            /// leader of the combined group. The larger group's leader
            /// wins; on a size tie `a`'s leader is kept. Merging two
            /// elements already in the same group changes nothing.
            ///
            /// # Panics
            /// If `a` or `b` is out of range.
            pub fn merge(&mut self, a: usize, b: usize) -> usize {
                let mut x = self.leader(a);
                let mut y = self.leader(b);
                if x == y {
                    return x;
                }

                // roots hold negated sizes, so the smaller word is the
                // larger group
                if self.data[x] > self.data[y] {
                    mem::swap(&mut x, &mut y);
                }
                self.data[x] += self.data[y];
                self.data[y] = x as $i;
                x
            }

            /// Returns whether `a` and `b` belong to the same group.
            ///
            /// # Panics
            /// If `a` or `b` is out of range.
            pub fn same(&mut self, a: usize, b: usize) -> bool {
                self.leader(a) == self.leader(b)
            }

            /// Returns the number of elements in the group containing
            /// `a`.
            ///
            /// # Panics
            /// If `a` is out of range.
            pub fn size(&mut self, a: usize) -> usize {
                let root = self.leader(a);
                -self.data[root] as usize
            }

            /// Returns the current partition as one list of members per
            /// group. Members are listed in ascending order; groups
            /// appear in the order their leader is first reached while
            /// scanning `0..n`.
            pub fn groups(&mut self) -> Vec<Vec<usize>> {
                let mut slot = vec![std::usize::MAX; self.data.len()];
                let mut result: Vec<Vec<usize>> = Vec::new();
                for i in 0..self.data.len() {
                    let root = self.leader(i);
                    if slot[root] == std::usize::MAX {
                        slot[root] = result.len();
                        result.push(Vec::new());
                    }
                    result[slot[root]].push(i);
                }
                result
            }
        }
    )*)
}
impl_Dsu!(i8, i16, i32, i64, isize);
