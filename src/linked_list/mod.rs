//! Owned linked list implementations.
//!
//! Each list owns its chain of heap-allocated nodes: nodes are created on
//! insert and reclaimed on delete (or when the list is dropped). This is in
//! contrast to an intrusive linked list, where the caller owns the nodes and
//! the list only threads links through them.
//!
//! Three shapes are provided: [`single::SinglyList`] (head anchor, forward
//! traversal), [`double::DoublyList`] (bidirectional traversal), and
//! [`circular::CircularList`] (tail anchor, no terminal node). The first two
//! share the positional contract captured by [`traits::PositionalList`].
//!
//! # Examples
//!
//! ```
//! use catena_collections::linked_list::double::DoublyList;
//!
//! let mut list = DoublyList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//! list.insert_at(2, 10).unwrap();
//!
//! let forward: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(forward, vec![1, 10, 2, 3]);
//!
//! let backward: Vec<i32> = list.iter().rev().copied().collect();
//! assert_eq!(backward, vec![3, 2, 10, 1]);
//! ```
pub mod circular;
pub mod double;
pub mod single;
pub mod traits;
