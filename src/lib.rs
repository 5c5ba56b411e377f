//! A small collection of classic pointer-based data structures, written to learn how ownership
//! shapes them in Rust.
//!
//! # Purpose
//! These are textbook structures: a list that keeps itself sorted, a plain singly-linked list and
//! a minimal binary search tree. None of them try to beat [`std`]. The interesting part is how
//! each one is expressed with owned links (`Option<Box<Node<T>>>`) and no `unsafe` at all, and how
//! a "walk the pointers" algorithm turns into something the borrow checker accepts.
//!
//! # Error Handling
//! Every operation that can fail comes in two forms. The `try_*` form returns a [`Result`] with a
//! small, strongly typed error (see [`EmptyList`](collections::linked::EmptyList) and
//! [`IndexOutOfBounds`](collections::linked::IndexOutOfBounds)). The plain form panics with the
//! error's message, because for a collection it is usually more ergonomic to treat a precondition
//! violation as a bug than to force every caller to handle it.
//!
//! # Logging
//! Bulk structural changes (clearing, sweeping out duplicates, reversing) emit `TRACE` events
//! through [`tracing`]. Nothing is recorded unless the consumer installs a subscriber.
//!
//! # Features
//! Each collection sits behind its own cargo feature (`sorted`, `singly`, `binary-tree`), all
//! enabled through the default `collections-all` feature.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
