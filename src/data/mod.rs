//! # Storing of sparse matrices in memory
//!
//! This module provides the data structures used to represent matrices in memory. Algorithms
//! working on them live in `algorithm`, reading and writing them in `io`.

pub mod element;
pub mod matrix;
