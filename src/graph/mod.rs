//! Graph construction and representation
//!
//! This module provides link graph building and immutable CSR storage
//! shared by both ranking algorithms.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::LinkGraph;
