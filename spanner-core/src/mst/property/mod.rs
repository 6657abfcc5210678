//! Property-based tests for the MST strategies.
//!
//! Generates graphs across weight distributions and topologies, then checks
//! that the four strategies agree on total weight, that results satisfy the
//! structural tree/forest invariants, and that disconnected input degrades
//! into partial forests the documented way.

mod strategies;
