//! grmod - command-line companion for GNU Radio out-of-tree modules
//!
//! Discovers the blocks of a module from its on-disk layout and drives
//! the external scaffold tool, flowgraph editor and flowgraph compiler.
pub mod cli;
pub mod commands;
pub mod display;
pub mod utils;
