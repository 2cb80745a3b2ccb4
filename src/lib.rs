#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod deadlock;
pub mod formatter;
pub mod fs;
pub mod generator;
pub mod grid;
pub mod parser;
pub mod push;
pub mod reachability;
pub mod solver;
pub mod tile;
pub mod visited;
