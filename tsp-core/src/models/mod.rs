//! A collection of models to represent points of a Traveling Salesman Problem and its solution.

pub mod common;
pub mod problem;
pub mod solution;
