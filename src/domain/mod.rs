// Domain types and algorithms for JavaLens.

pub mod callgraph;
pub mod class_model;
pub mod diagram;
pub mod error;
pub mod interaction;
pub mod syntax;
