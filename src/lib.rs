//! polyquery - line-oriented geometric queries over 2D integer polygons

pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod geometry;
pub mod predicates;
pub mod query;
