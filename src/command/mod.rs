//! Command grammar and dispatch.
//!
//! Commands are a closed set, so the grammar is a tagged enum and dispatch
//! is one explicit match: an unknown keyword fails at parse time as
//! `InvalidCommand` and can never be confused with a domain error.

pub mod execute;
pub mod parse;

use std::fmt;

use crate::domain::Polygon;
use crate::predicates::VertexFilter;

pub use execute::execute;
pub use parse::parse_command;

/// Sub-argument of `AREA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaArg {
    /// Sum areas over a vertex-count filter.
    Filter(VertexFilter),
    /// Mean area over the whole collection.
    Mean,
}

/// Sub-argument of `MAX` / `MIN`: which ordering to take the extremum by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKey {
    Area,
    Vertexes,
}

/// One parsed command line. Constructed per line, discarded after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Area(AreaArg),
    Max(ExtremumKey),
    Min(ExtremumKey),
    Count(VertexFilter),
    LessArea(Polygon),
    InFrame(Polygon),
    Intersections(Polygon),
    Same(Polygon),
    RightShapes,
    Echo(Polygon),
    RmEcho(Polygon),
}

/// Result of a successful command, formatted one line per command:
/// areas with exactly one fractional digit, counts as plain integers,
/// booleans as `<TRUE>` / `<FALSE>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    Area(f64),
    Count(usize),
    Flag(bool),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Area(area) => write!(f, "{:.1}", area),
            Output::Count(count) => write!(f, "{}", count),
            Output::Flag(true) => write!(f, "<TRUE>"),
            Output::Flag(false) => write!(f, "<FALSE>"),
        }
    }
}
