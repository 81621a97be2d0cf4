use super::{AreaArg, Command, ExtremumKey};
use crate::domain::Polygon;
use crate::error::QueryError;
use crate::format::parse_polygon;
use crate::predicates::VertexFilter;

/// Parse one command line into a `Command`.
///
/// The grammar has exactly two levels: the keyword picks a handler, then
/// either a sub-keyword token or a trailing polygon literal is consumed.
/// Keyword-level failures are `InvalidCommand`; a bad trailing literal is
/// `MalformedPolygonLiteral`.
pub fn parse_command(line: &str) -> Result<Command, QueryError> {
    let trimmed = line.trim();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "AREA" => Ok(Command::Area(parse_area_arg(rest)?)),
        "MAX" => Ok(Command::Max(parse_extremum_key(rest)?)),
        "MIN" => Ok(Command::Min(parse_extremum_key(rest)?)),
        "COUNT" => Ok(Command::Count(parse_vertex_filter(rest)?)),
        "LESSAREA" => Ok(Command::LessArea(parse_literal(rest)?)),
        "INFRAME" => Ok(Command::InFrame(parse_literal(rest)?)),
        "INTERSECTIONS" => Ok(Command::Intersections(parse_literal(rest)?)),
        "SAME" => Ok(Command::Same(parse_literal(rest)?)),
        "ECHO" => Ok(Command::Echo(parse_literal(rest)?)),
        "RMECHO" => Ok(Command::RmEcho(parse_literal(rest)?)),
        "RIGHTSHAPES" => {
            if rest.is_empty() {
                Ok(Command::RightShapes)
            } else {
                Err(QueryError::InvalidCommand)
            }
        }
        _ => Err(QueryError::InvalidCommand),
    }
}

fn parse_area_arg(arg: &str) -> Result<AreaArg, QueryError> {
    match arg {
        "MEAN" => Ok(AreaArg::Mean),
        other => Ok(AreaArg::Filter(parse_vertex_filter(other)?)),
    }
}

fn parse_extremum_key(arg: &str) -> Result<ExtremumKey, QueryError> {
    match arg {
        "AREA" => Ok(ExtremumKey::Area),
        "VERTEXES" => Ok(ExtremumKey::Vertexes),
        _ => Err(QueryError::InvalidCommand),
    }
}

/// `EVEN`, `ODD`, or a base-10 vertex count. A numeric argument below 3
/// can never match a valid polygon, so it is rejected as invalid rather
/// than silently counting zero.
fn parse_vertex_filter(arg: &str) -> Result<VertexFilter, QueryError> {
    match arg {
        "EVEN" => Ok(VertexFilter::Even),
        "ODD" => Ok(VertexFilter::Odd),
        other => {
            let n: usize = other.parse().map_err(|_| QueryError::InvalidCommand)?;
            if n < 3 {
                return Err(QueryError::InvalidCommand);
            }
            Ok(VertexFilter::Exactly(n))
        }
    }
}

fn parse_literal(rest: &str) -> Result<Polygon, QueryError> {
    parse_polygon(rest).ok_or(QueryError::MalformedPolygonLiteral)
}
