use super::{AreaArg, Command, ExtremumKey, Output};
use crate::domain::Polygon;
use crate::error::QueryError;
use crate::predicates::{area_less_than, congruent, polygon_in_frame, polygons_intersect};
use crate::query::{Direction, count_where, extremum_by, mean_area, sum_area_where};

/// Run one command against the session collection.
///
/// Read-only commands only observe the collection; `ECHO` and `RMECHO`
/// edit it. Errors are returned before any mutation happens, so a failed
/// command always leaves the collection exactly as it was.
pub fn execute(collection: &mut Vec<Polygon>, command: Command) -> Result<Output, QueryError> {
    match command {
        Command::Area(AreaArg::Filter(filter)) => Ok(Output::Area(sum_area_where(
            collection,
            |p| filter.matches(p),
        ))),
        Command::Area(AreaArg::Mean) => Ok(Output::Area(mean_area(collection)?)),
        Command::Max(key) => extremum(collection, key, Direction::Max),
        Command::Min(key) => extremum(collection, key, Direction::Min),
        Command::Count(filter) => Ok(Output::Count(count_where(collection, |p| {
            filter.matches(p)
        }))),
        Command::LessArea(threshold) => Ok(Output::Count(count_where(collection, |p| {
            area_less_than(p, &threshold)
        }))),
        Command::InFrame(polygon) => {
            let frame = collection
                .iter()
                .map(|p| p.bounds())
                .reduce(|a, b| a.merge(&b))
                .ok_or(QueryError::EmptyCollection)?;
            Ok(Output::Flag(polygon_in_frame(&polygon, &frame)))
        }
        Command::Intersections(polygon) => Ok(Output::Count(count_where(collection, |p| {
            polygons_intersect(p, &polygon)
        }))),
        Command::Same(polygon) => Ok(Output::Count(count_where(collection, |p| {
            congruent(p, &polygon)
        }))),
        Command::RightShapes => Ok(Output::Count(count_where(collection, |p| {
            p.has_right_angle()
        }))),
        Command::Echo(polygon) => Ok(Output::Count(echo(collection, &polygon))),
        Command::RmEcho(polygon) => Ok(Output::Count(rm_echo(collection, &polygon))),
    }
}

fn extremum(
    collection: &[Polygon],
    key: ExtremumKey,
    direction: Direction,
) -> Result<Output, QueryError> {
    match key {
        ExtremumKey::Area => {
            let best = extremum_by(collection, |p| p.area(), direction)?;
            Ok(Output::Area(best.area()))
        }
        ExtremumKey::Vertexes => {
            let best = extremum_by(collection, |p| p.vertex_count(), direction)?;
            Ok(Output::Count(best.vertex_count()))
        }
    }
}

/// Insert a duplicate right after every polygon equal to `target`
/// (exact vertex-sequence equality). Returns the number inserted.
fn echo(collection: &mut Vec<Polygon>, target: &Polygon) -> usize {
    let mut result = Vec::with_capacity(collection.len());
    let mut inserted = 0;
    for polygon in collection.drain(..) {
        let is_match = polygon == *target;
        result.push(polygon);
        if is_match {
            result.push(target.clone());
            inserted += 1;
        }
    }
    *collection = result;
    inserted
}

/// Collapse each consecutive run of polygons equal to `target` down to a
/// single entry. Returns the number removed.
fn rm_echo(collection: &mut Vec<Polygon>, target: &Polygon) -> usize {
    let mut removed = 0;
    let mut previous_matched = false;
    collection.retain(|polygon| {
        let is_match = polygon == target;
        let drop = is_match && previous_matched;
        previous_matched = is_match;
        if drop {
            removed += 1;
        }
        !drop
    });
    removed
}
