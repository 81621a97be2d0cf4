//! Generic filter/reduce and extremum machinery over a polygon collection.
//!
//! Every combinator borrows the collection and takes the predicate or key
//! as an explicit parameter; nothing here captures or aliases shared
//! state. Empty-collection failures surface as `QueryError` rather than
//! sentinel values.

use crate::domain::Polygon;
use crate::error::QueryError;

/// Which end of the ordering `extremum_by` should select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Max,
    Min,
}

/// Sum of areas over the polygons matching `pred`.
pub fn sum_area_where<F>(polygons: &[Polygon], pred: F) -> f64
where
    F: Fn(&Polygon) -> bool,
{
    polygons
        .iter()
        .filter(|&p| pred(p))
        .map(|p| p.area())
        .sum()
}

/// Mean area over the whole collection. Errors rather than returning 0 or
/// NaN on an empty collection.
pub fn mean_area(polygons: &[Polygon]) -> Result<f64, QueryError> {
    if polygons.is_empty() {
        return Err(QueryError::EmptyCollection);
    }
    Ok(sum_area_where(polygons, |_| true) / polygons.len() as f64)
}

/// Number of polygons matching `pred`.
pub fn count_where<F>(polygons: &[Polygon], pred: F) -> usize
where
    F: Fn(&Polygon) -> bool,
{
    polygons.iter().filter(|&p| pred(p)).count()
}

/// The polygon with the largest (or smallest) key.
///
/// Strict comparison only replaces the running best, so when several
/// polygons tie the first one in collection order wins.
pub fn extremum_by<K, F>(
    polygons: &[Polygon],
    key: F,
    direction: Direction,
) -> Result<&Polygon, QueryError>
where
    K: PartialOrd,
    F: Fn(&Polygon) -> K,
{
    let mut iter = polygons.iter();
    let mut best = iter.next().ok_or(QueryError::EmptyCollection)?;
    let mut best_key = key(best);
    for p in iter {
        let k = key(p);
        let better = match direction {
            Direction::Max => k > best_key,
            Direction::Min => k < best_key,
        };
        if better {
            best = p;
            best_key = k;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::predicates::VertexFilter;

    fn poly(coords: &[(i32, i32)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    fn sample() -> Vec<Polygon> {
        vec![
            poly(&[(0, 0), (0, 2), (2, 2), (2, 0)]),          // square, area 4
            poly(&[(0, 0), (4, 0), (0, 3)]),                  // triangle, area 6
            poly(&[(0, 0), (2, 0), (3, 2), (1, 3), (-1, 2)]), // pentagon, area 8
        ]
    }

    #[test]
    fn test_sum_area_partitions() {
        let polygons = sample();
        let even = sum_area_where(&polygons, |p| VertexFilter::Even.matches(p));
        let odd = sum_area_where(&polygons, |p| VertexFilter::Odd.matches(p));
        let all = sum_area_where(&polygons, |_| true);
        assert_eq!(even + odd, all);
        assert_eq!(even, 4.0);
    }

    #[test]
    fn test_mean_area() {
        let polygons = vec![
            poly(&[(0, 0), (0, 2), (2, 2), (2, 0)]),
            poly(&[(0, 0), (4, 0), (0, 3)]),
        ];
        assert_eq!(mean_area(&polygons).unwrap(), 5.0);
    }

    #[test]
    fn test_mean_area_empty_errors() {
        assert_eq!(mean_area(&[]), Err(QueryError::EmptyCollection));
    }

    #[test]
    fn test_count_where() {
        let polygons = sample();
        assert_eq!(count_where(&polygons, |p| p.vertex_count() == 3), 1);
        assert_eq!(count_where(&polygons, |_| true), 3);
    }

    #[test]
    fn test_extremum_max_area() {
        let polygons = sample();
        let max = extremum_by(&polygons, |p| p.area(), Direction::Max).unwrap();
        assert_eq!(max.area(), 8.0);
        assert_eq!(max.vertex_count(), 5);
    }

    #[test]
    fn test_extremum_min_vertexes() {
        let polygons = sample();
        let min = extremum_by(&polygons, |p| p.vertex_count(), Direction::Min).unwrap();
        assert_eq!(min.vertex_count(), 3);
    }

    #[test]
    fn test_extremum_empty_errors() {
        let err = extremum_by(&[], |p| p.area(), Direction::Max).unwrap_err();
        assert_eq!(err, QueryError::EmptyCollection);
    }

    #[test]
    fn test_extremum_tie_keeps_first() {
        // Two squares of equal area: insertion order decides
        let first = poly(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        let second = poly(&[(10, 10), (10, 12), (12, 12), (12, 10)]);
        let polygons = vec![first.clone(), second];
        let max = extremum_by(&polygons, |p| p.area(), Direction::Max).unwrap();
        assert_eq!(*max, first);
    }
}
