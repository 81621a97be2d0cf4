//! Reader for the polygon text format: `<count> (x1;y1) (x2;y2) ... (xN;yN)`.
//!
//! Tokens are whitespace-separated; the leading count must be >= 3 and
//! match the number of point tokens exactly, with nothing left over.
//! Malformed lines in a polygon file are discarded, not fatal.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::Polygon;
use crate::geometry::Point;

/// Parse a single `(x;y)` token.
pub fn parse_point(token: &str) -> Option<Point> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(';')?;
    Some(Point::new(x.parse().ok()?, y.parse().ok()?))
}

/// Parse one polygon line. Returns `None` when the count is missing,
/// below 3, mismatched against the point tally, or any point is malformed.
pub fn parse_polygon(line: &str) -> Option<Polygon> {
    let mut tokens = line.split_whitespace();
    let count: usize = tokens.next()?.parse().ok()?;
    if count < 3 {
        return None;
    }

    let mut vertices = Vec::with_capacity(count);
    for _ in 0..count {
        vertices.push(parse_point(tokens.next()?)?);
    }
    if tokens.next().is_some() {
        return None;
    }
    Polygon::new(vertices)
}

/// Load polygons from a file, one per line.
///
/// Malformed lines are skipped; the skip count is returned so the caller
/// can report it in verbose mode. Blank lines are not counted as skips.
pub fn load_polygons(path: &Path) -> Result<(Vec<Polygon>, usize)> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read polygons file: {}", path.display()))?;

    let mut polygons = Vec::new();
    let mut skipped = 0;
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_polygon(line) {
            Some(polygon) => polygons.push(polygon),
            None => skipped += 1,
        }
    }
    Ok((polygons, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("(3;-4)"), Some(Point::new(3, -4)));
        assert_eq!(parse_point("(0;0)"), Some(Point::new(0, 0)));
        assert_eq!(parse_point("3;4"), None);
        assert_eq!(parse_point("(3,4)"), None);
        assert_eq!(parse_point("(3;4"), None);
        assert_eq!(parse_point("(a;4)"), None);
    }

    #[test]
    fn test_parse_polygon() {
        let polygon = parse_polygon("3 (0;0) (4;0) (0;3)").unwrap();
        assert_eq!(polygon.vertex_count(), 3);
        assert_eq!(polygon.area(), 6.0);
    }

    #[test]
    fn test_parse_polygon_rejects_bad_lines() {
        // Count below 3
        assert!(parse_polygon("2 (0;0) (4;0)").is_none());
        // Tally mismatch, both directions
        assert!(parse_polygon("4 (0;0) (4;0) (0;3)").is_none());
        assert!(parse_polygon("3 (0;0) (4;0) (0;3) (1;1)").is_none());
        // Trailing garbage
        assert!(parse_polygon("3 (0;0) (4;0) (0;3) extra").is_none());
        // Missing count
        assert!(parse_polygon("(0;0) (4;0) (0;3)").is_none());
        assert!(parse_polygon("").is_none());
    }

    #[test]
    fn test_load_polygons_skips_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "3 (0;0) (4;0) (0;3)").unwrap();
        writeln!(file, "2 (0;0) (1;1)").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "4 (0;0) (2;0) (2;2) (0;2)").unwrap();
        writeln!(file, "not a polygon").unwrap();

        let (polygons, skipped) = load_polygons(&path).unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_load_polygons_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_polygons(&dir.path().join("nope.txt")).is_err());
    }
}
