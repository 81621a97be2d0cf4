use thiserror::Error;

/// Errors a single command can produce. All three are command-scoped and
/// recoverable: a failed command prints its token and leaves the
/// collection untouched, and the REPL moves on to the next line.
///
/// The `Display` forms are the exact diagnostic tokens written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Unknown keyword or sub-keyword, or a vertex-count argument that is
    /// not an integer >= 3.
    #[error("<INVALID COMMAND>")]
    InvalidCommand,

    /// An aggregate or extremal query over zero polygons.
    #[error("<EMPTY COLLECTION>")]
    EmptyCollection,

    /// A trailing polygon literal that fails the grammar or has fewer than
    /// 3 vertices.
    #[error("<MALFORMED POLYGON>")]
    MalformedPolygonLiteral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_tokens() {
        assert_eq!(QueryError::InvalidCommand.to_string(), "<INVALID COMMAND>");
        assert_eq!(QueryError::EmptyCollection.to_string(), "<EMPTY COLLECTION>");
        assert_eq!(
            QueryError::MalformedPolygonLiteral.to_string(),
            "<MALFORMED POLYGON>"
        );
    }
}
