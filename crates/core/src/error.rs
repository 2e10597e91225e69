/// Domain-level error taxonomy.
///
/// Each variant's `Display` output is the exact message the HTTP layer
/// serializes, so classification and wording live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A resource looked up by id, slug, or username does not exist.
    /// Also covers a requested page beyond the last one (`NotFound("Page")`).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The topic filter named a topic that is not in the topic table.
    #[error("Your search did not match any results")]
    NoResults,

    /// An insert referenced an author or topic that does not exist.
    #[error("Not found")]
    MissingReference,

    /// Malformed identifier, invalid query value, or wrong-typed body field.
    #[error("Bad request")]
    BadRequest,
}
