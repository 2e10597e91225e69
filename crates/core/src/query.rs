//! Listing-query validation and the structured query specs built from it.
//!
//! Query-string parameters arrive as raw optional strings and are parsed
//! here rather than by the framework, because the endpoints own the
//! 400-vs-404 classification: an unknown `topic` must 404 even when
//! `sort_by` or `limit` are also malformed, and a non-numeric `limit` must
//! produce this API's own "Bad request" body.
//!
//! Column names and sort directions cannot be bound as SQL parameters, so
//! they only ever reach the repository layer through the whitelist enums'
//! `as_sql()` output. Filter values and LIMIT/OFFSET are always bound.

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Rows per page when the client does not send `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Placeholder image applied when an article is created without one.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

// ---------------------------------------------------------------------------
// Sort whitelists
// ---------------------------------------------------------------------------

/// Columns the article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    ArticleImgUrl,
    CommentCount,
}

impl SortColumn {
    /// Parse a raw `sort_by` value against the whitelist.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "article_id" => Ok(Self::ArticleId),
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "article_img_url" => Ok(Self::ArticleImgUrl),
            "comment_count" => Ok(Self::CommentCount),
            _ => Err(CoreError::BadRequest),
        }
    }

    /// Column expression for an ORDER BY. `comment_count` is the aggregate
    /// alias from the listing query; everything else is table-qualified.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::ArticleId => "articles.article_id",
            Self::Title => "articles.title",
            Self::Topic => "articles.topic",
            Self::Author => "articles.author",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::ArticleImgUrl => "articles.article_img_url",
            Self::CommentCount => "comment_count",
        }
    }
}

/// Sort direction, descending unless the client asks otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::BadRequest),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Raw query-string parameters
// ---------------------------------------------------------------------------

/// Raw `GET /api/articles` parameters, every field an unparsed string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleListParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

/// Raw `GET /api/articles/{article_id}/comments` parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentListParams {
    pub limit: Option<String>,
    pub p: Option<String>,
}

// ---------------------------------------------------------------------------
// Validated query specs
// ---------------------------------------------------------------------------

/// A validated article-listing plan: filter, sort spec, and page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub topic: Option<String>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub limit: i64,
    pub page: Option<i64>,
}

impl ArticleQuery {
    /// Validate raw parameters against the whitelists and the current
    /// topic-slug set.
    ///
    /// Topic existence is checked before any structural validation: an
    /// unknown topic returns `NoResults` (404) even when other parameters
    /// would fail with `BadRequest`. Clients distinguish "no such topic"
    /// from "malformed query" by this ordering.
    pub fn build(params: &ArticleListParams, known_topics: &[String]) -> Result<Self, CoreError> {
        let topic = match params.topic.as_deref() {
            Some(t) => {
                if !known_topics.iter().any(|known| known == t) {
                    return Err(CoreError::NoResults);
                }
                Some(t.to_owned())
            }
            None => None,
        };

        let sort_by = match params.sort_by.as_deref() {
            Some(raw) => SortColumn::parse(raw)?,
            None => SortColumn::default(),
        };

        let order = match params.order.as_deref() {
            Some(raw) => SortOrder::parse(raw)?,
            None => SortOrder::default(),
        };

        let limit = parse_limit(params.limit.as_deref())?;
        let page = parse_page(params.p.as_deref())?;

        Ok(Self {
            topic,
            sort_by,
            order,
            limit,
            page,
        })
    }

    /// SQL OFFSET: `(p - 1) * limit` when a page was requested, else 0.
    pub fn offset(&self) -> i64 {
        match self.page {
            Some(p) => (p - 1) * self.limit,
            None => 0,
        }
    }

    /// Whether the client explicitly asked for a page. The page-not-found
    /// check only applies when this is true.
    pub fn is_paged(&self) -> bool {
        self.page.is_some()
    }
}

/// A validated comment-listing plan: page window only, no filter or sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentQuery {
    pub limit: i64,
    pub page: Option<i64>,
}

impl CommentQuery {
    pub fn build(params: &CommentListParams) -> Result<Self, CoreError> {
        let limit = parse_limit(params.limit.as_deref())?;
        let page = parse_page(params.p.as_deref())?;
        Ok(Self { limit, page })
    }

    pub fn offset(&self) -> i64 {
        match self.page {
            Some(p) => (p - 1) * self.limit,
            None => 0,
        }
    }

    pub fn is_paged(&self) -> bool {
        self.page.is_some()
    }
}

// ---------------------------------------------------------------------------
// Parameter parsing
// ---------------------------------------------------------------------------

/// `limit` must be an integer >= 0. An explicit 0 is a valid empty window.
fn parse_limit(raw: Option<&str>) -> Result<i64, CoreError> {
    match raw {
        None => Ok(DEFAULT_LIMIT),
        Some(raw) => match raw.parse::<i64>() {
            Ok(limit) if limit >= 0 => Ok(limit),
            _ => Err(CoreError::BadRequest),
        },
    }
}

/// `p` is a 1-indexed page number; 0, negatives, and non-numbers are
/// malformed. Absent means "no paging offset".
fn parse_page(raw: Option<&str>) -> Result<Option<i64>, CoreError> {
    match raw {
        None => Ok(None),
        Some(raw) => match raw.parse::<i64>() {
            Ok(page) if page >= 1 => Ok(Some(page)),
            _ => Err(CoreError::BadRequest),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
