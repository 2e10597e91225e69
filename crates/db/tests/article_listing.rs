//! Integration tests for the article listing query: filtering, sorting,
//! pagination, and the independent total count.

use newswire_core::query::{ArticleQuery, SortColumn, SortOrder, DEFAULT_LIMIT};
use newswire_db::repositories::ArticleRepo;
use sqlx::PgPool;

/// A listing spec with defaults, overridable per test.
fn base_query() -> ArticleQuery {
    ArticleQuery {
        topic: None,
        sort_by: SortColumn::CreatedAt,
        order: SortOrder::Desc,
        limit: DEFAULT_LIMIT,
        page: None,
    }
}

// ---------------------------------------------------------------------------
// Defaults and total count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn default_listing_returns_first_ten_newest_first(pool: PgPool) {
    let (articles, total_count) = ArticleRepo::list(&pool, &base_query()).await.unwrap();

    assert_eq!(articles.len(), 10);
    assert_eq!(total_count, 13);

    // Article 3 has the newest created_at in the seed.
    assert_eq!(articles[0].article_id, 3);

    for pair in articles.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "articles must be ordered newest first"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn limit_above_row_count_returns_everything(pool: PgPool) {
    let query = ArticleQuery {
        limit: 20,
        ..base_query()
    };
    let (articles, total_count) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert_eq!(articles.len(), 13);
    assert_eq!(total_count, 13);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn limit_zero_is_an_empty_window_with_full_count(pool: PgPool) {
    let query = ArticleQuery {
        limit: 0,
        ..base_query()
    };
    let (articles, total_count) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert!(articles.is_empty());
    assert_eq!(total_count, 13);
}

// ---------------------------------------------------------------------------
// Pagination windows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn page_three_of_five_holds_the_last_three_rows(pool: PgPool) {
    let all = ArticleQuery {
        limit: 13,
        ..base_query()
    };
    let (everything, _) = ArticleRepo::list(&pool, &all).await.unwrap();

    let query = ArticleQuery {
        limit: 5,
        page: Some(3),
        ..base_query()
    };
    let (page, total_count) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert_eq!(page.len(), 3);
    assert_eq!(total_count, 13);

    let expected: Vec<i64> = everything[10..].iter().map(|a| a.article_id).collect();
    let got: Vec<i64> = page.iter().map(|a| a.article_id).collect();
    assert_eq!(got, expected);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn page_beyond_range_yields_no_rows(pool: PgPool) {
    let query = ArticleQuery {
        limit: 5,
        page: Some(4),
        ..base_query()
    };
    let (page, total_count) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(total_count, 13, "count is independent of the page window");
}

// ---------------------------------------------------------------------------
// Topic filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn topic_filter_restricts_rows_and_count(pool: PgPool) {
    let query = ArticleQuery {
        topic: Some("mitch".into()),
        limit: 20,
        ..base_query()
    };
    let (articles, total_count) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert_eq!(articles.len(), 12);
    assert_eq!(total_count, 12);
    assert!(articles.iter().all(|a| a.topic == "mitch"));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn topic_with_no_articles_is_empty_not_an_error(pool: PgPool) {
    let query = ArticleQuery {
        topic: Some("paper".into()),
        ..base_query()
    };
    let (articles, total_count) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert!(articles.is_empty());
    assert_eq!(total_count, 0);
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn sort_by_votes_descending_puts_the_voted_article_first(pool: PgPool) {
    let query = ArticleQuery {
        sort_by: SortColumn::Votes,
        limit: 13,
        ..base_query()
    };
    let (articles, _) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert_eq!(articles[0].article_id, 1, "article 1 holds 100 votes");
    for pair in articles.windows(2) {
        assert!(pair[0].votes >= pair[1].votes);
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn sort_by_title_ascending_is_alphabetical(pool: PgPool) {
    let query = ArticleQuery {
        sort_by: SortColumn::Title,
        order: SortOrder::Asc,
        limit: 13,
        ..base_query()
    };
    let (articles, _) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert_eq!(articles[0].title, "A");
    assert_eq!(articles[12].title, "Z");
    for pair in articles.windows(2) {
        assert!(pair[0].title <= pair[1].title);
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn sort_by_comment_count_uses_the_aggregate(pool: PgPool) {
    let query = ArticleQuery {
        sort_by: SortColumn::CommentCount,
        limit: 13,
        ..base_query()
    };
    let (articles, _) = ArticleRepo::list(&pool, &query).await.unwrap();

    assert_eq!(articles[0].article_id, 1);
    assert_eq!(articles[0].comment_count, 11);
    for pair in articles.windows(2) {
        assert!(pair[0].comment_count >= pair[1].comment_count);
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn every_whitelisted_column_sorts_without_error(pool: PgPool) {
    let columns = [
        SortColumn::ArticleId,
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::ArticleImgUrl,
        SortColumn::CommentCount,
    ];
    for sort_by in columns {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let query = ArticleQuery {
                sort_by,
                order,
                ..base_query()
            };
            let (articles, total_count) = ArticleRepo::list(&pool, &query).await.unwrap();
            assert_eq!(articles.len(), 10, "sort_by={sort_by:?} order={order:?}");
            assert_eq!(total_count, 13);
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregates in listing rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("seed"))]
async fn comment_counts_are_computed_per_article(pool: PgPool) {
    let query = ArticleQuery {
        limit: 13,
        ..base_query()
    };
    let (articles, _) = ArticleRepo::list(&pool, &query).await.unwrap();

    let by_id = |id: i64| articles.iter().find(|a| a.article_id == id).unwrap();
    assert_eq!(by_id(1).comment_count, 11);
    assert_eq!(by_id(9).comment_count, 2);
    assert_eq!(by_id(2).comment_count, 0);
}
