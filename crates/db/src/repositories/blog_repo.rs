//! Repository for the `blog_posts` table.

use inkami_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};

const COLUMNS: &str = "id, title, slug, excerpt, content, featured_image, category, author_id, \
                       read_time, is_published, published_at, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new post. `published_at` is set when the post goes out
    /// published; `author_id` records who wrote it.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBlogPost,
        author_id: DbId,
        published_at: Option<Timestamp>,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts
                (title, slug, excerpt, content, featured_image, category, author_id, read_time,
                 is_published, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, FALSE), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(&input.category)
            .bind(author_id)
            .bind(input.read_time)
            .bind(input.is_published)
            .bind(published_at)
            .fetch_one(pool)
            .await
    }

    /// List published posts, newest first, optionally filtered by category
    /// and capped to `limit`.
    pub async fn list_published(
        pool: &PgPool,
        category: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM blog_posts WHERE is_published = TRUE");
        if category.is_some() {
            query.push_str(" AND category = $1");
        }
        query.push_str(" ORDER BY published_at DESC");
        if limit.is_some() {
            // Placeholder index depends on whether the category filter bound.
            query.push_str(if category.is_some() {
                " LIMIT $2"
            } else {
                " LIMIT $1"
            });
        }

        let mut q = sqlx::query_as::<_, BlogPost>(&query);
        if let Some(category) = category {
            q = q.bind(category.to_string());
        }
        if let Some(limit) = limit {
            q = q.bind(limit);
        }
        q.fetch_all(pool).await
    }

    /// Find a published post by slug (public detail view).
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND is_published = TRUE");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by slug regardless of publication state (admin edit).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a post by slug. Only non-`None` fields in `input` are
    /// applied; `published_at` is always written (the handler computes the
    /// first-publish timestamp).
    pub async fn update_by_slug(
        pool: &PgPool,
        slug: &str,
        input: &UpdateBlogPost,
        published_at: Option<Timestamp>,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                excerpt = COALESCE($3, excerpt),
                content = COALESCE($4, content),
                featured_image = COALESCE($5, featured_image),
                category = COALESCE($6, category),
                read_time = COALESCE($7, read_time),
                is_published = COALESCE($8, is_published),
                published_at = $9,
                updated_at = NOW()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(&input.category)
            .bind(input.read_time)
            .bind(input.is_published)
            .bind(published_at)
            .fetch_optional(pool)
            .await
    }
}
