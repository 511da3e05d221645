// src/infrastructure/repositories/postgres_blog.rs
use super::map_sqlx;
use crate::domain::blog::{
    BlogCategory, BlogContent, BlogDescription, BlogId, BlogListCursor, BlogPost,
    BlogPostReadRepository, BlogPostUpdate, BlogPostWriteRepository, BlogSlug, BlogSlugLookup,
    BlogTitle, NewBlogPost, Thumbnail, ThumbnailType,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

const RETURNING_COLUMNS: &str = "id, title, slug, description, content, category, thumbnail, thumbnail_type, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBlogPostWriteRepository {
    pool: PgPool,
}

impl PostgresBlogPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlogPostReadRepository {
    pool: PgPool,
}

impl PostgresBlogPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    content: String,
    category: String,
    thumbnail: String,
    thumbnail_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for BlogPost {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(BlogPost {
            id: BlogId::new(row.id)?,
            title: BlogTitle::new(row.title)?,
            slug: BlogSlug::new(row.slug)?,
            description: BlogDescription::new(row.description)?,
            content: BlogContent::new(row.content)?,
            category: row.category.parse::<BlogCategory>()?,
            thumbnail: Thumbnail::new(row.thumbnail)?,
            thumbnail_type: row.thumbnail_type.parse::<ThumbnailType>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BlogPostWriteRepository for PostgresBlogPostWriteRepository {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost> {
        let NewBlogPost {
            title,
            slug,
            description,
            content,
            category,
            thumbnail,
            thumbnail_type,
            created_at,
            updated_at,
        } = post;

        let sql = format!(
            "INSERT INTO blogs (title, slug, description, content, category, thumbnail, thumbnail_type, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {RETURNING_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(description.as_str())
            .bind(content.as_str())
            .bind(category.as_str())
            .bind(thumbnail.as_str())
            .bind(thumbnail_type.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        BlogPost::try_from(row)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        let BlogPostUpdate {
            id,
            title,
            slug,
            description,
            content,
            category,
            thumbnail,
            thumbnail_type,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE blogs SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }

        if let Some(thumbnail) = thumbnail {
            builder.push(", thumbnail = ");
            builder.push_bind(thumbnail.into_inner());
        }

        if let Some(thumbnail_type) = thumbnail_type {
            builder.push(", thumbnail_type = ");
            builder.push_bind(thumbnail_type.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(RETURNING_COLUMNS);

        let row = builder
            .build_query_as::<BlogRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))?;

        BlogPost::try_from(row)
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blog post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BlogSlugLookup for PostgresBlogPostReadRepository {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM blogs WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        debug!(slug, exists, "slug lookup");
        Ok(exists)
    }
}

#[async_trait]
impl BlogPostReadRepository for PostgresBlogPostReadRepository {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<BlogPost>> {
        let sql = format!("SELECT {RETURNING_COLUMNS} FROM blogs WHERE id = $1");
        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &BlogSlug) -> DomainResult<Option<BlogPost>> {
        let sql = format!("SELECT {RETURNING_COLUMNS} FROM blogs WHERE slug = $1");
        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn list_page(
        &self,
        category: Option<BlogCategory>,
        limit: u32,
        cursor: Option<BlogListCursor>,
    ) -> DomainResult<(Vec<BlogPost>, Option<BlogListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(RETURNING_COLUMNS);
        builder.push(" FROM blogs");

        let mut has_where = false;
        if let Some(category) = category {
            builder.push(" WHERE category = ");
            builder.push_bind(category.as_str());
            has_where = true;
        }

        if let Some(cursor) = &cursor {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("(created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.blog_id));
            builder.push(")");
        }

        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<BlogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut posts = rows
            .into_iter()
            .map(BlogPost::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if posts.len() > limit as usize {
            posts.pop();
            if let Some(last) = posts.last() {
                next_cursor = Some(BlogListCursor::from_parts(last.created_at, last.id));
            }
        }

        Ok((posts, next_cursor))
    }
}
