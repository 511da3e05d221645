// tests/support/mocks/blog_repo.rs
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use blog_core::domain::blog::{
    BlogCategory, BlogId, BlogListCursor, BlogPost, BlogPostReadRepository, BlogPostUpdate,
    BlogPostWriteRepository, BlogSlug, BlogSlugLookup, NewBlogPost,
};
use blog_core::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct State {
    posts: BTreeMap<i64, BlogPost>,
    next_id: i64,
    /// Slugs another writer commits between our lookup and our insert.
    racing_slugs: HashSet<String>,
    /// Slugs committed by that other writer; visible to lookups afterwards.
    foreign_slugs: HashSet<String>,
    fail_lookups: bool,
    lookups: usize,
    inserts: usize,
}

impl State {
    fn slug_taken(&self, slug: &str, except: Option<i64>) -> bool {
        self.foreign_slugs.contains(slug)
            || self
                .posts
                .values()
                .any(|p| p.slug.as_str() == slug && Some(i64::from(p.id)) != except)
    }
}

/// Mutex-guarded stand-in for the Postgres repositories. It enforces slug
/// uniqueness on insert/update the way the database constraint does.
#[derive(Default)]
pub struct InMemoryBlogRepo {
    inner: Mutex<State>,
}

impl InMemoryBlogRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every slug lookup fail as if storage were unreachable.
    pub fn fail_lookups(&self) {
        self.inner.lock().unwrap().fail_lookups = true;
    }

    /// Simulates a concurrent create that commits `slug` right after our
    /// lookup said it was free.
    pub fn race_on(&self, slug: &str) {
        self.inner.lock().unwrap().racing_slugs.insert(slug.to_string());
    }

    pub fn lookups(&self) -> usize {
        self.inner.lock().unwrap().lookups
    }

    pub fn inserts(&self) -> usize {
        self.inner.lock().unwrap().inserts
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().posts.len()
    }
}

#[async_trait]
impl BlogSlugLookup for InMemoryBlogRepo {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        let mut state = self.inner.lock().unwrap();
        state.lookups += 1;
        if state.fail_lookups {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(state.slug_taken(slug, None))
    }
}

#[async_trait]
impl BlogPostWriteRepository for InMemoryBlogRepo {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost> {
        let mut state = self.inner.lock().unwrap();
        state.inserts += 1;

        let slug = post.slug.as_str().to_string();
        if state.racing_slugs.remove(&slug) {
            state.foreign_slugs.insert(slug);
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if state.slug_taken(&slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        state.next_id += 1;
        let created = BlogPost {
            id: BlogId::new(state.next_id)?,
            title: post.title,
            slug: post.slug,
            description: post.description,
            content: post.content,
            category: post.category,
            thumbnail: post.thumbnail,
            thumbnail_type: post.thumbnail_type,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.insert(i64::from(created.id), created.clone());
        Ok(created)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        let mut state = self.inner.lock().unwrap();
        let id = i64::from(update.id);

        if let Some(slug) = &update.slug {
            if state.slug_taken(slug.as_str(), Some(id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let post = state
            .posts
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))?;
        update.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .posts
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))
    }
}

#[async_trait]
impl BlogPostReadRepository for InMemoryBlogRepo {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<BlogPost>> {
        let state = self.inner.lock().unwrap();
        Ok(state.posts.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &BlogSlug) -> DomainResult<Option<BlogPost>> {
        let state = self.inner.lock().unwrap();
        Ok(state.posts.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        category: Option<BlogCategory>,
        limit: u32,
        cursor: Option<BlogListCursor>,
    ) -> DomainResult<(Vec<BlogPost>, Option<BlogListCursor>)> {
        let state = self.inner.lock().unwrap();
        let mut posts: Vec<BlogPost> = state
            .posts
            .values()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| {
                cursor.as_ref().is_none_or(|c| {
                    (p.created_at, i64::from(p.id)) < (c.created_at, i64::from(c.blog_id))
                })
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });

        let limit = limit as usize;
        let mut next_cursor = None;
        if posts.len() > limit {
            posts.truncate(limit);
            if let Some(last) = posts.last() {
                next_cursor = Some(BlogListCursor::from_parts(last.created_at, last.id));
            }
        }
        Ok((posts, next_cursor))
    }
}
