// src/domain/blog/services/mod.rs
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ports::util::{IdGenerator, SlugGenerator};
use crate::domain::blog::repository::BlogSlugLookup;
use crate::domain::blog::value_objects::BlogSlug;
use crate::domain::errors::DomainResult;

pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 100;

/// Domain service responsible for producing unique slugs for blog posts.
///
/// Candidates are `base`, `base-1`, `base-2`, ... where `base` is the
/// normalised title. The lookup is only a pre-check: two concurrent callers
/// can both see a candidate as free, so storage must still enforce
/// uniqueness.
pub struct BlogSlugService {
    lookup: Arc<dyn BlogSlugLookup>,
    generator: Arc<dyn SlugGenerator>,
    ids: Arc<dyn IdGenerator>,
    max_attempts: u32,
}

impl BlogSlugService {
    pub fn new(
        lookup: Arc<dyn BlogSlugLookup>,
        generator: Arc<dyn SlugGenerator>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            lookup,
            generator,
            ids,
            max_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
        }
    }

    /// Caps how many candidates are looked up before falling back to a random id.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns `slug` unchanged when the caller supplied one, otherwise derives
    /// a free slug from `title`, or a random id when the title has nothing
    /// usable in it. Only `None` and `""` count as absent; a whitespace-only
    /// slug is rejected as "Slug is required".
    pub async fn assign_slug_if_absent(
        &self,
        title: Option<&str>,
        slug: Option<&str>,
    ) -> DomainResult<BlogSlug> {
        if let Some(existing) = slug.filter(|s| !s.is_empty()) {
            return BlogSlug::new(existing);
        }

        let title = title.unwrap_or_default();
        if title.is_empty() {
            return self.random_slug();
        }

        let base = self.generator.slugify(title);
        if base.is_empty() {
            debug!(title, "title has no slug characters, using random id");
            return self.random_slug();
        }

        self.first_free_candidate(&base).await
    }

    async fn first_free_candidate(&self, base: &str) -> DomainResult<BlogSlug> {
        let mut candidate = base.to_string();

        for counter in 1..=self.max_attempts {
            if !self.lookup.slug_exists(&candidate).await? {
                debug!(slug = %candidate, attempt = counter, "assigned slug");
                return BlogSlug::new(candidate);
            }
            candidate = format!("{base}-{counter}");
        }

        warn!(
            base,
            attempts = self.max_attempts,
            "slug candidates exhausted, using random id"
        );
        self.random_slug()
    }

    fn random_slug(&self) -> DomainResult<BlogSlug> {
        BlogSlug::new(self.ids.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::infrastructure::util::{AsciiSlugGenerator, UuidGenerator};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct SetLookup {
        taken: HashSet<String>,
        lookups: AtomicUsize,
    }

    impl SetLookup {
        fn with(slugs: &[&str]) -> Self {
            Self {
                taken: slugs.iter().map(|s| (*s).to_string()).collect(),
                lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BlogSlugLookup for SetLookup {
        async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.taken.contains(slug))
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl BlogSlugLookup for FailingLookup {
        async fn slug_exists(&self, _slug: &str) -> DomainResult<bool> {
            Err(DomainError::Persistence("connection refused".into()))
        }
    }

    struct SequenceIds(Mutex<u32>);

    impl IdGenerator for SequenceIds {
        fn generate(&self) -> String {
            let mut next = self.0.lock().unwrap();
            *next += 1;
            format!("generated-{next}")
        }
    }

    fn service(lookup: Arc<dyn BlogSlugLookup>) -> BlogSlugService {
        BlogSlugService::new(
            lookup,
            Arc::new(AsciiSlugGenerator),
            Arc::new(SequenceIds(Mutex::new(0))),
        )
    }

    #[tokio::test]
    async fn unused_title_becomes_base_slug() {
        let svc = service(Arc::new(SetLookup::default()));
        let slug = svc
            .assign_slug_if_absent(Some("Scaling a Startup in 2024!"), None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "scaling-a-startup-in-2024");
    }

    #[tokio::test]
    async fn first_collision_gets_suffix_one() {
        let svc = service(Arc::new(SetLookup::with(&["scaling-a-startup-in-2024"])));
        let slug = svc
            .assign_slug_if_absent(Some("Scaling a Startup in 2024!"), None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "scaling-a-startup-in-2024-1");
    }

    #[tokio::test]
    async fn counter_resolves_to_smallest_free_suffix() {
        let lookup = Arc::new(SetLookup::with(&["hello", "hello-1", "hello-2"]));
        let svc = service(lookup.clone());
        let slug = svc.assign_slug_if_absent(Some("Hello"), None).await.unwrap();
        assert_eq!(slug.as_str(), "hello-3");
        assert_eq!(lookup.lookups.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn symbol_only_title_falls_back_to_random_id() {
        let lookup = Arc::new(SetLookup::default());
        let svc = service(lookup.clone());
        let slug = svc.assign_slug_if_absent(Some("!!!"), None).await.unwrap();
        assert_eq!(slug.as_str(), "generated-1");
        assert_eq!(lookup.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_title_and_slug_use_random_id() {
        let svc = service(Arc::new(SetLookup::default()));
        assert_eq!(
            svc.assign_slug_if_absent(None, None).await.unwrap().as_str(),
            "generated-1"
        );
        assert_eq!(
            svc.assign_slug_if_absent(Some(""), Some("")).await.unwrap().as_str(),
            "generated-2"
        );
    }

    #[tokio::test]
    async fn supplied_slug_passes_through_without_lookup() {
        let lookup = Arc::new(SetLookup::with(&["taken"]));
        let svc = service(lookup.clone());
        let slug = svc
            .assign_slug_if_absent(Some("Anything"), Some("taken"))
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "taken");
        assert_eq!(lookup.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn whitespace_slug_is_rejected_not_replaced() {
        let lookup = Arc::new(SetLookup::default());
        let svc = service(lookup.clone());
        let err = svc
            .assign_slug_if_absent(Some("Hello"), Some("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "Slug is required"));
        assert_eq!(lookup.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn lookup_failure_propagates() {
        let svc = service(Arc::new(FailingLookup));
        let err = svc
            .assign_slug_if_absent(Some("Hello"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(msg) if msg == "connection refused"));
    }

    #[tokio::test]
    async fn exhausted_attempts_fall_back_to_random_id() {
        let lookup = Arc::new(SetLookup::with(&["hello", "hello-1", "hello-2"]));
        let svc = service(lookup.clone()).with_max_attempts(3);
        let slug = svc.assign_slug_if_absent(Some("Hello"), None).await.unwrap();
        assert_eq!(slug.as_str(), "generated-1");
        assert_eq!(lookup.lookups.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn uuid_fallback_is_36_characters() {
        let svc = BlogSlugService::new(
            Arc::new(SetLookup::default()),
            Arc::new(AsciiSlugGenerator),
            Arc::new(UuidGenerator),
        );
        let slug = svc.assign_slug_if_absent(Some("!!!"), None).await.unwrap();
        assert_eq!(slug.as_str().len(), 36);
    }

    #[test]
    fn max_attempts_is_at_least_one() {
        let svc = service(Arc::new(SetLookup::default())).with_max_attempts(0);
        assert_eq!(svc.max_attempts(), 1);
    }
}
