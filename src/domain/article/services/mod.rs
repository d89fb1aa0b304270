// src/domain/article/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;

/// Anything that can answer whether a slug is already in use.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    async fn slug_taken(&self, candidate: &str) -> DomainResult<bool>;
}

/// Domain service producing unique slugs: `base`, then `base-1`, `base-2`, ...
pub struct SlugAssigner {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAssigner {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn base_for(&self, source: &str, fallback: &str) -> String {
        let base = self.generator.slugify(source);
        if base.is_empty() {
            fallback.to_string()
        } else {
            base
        }
    }

    pub async fn assign<I>(&self, source: &str, fallback: &str, index: &I) -> DomainResult<String>
    where
        I: SlugIndex + ?Sized,
    {
        let base = self.base_for(source, fallback);
        let mut candidate = base.clone();
        let mut counter = 1u64;

        while index.slug_taken(&candidate).await? {
            candidate = format!("{base}-{counter}");
            counter += 1;
        }

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Lowercase;

    impl SlugGenerator for Lowercase {
        fn slugify(&self, input: &str) -> String {
            input
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|part| !part.is_empty())
                .map(|part| part.to_ascii_lowercase())
                .collect::<Vec<_>>()
                .join("-")
        }
    }

    struct Taken(HashSet<String>);

    #[async_trait]
    impl SlugIndex for Taken {
        async fn slug_taken(&self, candidate: &str) -> DomainResult<bool> {
            Ok(self.0.contains(candidate))
        }
    }

    fn assigner() -> SlugAssigner {
        SlugAssigner::new(Arc::new(Lowercase))
    }

    #[tokio::test]
    async fn free_base_is_used_as_is() {
        let index = Taken(HashSet::new());
        let slug = assigner().assign("Past Lives", "article", &index).await.unwrap();
        assert_eq!(slug, "past-lives");
    }

    #[tokio::test]
    async fn collisions_get_increasing_suffixes() {
        let index = Taken(HashSet::from([
            "past-lives".to_string(),
            "past-lives-1".to_string(),
        ]));
        let slug = assigner().assign("Past Lives", "article", &index).await.unwrap();
        assert_eq!(slug, "past-lives-2");
    }

    #[tokio::test]
    async fn empty_base_uses_fallback() {
        let index = Taken(HashSet::from(["article".to_string()]));
        let slug = assigner().assign("!!!", "article", &index).await.unwrap();
        assert_eq!(slug, "article-1");
    }
}
