// src/application/commands/articles/moderate.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ModerationAction},
};

pub struct ModerateArticlesCommand {
    pub ids: Vec<i64>,
    pub action: ModerationAction,
}

pub struct SetFeaturedCommand {
    pub ids: Vec<i64>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationOutcome {
    pub action: ModerationAction,
    pub affected: u64,
}

impl ModerationOutcome {
    pub fn message(&self) -> String {
        format!("{} article(s) {}.", self.affected, self.action.past_tense())
    }
}

fn parse_ids(ids: &[i64]) -> ApplicationResult<Vec<ArticleId>> {
    if ids.is_empty() {
        return Err(ApplicationError::validation(
            "Items must be selected in order to perform actions on them.",
        ));
    }
    let mut parsed = ids
        .iter()
        .map(|id| ArticleId::new(*id))
        .collect::<Result<Vec<_>, _>>()?;
    parsed.sort_by_key(|id| id.0);
    parsed.dedup();
    Ok(parsed)
}

impl ArticleCommandService {
    /// Applies a moderation action to every selected article in one statement.
    /// Publishing stamps `published_at` whatever the previous state was.
    pub async fn moderate_articles(
        &self,
        actor: &AuthenticatedUser,
        command: ModerateArticlesCommand,
    ) -> ApplicationResult<ModerationOutcome> {
        ensure_capability(actor, "articles", "moderate")?;
        let ids = parse_ids(&command.ids)?;

        let now = self.clock.now();
        let published_at = command.action.stamps_publication().then_some(now);
        let affected = self
            .write_repo
            .set_status(&ids, command.action.target(), published_at, now)
            .await?;

        tracing::info!(
            moderator = %actor.username,
            action = command.action.past_tense(),
            affected,
            "moderation applied"
        );
        Ok(ModerationOutcome {
            action: command.action,
            affected,
        })
    }

    pub async fn set_featured(
        &self,
        actor: &AuthenticatedUser,
        command: SetFeaturedCommand,
    ) -> ApplicationResult<u64> {
        ensure_capability(actor, "articles", "moderate")?;
        let ids = parse_ids(&command.ids)?;
        let affected = self
            .write_repo
            .set_featured(&ids, command.featured, self.clock.now())
            .await?;
        tracing::info!(
            moderator = %actor.username,
            featured = command.featured,
            affected,
            "featured flag updated"
        );
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_required_and_deduplicated() {
        assert!(parse_ids(&[]).is_err());
        assert!(parse_ids(&[0]).is_err());
        let ids = parse_ids(&[3, 1, 3]).unwrap();
        assert_eq!(ids, vec![ArticleId(1), ArticleId(3)]);
    }

    #[test]
    fn outcome_message() {
        let outcome = ModerationOutcome {
            action: ModerationAction::Publish,
            affected: 2,
        };
        assert_eq!(outcome.message(), "2 article(s) published.");
    }
}
