// src/domain/article/status.rs
use crate::domain::errors::DomainError;
use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Never assigned by a user-facing flow; moderators can still publish from it.
    Draft,
    Pending,
    Published,
    Rejected,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Draft,
        ArticleStatus::Pending,
        ArticleStatus::Published,
        ArticleStatus::Rejected,
    ];

    /// State given to an article when its author submits it.
    pub const fn on_submission() -> Self {
        ArticleStatus::Pending
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Pending => "pending",
            ArticleStatus::Published => "published",
            ArticleStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Pending => "Pending Review",
            ArticleStatus::Published => "Published",
            ArticleStatus::Rejected => "Rejected",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, ArticleStatus::Published)
    }

    /// Authors lose edit access as soon as an article goes live.
    pub fn allows_author_edit(&self) -> bool {
        !self.is_public()
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown article status '{s}'")))
    }
}

/// Bulk actions available to moderators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Publish,
    Reject,
}

impl ModerationAction {
    pub fn target(&self) -> ArticleStatus {
        match self {
            ModerationAction::Publish => ArticleStatus::Published,
            ModerationAction::Reject => ArticleStatus::Rejected,
        }
    }

    /// Whether the action stamps `published_at`.
    pub fn stamps_publication(&self) -> bool {
        matches!(self, ModerationAction::Publish)
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ModerationAction::Publish => "published",
            ModerationAction::Reject => "rejected",
        }
    }
}
