use chrono::{DateTime, Utc};

use crate::helper::{format_article_date, format_number, truncate_excerpt};
use crate::reactions::Reactions;

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default)]
pub struct ArticleId(pub u32);

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("article-{}", self.0))
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, PartialOrd, Ord)]
pub struct CommentId(pub u64);

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, PartialOrd, Ord)]
pub struct ReplyId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub date: DateTime<Utc>,
    pub reactions: Reactions,
}

impl Article {
    pub fn date_human(&self) -> String {
        format_article_date(&self.date)
    }

    /// Whether the excerpt is long enough to be collapsed
    pub fn is_collapsible(&self, threshold: usize) -> bool {
        self.excerpt.chars().count() > threshold
    }

    pub fn visible_excerpt(&self, threshold: usize, expanded: bool) -> String {
        if expanded {
            self.excerpt.clone()
        } else {
            truncate_excerpt(&self.excerpt, threshold).into_owned()
        }
    }
}

/// The (only) person looking at the page. Comments and replies are
/// attributed to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewer {
    pub name: String,
    pub avatar: String,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            name: "Current User".to_string(),
            avatar: "https://i.pravatar.cc/150?u=current-user".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub id: ReplyId,
    pub text: String,
    pub created: DateTime<Utc>,
    pub author: String,
    pub avatar: String,
    pub reactions: Reactions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub created: DateTime<Utc>,
    pub author: String,
    pub avatar: String,
    pub reactions: Reactions,
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn reply(&self, id: ReplyId) -> Option<&Reply> {
        self.replies.iter().find(|reply| reply.id == id)
    }

    pub fn reply_mut(&mut self, id: ReplyId) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|reply| reply.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorStat {
    pub key: String,
    pub value: String,
}

impl AuthorStat {
    pub fn count(key: &str, value: u32) -> Self {
        Self {
            key: key.to_string(),
            value: format_number(value as i64),
        }
    }

    /// `followers` becomes `Followers`
    pub fn label(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorViewModel {
    pub name: String,
    pub image: String,
    pub bio: String,
    pub stats: Vec<AuthorStat>,
}

impl Default for AuthorViewModel {
    fn default() -> Self {
        Self {
            name: "Jonayed Rifat".to_string(),
            image: "https://i.pravatar.cc/300?u=jonayed-rifat".to_string(),
            bio: "Technology writer and software developer with a passion for making complex topics accessible to everyone. Author of several books on web development and regular speaker at tech conferences worldwide.".to_string(),
            stats: vec![
                AuthorStat::count("articles", 42),
                AuthorStat::count("followers", 1200),
                AuthorStat::count("following", 56),
            ],
        }
    }
}
