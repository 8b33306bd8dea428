use chrono::{DateTime, Utc};

use crate::reactions::{ActiveReactions, ReactionKind, Reactions};
use crate::view_model::{Comment, CommentId, Reply, ReplyId, Viewer};

/// Comments below one article, their replies, and what the viewer
/// reacted with on each of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentThread {
    comments: Vec<Comment>,
    comment_reactions: ActiveReactions<CommentId>,
    reply_reactions: ActiveReactions<ReplyId>,
    last_id: u64,
}

impl CommentThread {
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub fn comment_reaction(&self, id: CommentId) -> Option<ReactionKind> {
        self.comment_reactions.active(&id)
    }

    pub fn reply_reaction(&self, id: ReplyId) -> Option<ReactionKind> {
        self.reply_reactions.active(&id)
    }

    /// Append a comment by `viewer`. Blank text is ignored.
    pub fn add_comment(
        &mut self,
        text: &str,
        viewer: &Viewer,
        now: DateTime<Utc>,
    ) -> Option<CommentId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = CommentId(self.next_id(&now));
        self.comments.push(Comment {
            id,
            text: text.to_string(),
            created: now,
            author: viewer.name.clone(),
            avatar: viewer.avatar.clone(),
            reactions: Reactions::default(),
            replies: Vec::new(),
        });
        Some(id)
    }

    /// Append a reply to `parent`. Blank text or an unknown parent is ignored.
    pub fn add_reply(
        &mut self,
        parent: CommentId,
        text: &str,
        viewer: &Viewer,
        now: DateTime<Utc>,
    ) -> Option<ReplyId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let position = self.comments.iter().position(|c| c.id == parent)?;
        let id = ReplyId(self.next_id(&now));
        let comment = self.comments.get_mut(position)?;
        comment.replies.push(Reply {
            id,
            text: text.to_string(),
            created: now,
            author: viewer.name.clone(),
            avatar: viewer.avatar.clone(),
            reactions: Reactions::default(),
        });
        Some(id)
    }

    /// Returns `false` if there is no such comment
    pub fn react_to_comment(&mut self, id: CommentId, kind: ReactionKind) -> bool {
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        self.comment_reactions.toggle(id, kind, &mut comment.reactions);
        true
    }

    /// Returns `false` if the comment or the reply within it doesn't exist
    pub fn react_to_reply(&mut self, comment: CommentId, id: ReplyId, kind: ReactionKind) -> bool {
        let Some(reply) = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment)
            .and_then(|c| c.reply_mut(id))
        else {
            return false;
        };
        self.reply_reactions.toggle(id, kind, &mut reply.reactions);
        true
    }

    // millisecond timestamps, bumped when two entries land in the same millisecond
    fn next_id(&mut self, now: &DateTime<Utc>) -> u64 {
        let millis = now.timestamp_millis().max(0) as u64;
        self.last_id = millis.max(self.last_id + 1);
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use strum::IntoEnumIterator;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn blank_comments_are_ignored() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        assert_eq!(thread.add_comment("", &viewer, now()), None);
        assert_eq!(thread.add_comment("   ", &viewer, now()), None);
        assert!(thread.is_empty());
    }

    #[test]
    fn comment_starts_without_replies_or_reactions() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        let id = thread.add_comment("hello", &viewer, now()).unwrap();
        assert_eq!(thread.len(), 1);
        let comment = thread.comment(id).unwrap();
        assert_eq!(comment.text, "hello");
        assert_eq!(comment.author, viewer.name);
        assert_eq!(comment.created, now());
        assert!(comment.replies.is_empty());
        for kind in ReactionKind::iter() {
            assert_eq!(comment.reactions.count(kind), 0);
        }
    }

    #[test]
    fn comments_keep_submission_order() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        let first = thread.add_comment("first", &viewer, now()).unwrap();
        let second = thread.add_comment("second", &viewer, now()).unwrap();
        assert_ne!(first, second);
        let texts: Vec<_> = thread.comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn replies_go_to_their_parent_only() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        let a = thread.add_comment("a", &viewer, now()).unwrap();
        let b = thread.add_comment("b", &viewer, now()).unwrap();
        let reply = thread.add_reply(b, "hi", &viewer, now()).unwrap();

        assert!(thread.comment(a).unwrap().replies.is_empty());
        let parent = thread.comment(b).unwrap();
        assert_eq!(parent.replies.len(), 1);
        assert_eq!(parent.reply(reply).unwrap().text, "hi");
    }

    #[test]
    fn replies_to_unknown_or_blank_change_nothing() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        let a = thread.add_comment("a", &viewer, now()).unwrap();
        let before = thread.clone();
        assert_eq!(thread.add_reply(CommentId(1), "hi", &viewer, now()), None);
        assert_eq!(thread.add_reply(a, " \n", &viewer, now()), None);
        assert_eq!(thread, before);
    }

    #[test]
    fn comment_reactions_toggle() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        let id = thread.add_comment("react to me", &viewer, now()).unwrap();

        assert!(thread.react_to_comment(id, ReactionKind::Like));
        assert_eq!(thread.comment_reaction(id), Some(ReactionKind::Like));
        assert!(thread.react_to_comment(id, ReactionKind::Love));
        let comment = thread.comment(id).unwrap();
        assert_eq!(comment.reactions.count(ReactionKind::Like), 0);
        assert_eq!(comment.reactions.count(ReactionKind::Love), 1);

        assert!(thread.react_to_comment(id, ReactionKind::Love));
        assert_eq!(thread.comment_reaction(id), None);
        assert_eq!(thread.comment(id).unwrap().reactions.total(), 0);
    }

    #[test]
    fn reply_reactions_are_separate_from_comment_reactions() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        let comment = thread.add_comment("parent", &viewer, now()).unwrap();
        let reply = thread.add_reply(comment, "child", &viewer, now()).unwrap();

        assert!(thread.react_to_reply(comment, reply, ReactionKind::Laugh));
        assert_eq!(thread.reply_reaction(reply), Some(ReactionKind::Laugh));
        assert_eq!(thread.comment_reaction(comment), None);
        assert_eq!(thread.comment(comment).unwrap().reactions.total(), 0);
        let stored = thread.comment(comment).unwrap().reply(reply).unwrap();
        assert_eq!(stored.reactions.count(ReactionKind::Laugh), 1);
    }

    #[test]
    fn reacting_to_missing_targets_is_a_no_op() {
        let mut thread = CommentThread::default();
        let viewer = Viewer::default();
        let comment = thread.add_comment("parent", &viewer, now()).unwrap();
        let before = thread.clone();

        assert!(!thread.react_to_comment(CommentId(7), ReactionKind::Sad));
        assert!(!thread.react_to_reply(comment, ReplyId(7), ReactionKind::Sad));
        assert!(!thread.react_to_reply(CommentId(7), ReplyId(7), ReactionKind::Sad));
        assert_eq!(thread, before);
    }
}
