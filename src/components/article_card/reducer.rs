use chrono::{DateTime, Utc};
use navicula::Effect;

use super::thread::CommentThread;
use crate::environment::Environment;
use crate::reactions::ReactionKind;
use crate::view_model::{ArticleId, CommentId, ReplyId, Viewer};

pub type ViewStore<'a> = navicula::ViewStore<'a, super::ArticleCardReducer>;

#[derive(Clone, Debug)]
pub enum Action {
    ToggleExpanded,
    ToggleComments,
    ReactArticle(ReactionKind),
    UpdateCommentText(String),
    SubmitComment,
    ReactComment(CommentId, ReactionKind),
    OpenReply(CommentId),
    UpdateReplyText(String),
    SubmitReply,
    ReactReply(CommentId, ReplyId, ReactionKind),
}

#[derive(Clone, Debug)]
pub enum DelegateMessage {
    /// The article's own reaction counts belong to the page
    React(ArticleId, ReactionKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub article_id: ArticleId,
    pub is_expanded: bool,
    pub show_comments: bool,
    pub comment_text: String,
    /// The comment whose reply box is open
    pub reply_target: Option<CommentId>,
    pub reply_text: String,
    pub thread: CommentThread,
}

impl State {
    pub fn new(article_id: ArticleId) -> Self {
        Self {
            article_id,
            is_expanded: false,
            show_comments: false,
            comment_text: String::new(),
            reply_target: None,
            reply_text: String::new(),
            thread: CommentThread::default(),
        }
    }

    /// Post the composer text. The text is kept when it was rejected.
    pub fn submit_comment(&mut self, viewer: &Viewer, now: DateTime<Utc>) -> Option<CommentId> {
        let id = self.thread.add_comment(&self.comment_text, viewer, now)?;
        self.comment_text.clear();
        Some(id)
    }

    /// Open the reply box below `comment`, or close it if it is already open there
    pub fn open_reply(&mut self, comment: CommentId) {
        if self.reply_target == Some(comment) {
            self.reply_target = None;
        } else {
            self.reply_target = Some(comment);
        }
        self.reply_text.clear();
    }

    pub fn submit_reply(&mut self, viewer: &Viewer, now: DateTime<Utc>) -> Option<ReplyId> {
        let parent = self.reply_target?;
        let id = self.thread.add_reply(parent, &self.reply_text, viewer, now)?;
        self.reply_text.clear();
        self.reply_target = None;
        Some(id)
    }
}

pub fn reduce<'a>(
    context: &'a impl navicula::types::MessageContext<Action, DelegateMessage, ()>,
    action: Action,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    match action {
        Action::ToggleExpanded => state.is_expanded = !state.is_expanded,
        Action::ToggleComments => state.show_comments = !state.show_comments,
        Action::ReactArticle(kind) => {
            context.send_parent(DelegateMessage::React(state.article_id, kind))
        }
        Action::UpdateCommentText(text) => state.comment_text = text,
        Action::SubmitComment => {
            if state
                .submit_comment(&environment.viewer, environment.now())
                .is_none()
            {
                log::debug!("ignoring empty comment on {}", state.article_id);
            }
        }
        Action::ReactComment(id, kind) => {
            if !state.thread.react_to_comment(id, kind) {
                log::debug!("no comment {id:?} on {}", state.article_id);
            }
        }
        Action::OpenReply(id) => state.open_reply(id),
        Action::UpdateReplyText(text) => state.reply_text = text,
        Action::SubmitReply => {
            if state
                .submit_reply(&environment.viewer, environment.now())
                .is_none()
            {
                log::debug!("ignoring reply {:?}", state.reply_target);
            }
        }
        Action::ReactReply(comment, id, kind) => {
            if !state.thread.react_to_reply(comment, id, kind) {
                log::debug!("no reply {id:?} below {comment:?}");
            }
        }
    }
    Effect::NONE
}
