use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use super::reducer::{Action, ViewStore};
use crate::helper::relative_time;
use crate::loc;
use crate::reactions::ReactionKind;
use crate::view_model::{Article, Comment, CommentId, Reply};
use crate::widgets::*;

#[derive(Props)]
pub struct ArticleCardProps<'a> {
    pub store: ViewStore<'a>,
    pub article: &'a Article,
    /// What the viewer reacted with on the article itself
    #[props(!optional)]
    pub active: Option<ReactionKind>,
    pub excerpt_threshold: usize,
    /// Reference point for the comment timestamps
    pub now: DateTime<Utc>,
}

pub fn ArticleCard<'a>(cx: Scope<'a, ArticleCardProps<'a>>) -> Element<'a> {
    let store = &cx.props.store;
    let article = cx.props.article;
    let threshold = cx.props.excerpt_threshold;
    let excerpt = article.visible_excerpt(threshold, store.is_expanded);
    let is_collapsible = article.is_collapsible(threshold);
    let expand_text = if store.is_expanded {
        loc!("Show less")
    } else {
        loc!("Read more")
    };
    let date = article.date_human();
    let comments_text = match (store.show_comments, store.thread.len()) {
        (true, _) => loc!("Hide comments").to_string(),
        (false, 0) => loc!("Comment").to_string(),
        (false, 1) => loc!("1 comment").to_string(),
        (false, n) => format!("{n} comments"),
    };

    render! {
        div { class: "article-card",
            VStack { class: "article-content", spaced: true,
                h3 { "{article.title}" }
                Paragraph { class: "excerpt", "{excerpt}" }
                is_collapsible.then(|| rsx!(TextButton {
                    class: "read-more",
                    text: expand_text,
                    title: expand_text,
                    onclick: move |_| store.send(Action::ToggleExpanded),
                })),
                div { class: "meta",
                    Label { class: "date", style: TextStyle::Tertiary, "{date}" }
                }
            }
            ReactionRow {
                reactions: article.reactions,
                active: cx.props.active,
                onreact: move |kind| store.send(Action::ReactArticle(kind)),
            }
            TextButton {
                class: "comments-toggle",
                text: comments_text.clone(),
                title: comments_text,
                onclick: move |_| store.send(Action::ToggleComments),
            }
            store.show_comments.then(|| rsx!(CommentsSection {
                store: store,
                now: cx.props.now,
            }))
        }
    }
}

#[inline_props]
fn CommentsSection<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    now: DateTime<Utc>,
) -> Element<'a> {
    let draft = &store.comment_text;
    render! {
        VStack { class: "comments", spaced: true,
            store.thread.comments().iter().map(|comment| rsx!(
                CommentView {
                    key: "{comment.id.0}",
                    store: store,
                    comment: comment,
                    now: *now,
                }
            )),
            HStack { class: "comment-composer", spaced: true, centered: true,
                textarea {
                    class: "grow",
                    placeholder: "Write a comment...",
                    value: "{draft}",
                    oninput: move |evt| {
                        store.send(Action::UpdateCommentText(evt.value.clone()));
                    },
                }
                ActionButton {
                    text: loc!("Post"),
                    primary: true,
                    onclick: move |_| store.send(Action::SubmitComment),
                }
            }
        }
    }
}

#[inline_props]
fn CommentView<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    comment: &'a Comment,
    now: DateTime<Utc>,
) -> Element<'a> {
    let id = comment.id;
    let human_time = relative_time(&comment.created, now);
    let full_time = comment.created.to_rfc2822();
    let is_replying = store.reply_target == Some(id);
    let reply_text = if is_replying {
        loc!("Cancel")
    } else {
        loc!("Reply")
    };
    render! {
        div { class: "comment",
            EntryHeader {
                avatar: &comment.avatar,
                author: &comment.author,
                human_time: human_time,
                full_time: full_time,
            }
            Paragraph { "{comment.text}" }
            HStack { spaced: true, centered: true,
                ReactionRow {
                    reactions: comment.reactions,
                    active: store.thread.comment_reaction(id),
                    compact: true,
                    onreact: move |kind| store.send(Action::ReactComment(id, kind)),
                }
                TextButton {
                    text: reply_text,
                    title: reply_text,
                    onclick: move |_| store.send(Action::OpenReply(id)),
                }
            }
            comment.replies.iter().map(|reply| rsx!(
                ReplyView {
                    key: "{reply.id.0}",
                    store: store,
                    parent: id,
                    reply: reply,
                    now: *now,
                }
            )),
            is_replying.then(|| rsx!(ReplyComposer { store: store }))
        }
    }
}

#[inline_props]
fn ReplyView<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    parent: CommentId,
    reply: &'a Reply,
    now: DateTime<Utc>,
) -> Element<'a> {
    let parent = *parent;
    let id = reply.id;
    let human_time = relative_time(&reply.created, now);
    let full_time = reply.created.to_rfc2822();
    render! {
        div { class: "reply",
            EntryHeader {
                avatar: &reply.avatar,
                author: &reply.author,
                human_time: human_time,
                full_time: full_time,
            }
            Paragraph { "{reply.text}" }
            ReactionRow {
                reactions: reply.reactions,
                active: store.thread.reply_reaction(id),
                compact: true,
                onreact: move |kind| store.send(Action::ReactReply(parent, id, kind)),
            }
        }
    }
}

#[inline_props]
fn ReplyComposer<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    let draft = &store.reply_text;
    render! {
        HStack { class: "reply-composer", spaced: true, centered: true,
            input {
                class: "grow",
                placeholder: "Write a reply...",
                value: "{draft}",
                autofocus: "true",
                oninput: move |evt| {
                    store.send(Action::UpdateReplyText(evt.value.clone()));
                },
            }
            ActionButton {
                text: loc!("Reply"),
                primary: true,
                onclick: move |_| store.send(Action::SubmitReply),
            }
        }
    }
}

#[inline_props]
fn EntryHeader<'a>(
    cx: Scope<'a>,
    avatar: &'a str,
    author: &'a str,
    human_time: String,
    full_time: String,
) -> Element<'a> {
    render! {
        HStack { spaced: true, centered: true,
            img { class: "avatar", src: "{avatar}", alt: "{author}" }
            Label { style: TextStyle::Secondary, "{author}" }
            FormattedTime {
                human_time: human_time,
                full_time: full_time,
            }
        }
    }
}
