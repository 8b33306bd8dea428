pub mod article_card;
pub mod author_page;
pub mod author_profile;
pub mod pagination;
pub mod theme_toggle;
