use dioxus::prelude::*;

use crate::view_model::AuthorViewModel;
use crate::widgets::*;

#[inline_props]
pub fn AuthorProfile<'a>(cx: Scope<'a>, author: &'a AuthorViewModel) -> Element<'a> {
    render! {
        HStack { class: "author-profile", spaced: true,
            img {
                class: "author-image",
                src: "{author.image}",
                alt: "{author.name}",
            }
            VStack { class: "author-info grow", spaced: true,
                h2 { class: "author-name", "{author.name}" }
                Paragraph { class: "author-bio", style: TextStyle::Secondary, "{author.bio}" }
                HStack { class: "author-stats", spaced: true,
                    author.stats.iter().map(|stat| {
                        let label = stat.label();
                        rsx!(div {
                            key: "{stat.key}",
                            class: "stat",
                            Label { class: "stat-value", "{stat.value}" }
                            Label { class: "stat-label", style: TextStyle::Tertiary, "{label}" }
                        })
                    })
                }
            }
        }
    }
}
