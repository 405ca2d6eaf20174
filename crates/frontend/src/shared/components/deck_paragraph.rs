use contracts::deck::content::{Paragraph, Span, Tone};
use leptos::either::Either;
use leptos::prelude::*;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Body => "deck-p",
        Tone::Caps => "deck-p deck-p--caps",
    }
}

#[component]
pub fn DeckParagraph(paragraph: Paragraph) -> impl IntoView {
    let spans = paragraph
        .spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => Either::Left(*text),
            Span::Strong(text) => Either::Right(view! { <strong>{*text}</strong> }),
        })
        .collect_view();

    view! { <p class=tone_class(paragraph.tone)>{spans}</p> }
}
