use leptos::prelude::*;

/// Внешняя «индустриальная» рамка с уголками и техническими метками.
#[component]
pub fn Frame() -> impl IntoView {
    view! {
        <div class="deck-frame" aria-hidden="true">
            <div class="deck-frame__border"></div>
            <div class="deck-frame__gradient"></div>

            <div class="deck-frame__corner deck-frame__corner--tl"></div>
            <div class="deck-frame__corner deck-frame__corner--tr"></div>
            <div class="deck-frame__corner deck-frame__corner--br"></div>
            <div class="deck-frame__corner deck-frame__corner--bl"></div>

            <div class="deck-frame__mark deck-frame__mark--top">"SYS.READY"</div>
            <div class="deck-frame__mark deck-frame__mark--bottom">"V.2.0.4"</div>
            <div class="deck-frame__notch deck-frame__notch--left"></div>
            <div class="deck-frame__notch deck-frame__notch--right"></div>
        </div>
    }
}

#[component]
pub fn DeckHeader() -> impl IntoView {
    view! {
        <header class="deck-header">
            <div class="deck-header__plate">
                <h1 class="deck-header__title">"MELT"</h1>
                <div class="deck-header__subtitle">
                    <span class="pulse-dot pulse-dot--large"></span>
                    <p>"MARKETING PROTOCOL"</p>
                </div>
            </div>
        </header>
    }
}
