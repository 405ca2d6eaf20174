use super::tech_card::appear_style;
use leptos::prelude::*;

/// Крупная цена пакета в долларах с пульсирующими точками.
#[component]
pub fn TechPrice(
    amount: &'static str,
    label: &'static str,
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <div class="tech-price" style=appear_style(delay_ms)>
            <div class="tech-price__glow"></div>
            <span class="tech-price__label">{label}</span>
            <div class="tech-price__figure">
                <span class="tech-price__currency">"$"</span>
                {amount}
                <span class="tech-price__unit">"USD"</span>
            </div>
            <div class="tech-price__dots">
                <span class="pulse-dot"></span>
                <span class="pulse-dot pulse-dot--d1"></span>
                <span class="pulse-dot pulse-dot--d2"></span>
            </div>
        </div>
    }
}
