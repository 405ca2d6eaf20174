use contracts::deck::{Step, TabDescriptor, TabId};
use leptos::ev;
use leptos::prelude::*;

/// Нижняя панель навигации: по кнопке на каждый `TabDescriptor`.
///
/// Стрелки влево/вправо переключают вкладки по кругу.
#[component]
pub fn TabNav(
    tabs: &'static [TabDescriptor],
    #[prop(into)] active: Signal<TabId>,
    on_select: Callback<TabId>,
    on_step: Callback<Step>,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        let step = match event.key().as_str() {
            "ArrowRight" => Step::Next,
            "ArrowLeft" => Step::Prev,
            _ => return,
        };
        on_step.run(step);
    });
    on_cleanup(move || handle.remove());

    let buttons = tabs
        .iter()
        .map(|descriptor| {
            let id = descriptor.id;
            let is_active = move || active.get() == id;
            view! {
                <button
                    class="tab-nav__button"
                    class=("tab-nav__button--active", is_active)
                    role="tab"
                    aria-selected=move || is_active().to_string()
                    data-tab=id.key()
                    on:click=move |_| on_select.run(id)
                >
                    <span class="tab-nav__sweep"></span>
                    <span class="tab-nav__content">
                        <span class="tab-nav__label">{descriptor.label}</span>
                        <span class="tab-nav__underline"></span>
                    </span>
                    <span class="tab-nav__divider"></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="tab-nav">
            <div class="tab-nav__panel" role="tablist">
                {buttons}
            </div>
            <div class="tab-nav__decor" aria-hidden="true">
                <span class="tab-nav__decor-long"></span>
                <span class="tab-nav__decor-short"></span>
                <span class="tab-nav__decor-short"></span>
            </div>
        </nav>
    }
}
