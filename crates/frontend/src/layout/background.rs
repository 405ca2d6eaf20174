//! Декоративный фон: сетка, две сканирующие линии и мерцающие частицы.
//!
//! Все анимации на CSS и исчезают вместе с DOM. С состоянием навигации
//! фон никак не связан.

use leptos::prelude::*;

pub const PARTICLE_COUNT: usize = 5;
/// Период вертикальной сканирующей линии, с
pub const VERTICAL_SCAN_S: u32 = 10;
/// Период горизонтальной сканирующей линии, с
pub const HORIZONTAL_SCAN_S: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left: String,
    pub top: String,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {}; top: {}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left, self.top, self.duration_s, self.delay_s
        )
    }
}

/// Раскладывает частицы по экрану.
///
/// `rand` должен возвращать значения из `[0, 1)`. Если размер окна неизвестен,
/// позиции задаются в процентах.
pub fn scatter_particles(
    count: usize,
    viewport: Option<(f64, f64)>,
    mut rand: impl FnMut() -> f64,
) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let (x, y) = (rand(), rand());
            let (left, top) = match viewport {
                Some((width, height)) => {
                    (format!("{:.0}px", x * width), format!("{:.0}px", y * height))
                }
                None => (format!("{:.1}%", x * 100.0), format!("{:.1}%", y * 100.0)),
            };
            Particle {
                left,
                top,
                duration_s: 2.0 + rand() * 3.0,
                delay_s: rand() * 2.0,
            }
        })
        .collect()
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    (width > 0.0 && height > 0.0).then_some((width, height))
}

#[component]
pub fn GenerativeBackground() -> impl IntoView {
    let viewport = viewport_size();
    if viewport.is_none() {
        log::warn!("viewport size unavailable, particles fall back to relative placement");
    }

    let particles = scatter_particles(PARTICLE_COUNT, viewport, js_sys::Math::random)
        .into_iter()
        .map(|p| view! { <div class="deck-bg__particle" style=p.style()></div> })
        .collect_view();

    view! {
        <div class="deck-bg" aria-hidden="true">
            <div class="deck-bg__grid"></div>
            <div
                class="deck-bg__scan deck-bg__scan--vertical"
                style=format!("animation-duration: {}s;", VERTICAL_SCAN_S)
            ></div>
            <div
                class="deck-bg__scan deck-bg__scan--horizontal"
                style=format!("animation-duration: {}s;", HORIZONTAL_SCAN_S)
            ></div>
            {particles}
        </div>
    }
}
