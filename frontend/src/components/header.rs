use crate::hooks::{use_backend, use_fetch};
use shared::WorkforceApi;
use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-industry"></i>{" Flavi Workforce Intelligence"}</h1>
            <p class="subtitle">{"Dairy plant analytics, workforce management and AI insights"}</p>
            <HealthBadge />
        </header>
    }
}

#[function_component(HealthBadge)]
pub fn health_badge() -> Html {
    let backend = use_backend();
    let base_url = backend.base_url().to_string();
    let health = use_fetch(move || {
        let backend = backend.clone();
        async move { backend.health().await }
    });

    let state = health.state();
    let (class, label) = match (&state.data, &state.error) {
        _ if state.loading => ("badge tone-neutral", "Checking backend..."),
        (Some(status), None) if status.is_ok() => ("badge tone-positive", "Backend online"),
        _ => ("badge tone-critical", "Backend offline"),
    };
    let onclick = {
        let reload = health.reload();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    html! {
        <button class={classes!("health-badge", class)} title={base_url} {onclick}>
            <i class="fa-solid fa-circle"></i>{ format!(" {}", label) }
        </button>
    }
}
