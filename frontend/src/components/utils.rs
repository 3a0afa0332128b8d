use js_sys::Date;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Local wall-clock time as `HH:MM:SS`.
pub fn clock_now() -> String {
    let now = Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

pub fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn render_loading(message: &str) -> Html {
    html! {
        <div class="loading-panel">
            <div class="spinner"></div>
            <p>{ message }</p>
        </div>
    }
}

pub fn render_error_message(error: &Option<String>, on_retry: Option<Callback<()>>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ format!("Error: {}", error_msg) }</p>
                if let Some(retry) = on_retry {
                    <button class="btn btn-outline btn-small" onclick={move |_| retry.emit(())}>
                        {"Retry"}
                    </button>
                }
            </div>
        }
    } else {
        html! {}
    }
}
