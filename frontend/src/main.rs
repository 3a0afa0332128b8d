mod api;
mod components;
mod config;
mod hooks;

use api::HttpBackend;
use components::analysis::WorkforceAnalysis;
use components::evaluation::EmployeeEvaluation;
use components::header::render_header;
use components::manufacturing::ManufacturingIntelligence;
use components::workers::WorkerManagement;
use config::load_api_config;
use yew::prelude::*;

// Screens reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Manufacturing,
    Analysis,
    Workers,
    Evaluation,
}

impl View {
    const ALL: [View; 4] = [
        View::Manufacturing,
        View::Analysis,
        View::Workers,
        View::Evaluation,
    ];

    fn title(&self) -> &'static str {
        match self {
            View::Manufacturing => "AI Manufacturing",
            View::Analysis => "Workforce Analysis",
            View::Workers => "Worker Management",
            View::Evaluation => "Employee Evaluation",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            View::Manufacturing => "fa-brain",
            View::Analysis => "fa-chart-pie",
            View::Workers => "fa-users-gear",
            View::Evaluation => "fa-user-check",
        }
    }
}

// Yew msg components
enum Msg {
    SelectView(View),
}

// Main component
struct Model {
    view: View,
    backend: HttpBackend,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: View::Manufacturing,
            backend: HttpBackend::new(load_api_config()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectView(view) => self.handle_select_view(view),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<HttpBackend> context={self.backend.clone()}>
                <div class="container">
                    { render_header() }
                    { self.render_nav(ctx) }

                    <main class="main-content">
                        { self.render_view() }
                    </main>

                    <footer class="app-footer">
                        <p>{ format!("Flavi Workforce Dashboard | Backend: {}", self.backend.base_url()) }</p>
                    </footer>
                </div>
            </ContextProvider<HttpBackend>>
        }
    }
}

// Handler methods
impl Model {
    fn handle_select_view(&mut self, view: View) -> bool {
        if self.view == view {
            return false;
        }
        log::info!("Switching to {}", view.title());
        self.view = view;
        true
    }
}

// Rendering methods
impl Model {
    fn render_nav(&self, ctx: &Context<Self>) -> Html {
        html! {
            <nav class="view-nav">
                { for View::ALL.iter().map(|view| {
                    let view = *view;
                    html! {
                        <button
                            class={classes!("nav-item", (view == self.view).then_some("active"))}
                            onclick={ctx.link().callback(move |_| Msg::SelectView(view))}
                        >
                            <i class={classes!("fa-solid", view.icon())}></i>
                            { format!(" {}", view.title()) }
                        </button>
                    }
                })}
            </nav>
        }
    }

    fn render_view(&self) -> Html {
        match self.view {
            View::Manufacturing => html! { <ManufacturingIntelligence /> },
            View::Analysis => html! { <WorkforceAnalysis /> },
            View::Workers => html! { <WorkerManagement /> },
            View::Evaluation => html! { <EmployeeEvaluation /> },
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
