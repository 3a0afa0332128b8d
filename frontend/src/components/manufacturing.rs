use super::utils::{clock_now, render_error_message, render_loading};
use super::widgets::{insight_icon, Badge, ProgressBar, StatCard, TabBar};
use crate::hooks::{use_backend, use_fetch};
use shared::dashboard::{AiInsight, DashboardState, ManufacturingStatus, PerformanceMetrics, Predictions};
use shared::format::{percent, thousands};
use shared::thresholds::Tone;
use shared::WorkforceApi;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const TABS: [&str; 4] = ["AI Dashboard", "Predictions", "AI Insights", "Performance"];

#[function_component(ManufacturingIntelligence)]
pub fn manufacturing_intelligence() -> Html {
    let backend = use_backend();
    let fetch = {
        let backend = backend.clone();
        use_fetch(move || {
            let backend = backend.clone();
            async move { backend.dashboard().await }
        })
    };
    let view = use_state(DashboardState::default);
    let analyzing = use_state(|| false);
    let tab = use_state(|| 0usize);

    {
        let view = view.clone();
        let snapshot = fetch.state().data.clone();
        use_effect_with(fetch.state().successes, move |_| {
            if let Some(snapshot) = snapshot {
                view.set(view.merge(snapshot).with_last_update(clock_now()));
            }
            || ()
        });
    }

    let on_analyze = {
        let backend = backend.clone();
        let analyzing = analyzing.clone();
        let fetch = fetch.clone();
        Callback::from(move |_: MouseEvent| {
            if *analyzing {
                return;
            }
            analyzing.set(true);
            fetch.begin();

            let backend = backend.clone();
            let analyzing = analyzing.clone();
            let apply = fetch.apply();
            spawn_local(async move {
                let result = backend.run_manufacturing_analysis().await;
                match &result {
                    Ok(_) => log::info!("✅ AI analysis complete"),
                    Err(err) => log::error!("❌ Error running AI analysis: {}", err),
                }
                apply.emit(result);
                analyzing.set(false);
            });
        })
    };

    let state = fetch.state();
    if state.loading && state.data.is_none() && state.error.is_none() {
        return render_loading("Loading AI Manufacturing Intelligence...");
    }

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index| tab.set(index))
    };

    html! {
        <section class="screen">
            <div class="screen-header">
                <div>
                    <h2><i class="fa-solid fa-brain"></i>{" AI Manufacturing Intelligence"}</h2>
                    <p class="subtitle">{"Powered by Machine Learning & Deep Neural Networks"}</p>
                </div>
                <div class="screen-actions">
                    if let Some(last_update) = &view.last_update {
                        <span class="muted">{ format!("Last updated: {}", last_update) }</span>
                    }
                    <button class="btn btn-primary" onclick={on_analyze} disabled={*analyzing}>
                        <i class={classes!("fa-solid", "fa-rotate", (*analyzing).then_some("fa-spin"))}></i>
                        { if *analyzing { " Analyzing..." } else { " Run AI Analysis" } }
                    </button>
                </div>
            </div>

            { render_error_message(&state.error, Some(fetch.reload())) }

            <TabBar tabs={TABS.to_vec()} active={*tab} on_select={on_tab} />

            {
                match *tab {
                    1 => render_predictions(&view.predictions),
                    2 => render_insights(&view.insights),
                    3 => render_performance(&view.performance),
                    _ => render_overview(&view),
                }
            }
        </section>
    }
}

fn render_overview(view: &DashboardState) -> Html {
    let predictions = &view.predictions;
    let performance = &view.performance;

    html! {
        <>
            <div class="card-grid four">
                <StatCard
                    title="Production Efficiency"
                    value={percent(predictions.production_efficiency)}
                    icon="fa-chart-column"
                    tone={Tone::Info}
                    progress={Some(predictions.production_efficiency)}
                />
                <StatCard
                    title="Quality Prediction"
                    value={percent(predictions.quality_prediction)}
                    icon="fa-bullseye"
                    tone={Tone::Positive}
                    progress={Some(predictions.quality_prediction)}
                />
                <StatCard
                    title="Energy Optimization"
                    value={percent(predictions.energy_optimization)}
                    icon="fa-bolt"
                    tone={Tone::Caution}
                    progress={Some(predictions.energy_optimization)}
                />
                <StatCard
                    title="Next Maintenance"
                    value={format!("{} days", predictions.maintenance_prediction)}
                    icon="fa-clock"
                    tone={Tone::Neutral}
                />
            </div>

            <div class="card-grid two">
                <div class="card">
                    <h3><i class="fa-solid fa-brain"></i>{" AI Model Performance"}</h3>
                    <div class="metric-row">
                        <span>{"Overall Accuracy"}</span>
                        <strong class="tone-text-positive">{ percent(performance.ai_accuracy) }</strong>
                    </div>
                    <ProgressBar value={performance.ai_accuracy} tone={Tone::Positive} />
                    <div class="card-grid two">
                        <div class="mini-stat tone-info">
                            <strong>{ performance.models_running.to_string() }</strong>
                            <span>{"Active Models"}</span>
                        </div>
                        <div class="mini-stat tone-positive">
                            <strong>{ thousands(performance.predictions_today as f64) }</strong>
                            <span>{"Predictions Today"}</span>
                        </div>
                    </div>
                </div>

                <div class="card">
                    <h3><i class="fa-solid fa-arrow-trend-up"></i>{" Real-time Manufacturing Insights"}</h3>
                    if view.status.is_empty() {
                        <p class="empty-state">{"No status data available"}</p>
                    } else {
                        { for view.status.iter().map(render_status) }
                    }
                </div>
            </div>
        </>
    }
}

fn render_status(status: &ManufacturingStatus) -> Html {
    let tone = status.tone();
    html! {
        <div class={classes!("status-row", tone.css_class())}>
            <div>
                <p class="status-name">{ status.name.clone() }</p>
                <p class="status-description">{ status.description.clone() }</p>
            </div>
            <Badge text={status.badge.clone()} tone={tone} />
        </div>
    }
}

fn render_predictions(predictions: &Predictions) -> Html {
    let forecast = predictions.forecast();

    html! {
        <div class="card">
            <h3>{"AI Predictions & Forecasting"}</h3>
            <div class="card-grid two">
                <div>
                    <h4>{"Production Forecasting"}</h4>
                    <div class="metric-row bordered">
                        <span>{"Next 24 hours"}</span>
                        <strong class="tone-text-positive">{ format!("+{}% output", forecast.next_day_output) }</strong>
                    </div>
                    <div class="metric-row bordered">
                        <span>{"Next 7 days"}</span>
                        <strong class="tone-text-info">{ format!("+{}% efficiency", forecast.next_week_efficiency) }</strong>
                    </div>
                    <div class="metric-row bordered">
                        <span>{"Next 30 days"}</span>
                        <strong class="tone-text-neutral">{ format!("-{}% defects", forecast.next_month_defect_reduction) }</strong>
                    </div>
                </div>
                <div>
                    <h4>{"Risk Assessment"}</h4>
                    { for predictions.risk_assessments().into_iter().map(|risk| html! {
                        <div class="metric-row bordered">
                            <span>{ risk.label }</span>
                            <Badge text={risk.badge_text()} tone={risk.band.tone()} />
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

fn render_insights(insights: &[AiInsight]) -> Html {
    if insights.is_empty() {
        return html! {
            <div class="card empty-state">
                <i class="fa-solid fa-brain fa-3x"></i>
                <p>{"No AI insights available at this time."}</p>
                <p class="muted">{"Run AI Analysis to generate insights."}</p>
            </div>
        };
    }

    html! {
        <div class="stack">
            { for insights.iter().map(|insight| {
                let tone = insight.tone();
                html! {
                    <div class={classes!("card", "insight-card", tone.css_class())} key={insight.id}>
                        <div class="insight-header">
                            <i class={classes!("fa-solid", insight_icon(&insight.icon))}></i>
                            <div>
                                <h3>{ insight.title.clone() }</h3>
                                <p class="muted">{ insight.description.clone() }</p>
                            </div>
                            <Badge text={insight.severity_badge()} tone={tone} />
                        </div>
                        <div class="card-grid three">
                            <div>
                                <span class="muted">{"Expected Impact:"}</span>
                                <p class="tone-text-positive">{ insight.impact.clone() }</p>
                            </div>
                            <div>
                                <span class="muted">{"AI Confidence:"}</span>
                                <p>{ percent(insight.confidence) }</p>
                            </div>
                            <div>
                                <span class="muted">{"Recommended Action:"}</span>
                                <p>{ insight.action.clone() }</p>
                            </div>
                        </div>
                        <p class="muted">{ format!("Category: {}", insight.kind) }</p>
                    </div>
                }
            })}
        </div>
    }
}

fn render_performance(performance: &PerformanceMetrics) -> Html {
    let technologies = [
        ("fa-brain", "Deep Neural Networks", "Pattern recognition & prediction"),
        ("fa-arrow-trend-up", "Machine Learning", "Optimization algorithms"),
        ("fa-chart-column", "Predictive Analytics", "Forecasting & risk assessment"),
        ("fa-bullseye", "Computer Vision", "Quality control automation"),
    ];

    html! {
        <div class="card-grid two">
            <div class="card">
                <h3>{"AI System Performance"}</h3>
                <div class="metric-row">
                    <span>{"Model Accuracy"}</span>
                    <strong>{ percent(performance.ai_accuracy) }</strong>
                </div>
                <ProgressBar value={performance.ai_accuracy} />
                <div class="metric-row">
                    <span>{"Data Processed"}</span>
                    <strong>{ format!("{} TB", performance.data_processed) }</strong>
                </div>
                <div class="metric-row">
                    <span>{"Active Models"}</span>
                    <strong>{ performance.models_running.to_string() }</strong>
                </div>
                <div class="metric-row">
                    <span>{"Predictions Today"}</span>
                    <strong>{ thousands(performance.predictions_today as f64) }</strong>
                </div>
            </div>
            <div class="card">
                <h3>{"AI Technologies Used"}</h3>
                { for technologies.iter().map(|(icon, name, blurb)| html! {
                    <div class="tech-row">
                        <i class={classes!("fa-solid", *icon)}></i>
                        <div>
                            <p class="tech-name">{ *name }</p>
                            <p class="muted">{ *blurb }</p>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
