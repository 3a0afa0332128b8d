use super::utils::{render_error_message, render_loading};
use super::widgets::{BarChart, ProgressBar, ShareChart, StatCard, TabBar};
use crate::hooks::{use_backend, use_fetch};
use shared::analysis::{AnalysisReport, Narrative};
use shared::client::rerun_workforce_analysis;
use shared::format::{dollars, dollars_short, fixed, percent, thousands};
use shared::thresholds::Tone;
use shared::WorkforceApi;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const TABS: [&str; 5] = ["Demographics", "Compensation", "Performance", "Attrition", "Insights"];

#[function_component(WorkforceAnalysis)]
pub fn workforce_analysis() -> Html {
    let backend = use_backend();
    let fetch = {
        let backend = backend.clone();
        use_fetch(move || {
            let backend = backend.clone();
            async move { backend.analysis().await }
        })
    };
    let running = use_state(|| false);
    let tab = use_state(|| 0usize);

    let on_rerun = {
        let backend = backend.clone();
        let running = running.clone();
        let fetch = fetch.clone();
        Callback::from(move |_: MouseEvent| {
            if *running {
                return;
            }
            running.set(true);
            fetch.begin();

            let backend = backend.clone();
            let running = running.clone();
            let apply = fetch.apply();
            spawn_local(async move {
                let result = rerun_workforce_analysis(&backend).await;
                if let Err(err) = &result {
                    log::error!("❌ Error re-running analysis: {}", err);
                }
                apply.emit(result);
                running.set(false);
            });
        })
    };

    let state = fetch.state();
    let Some(report) = &state.data else {
        if state.error.is_some() {
            return render_error_message(&state.error, Some(fetch.reload()));
        }
        return render_loading("Loading analysis data...");
    };

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index| tab.set(index))
    };

    html! {
        <section class="screen">
            <div class="screen-header">
                <div>
                    <h2><i class="fa-solid fa-file-lines"></i>{" Dairy Industry Data Analysis"}</h2>
                    <p class="subtitle">{"Comprehensive workforce analytics"}</p>
                </div>
                <div class="screen-actions">
                    <span class="badge badge-large">
                        { format!("{} Employees", report.summary.total_employees) }
                    </span>
                    <button class="btn btn-primary" onclick={on_rerun} disabled={*running}>
                        <i class={classes!("fa-solid", "fa-rotate", (*running).then_some("fa-spin"))}></i>
                        { if *running { " Analyzing..." } else { " Re-run Analysis" } }
                    </button>
                </div>
            </div>

            { render_error_message(&state.error, Some(fetch.reload())) }
            { render_summary(report) }

            <TabBar tabs={TABS.to_vec()} active={*tab} on_select={on_tab} />

            {
                match *tab {
                    1 => render_compensation(report),
                    2 => render_performance(report),
                    3 => render_attrition(report),
                    4 => render_insights(report),
                    _ => render_demographics(report),
                }
            }
        </section>
    }
}

fn render_summary(report: &AnalysisReport) -> Html {
    let summary = &report.summary;
    let retention = report.retention_rate();

    html! {
        <div class="card-grid four">
            <StatCard
                title="Attrition Rate"
                value={percent(summary.attrition_rate)}
                subtitle={Some(AttrValue::from(format!("Employee Retention: {}%", fixed(retention, 1))))}
                icon="fa-arrow-trend-down"
                tone={Tone::Info}
                progress={Some(retention)}
            />
            <StatCard
                title="Average Salary"
                value={dollars_short(summary.avg_monthly_income)}
                subtitle={Some(AttrValue::from("Monthly income"))}
                icon="fa-dollar-sign"
                tone={Tone::Positive}
            />
            <StatCard
                title="Avg Tenure"
                value={format!("{} years", fixed(summary.avg_years_at_company, 1))}
                subtitle={Some(AttrValue::from("Years at company"))}
                icon="fa-users"
                tone={Tone::Neutral}
            />
            <StatCard
                title="Avg Age"
                value={fixed(summary.avg_age, 0)}
                subtitle={Some(AttrValue::from("Years old"))}
                icon="fa-award"
                tone={Tone::Caution}
            />
        </div>
    }
}

fn render_demographics(report: &AnalysisReport) -> Html {
    html! {
        <div class="card-grid two">
            <BarChart title="Department Distribution" points={report.department_chart()} />
            <ShareChart title="Gender Distribution" shares={report.gender_distribution.shares()} />
            <BarChart title="Job Role Distribution (Top 9)" points={report.job_role_chart()} tone={Tone::Caution} />
            <BarChart title="Education Field Distribution" points={report.education_chart()} tone={Tone::Positive} />
            <BarChart title="Age Group Distribution" points={report.age_group_distribution.points()} tone={Tone::Neutral} />
            <BarChart title="Income Group Distribution" points={report.income_group_distribution.points()} tone={Tone::Positive} />
            <ShareChart title="Marital Status" shares={report.marital_status_distribution.shares()} />
        </div>
    }
}

fn render_compensation(report: &AnalysisReport) -> Html {
    let salary = report.salary_chart();
    let max = salary
        .iter()
        .map(|bar| bar.mean.max(bar.median))
        .fold(0.0, f64::max);
    let width = |value: f64| if max > 0.0 { value / max * 100.0 } else { 0.0 };

    html! {
        <div class="card-grid two">
            <div class="chart-card">
                <h3><i class="fa-solid fa-dollar-sign"></i>{" Salary Analysis by Department"}</h3>
                <div class="legend">
                    <span class="legend-swatch tone-positive"></span>{"Mean Salary "}
                    <span class="legend-swatch tone-info"></span>{"Median Salary"}
                </div>
                { for salary.iter().map(|bar| html! {
                    <div class="bar-group">
                        <span class="bar-label">{ bar.department.clone() }</span>
                        <div class="bar-track" title={format!("Mean: {}", dollars(bar.mean))}>
                            <div class="bar-fill tone-positive" style={format!("width: {:.1}%", width(bar.mean))}></div>
                        </div>
                        <div class="bar-track" title={format!("Median: {}", dollars(bar.median))}>
                            <div class="bar-fill tone-info" style={format!("width: {:.1}%", width(bar.median))}></div>
                        </div>
                        <span class="bar-value">{ dollars_short(bar.mean) }</span>
                    </div>
                })}
            </div>
            <div class="card">
                <h3><i class="fa-solid fa-award"></i>{" Top Paying Job Roles"}</h3>
                { for report.top_paying_roles().into_iter().enumerate().map(|(index, (role, pay))| html! {
                    <div class="metric-row bordered">
                        <span><span class="rank">{ format!("#{}", index + 1) }</span>{ format!(" {}", role) }</span>
                        <strong class="tone-text-positive">{ dollars(pay.round()) }</strong>
                    </div>
                })}
            </div>
        </div>
    }
}

fn render_performance(report: &AnalysisReport) -> Html {
    let metrics = &report.performance_metrics;
    let training = &report.training_analysis;
    let skill = &report.skill_analysis;
    let gap_tone = if skill.skill_gap < 0.0 { Tone::Critical } else { Tone::Neutral };

    html! {
        <>
            <div class="card-grid three">
                <div class="card">
                    <h3><i class="fa-solid fa-award"></i>{" Performance Metrics"}</h3>
                    <div class="metric-row">
                        <span>{"Avg Performance Rating"}</span>
                        <strong>{ fixed(metrics.avg_performance_rating, 2) }</strong>
                    </div>
                    <ProgressBar value={metrics.avg_performance_rating / 4.0 * 100.0} />
                    <div class="metric-row">
                        <span>{"High Performers"}</span>
                        <strong>{ thousands(metrics.high_performers) }</strong>
                    </div>
                    <ProgressBar value={report.high_performer_share()} tone={Tone::Positive} />
                    <div class="metric-row">
                        <span>{"Avg Job Involvement"}</span>
                        <strong>{ fixed(metrics.avg_job_involvement, 2) }</strong>
                    </div>
                    <ProgressBar value={metrics.avg_job_involvement / 4.0 * 100.0} tone={Tone::Neutral} />
                </div>
                <div class="card">
                    <h3><i class="fa-solid fa-book-open"></i>{" Training Analysis"}</h3>
                    <div class="mini-stat tone-info">
                        <strong>{ fixed(training.avg_training_last_year, 1) }</strong>
                        <span>{"Avg Training Sessions"}</span>
                    </div>
                    <div class="mini-stat tone-positive">
                        <strong>{ thousands(training.total_training_sessions) }</strong>
                        <span>{"Total Sessions"}</span>
                    </div>
                    <div class="mini-stat tone-caution">
                        <strong>{ thousands(training.employees_needing_training) }</strong>
                        <span>{"Need Training"}</span>
                    </div>
                </div>
                <BarChart title="Work-Life Balance" points={report.work_life_chart()} tone={Tone::Neutral} />
            </div>

            <BarChart title="Job Satisfaction" points={report.job_satisfaction_distribution.points()} />

            <div class="card">
                <h3><i class="fa-solid fa-award"></i>{" Skill Gap Analysis"}</h3>
                <div class="card-grid three">
                    <div class="mini-stat tone-positive">
                        <strong>{ format!("{}%", fixed(skill.avg_operator_skill * 100.0, 1)) }</strong>
                        <span>{"Avg Operator Skill"}</span>
                    </div>
                    <div class="mini-stat tone-info">
                        <strong>{ format!("{}%", fixed(skill.avg_required_skill * 100.0, 1)) }</strong>
                        <span>{"Required Skill Level"}</span>
                    </div>
                    <div class={classes!("mini-stat", gap_tone.css_class())}>
                        <strong>{ format!("{}%", fixed(skill.skill_gap * 100.0, 1)) }</strong>
                        <span>{"Skill Gap"}</span>
                    </div>
                </div>
            </div>
        </>
    }
}

fn render_attrition(report: &AnalysisReport) -> Html {
    let attrition = report.attrition_chart();
    let max = attrition.iter().map(|bar| bar.count).fold(0.0, f64::max);

    html! {
        <>
            <div class="card-grid two">
                <div class="chart-card">
                    <h3><i class="fa-solid fa-circle-exclamation"></i>{" Attrition by Department"}</h3>
                    { for attrition.iter().map(|bar| {
                        let width = if max > 0.0 { bar.count / max * 100.0 } else { 0.0 };
                        let rate = bar.rate.map(|rate| format!(" ({}%)", fixed(rate, 2))).unwrap_or_default();
                        html! {
                            <div class="bar-row">
                                <span class="bar-label">{ bar.department.clone() }</span>
                                <div class="bar-track">
                                    <div class="bar-fill tone-critical" style={format!("width: {:.1}%", width)}></div>
                                </div>
                                <span class="bar-value">{ format!("{}{}", thousands(bar.count), rate) }</span>
                            </div>
                        }
                    })}
                </div>
                <BarChart
                    title="Attrition Rates by Department"
                    points={report.attrition_rate_by_department.points()}
                    suffix="%"
                    tone={Tone::Caution}
                />
            </div>

            <div class="card">
                <h3><i class="fa-solid fa-mug-hot"></i>{" Overtime Analysis"}</h3>
                <div class="card-grid two">
                    <div class="mini-stat tone-positive">
                        <strong>{ thousands(report.overtime_no()) }</strong>
                        <span>{"No Overtime"}</span>
                    </div>
                    <div class="mini-stat tone-critical">
                        <strong>{ thousands(report.overtime_yes()) }</strong>
                        <span>{ format!("Work Overtime ({}%)", fixed(report.overtime_share(), 1)) }</span>
                    </div>
                </div>
            </div>
        </>
    }
}

fn render_insights(report: &AnalysisReport) -> Html {
    let distance = &report.distance_analysis;
    let tenure = &report.tenure_analysis;
    let summary = &report.summary;

    html! {
        <>
            <div class="card-grid three">
                <div class="card tone-info">
                    <h3><i class="fa-solid fa-location-dot"></i>{" Distance Analysis"}</h3>
                    <p class="stat-value">{ format!("{} miles", fixed(distance.avg_distance, 1)) }</p>
                    <p class="muted">{"Average distance from home"}</p>
                    <p>
                        <strong>{ thousands(distance.remote_workers) }</strong>
                        {" employees work >30 miles away"}
                    </p>
                </div>
                <div class="card tone-positive">
                    <h3><i class="fa-solid fa-users"></i>{" Tenure Insights"}</h3>
                    <div class="metric-row">
                        <span>{"Avg Years at Company:"}</span>
                        <strong>{ fixed(tenure.avg_years_at_company, 1) }</strong>
                    </div>
                    <div class="metric-row">
                        <span>{"Avg Years in Role:"}</span>
                        <strong>{ fixed(tenure.avg_years_in_role, 1) }</strong>
                    </div>
                    <div class="metric-row">
                        <span>{"Avg Years Since Promotion:"}</span>
                        <strong>{ fixed(tenure.avg_years_since_promotion, 1) }</strong>
                    </div>
                    <div class="metric-row">
                        <span>{"Avg Years with Manager:"}</span>
                        <strong>{ fixed(tenure.avg_years_with_manager, 1) }</strong>
                    </div>
                </div>
                <div class="card tone-neutral">
                    <h3><i class="fa-solid fa-arrow-trend-down"></i>{" Key Metrics"}</h3>
                    <div class="metric-row">
                        <span>{"Attrition Rate:"}</span>
                        <strong class="tone-text-critical">{ percent(summary.attrition_rate) }</strong>
                    </div>
                    <div class="metric-row">
                        <span>{"Retention Rate:"}</span>
                        <strong class="tone-text-positive">{ percent(report.retention_rate()) }</strong>
                    </div>
                    <div class="metric-row">
                        <span>{"Avg Age:"}</span>
                        <strong>{ format!("{} years", fixed(summary.avg_age, 0)) }</strong>
                    </div>
                </div>
            </div>

            <div class="card">
                <h3><i class="fa-solid fa-circle-exclamation"></i>{" Insights & Recommendations"}</h3>
                { for report.narrative_insights().into_iter().map(|narrative| render_narrative(&narrative)) }
            </div>
        </>
    }
}

fn render_narrative(narrative: &Narrative) -> Html {
    html! {
        <div class={classes!("narrative", narrative.tone.css_class())}>
            <h4>{ narrative.title.clone() }</h4>
            <p>{ narrative.body.clone() }</p>
        </div>
    }
}
