use super::utils::{input_value, render_loading};
use super::widgets::{Badge, ProgressBar, TabBar};
use crate::hooks::{use_backend, use_fetch};
use shared::client::load_evaluation_roster;
use shared::evaluation::{comparison_rows, initials, score_band, Employee};
use shared::filter::filter_records;
use shared::format::percent;
use shared::thresholds::Tone;
use shared::ApiError;
use yew::prelude::*;

const TABS: [&str; 4] = ["Overview", "Skills", "Performance", "Resume"];

#[function_component(EmployeeEvaluation)]
pub fn employee_evaluation() -> Html {
    let backend = use_backend();
    let fetch = {
        let backend = backend.clone();
        use_fetch(move || {
            let backend = backend.clone();
            async move { Ok::<_, ApiError>(load_evaluation_roster(&backend).await) }
        })
    };
    let selected = use_state(|| None::<i64>);
    let query = use_state(String::new);
    let tab = use_state(|| 0usize);
    let comparing = use_state(|| false);

    let state = fetch.state();
    let Some(roster) = &state.data else {
        return render_loading("Loading employee data...");
    };
    if roster.employees.is_empty() {
        return html! { <p class="empty-state">{"No employees found"}</p> };
    }

    let current = (*selected)
        .and_then(|id| roster.employees.iter().find(|employee| employee.id == id))
        .unwrap_or(&roster.employees[0]);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| query.set(input_value(&e)))
    };
    let on_refresh = {
        let reload = fetch.reload();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };
    let on_compare = {
        let comparing = comparing.clone();
        Callback::from(move |_: MouseEvent| comparing.set(!*comparing))
    };
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index| tab.set(index))
    };

    html! {
        <section class="screen">
            <div class="screen-header">
                <div>
                    <h2><i class="fa-solid fa-user-check"></i>{" Employee Evaluation"}</h2>
                    if roster.from_samples {
                        <p class="subtitle" title={roster.error.clone()}>{"Sample employee data"}</p>
                    }
                </div>
                <div class="screen-actions">
                    <button class="btn btn-outline" onclick={on_refresh}>
                        <i class="fa-solid fa-calendar"></i>{" Refresh"}
                    </button>
                    <button class={classes!("btn", "btn-outline", (*comparing).then_some("active"))} onclick={on_compare}>
                        <i class="fa-solid fa-users"></i>{" Compare Employees"}
                    </button>
                </div>
            </div>

            if *comparing {
                { render_comparison(&roster.employees) }
            }

            <div class="evaluation-layout">
                <aside class="card employee-list">
                    <h3><i class="fa-solid fa-user"></i>{" Employees"}</h3>
                    <input type="text" placeholder="Search employees" value={(*query).clone()} oninput={on_search} />
                    <div class="scroll-list">
                        { for filter_records(&roster.employees, &query).into_iter().map(|employee| {
                            let onclick = {
                                let selected = selected.clone();
                                let id = employee.id;
                                Callback::from(move |_: MouseEvent| selected.set(Some(id)))
                            };
                            html! {
                                <div
                                    key={employee.id}
                                    class={classes!("employee-item", (employee.id == current.id).then_some("selected"))}
                                    {onclick}
                                >
                                    <span class="avatar">{ initials(&employee.name) }</span>
                                    <div>
                                        <p class="employee-name">{ employee.name.clone() }</p>
                                        <p class="muted">{ employee.role.clone() }</p>
                                        <Badge text={employee.job_fit.clone()} tone={employee.fit().tone()} />
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                </aside>

                <div class="employee-detail">
                    <TabBar tabs={TABS.to_vec()} active={*tab} on_select={on_tab} />
                    {
                        match *tab {
                            1 => render_skills(current),
                            2 => render_weekly(current),
                            3 => render_resume(current),
                            _ => render_overview(current),
                        }
                    }
                </div>
            </div>
        </section>
    }
}

fn render_overview(employee: &Employee) -> Html {
    html! {
        <div class="card">
            <div class="profile-header">
                <span class="avatar avatar-large">{ initials(&employee.name) }</span>
                <div>
                    <h3>{ employee.name.clone() }</h3>
                    <p>{ employee.role.clone() }</p>
                    <p class="muted">{ employee.department.clone() }</p>
                </div>
                <div class="fit-score">
                    <Badge text={employee.job_fit.clone()} tone={employee.fit().tone()} />
                    <p class="stat-value">{ percent(employee.fit_score) }</p>
                    <p class="muted">{"Job Fit Score"}</p>
                </div>
            </div>

            <div class="card-grid two">
                <div>
                    <h4>{"Contact Information"}</h4>
                    <p><strong>{"Email: "}</strong>{ employee.email.clone() }</p>
                    <p><strong>{"Phone: "}</strong>{ employee.phone.clone() }</p>
                    <p><strong>{"Experience: "}</strong>{ employee.experience.clone() }</p>
                </div>
                <div>
                    <h4>{"Performance Summary"}</h4>
                    { for employee.performance.entries().into_iter().map(|(label, score)| html! {
                        <div class="metric-row">
                            <span>{ format!("{}:", label) }</span>
                            <div class="inline-progress">
                                <ProgressBar value={score} tone={score_band(score).tone()} />
                                <span>{ percent(score) }</span>
                            </div>
                        </div>
                    })}
                </div>
            </div>

            if !employee.recommendations.is_empty() {
                <div>
                    <h4><i class="fa-solid fa-book-open"></i>{" Training Recommendations"}</h4>
                    <div class="badge-row">
                        { for employee.recommendations.iter().map(|recommendation| html! {
                            <Badge text={recommendation.clone()} tone={Tone::Caution} />
                        })}
                    </div>
                </div>
            }
        </div>
    }
}

fn render_skills(employee: &Employee) -> Html {
    html! {
        <div class="card">
            <h3>{"Skills Assessment"}</h3>
            { for employee.skills.iter().map(|skill| {
                let tone = skill.band().tone();
                html! {
                    <div class="skill-row">
                        <div class="metric-row">
                            <span class="skill-name">{ skill.name.clone() }</span>
                            <span>
                                <strong class={tone.text_class()}>
                                    { percent(skill.level) }
                                </strong>
                                <span class="muted">{ format!(" (Required: {}%)", skill.required) }</span>
                            </span>
                        </div>
                        <div class="skill-bars">
                            <ProgressBar value={skill.required} tone={Tone::Neutral} />
                            <ProgressBar value={skill.level} tone={if skill.gap().is_some() { Tone::Critical } else { Tone::Positive }} />
                        </div>
                        if let Some(gap) = skill.gap() {
                            <p class="tone-text-caution">
                                <i class="fa-solid fa-triangle-exclamation"></i>
                                { format!(" Gap: {}% - Training recommended", gap) }
                            </p>
                        }
                    </div>
                }
            })}
        </div>
    }
}

fn render_weekly(employee: &Employee) -> Html {
    html! {
        <div class="card">
            <h3><i class="fa-solid fa-arrow-trend-up"></i>{" Performance Tracking"}</h3>
            <h4>{"Weekly Performance Trend"}</h4>
            { for employee.weekly_data.iter().map(|week| html! {
                <div class="week-row">
                    <strong>{ week.week.clone() }</strong>
                    <div><span class="muted">{"Productivity"}</span><p>{ percent(week.productivity) }</p></div>
                    <div><span class="muted">{"Quality"}</span><p>{ percent(week.quality) }</p></div>
                    <div><span class="muted">{"Safety"}</span><p>{ percent(week.safety) }</p></div>
                </div>
            })}
        </div>
    }
}

fn render_resume(employee: &Employee) -> Html {
    let resume = &employee.resume;
    html! {
        <div class="card">
            <h3><i class="fa-solid fa-file-lines"></i>{" Resume & Background"}</h3>
            <h4>{"Education"}</h4>
            <p>{ resume.education.clone() }</p>
            <h4>{"Certifications"}</h4>
            <div class="badge-row">
                { for resume.certifications.iter().map(|certification| html! {
                    <Badge text={certification.clone()} tone={Tone::Info} />
                })}
            </div>
            <h4>{"Previous Roles"}</h4>
            <ul class="plain-list">
                { for resume.previous_roles.iter().map(|role| html! {
                    <li><i class="fa-solid fa-circle-check tone-text-positive"></i>{ format!(" {}", role) }</li>
                })}
            </ul>
        </div>
    }
}

fn render_comparison(employees: &[Employee]) -> Html {
    html! {
        <div class="card">
            <h3>{"Employee Comparison"}</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Role"}</th>
                        <th>{"Job Fit"}</th>
                        <th>{"Fit Score"}</th>
                        <th>{"Avg Performance"}</th>
                        <th>{"Skills Below Required"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for comparison_rows(employees).into_iter().map(|row| html! {
                        <tr key={row.id}>
                            <td>{ row.name }</td>
                            <td>{ row.role }</td>
                            <td><Badge text={row.job_fit} tone={row.fit.tone()} /></td>
                            <td>{ percent(row.fit_score) }</td>
                            <td>
                                <ProgressBar value={row.average_performance} tone={score_band(row.average_performance).tone()} />
                                { percent(row.average_performance) }
                            </td>
                            <td>{ row.skills_below_required.to_string() }</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
