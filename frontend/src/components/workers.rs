use super::utils::{confirm, input_value, render_error_message, render_loading};
use super::widgets::StatCard;
use crate::hooks::{use_backend, use_fetch};
use shared::client::{load_workers, remove_worker, save_worker};
use shared::filter::{filter_records, Page, DEFAULT_PAGE_SIZE};
use shared::thresholds::Tone;
use shared::workers::{Department, RosterStats, Worker, WorkerColumn, WorkerForm, WorkerSort};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Open add/edit dialog. `editing` is the employee number being edited.
#[derive(Debug, Clone, PartialEq, Default)]
struct WorkerDialog {
    editing: Option<i64>,
    form: WorkerForm,
    error: Option<String>,
}

#[function_component(WorkerManagement)]
pub fn worker_management() -> Html {
    let backend = use_backend();
    let fetch = {
        let backend = backend.clone();
        use_fetch(move || {
            let backend = backend.clone();
            async move { load_workers(&backend).await }
        })
    };
    let query = use_state(String::new);
    let sort = use_state(WorkerSort::default);
    let page = use_state(|| 0usize);
    let dialog = use_state(|| None::<WorkerDialog>);
    let saving = use_state(|| false);

    let on_search = {
        let query = query.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            query.set(input_value(&e));
            page.set(0);
        })
    };

    let on_add = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Some(WorkerDialog::default())))
    };

    let on_edit = {
        let dialog = dialog.clone();
        Callback::from(move |worker: Worker| {
            dialog.set(Some(WorkerDialog {
                editing: Some(worker.id),
                form: WorkerForm::from_worker(&worker),
                error: None,
            }))
        })
    };

    let on_delete = {
        let backend = backend.clone();
        let fetch = fetch.clone();
        Callback::from(move |id: i64| {
            if !confirm("Are you sure you want to delete this worker?") {
                return;
            }
            fetch.begin();
            let backend = backend.clone();
            let apply = fetch.apply();
            spawn_local(async move {
                match remove_worker(&backend, id).await {
                    Ok(outcome) => apply.emit(outcome.workers),
                    Err(err) => {
                        log::error!("❌ Failed to delete worker {}: {}", id, err);
                        apply.emit(Err(err));
                    }
                }
            });
        })
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(None))
    };

    let on_submit = {
        let backend = backend.clone();
        let dialog = dialog.clone();
        let saving = saving.clone();
        let apply = fetch.apply();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(current) = (*dialog).clone() else {
                return;
            };

            let missing = current.form.required_missing();
            if !missing.is_empty() {
                dialog.set(Some(WorkerDialog {
                    error: Some(format!("Please fill in: {}", missing.join(", "))),
                    ..current
                }));
                return;
            }

            saving.set(true);
            let backend = backend.clone();
            let dialog = dialog.clone();
            let saving = saving.clone();
            let apply = apply.clone();
            spawn_local(async move {
                let result = save_worker(&backend, current.editing, &current.form).await;
                match result {
                    Ok(outcome) => {
                        log::info!("✅ Saved worker {}", outcome.ack.employee_number);
                        dialog.set(None);
                        apply.emit(outcome.workers);
                    }
                    Err(err) => {
                        log::error!("❌ Failed to save worker: {}", err);
                        dialog.set(Some(WorkerDialog {
                            error: Some(err.to_string()),
                            ..current
                        }));
                    }
                }
                saving.set(false);
            });
        })
    };

    let state = fetch.state();
    let Some(workers) = &state.data else {
        if state.error.is_some() {
            return render_error_message(&state.error, Some(fetch.reload()));
        }
        return render_loading("Loading workers...");
    };

    let stats = RosterStats::from_workers(workers);
    let mut rows = filter_records(workers, &query);
    sort.apply(&mut rows);
    let current_page = Page::of(&rows, *page, DEFAULT_PAGE_SIZE);

    html! {
        <section class="screen">
            <div class="screen-header">
                <h2><i class="fa-solid fa-users-gear"></i>{" Worker Management"}</h2>
            </div>

            { render_error_message(&state.error, Some(fetch.reload())) }

            <div class="toolbar">
                <div class="search">
                    <i class="fa-solid fa-magnifying-glass"></i>
                    <input
                        type="text"
                        placeholder="Search workers..."
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                </div>
                <button class="btn btn-primary" onclick={on_add}>
                    <i class="fa-solid fa-plus"></i>{" Add Worker"}
                </button>
            </div>

            <div class="card-grid three">
                <StatCard title="Total Workers" value={stats.total.to_string()} icon="fa-users" tone={Tone::Info} />
                <StatCard title="Departments" value={stats.departments.to_string()} icon="fa-sitemap" tone={Tone::Positive} />
                <StatCard title="Avg Experience" value={stats.average_years_label()} icon="fa-briefcase" tone={Tone::Neutral} />
            </div>

            <div class={classes!("table-wrap", state.loading.then_some("is-loading"))}>
                <table class="data-table">
                    <thead>
                        <tr>
                            { for WorkerColumn::iter().map(|column| render_header_cell(column, &sort)) }
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if current_page.items.is_empty() {
                            <tr><td colspan="9" class="empty-state">{"No workers found"}</td></tr>
                        } else {
                            { for current_page.items.iter().map(|worker| render_row(worker, &on_edit, &on_delete)) }
                        }
                    </tbody>
                </table>
            </div>

            { render_pager(&current_page, &page) }

            if let Some(open) = &*dialog {
                { render_dialog(open, &dialog, *saving, on_submit.clone(), on_close.clone()) }
            }
        </section>
    }
}

fn render_header_cell(column: WorkerColumn, sort: &UseStateHandle<WorkerSort>) -> Html {
    let indicator = if sort.column != column {
        ""
    } else if sort.ascending {
        " ▲"
    } else {
        " ▼"
    };
    let onclick = {
        let sort = sort.clone();
        Callback::from(move |_: MouseEvent| sort.set(sort.toggle(column)))
    };

    html! {
        <th class="sortable" {onclick}>{ format!("{}{}", column.header(), indicator) }</th>
    }
}

fn render_row(worker: &Worker, on_edit: &Callback<Worker>, on_delete: &Callback<i64>) -> Html {
    let edit = {
        let on_edit = on_edit.clone();
        let worker = worker.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(worker.clone()))
    };
    let delete = {
        let on_delete = on_delete.clone();
        let id = worker.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <tr key={worker.id}>
            <td>{ worker.id.to_string() }</td>
            <td>{ worker.name.clone() }</td>
            <td>{ worker.email.clone() }</td>
            <td>{ worker.phone.clone() }</td>
            <td>{ worker.department.clone() }</td>
            <td>{ worker.job_role.clone() }</td>
            <td>{ worker.years_at_company.to_string() }</td>
            <td>{ worker.income_label() }</td>
            <td class="row-actions">
                <button class="btn btn-outline btn-small" title="Edit" onclick={edit}>
                    <i class="fa-solid fa-pen"></i>
                </button>
                <button class="btn btn-outline btn-small btn-danger" title="Delete" onclick={delete}>
                    <i class="fa-solid fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}

fn render_pager(current: &Page<'_, &Worker>, page: &UseStateHandle<usize>) -> Html {
    let previous = {
        let page = page.clone();
        let index = current.index;
        Callback::from(move |_: MouseEvent| page.set(index.saturating_sub(1)))
    };
    let next = {
        let page = page.clone();
        let index = current.index;
        Callback::from(move |_: MouseEvent| page.set(index + 1))
    };

    html! {
        <div class="pager">
            <button class="btn btn-outline btn-small" onclick={previous} disabled={!current.has_previous()}>
                {"Previous"}
            </button>
            <span>{ format!("Page {} of {} ({} workers)", current.index + 1, current.count, current.total) }</span>
            <button class="btn btn-outline btn-small" onclick={next} disabled={!current.has_next()}>
                {"Next"}
            </button>
        </div>
    }
}

fn form_input(
    dialog: &UseStateHandle<Option<WorkerDialog>>,
    update: fn(&mut WorkerForm, String),
) -> Callback<InputEvent> {
    let dialog = dialog.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(mut open) = (*dialog).clone() {
            update(&mut open.form, input_value(&e));
            dialog.set(Some(open));
        }
    })
}

fn render_dialog(
    open: &WorkerDialog,
    dialog: &UseStateHandle<Option<WorkerDialog>>,
    saving: bool,
    on_submit: Callback<SubmitEvent>,
    on_close: Callback<MouseEvent>,
) -> Html {
    let form = &open.form;
    let on_department = {
        let dialog = dialog.clone();
        Callback::from(move |e: Event| {
            if let Some(mut open) = (*dialog).clone() {
                open.form.department = e.target_unchecked_into::<HtmlSelectElement>().value();
                dialog.set(Some(open));
            }
        })
    };
    let submit_label = match (saving, open.editing) {
        (true, _) => "Saving...",
        (false, Some(_)) => "Update Worker",
        (false, None) => "Add Worker",
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>{ if open.editing.is_some() { "Edit Worker" } else { "Add New Worker" } }</h3>
                    <button class="btn btn-icon" title="Close" onclick={on_close}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <form class="worker-form" onsubmit={on_submit}>
                    <label for="name">{"Full Name"}</label>
                    <input id="name" type="text" placeholder="Enter full name" required=true
                        value={form.name.clone()} oninput={form_input(dialog, |f, v| f.name = v)} />

                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" placeholder="Enter email address" required=true
                        value={form.email.clone()} oninput={form_input(dialog, |f, v| f.email = v)} />

                    <label for="phone">{"Phone Number"}</label>
                    <input id="phone" type="text" placeholder="Enter phone number" required=true
                        value={form.phone.clone()} oninput={form_input(dialog, |f, v| f.phone = v)} />

                    <label for="department">{"Department"}</label>
                    <select id="department" onchange={on_department}>
                        <option value="" selected={form.department.is_empty()}>{"Select department"}</option>
                        { for Department::iter().map(|department| {
                            let name = department.to_string();
                            html! {
                                <option value={name.clone()} selected={form.department == name}>{ name.clone() }</option>
                            }
                        })}
                    </select>

                    <label for="skills">{"Skills"}</label>
                    <input id="skills" type="text" placeholder="Enter worker skills (comma-separated)"
                        value={form.skills.clone()} oninput={form_input(dialog, |f, v| f.skills = v)} />

                    <label for="experience">{"Years of Experience"}</label>
                    <input id="experience" type="number" min="0" max="40" placeholder="Enter years" required=true
                        value={form.experience.clone()} oninput={form_input(dialog, |f, v| f.experience = v)} />

                    if let Some(error) = &open.error {
                        <p class="form-error">{ error.clone() }</p>
                    }

                    <button type="submit" class="btn btn-primary btn-block" disabled={saving}>
                        { submit_label }
                    </button>
                </form>
            </div>
        </div>
    }
}
