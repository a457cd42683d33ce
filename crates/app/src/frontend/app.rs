//! Leptos components: form, category selector and table around one
//! `RwSignal<AppState>`.

use leptos::*;

use stockroom_core::ItemId;
use stockroom_inventory::{CategoryFilter, FormField};

use crate::intent::{FormEvent, Intent, TableIntent};
use crate::render::{EMPTY_STORE_MESSAGE, TableRow};
use crate::state::AppState;

/// Send one intent to the orchestrator and surface any error.
fn dispatch(state: RwSignal<AppState>, error: RwSignal<Option<String>>, intent: Intent) {
    match state.try_update(|s| s.dispatch(intent)) {
        Some(Ok(_)) => error.set(None),
        Some(Err(err)) => error.set(Some(err.to_string())),
        None => {}
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(AppState::new());
    let error = create_rw_signal(None::<String>);

    view! {
        <div class="app">
            <header>
                <h1>"Inventory Management"</h1>
                <button on:click=move |_| dispatch(state, error, Intent::AddNew)>
                    "Add New Item"
                </button>
            </header>

            <main>
                {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
                <InventoryForm state=state error=error/>
                <CategorySelect state=state error=error/>
                <InventoryTable state=state error=error/>
            </main>
        </div>
    }
}

/// Form shown while an edit session is open.
#[component]
fn InventoryForm(state: RwSignal<AppState>, error: RwSignal<Option<String>>) -> impl IntoView {
    // Rebuild the form only when the session opens, closes or changes target,
    // so typing does not recreate the inputs.
    let shape = create_memo(move |_| {
        state.with(|s| s.form_view().map(|form| (form.editing, form.submit_label)))
    });

    move || {
        shape.get().map(|(_, submit_label): (Option<ItemId>, &'static str)| {
            let fields = FormField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="form-group">
                            <label>{field.label()}</label>
                            <input
                                type=field.input_type()
                                min=field.min()
                                step=field.step()
                                prop:value=move || {
                                    state.with(|s| {
                                        s.session()
                                            .form()
                                            .map(|form| form.get(field).to_string())
                                            .unwrap_or_default()
                                    })
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    dispatch(state, error, FormEvent::SetField { field, value }.into());
                                }
                            />
                        </div>
                    }
                })
                .collect_view();

            view! {
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    dispatch(state, error, FormEvent::Submit.into());
                }>
                    {fields}
                    <div class="form-actions">
                        <button type="button" on:click=move |_| dispatch(state, error, FormEvent::Cancel.into())>
                            "Cancel"
                        </button>
                        <button type="submit">{submit_label}</button>
                    </div>
                </form>
            }
        })
    }
}

#[component]
fn CategorySelect(state: RwSignal<AppState>, error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="filter">
            <label for="category">"Filter by Category"</label>
            <select
                id="category"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    dispatch(state, error, Intent::SelectCategory(CategoryFilter::only(value)));
                }
            >
                {move || {
                    state
                        .with(|s| s.category_options())
                        .options
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.value selected=option.selected>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn InventoryTable(state: RwSignal<AppState>, error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        let table = state.with(|s| s.table_view());
        if table.empty_store {
            return view! { <p class="empty">{EMPTY_STORE_MESSAGE}</p> }.into_view();
        }

        let header = table.quantity_header();
        let rows = table
            .rows
            .into_iter()
            .map(|row| table_row(state, error, row))
            .collect_view();

        view! {
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th
                            class="sortable"
                            on:click=move |_| dispatch(state, error, TableIntent::ToggleSort.into())
                        >
                            {header}
                        </th>
                        <th>"Price"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_view()
    }
}

fn table_row(state: RwSignal<AppState>, error: RwSignal<Option<String>>, row: TableRow) -> impl IntoView {
    let id = row.id;
    let class = if row.low_stock { "low-stock" } else { "" };

    view! {
        <tr class=class>
            <td>{row.name}</td>
            <td><span class="category">{row.category}</span></td>
            <td>{row.quantity}</td>
            <td>{row.price}</td>
            <td>
                <button on:click=move |_| dispatch(state, error, TableIntent::Edit(id).into())>
                    "Edit"
                </button>
                <button on:click=move |_| dispatch(state, error, TableIntent::Delete(id).into())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
