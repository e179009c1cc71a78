use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use leptos::{html::Input, prelude::*};
use leptos_meta::Title;

use super::table_ui::{sort_glyph, Pagination};
use crate::app::api::{delete_portfolio_server, list_portfolio_server, save_portfolio_server};
use crate::content::{PortfolioField, PortfolioItem};
use crate::table::TableManager;

const PAGE_SIZE: usize = 5;

#[component]
pub fn AdminPortfolio() -> impl IntoView {
    let (version, set_version) = signal(0u32);
    let items = Resource::new(version, |_| async move {
        list_portfolio_server().await.unwrap_or_default()
    });
    let table = RwSignal::new(TableManager::<PortfolioItem>::new(Vec::new(), PAGE_SIZE));
    let (editing, set_editing) = signal(None::<PortfolioItem>);

    Effect::new(move |_| {
        if let Some(list) = items.get() {
            table.update(|t| t.set_records(list));
        }
    });

    let delete = Action::new(|id: &u32| {
        let id = *id;
        async move { delete_portfolio_server(id).await }
    });
    Effect::new(move |_| {
        if delete.value().get().is_some() {
            set_version.update(|v| *v += 1);
        }
    });

    let on_done = move || {
        set_editing(None);
        set_version.update(|v| *v += 1);
    };

    let header_button = move |label: &'static str, field: PortfolioField| {
        view! {
            <button
                class="font-medium hover:text-cyan"
                on:click=move |_| table.update(|t| t.request_sort(field))
            >
                {label}
                {move || table.with(|t| sort_glyph(t.sort_config(), field))}
            </button>
        }
    };

    view! {
        <Title text="Admin Portfolio" />
        <div class="section-content">
            <div class="flex items-center justify-between mb-4">
                <h2 class="font-bold text-xl">"Portfolio"</h2>
                <button
                    class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30"
                    on:click=move |_| set_editing(Some(blank_item()))
                >
                    "New item"
                </button>
            </div>
            {move || {
                editing
                    .get()
                    .map(|item| {
                        view! { <PortfolioEditor item on_done /> }
                    })
            }}
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="text-muted">
                        <th class="py-2 pr-4">{header_button("Title", PortfolioField::Title)}</th>
                        <th class="py-2 pr-4">
                            {header_button("Category", PortfolioField::Category)}
                        </th>
                        <th class="py-2 pr-4">{header_button("Date", PortfolioField::Date)}</th>
                        <th class="py-2 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = table
                            .with(|t| t.current_items().into_iter().cloned().collect::<Vec<_>>());
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="4" class="py-4 text-muted">
                                        "No portfolio items yet."
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|item| {
                                let edit_item = item.clone();
                                let id = item.id;
                                let date = item
                                    .date
                                    .map(|d| d.format("%b %Y").to_string())
                                    .unwrap_or_else(|| "ongoing".to_string());
                                view! {
                                    <tr class="border-t border-muted/20">
                                        <td class="py-2 pr-4">{item.title.clone()}</td>
                                        <td class="py-2 pr-4">{item.category.clone()}</td>
                                        <td class="py-2 pr-4">{date}</td>
                                        <td class="py-2 text-right whitespace-nowrap">
                                            <button
                                                class="text-cyan hover:underline mr-3"
                                                on:click=move |_| set_editing(Some(edit_item.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="text-red hover:underline"
                                                on:click=move |_| {
                                                    delete.dispatch(id);
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            {move || {
                let (current, count) = table.with(|t| (t.current_page(), t.page_count()));
                view! {
                    <Pagination
                        current
                        count
                        on_page=move |p| table.update(|t| t.set_page(p))
                    />
                }
            }}
        </div>
    }
}

fn blank_item() -> PortfolioItem {
    PortfolioItem {
        id: 0,
        title: String::new(),
        category: String::new(),
        summary: String::new(),
        date: None,
        url: None,
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| DateTime::from_naive_utc_and_offset(d.and_time(NaiveTime::MIN), Utc))
}

#[component]
fn PortfolioEditor<F>(item: PortfolioItem, on_done: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let title_ref = NodeRef::<Input>::new();
    let category_ref = NodeRef::<Input>::new();
    let summary_ref = NodeRef::<Input>::new();
    let date_ref = NodeRef::<Input>::new();
    let url_ref = NodeRef::<Input>::new();

    let save = Action::new(|item: &PortfolioItem| {
        let item = item.clone();
        async move { save_portfolio_server(item).await }
    });
    Effect::new(move |_| {
        if matches!(save.value().get(), Some(Ok(_))) {
            on_done();
        }
    });

    let base = StoredValue::new(item.clone());
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(title), Some(category), Some(summary), Some(date), Some(url)) = (
            title_ref.get_untracked(),
            category_ref.get_untracked(),
            summary_ref.get_untracked(),
            date_ref.get_untracked(),
            url_ref.get_untracked(),
        ) else {
            return;
        };
        let mut updated = base.get_value();
        updated.title = title.value();
        updated.category = category.value();
        updated.summary = summary.value();
        updated.date = parse_date(&date.value());
        let url = url.value();
        updated.url = (!url.trim().is_empty()).then(|| url.trim().to_string());
        save.dispatch(updated);
    };

    let date_value = item
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    view! {
        <form
            class="bg-brightBlack/20 p-5 rounded-md border border-muted/30 mb-6 grid grid-cols-1 md:grid-cols-2 gap-4"
            on:submit=submit
        >
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Title"</label>
                <input class="admin-input" node_ref=title_ref value=item.title.clone() />
            </div>
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Category"</label>
                <input class="admin-input" node_ref=category_ref value=item.category.clone() />
            </div>
            <div class="flex flex-col gap-1 md:col-span-2">
                <label class="text-sm text-muted">"Summary"</label>
                <input class="admin-input" node_ref=summary_ref value=item.summary.clone() />
            </div>
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Date (YYYY-MM-DD, blank for ongoing)"</label>
                <input class="admin-input" node_ref=date_ref value=date_value />
            </div>
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"URL (optional)"</label>
                <input class="admin-input" node_ref=url_ref value=item.url.clone().unwrap_or_default() />
            </div>
            <div class="flex gap-3 md:col-span-2">
                <button
                    type="submit"
                    class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 disabled:opacity-40"
                    prop:disabled=move || save.pending().get()
                >
                    "Save"
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md border border-muted/30 hover:border-muted"
                    on:click=move |_| on_done()
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
