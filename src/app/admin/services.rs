use leptos::{html::Input, prelude::*};
use leptos_meta::Title;

use super::table_ui::{sort_glyph, Pagination};
use crate::app::api::{delete_service_server, list_services_server, save_service_server};
use crate::content::{Service, ServiceField};
use crate::table::TableManager;

const PAGE_SIZE: usize = 5;

#[component]
pub fn AdminServices() -> impl IntoView {
    let (version, set_version) = signal(0u32);
    let services = Resource::new(version, |_| async move {
        list_services_server().await.unwrap_or_default()
    });
    let table = RwSignal::new(TableManager::<Service>::new(Vec::new(), PAGE_SIZE));
    let (editing, set_editing) = signal(None::<Service>);

    Effect::new(move |_| {
        if let Some(list) = services.get() {
            table.update(|t| t.set_records(list));
        }
    });

    let delete = Action::new(|id: &u32| {
        let id = *id;
        async move { delete_service_server(id).await }
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

    let header_button = move |label: &'static str, field: ServiceField| {
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
        <Title text="Admin Services" />
        <div class="section-content">
            <div class="flex items-center justify-between mb-4">
                <h2 class="font-bold text-xl">"Services"</h2>
                <button
                    class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30"
                    on:click=move |_| set_editing(Some(blank_service()))
                >
                    "New service"
                </button>
            </div>
            {move || {
                editing
                    .get()
                    .map(|service| {
                        view! { <ServiceEditor service on_done /> }
                    })
            }}
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="text-muted">
                        <th class="py-2 pr-4">{header_button("Name", ServiceField::Name)}</th>
                        <th class="py-2 pr-4">{header_button("Price", ServiceField::Price)}</th>
                        <th class="py-2 pr-4">
                            {header_button("Position", ServiceField::Position)}
                        </th>
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
                                        "No services yet."
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|service| {
                                let edit_service = service.clone();
                                let id = service.id;
                                let price = service
                                    .price
                                    .map(|p| format!("${p:.0}"))
                                    .unwrap_or_else(|| "by quote".to_string());
                                view! {
                                    <tr class="border-t border-muted/20">
                                        <td class="py-2 pr-4">{service.name.clone()}</td>
                                        <td class="py-2 pr-4">{price}</td>
                                        <td class="py-2 pr-4">{service.position}</td>
                                        <td class="py-2 text-right whitespace-nowrap">
                                            <button
                                                class="text-cyan hover:underline mr-3"
                                                on:click=move |_| set_editing(Some(edit_service.clone()))
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

fn blank_service() -> Service {
    Service {
        id: 0,
        name: String::new(),
        summary: String::new(),
        price: None,
        position: 0,
    }
}

#[component]
fn ServiceEditor<F>(service: Service, on_done: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let name_ref = NodeRef::<Input>::new();
    let summary_ref = NodeRef::<Input>::new();
    let price_ref = NodeRef::<Input>::new();
    let position_ref = NodeRef::<Input>::new();

    let save = Action::new(|service: &Service| {
        let service = service.clone();
        async move { save_service_server(service).await }
    });
    Effect::new(move |_| {
        if matches!(save.value().get(), Some(Ok(_))) {
            on_done();
        }
    });

    let base = StoredValue::new(service.clone());
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(summary), Some(price), Some(position)) = (
            name_ref.get_untracked(),
            summary_ref.get_untracked(),
            price_ref.get_untracked(),
            position_ref.get_untracked(),
        ) else {
            return;
        };
        let mut updated = base.get_value();
        updated.name = name.value();
        updated.summary = summary.value();
        updated.price = price.value().trim().parse::<f64>().ok();
        updated.position = position.value().trim().parse::<u32>().unwrap_or(0);
        save.dispatch(updated);
    };

    let price_value = service
        .price
        .map(|p| format!("{p:.0}"))
        .unwrap_or_default();

    view! {
        <form
            class="bg-brightBlack/20 p-5 rounded-md border border-muted/30 mb-6 grid grid-cols-1 md:grid-cols-2 gap-4"
            on:submit=submit
        >
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Name"</label>
                <input class="admin-input" node_ref=name_ref value=service.name.clone() />
            </div>
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Position"</label>
                <input class="admin-input" node_ref=position_ref value=service.position.to_string() />
            </div>
            <div class="flex flex-col gap-1 md:col-span-2">
                <label class="text-sm text-muted">"Summary"</label>
                <input class="admin-input" node_ref=summary_ref value=service.summary.clone() />
            </div>
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Price in dollars (blank for quote-only)"</label>
                <input class="admin-input" node_ref=price_ref value=price_value />
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
