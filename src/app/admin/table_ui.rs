use leptos::prelude::*;

use crate::table::{SortConfig, SortDirection};

/// Glyph for a column header: blank when the column isn't the active sort.
pub fn sort_glyph<K: PartialEq>(config: Option<SortConfig<K>>, key: K) -> &'static str {
    match config {
        Some(c) if c.key == key => match c.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => "",
    }
}

/// Numbered page buttons with prev/next. Renders nothing when there is at
/// most one page.
#[component]
pub fn Pagination<F>(current: usize, count: usize, on_page: F) -> impl IntoView
where
    F: Fn(usize) + Copy + 'static,
{
    (count > 1).then(|| {
        let at_start = current <= 1;
        let at_end = current >= count;
        let prev = current.saturating_sub(1).max(1);
        let next = (current + 1).min(count);
        view! {
            <nav class="flex items-center gap-2 mt-4 text-sm" aria-label="Pagination">
                <button
                    class="px-3 py-1 rounded-md border border-muted/30 disabled:opacity-40"
                    prop:disabled=at_start
                    on:click=move |_| on_page(prev)
                >
                    "Prev"
                </button>
                {(1..=count)
                    .map(|p| {
                        let active = p == current;
                        view! {
                            <button
                                class=move || {
                                    if active {
                                        "px-3 py-1 rounded-md bg-cyan/20 text-cyan border border-cyan/30"
                                    } else {
                                        "px-3 py-1 rounded-md border border-muted/30 hover:border-muted"
                                    }
                                }
                                on:click=move |_| on_page(p)
                            >
                                {p}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="px-3 py-1 rounded-md border border-muted/30 disabled:opacity-40"
                    prop:disabled=at_end
                    on:click=move |_| on_page(next)
                >
                    "Next"
                </button>
            </nav>
        }
    })
}
