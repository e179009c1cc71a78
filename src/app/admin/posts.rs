use chrono::Utc;
use leptos::{
    html::{Input, Textarea},
    prelude::*,
};
use leptos_meta::Title;

use super::table_ui::{sort_glyph, Pagination};
use crate::app::api::{delete_post_server, list_posts_server, save_post_server};
use crate::content::{Post, PostField};
use crate::table::TableManager;

const PAGE_SIZE: usize = 5;

#[component]
pub fn AdminPosts() -> impl IntoView {
    let (version, set_version) = signal(0u32);
    let posts = Resource::new(version, |_| async move {
        list_posts_server().await.unwrap_or_default()
    });
    let table = RwSignal::new(TableManager::<Post>::new(Vec::new(), PAGE_SIZE));
    let (editing, set_editing) = signal(None::<Post>);

    // push each fresh fetch into the table; sort and page state carry over
    Effect::new(move |_| {
        if let Some(list) = posts.get() {
            table.update(|t| t.set_records(list));
        }
    });

    let delete = Action::new(|id: &u32| {
        let id = *id;
        async move { delete_post_server(id).await }
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

    let header_button = move |label: &'static str, field: PostField| {
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
        <Title text="Admin Posts" />
        <div class="section-content">
            <div class="flex items-center justify-between mb-4">
                <h2 class="font-bold text-xl">"Posts"</h2>
                <button
                    class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30"
                    on:click=move |_| set_editing(Some(blank_post()))
                >
                    "New post"
                </button>
            </div>
            {move || {
                editing
                    .get()
                    .map(|post| {
                        view! { <PostEditor post on_done /> }
                    })
            }}
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="text-muted">
                        <th class="py-2 pr-4">{header_button("Title", PostField::Title)}</th>
                        <th class="py-2 pr-4">{header_button("Author", PostField::Author)}</th>
                        <th class="py-2 pr-4">{header_button("Date", PostField::Date)}</th>
                        <th class="py-2 pr-4">"Status"</th>
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
                                    <td colspan="5" class="py-4 text-muted">
                                        "No posts yet."
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|post| {
                                let edit_post = post.clone();
                                let id = post.id;
                                view! {
                                    <tr class="border-t border-muted/20">
                                        <td class="py-2 pr-4">{post.title.clone()}</td>
                                        <td class="py-2 pr-4">{post.author.clone()}</td>
                                        <td class="py-2 pr-4">
                                            {post.date.format("%b %e %Y").to_string()}
                                        </td>
                                        <td class="py-2 pr-4">
                                            {if post.published { "live" } else { "draft" }}
                                        </td>
                                        <td class="py-2 text-right whitespace-nowrap">
                                            <button
                                                class="text-cyan hover:underline mr-3"
                                                on:click=move |_| set_editing(Some(edit_post.clone()))
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

fn blank_post() -> Post {
    Post {
        id: 0,
        slug: String::new(),
        title: String::new(),
        description: String::new(),
        author: "Mara Ellison".to_string(),
        date: Utc::now(),
        tags: Vec::new(),
        published: false,
        body: String::new(),
    }
}

#[component]
fn PostEditor<F>(post: Post, on_done: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let title_ref = NodeRef::<Input>::new();
    let description_ref = NodeRef::<Input>::new();
    let author_ref = NodeRef::<Input>::new();
    let tags_ref = NodeRef::<Input>::new();
    let published_ref = NodeRef::<Input>::new();
    let body_ref = NodeRef::<Textarea>::new();

    let save = Action::new(|post: &Post| {
        let post = post.clone();
        async move { save_post_server(post).await }
    });
    Effect::new(move |_| {
        if matches!(save.value().get(), Some(Ok(_))) {
            on_done();
        }
    });

    let base = StoredValue::new(post.clone());
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(title), Some(description), Some(author), Some(tags), Some(published), Some(body)) = (
            title_ref.get_untracked(),
            description_ref.get_untracked(),
            author_ref.get_untracked(),
            tags_ref.get_untracked(),
            published_ref.get_untracked(),
            body_ref.get_untracked(),
        ) else {
            return;
        };
        let mut updated = base.get_value();
        updated.title = title.value();
        updated.description = description.value();
        updated.author = author.value();
        updated.tags = tags
            .value()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        updated.published = published.checked();
        updated.body = body.value();
        save.dispatch(updated);
    };

    view! {
        <form
            class="bg-brightBlack/20 p-5 rounded-md border border-muted/30 mb-6 grid grid-cols-1 md:grid-cols-2 gap-4"
            on:submit=submit
        >
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Title"</label>
                <input class="admin-input" node_ref=title_ref value=post.title.clone() />
            </div>
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Author"</label>
                <input class="admin-input" node_ref=author_ref value=post.author.clone() />
            </div>
            <div class="flex flex-col gap-1 md:col-span-2">
                <label class="text-sm text-muted">"Description"</label>
                <input class="admin-input" node_ref=description_ref value=post.description.clone() />
            </div>
            <div class="flex flex-col gap-1">
                <label class="text-sm text-muted">"Tags (comma separated)"</label>
                <input class="admin-input" node_ref=tags_ref value=post.tags.join(", ") />
            </div>
            <div class="flex items-center gap-2 mt-5">
                <input
                    type="checkbox"
                    node_ref=published_ref
                    prop:checked=post.published
                    id="post_published"
                />
                <label for="post_published" class="text-sm">
                    "Published"
                </label>
            </div>
            <div class="flex flex-col gap-1 md:col-span-2">
                <label class="text-sm text-muted">"Body (markdown)"</label>
                <textarea class="admin-input h-48 font-mono" node_ref=body_ref prop:value=post.body.clone()></textarea>
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
