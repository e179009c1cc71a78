use leptos::{html::Input, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

use super::api::{get_post_server, search_posts_server};
use crate::content::{GLOBAL_POST_CACHE, GLOBAL_SEARCH_CACHE};

#[component]
pub fn BlogWrapper() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <div class="text-center mb-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">
                <a href="/blog" class="hover:text-purple transition-colors duration-200">
                    "Notes"
                </a>
                <a
                    href="https://maraellison.dev/rss.xml"
                    target="_blank"
                    class="relative top-1 ml-4 text-brightYellow hover:text-yellow transition-colors duration-200"
                    aria-label="RSS Feed"
                >
                    <i class="extra-rss" />
                </a>
            </h1>
            <div class="max-w-2xl mx-auto text-lg font-medium text-muted section-content">
                "Essays on small-site craft: design, performance, and the business of building for the web."
            </div>
        </div>
        <div class="w-full max-w-4xl mx-auto text-left">
            <Outlet />
        </div>
    }
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let posts = Resource::new(search, move |search| async move {
        let cache = &*GLOBAL_SEARCH_CACHE;
        if let Some(s) = cache.get(&search) {
            return (*s).clone();
        }
        let posts = search_posts_server(search.clone())
            .await
            .unwrap_or(Vec::new());
        // only cache searches on the browser
        #[cfg(feature = "hydrate")]
        cache.insert(search, posts.clone());
        posts
    });

    view! {
        <Title text="All Posts" />
        <div class="mb-6">
            <form
                class="flex flex-col sm:flex-row gap-3 items-start sm:items-center"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let el = if let Some(el) = input_ref.get_untracked() {
                        el
                    } else {
                        return;
                    };
                    set_search(el.value());
                }
            >
                <label for="post_search" class="font-medium text-cyan whitespace-nowrap">
                    "Search (regex):"
                </label>
                <div class="flex-grow w-full sm:max-w-md">
                    <input
                        id="post_search"
                        class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground placeholder-muted transition-all duration-200"
                        node_ref=input_ref
                        placeholder="Try 'performance'..."
                    />
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200 whitespace-nowrap"
                >
                    "Search"
                </button>
            </form>
        </div>
        <div>
            <Transition fallback=move || {
                view! {
                    <div class="space-y-4">
                        <div class="loading-skeleton h-8 rounded"></div>
                        <div class="loading-skeleton h-6 rounded w-3/4"></div>
                        <div class="loading-skeleton h-8 rounded"></div>
                        <div class="loading-skeleton h-6 rounded w-2/3"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let posts = posts.await;
                    if posts.is_empty() {
                        return view! {
                            <div class="text-muted section-content">
                                "Nothing matched. Try a looser pattern."
                            </div>
                        }
                            .into_any();
                    }
                    view! {
                        <div class="space-y-4 section-content">
                            {posts
                                .into_iter()
                                .map(|post| {
                                    view! {
                                        <div class="mb-4 hover:bg-brightBlack/20 p-2 rounded-md transition-colors duration-200">
                                            <A attr:class="text-lg leading-tight block" href=post.slug>
                                                <div>
                                                    <span class="text-muted">
                                                        {format!("{}", post.date.format("%b %e %Y"))}
                                                    </span>
                                                    " "
                                                    <span class="text-blue font-medium">{post.title}</span>
                                                </div>
                                                <div class="text-sm text-muted mt-1">{post.description}</div>
                                                <div class="mt-1">
                                                    {post
                                                        .tags
                                                        .iter()
                                                        .map(|s| {
                                                            view! {
                                                                <span class="rounded-md px-2 py-1 bg-brightBlack mr-2 text-sm">
                                                                    {s.to_string()}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </A>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                })}
            </Transition>
        </div>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(slug, move |slug| async {
        // take ownership of slug
        let slug = slug;
        let cache = &*GLOBAL_POST_CACHE;
        if let Some(s) = cache.get(&slug) {
            return (*s)
                .clone()
                .ok_or(ServerFnError::new("Couldn't get post"));
        }
        let post_data = get_post_server(slug.clone()).await;
        cache.insert(slug, post_data.clone().ok());
        post_data
    });
    view! {
        <Title text="Post" />
        <div id="post_content">
            <Suspense>
                {move || Suspend::new(async move {
                    let rendered = post.await;
                    rendered
                        .map(|r| {
                            view! {
                                <div class="mb-6 p-4 bg-brightBlack/20 rounded-md border border-muted/30">
                                    <h1 class="text-2xl font-bold mb-2">{r.post.title}</h1>
                                    <div class="flex flex-wrap items-center gap-4 text-sm">
                                        <span class="text-cyan font-medium">{r.post.author}</span>
                                        <span class="text-yellow font-medium">
                                            {r.post.date.format("%b %e, %Y").to_string()}
                                        </span>
                                        <div class="flex flex-wrap gap-1">
                                            {r
                                                .post
                                                .tags
                                                .into_iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="bg-green/20 text-green px-2 py-1 rounded text-xs">
                                                            {tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                                <article class="prose prose-invert max-w-none">
                                    <div inner_html=r.html></div>
                                </article>
                            }
                        })
                })}
            </Suspense>
        </div>
    }
}
