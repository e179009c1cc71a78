mod login;
mod portfolio;
mod posts;
mod services;
mod table_ui;

pub use portfolio::AdminPortfolio;
pub use posts::AdminPosts;
pub use services::AdminServices;

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::components::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use login::AdminLogin;

/// Whether the admin is signed in, shared with every admin surface.
#[derive(Clone, Copy)]
pub struct AdminSession(pub RwSignal<bool>);

#[component]
pub fn AdminWrapper() -> impl IntoView {
    let session = RwSignal::new(false);
    provide_context(AdminSession(session));

    // keep the signed-in flag across reloads on the browser
    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<bool, JsonSerdeWasmCodec>("admin_session");
        Effect::watch(
            || (),
            move |_, _, _| {
                session.set(stored.get_untracked());
            },
            true,
        );
        Effect::new(move |_| {
            set_stored.set(session.get());
        });
    }

    view! {
        <Title text="Admin" />
        <div class="w-full max-w-5xl mx-auto text-left">
            <div class="flex flex-wrap items-center justify-between mb-6">
                <h1 class="font-bold text-2xl">"Site admin"</h1>
                {move || {
                    session
                        .get()
                        .then(|| {
                            view! {
                                <nav class="flex gap-4 text-sm font-medium items-center">
                                    <A href="/admin" attr:class="hover:text-cyan">
                                        "Overview"
                                    </A>
                                    <A href="/admin/posts" attr:class="hover:text-cyan">
                                        "Posts"
                                    </A>
                                    <A href="/admin/portfolio" attr:class="hover:text-cyan">
                                        "Portfolio"
                                    </A>
                                    <A href="/admin/services" attr:class="hover:text-cyan">
                                        "Services"
                                    </A>
                                    <button
                                        class="text-muted hover:text-red"
                                        on:click=move |_| session.set(false)
                                    >
                                        "Sign out"
                                    </button>
                                </nav>
                            }
                        })
                }}
            </div>
            {move || {
                if session.get() {
                    Either::Left(view! { <Outlet /> })
                } else {
                    Either::Right(view! { <AdminLogin /> })
                }
            }}
        </div>
    }
}

#[component]
pub fn AdminOverview() -> impl IntoView {
    view! {
        <Title text="Admin Overview" />
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 section-content">
            <A href="/admin/posts">
                <div class="bg-brightBlack/20 p-5 rounded-md border border-muted/30 hover:border-cyan/40 transition-colors duration-200">
                    <h2 class="font-bold text-lg mb-2">"Posts"</h2>
                    <p class="text-sm text-muted">
                        "Write, edit, and publish notes. Drafts stay off the public blog."
                    </p>
                </div>
            </A>
            <A href="/admin/portfolio">
                <div class="bg-brightBlack/20 p-5 rounded-md border border-muted/30 hover:border-cyan/40 transition-colors duration-200">
                    <h2 class="font-bold text-lg mb-2">"Portfolio"</h2>
                    <p class="text-sm text-muted">
                        "Keep the selected-work grid current. Undated entries read as ongoing."
                    </p>
                </div>
            </A>
            <A href="/admin/services">
                <div class="bg-brightBlack/20 p-5 rounded-md border border-muted/30 hover:border-cyan/40 transition-colors duration-200">
                    <h2 class="font-bold text-lg mb-2">"Services"</h2>
                    <p class="text-sm text-muted">
                        "Adjust offerings, prices, and their order on the landing page."
                    </p>
                </div>
            </A>
        </div>
    }
}
