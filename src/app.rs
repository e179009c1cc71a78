mod admin;
mod api;
mod blog;
mod homepage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use admin::{AdminOverview, AdminPortfolio, AdminPosts, AdminServices, AdminWrapper};
use blog::{BlogHome, BlogPage, BlogWrapper};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="alternate" type="application/rss+xml" title="Mara Ellison's Notes" href="/rss.xml" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Mara Ellison - {title}") />

        <Router>
            <SiteHeader />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <ParentRoute path=path!("/blog") view=BlogWrapper>
                        <Route path=path!("") view=BlogHome />
                        <Route path=path!(":post") view=BlogPage />
                    </ParentRoute>
                    <ParentRoute path=path!("/admin") view=AdminWrapper>
                        <Route path=path!("") view=AdminOverview />
                        <Route path=path!("posts") view=AdminPosts />
                        <Route path=path!("portfolio") view=AdminPortfolio />
                        <Route path=path!("services") view=AdminServices />
                    </ParentRoute>
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    view! {
        <header class="shadow-lg">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex flex-wrap items-center justify-between">
                <A href="/" attr:class="text-2xl font-bold">
                    "Mara Ellison"
                    <span class="text-muted font-normal ml-2 hidden sm:inline">
                        "design & build"
                    </span>
                </A>
                <nav class="flex gap-4 text-sm font-medium">
                    <A href="/#services" attr:class="hover:text-cyan transition-colors duration-200">
                        "Services"
                    </A>
                    <A href="/#work" attr:class="hover:text-cyan transition-colors duration-200">
                        "Work"
                    </A>
                    <A href="/blog" attr:class="hover:text-cyan transition-colors duration-200">
                        "Blog"
                    </A>
                    <A href="/#contact" attr:class="hover:text-cyan transition-colors duration-200">
                        "Contact"
                    </A>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="mt-16 border-t border-muted/30">
            <div class="mx-auto max-w-7xl px-4 py-6 flex flex-wrap justify-between text-sm text-muted">
                <span>"© Mara Ellison. All words mine, typos included."</span>
                <span>
                    <a href="/rss.xml" class="hover:text-yellow">"RSS"</a>
                    " · built " {env!("BUILD_TIME")[..10].to_string()}
                </span>
            </div>
        </footer>
    }
}
