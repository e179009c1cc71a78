use leptos::prelude::*;
use leptos_meta::Title;

use super::api::{list_portfolio_server, list_services_server, list_testimonials_server};
use crate::content::{PortfolioItem, Service, Testimonial};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Design & Build" />
        <div class="max-w-6xl mx-auto page-content">
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <PortfolioSection />
            <TestimonialsSection />
            <ContactSection />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="flex flex-col justify-center items-center text-center gap-6 mt-12 lg:mt-20 section-content">
            <h1 class="text-3xl lg:text-5xl font-bold leading-tight">
                "Small sites, built like they matter."
            </h1>
            <p class="max-w-2xl text-lg text-muted leading-relaxed">
                "I'm Mara - an independent designer and developer. I build fast, honest
                websites and the small tools behind them, for businesses that would
                rather not feed a platform."
            </p>
            <div class="flex gap-4 mt-2">
                <a
                    href="#contact"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "Start a project"
                </a>
                <a
                    href="#work"
                    class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:border-muted transition-all duration-200"
                >
                    "See the work"
                </a>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="flex flex-col lg:flex-row gap-8 lg:gap-12 mt-16 section-content">
            <div class="w-full lg:max-w-2xl">
                <h2 class="text-xl font-bold my-6">"About"</h2>
                <p class="text-base mb-4 leading-relaxed">
                    "Ten years in agencies, five on my own. I've shipped work for
                    restaurants, land trusts, accountants, bike builders, and a
                    library co-op - always the same brief underneath: "
                    <strong>"be clear, be fast, be easy to live with."</strong>
                </p>
                <p class="text-base mb-4 leading-relaxed">
                    "I keep three client slots at a time, one reserved for small
                    nonprofits at a reduced rate. Everything I build comes with a
                    handoff your team can actually operate."
                </p>
            </div>
            <div class="w-full lg:max-w-2xl">
                <h2 class="text-xl font-bold my-6">"How I work"</h2>
                <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple mb-4">
                    <ul class="text-sm space-y-2">
                        <li>"Fixed scope, fixed price, no surprise invoices."</li>
                        <li>"Performance budgets set before the first mockup."</li>
                        <li>"You own the code, the content, and the accounts."</li>
                        <li>"Eleven-month check-in included, before renewals bite."</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    let services = Resource::new(
        || (),
        |_| async move { list_services_server().await.unwrap_or_default() },
    );
    view! {
        <section id="services" class="mt-16 section-content">
            <h2 class="text-xl font-bold my-6">"Services"</h2>
            <Transition fallback=move || {
                view! { <div class="loading-skeleton h-24 rounded"></div> }
            }>
                {move || Suspend::new(async move {
                    let services = services.await;
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {services
                                .into_iter()
                                .map(|s| {
                                    view! { <ServiceCard service=s /> }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let price = match service.price {
        Some(p) => format!("from ${p:.0}"),
        None => "priced per engagement".to_string(),
    };
    view! {
        <div class="bg-brightBlack/20 p-5 rounded-md border border-muted/30 hover:border-cyan/40 transition-colors duration-200">
            <h3 class="font-bold text-lg mb-2">{service.name}</h3>
            <p class="text-sm text-muted leading-relaxed mb-3">{service.summary}</p>
            <span class="text-cyan text-sm font-medium">{price}</span>
        </div>
    }
}

#[component]
fn PortfolioSection() -> impl IntoView {
    let items = Resource::new(
        || (),
        |_| async move { list_portfolio_server().await.unwrap_or_default() },
    );
    view! {
        <section id="work" class="mt-16 section-content">
            <h2 class="text-xl font-bold my-6">"Selected work"</h2>
            <Transition fallback=move || {
                view! { <div class="loading-skeleton h-32 rounded"></div> }
            }>
                {move || Suspend::new(async move {
                    let items = items.await;
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {items
                                .into_iter()
                                .map(|item| {
                                    view! { <PortfolioCard item /> }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
        </section>
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    let year = item.date.map(|d| d.format("%Y").to_string());
    let title = match &item.url {
        Some(url) => leptos::either::Either::Left(view! {
            <a href=url.clone() target="_blank" rel="noopener noreferrer" class="hover:text-cyan">
                {item.title.clone()}
            </a>
        }),
        None => leptos::either::Either::Right(item.title.clone()),
    };
    view! {
        <div class="bg-brightBlack/20 p-5 rounded-md border border-muted/30">
            <div class="flex items-baseline justify-between mb-2">
                <h3 class="font-bold text-lg">{title}</h3>
                <span class="text-sm text-muted">{year}</span>
            </div>
            <span class="rounded-md px-2 py-1 bg-brightBlack mr-2 text-xs">{item.category}</span>
            <p class="text-sm text-muted leading-relaxed mt-3">{item.summary}</p>
        </div>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    let testimonials = Resource::new(
        || (),
        |_| async move { list_testimonials_server().await.unwrap_or_default() },
    );
    view! {
        <section id="testimonials" class="mt-16 section-content">
            <h2 class="text-xl font-bold my-6">"Kind words"</h2>
            <Transition fallback=move || {
                view! { <div class="loading-skeleton h-24 rounded"></div> }
            }>
                {move || Suspend::new(async move {
                    let testimonials = testimonials.await;
                    view! {
                        <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                            {testimonials
                                .into_iter()
                                .map(|t| {
                                    view! { <TestimonialCard testimonial=t /> }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="bg-brightBlack/20 p-5 rounded-md border border-muted/30">
            <blockquote class="text-sm leading-relaxed mb-3">
                "\u{201c}" {testimonial.quote} "\u{201d}"
            </blockquote>
            <figcaption class="text-sm">
                <span class="font-medium text-cyan">{testimonial.author}</span>
                <span class="text-muted">" · " {testimonial.role}</span>
            </figcaption>
        </figure>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="flex justify-center items-center mt-16 section-content">
            <div class="w-full max-w-2xl text-center">
                <h2 class="text-xl font-bold my-6">"Let's talk"</h2>
                <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                    <p class="text-lg mb-4 text-cyan font-medium">
                        "Two of three slots are open this quarter"
                    </p>
                    <p class="mb-4">
                        "Tell me what you're building and what's in the way. If I'm not
                        the right fit, I'll say so and point you at someone who is."
                    </p>
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                        onclick="navigator.clipboard.writeText('hello@maraellison.dev').then(() => alert('Email copied: hello@maraellison.dev'))"
                    >
                        "hello@maraellison.dev"
                    </button>
                </div>
            </div>
        </section>
    }
}
