use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::content::{Post, PortfolioItem, RenderedPost, Service, Testimonial};

// ---- public reads ----

#[server(input = GetUrl)]
pub async fn search_posts_server(pattern: String) -> Result<Vec<Post>, ServerFnError> {
    crate::content::store()
        .search_published(&pattern)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_post_server(slug: String) -> Result<RenderedPost, ServerFnError> {
    use crate::content::{render_post, store};
    let post = store()
        .get_post(&slug)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    if !post.published {
        return Err(ServerFnError::new("Content not found"));
    }
    Ok(render_post(&post))
}

#[server(input = GetUrl)]
pub async fn list_portfolio_server() -> Result<Vec<PortfolioItem>, ServerFnError> {
    Ok(crate::content::store().list_portfolio())
}

#[server(input = GetUrl)]
pub async fn list_services_server() -> Result<Vec<Service>, ServerFnError> {
    Ok(crate::content::store().list_services())
}

#[server(input = GetUrl)]
pub async fn list_testimonials_server() -> Result<Vec<Testimonial>, ServerFnError> {
    Ok(crate::content::store().list_testimonials())
}

// ---- admin ----

/// The credential check itself belongs to the auth provider; this is the
/// minimal stand-in over an environment variable. Wrong passwords are a
/// normal `Ok(false)`, not an error.
#[server]
pub async fn login_server(password: String) -> Result<bool, ServerFnError> {
    let expected = std::env::var("ADMIN_PASSWORD").unwrap_or_default();
    Ok(!expected.is_empty() && password == expected)
}

#[server(input = GetUrl)]
pub async fn list_posts_server() -> Result<Vec<Post>, ServerFnError> {
    Ok(crate::content::store().list_posts())
}

#[server]
pub async fn save_post_server(post: Post) -> Result<Post, ServerFnError> {
    use chrono::Utc;
    let mut post = post;
    if post.id == 0 {
        post.date = Utc::now();
    }
    Ok(crate::content::store().save_post(post))
}

#[server]
pub async fn delete_post_server(id: u32) -> Result<(), ServerFnError> {
    crate::content::store()
        .delete_post(id)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn save_portfolio_server(item: PortfolioItem) -> Result<PortfolioItem, ServerFnError> {
    Ok(crate::content::store().save_portfolio_item(item))
}

#[server]
pub async fn delete_portfolio_server(id: u32) -> Result<(), ServerFnError> {
    crate::content::store()
        .delete_portfolio_item(id)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn save_service_server(service: Service) -> Result<Service, ServerFnError> {
    Ok(crate::content::store().save_service(service))
}

#[server]
pub async fn delete_service_server(id: u32) -> Result<(), ServerFnError> {
    crate::content::store()
        .delete_service(id)
        .map_err(|e| ServerFnError::new(e.to_string()))
}
