use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};
#[cfg(any(feature = "ssr", feature = "rss"))]
use regex::RegexBuilder;

use crate::table::{SortValue, TableRecord};

// Browser-side response caches, keyed by search pattern / post slug.
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Option<RenderedPost>>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_SEARCH_CACHE: LazyLock<DashMap<String, Vec<Post>>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content not found")]
    NotFound,
    #[error("Couldn't parse embedded content: {0}")]
    Parse(String),
    #[error("Invalid search pattern")]
    Pattern,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    author: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    #[serde(default = "default_published")]
    published: bool,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub published: bool,
    /// Markdown source; rendered to HTML server-side.
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Author,
    Date,
}

impl TableRecord for Post {
    type Key = PostField;

    fn sort_value(&self, key: PostField) -> Option<SortValue> {
        match key {
            PostField::Title => Some(SortValue::Text(self.title.clone())),
            PostField::Author => Some(SortValue::Text(self.author.clone())),
            PostField::Date => Some(SortValue::Date(self.date)),
        }
    }
}

/// A post together with its body rendered to HTML, as served to post pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPost {
    pub post: Post,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub summary: String,
    /// Missing for undated/ongoing work.
    pub date: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioField {
    Title,
    Category,
    Date,
}

impl TableRecord for PortfolioItem {
    type Key = PortfolioField;

    fn sort_value(&self, key: PortfolioField) -> Option<SortValue> {
        match key {
            PortfolioField::Title => Some(SortValue::Text(self.title.clone())),
            PortfolioField::Category => Some(SortValue::Text(self.category.clone())),
            PortfolioField::Date => self.date.map(SortValue::Date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub summary: String,
    /// Starting price in dollars; missing for quote-only services.
    pub price: Option<f64>,
    /// Display position on the landing page.
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    Name,
    Price,
    Position,
}

impl TableRecord for Service {
    type Key = ServiceField;

    fn sort_value(&self, key: ServiceField) -> Option<SortValue> {
        match key {
            ServiceField::Name => Some(SortValue::Text(self.name.clone())),
            ServiceField::Price => self.price.map(SortValue::Number),
            ServiceField::Position => Some(SortValue::Number(self.position as f64)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub author: String,
    pub role: String,
    pub quote: String,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub use server::*;

#[cfg(any(feature = "ssr", feature = "rss"))]
mod server {
    use super::*;

    static STORE: LazyLock<ContentStore> = LazyLock::new(ContentStore::from_assets);

    /// The process-wide store backing all server functions.
    pub fn store() -> &'static ContentStore {
        &STORE
    }

    /// Server-side record store, seeded from the embedded `content/` folder.
    ///
    /// All record mutation goes through the methods here, and every read
    /// hands out fresh owned collections; no caller ever holds a reference
    /// into the store.
    pub struct ContentStore {
        posts: DashMap<u32, Post>,
        portfolio: DashMap<u32, PortfolioItem>,
        services: DashMap<u32, Service>,
        testimonials: DashMap<u32, Testimonial>,
    }

    impl ContentStore {
        pub fn empty() -> Self {
            Self {
                posts: DashMap::new(),
                portfolio: DashMap::new(),
                services: DashMap::new(),
                testimonials: DashMap::new(),
            }
        }

        /// Seed from embedded assets. Unparseable seed files are skipped
        /// with a warning rather than taking the whole site down.
        pub fn from_assets() -> Self {
            let store = Self::empty();

            let mut names = Assets::iter()
                .filter(|s| s.starts_with("posts/") && s.ends_with(".md"))
                .collect::<Vec<_>>();
            names.sort();
            for (i, name) in names.iter().enumerate() {
                match parse_post(name, i as u32 + 1) {
                    Ok(post) => {
                        store.posts.insert(post.id, post);
                    }
                    Err(e) => log::warn!("skipping seed post {name}: {e}"),
                }
            }

            match parse_json::<PortfolioItem>("data/portfolio.json") {
                Ok(items) => {
                    for item in items {
                        store.portfolio.insert(item.id, item);
                    }
                }
                Err(e) => log::warn!("skipping portfolio seed: {e}"),
            }
            match parse_json::<Service>("data/services.json") {
                Ok(items) => {
                    for item in items {
                        store.services.insert(item.id, item);
                    }
                }
                Err(e) => log::warn!("skipping services seed: {e}"),
            }
            match parse_json::<Testimonial>("data/testimonials.json") {
                Ok(items) => {
                    for item in items {
                        store.testimonials.insert(item.id, item);
                    }
                }
                Err(e) => log::warn!("skipping testimonials seed: {e}"),
            }

            store
        }

        // ---- posts ----

        /// All posts, newest first. Admin surfaces use this.
        pub fn list_posts(&self) -> Vec<Post> {
            let mut posts = self
                .posts
                .iter()
                .map(|entry| entry.value().clone())
                .collect::<Vec<_>>();
            posts.sort_by(|a, b| b.date.cmp(&a.date));
            posts
        }

        /// Published posts, newest first. Public surfaces use this.
        pub fn published_posts(&self) -> Vec<Post> {
            let mut posts = self.list_posts();
            posts.retain(|p| p.published);
            posts
        }

        /// Case-insensitive regex search over published post sources.
        pub fn search_published(&self, pattern: &str) -> Result<Vec<Post>, ContentError> {
            if pattern.is_empty() {
                return Ok(self.published_posts());
            }
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .multi_line(true)
                .build()
                .map_err(|_| ContentError::Pattern)?;
            Ok(self
                .published_posts()
                .into_iter()
                .filter(|p| {
                    let source = format!("{}\n{}\n{}", p.title, p.description, p.body);
                    re.is_match(&source)
                })
                .collect())
        }

        pub fn get_post(&self, slug: &str) -> Result<Post, ContentError> {
            self.posts
                .iter()
                .find(|entry| entry.value().slug == slug)
                .map(|entry| entry.value().clone())
                .ok_or(ContentError::NotFound)
        }

        /// Insert or update a post. An id of 0 allocates the next free id;
        /// a blank slug is derived from the title.
        pub fn save_post(&self, mut post: Post) -> Post {
            if post.id == 0 {
                post.id = next_id(&self.posts);
            }
            if post.slug.is_empty() {
                post.slug = slugify(&post.title);
            }
            self.posts.insert(post.id, post.clone());
            post
        }

        pub fn delete_post(&self, id: u32) -> Result<(), ContentError> {
            self.posts.remove(&id).map(|_| ()).ok_or(ContentError::NotFound)
        }

        // ---- portfolio ----

        /// All portfolio items, newest first; undated work sinks to the end.
        pub fn list_portfolio(&self) -> Vec<PortfolioItem> {
            let mut items = self
                .portfolio
                .iter()
                .map(|entry| entry.value().clone())
                .collect::<Vec<_>>();
            items.sort_by(|a, b| match (&a.date, &b.date) {
                (Some(da), Some(db)) => db.cmp(da),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.id.cmp(&b.id),
            });
            items
        }

        pub fn save_portfolio_item(&self, mut item: PortfolioItem) -> PortfolioItem {
            if item.id == 0 {
                item.id = next_id(&self.portfolio);
            }
            self.portfolio.insert(item.id, item.clone());
            item
        }

        pub fn delete_portfolio_item(&self, id: u32) -> Result<(), ContentError> {
            self.portfolio
                .remove(&id)
                .map(|_| ())
                .ok_or(ContentError::NotFound)
        }

        // ---- services ----

        /// All services in display order.
        pub fn list_services(&self) -> Vec<Service> {
            let mut items = self
                .services
                .iter()
                .map(|entry| entry.value().clone())
                .collect::<Vec<_>>();
            items.sort_by_key(|s| (s.position, s.id));
            items
        }

        pub fn save_service(&self, mut service: Service) -> Service {
            if service.id == 0 {
                service.id = next_id(&self.services);
            }
            self.services.insert(service.id, service.clone());
            service
        }

        pub fn delete_service(&self, id: u32) -> Result<(), ContentError> {
            self.services
                .remove(&id)
                .map(|_| ())
                .ok_or(ContentError::NotFound)
        }

        // ---- testimonials ----

        pub fn list_testimonials(&self) -> Vec<Testimonial> {
            let mut items = self
                .testimonials
                .iter()
                .map(|entry| entry.value().clone())
                .collect::<Vec<_>>();
            items.sort_by_key(|t| t.id);
            items
        }
    }

    fn next_id<V>(map: &DashMap<u32, V>) -> u32 {
        map.iter().map(|entry| *entry.key()).max().unwrap_or(0) + 1
    }

    fn slugify(title: &str) -> String {
        title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn parse_post(name: &str, id: u32) -> Result<Post, ContentError> {
        let file = Assets::get(name).ok_or(ContentError::NotFound)?;
        let content = String::from_utf8(file.data.into())
            .map_err(|_| ContentError::Parse(format!("{name} is not utf-8")))?;

        let matter = Matter::<YAML>::new();
        let parsed = matter
            .parse_with_struct::<FrontMatter>(&content)
            .ok_or_else(|| ContentError::Parse(format!("bad front matter in {name}")))?;

        let slug = name
            .trim_start_matches("posts/")
            .trim_end_matches(".md")
            .to_string();
        Ok(Post {
            id,
            slug,
            title: parsed.data.title,
            description: parsed.data.description,
            author: parsed.data.author,
            date: parsed.data.date,
            tags: parsed.data.tags,
            published: parsed.data.published,
            body: parsed.content,
        })
    }

    fn parse_json<T: serde::de::DeserializeOwned>(name: &str) -> Result<Vec<T>, ContentError> {
        let file = Assets::get(name).ok_or(ContentError::NotFound)?;
        serde_json::from_slice(&file.data)
            .map_err(|e| ContentError::Parse(format!("{name}: {e}")))
    }

    /// Render a post's markdown body to HTML.
    pub fn render_post(post: &Post) -> RenderedPost {
        let parser = Parser::new_ext(&post.body, Options::all());
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, parser);
        RenderedPost {
            post: post.clone(),
            html,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        fn post(id: u32, slug: &str, title: &str, day: u32) -> Post {
            Post {
                id,
                slug: slug.to_string(),
                title: title.to_string(),
                description: format!("About {title}"),
                author: "Mara Ellison".to_string(),
                date: Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap(),
                tags: vec!["notes".to_string()],
                published: true,
                body: format!("Body of {title}."),
            }
        }

        #[test]
        fn listings_are_fresh_collections() {
            let store = ContentStore::empty();
            store.save_post(post(0, "first", "First", 1));

            let mut listed = store.list_posts();
            listed[0].title = "Mutated locally".to_string();
            listed.clear();

            let relisted = store.list_posts();
            assert_eq!(relisted.len(), 1);
            assert_eq!(relisted[0].title, "First");
        }

        #[test]
        fn save_allocates_ids_and_slugs() {
            let store = ContentStore::empty();
            let a = store.save_post(post(0, "", "Hello, World!", 1));
            let b = store.save_post(post(0, "", "Second Post", 2));
            assert_eq!(a.id, 1);
            assert_eq!(b.id, 2);
            assert_eq!(a.slug, "hello-world");

            // saving with an existing id updates in place
            let mut update = a.clone();
            update.title = "Hello again".to_string();
            store.save_post(update);
            assert_eq!(store.list_posts().len(), 2);
            assert_eq!(store.get_post("hello-world").unwrap().title, "Hello again");
        }

        #[test]
        fn posts_list_newest_first() {
            let store = ContentStore::empty();
            store.save_post(post(0, "old", "Old", 1));
            store.save_post(post(0, "new", "New", 20));
            store.save_post(post(0, "mid", "Mid", 10));

            let titles = store
                .list_posts()
                .into_iter()
                .map(|p| p.title)
                .collect::<Vec<_>>();
            assert_eq!(titles, vec!["New", "Mid", "Old"]);
        }

        #[test]
        fn unpublished_posts_hidden_from_public_listing() {
            let store = ContentStore::empty();
            store.save_post(post(0, "live", "Live", 1));
            let mut draft = post(0, "draft", "Draft", 2);
            draft.published = false;
            store.save_post(draft);

            assert_eq!(store.list_posts().len(), 2);
            let public = store.published_posts();
            assert_eq!(public.len(), 1);
            assert_eq!(public[0].slug, "live");
        }

        #[test]
        fn delete_then_get_is_not_found() {
            let store = ContentStore::empty();
            let saved = store.save_post(post(0, "gone", "Gone", 1));
            store.delete_post(saved.id).unwrap();
            assert!(matches!(
                store.get_post("gone"),
                Err(ContentError::NotFound)
            ));
            assert!(matches!(
                store.delete_post(saved.id),
                Err(ContentError::NotFound)
            ));
        }

        #[test]
        fn search_matches_case_insensitively() {
            let store = ContentStore::empty();
            store.save_post(post(0, "rust", "Shipping Rust to production", 1));
            store.save_post(post(0, "css", "Notes on CSS grids", 2));

            let hits = store.search_published("RUST").unwrap();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].slug, "rust");

            assert_eq!(store.search_published("").unwrap().len(), 2);
            assert!(store.search_published("quantum").unwrap().is_empty());
            assert!(matches!(
                store.search_published("(unclosed"),
                Err(ContentError::Pattern)
            ));
        }

        #[test]
        fn portfolio_sorts_dated_then_undated() {
            let store = ContentStore::empty();
            store.save_portfolio_item(PortfolioItem {
                id: 0,
                title: "Ongoing".to_string(),
                category: "Design".to_string(),
                summary: String::new(),
                date: None,
                url: None,
            });
            store.save_portfolio_item(PortfolioItem {
                id: 0,
                title: "Launched".to_string(),
                category: "Build".to_string(),
                summary: String::new(),
                date: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
                url: None,
            });

            let titles = store
                .list_portfolio()
                .into_iter()
                .map(|i| i.title)
                .collect::<Vec<_>>();
            assert_eq!(titles, vec!["Launched", "Ongoing"]);
        }

        #[test]
        fn services_list_in_display_order() {
            let store = ContentStore::empty();
            store.save_service(Service {
                id: 0,
                name: "Audit".to_string(),
                summary: String::new(),
                price: Some(900.0),
                position: 2,
            });
            store.save_service(Service {
                id: 0,
                name: "Build".to_string(),
                summary: String::new(),
                price: None,
                position: 1,
            });

            let names = store
                .list_services()
                .into_iter()
                .map(|s| s.name)
                .collect::<Vec<_>>();
            assert_eq!(names, vec!["Build", "Audit"]);
        }

        #[test]
        fn markdown_renders_to_html() {
            let mut p = post(1, "md", "Markdown", 1);
            p.body = "# Heading\n\nSome *emphasis*.".to_string();
            let rendered = render_post(&p);
            assert!(rendered.html.contains("<h1>"));
            assert!(rendered.html.contains("<em>emphasis</em>"));
        }
    }
}
