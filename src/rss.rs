use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::content::Post;

pub fn build_channel(posts: Vec<Post>) -> Channel {
    let items = posts
        .into_iter()
        .map(|p| {
            let link = format!("https://maraellison.dev/blog/{}", p.slug);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let author = format!("{} <hello@maraellison.dev>", p.author);
            ItemBuilder::default()
                .title(p.title)
                .description(p.description)
                .author(author)
                .pub_date(p.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href("https://maraellison.dev/rss.xml");
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("Mara Ellison's Notes")
        .description("Essays on small-site craft: design, performance, and the business of building for the web.")
        .link("https://maraellison.dev/blog")
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}
