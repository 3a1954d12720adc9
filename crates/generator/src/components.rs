use crate::assets::{RELOAD_JS, STYLESHEET_PATH, TABS_SCRIPT_PATH, accent_css};
use folio_core::config::SiteMeta;
use folio_core::{Category, ContentBlock, HeadingLevel, NavOption, NavTarget, ProjectCard};
use leptos::prelude::*;

/// One content block.
///
/// Every defined kind renders exactly one element tagged with
/// `data-block`; unknown kinds render nothing.
#[component]
pub fn Block(block: ContentBlock) -> impl IntoView {
    match block {
        ContentBlock::Paragraph { text } => {
            view! { <p class="block-paragraph" data-block="paragraph">{text}</p> }.into_any()
        }
        ContentBlock::Heading { level, text } => match HeadingLevel::from_level(level) {
            HeadingLevel::Section => {
                view! { <h2 class="heading-lg" data-block="heading">{text}</h2> }.into_any()
            }
            HeadingLevel::Subsection => {
                view! { <h3 class="heading-md" data-block="heading">{text}</h3> }.into_any()
            }
            HeadingLevel::Default => {
                view! { <h4 class="heading" data-block="heading">{text}</h4> }.into_any()
            }
        },
        ContentBlock::List { items } => view! {
            <ul class="block-list" data-block="list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        ContentBlock::Code { language, source } => {
            let code_class = format!("language-{}", language);
            view! {
                <div class="block-code" data-block="code">
                    <span class="code-language">{language}</span>
                    <pre><code class=code_class>{source}</code></pre>
                </div>
            }
            .into_any()
        }
        ContentBlock::Quote { text } => {
            view! { <blockquote class="block-quote" data-block="quote">{text}</blockquote> }
                .into_any()
        }
        ContentBlock::Image { src, alt, caption } => view! {
            <figure class="block-image" data-block="image">
                <img src=src alt=alt loading="lazy"/>
                {caption.map(|caption| view! { <figcaption>{caption}</figcaption> })}
            </figure>
        }
        .into_any(),
        ContentBlock::Unknown => ().into_any(),
    }
}

#[component]
pub fn ContentBlocks(blocks: Vec<ContentBlock>) -> impl IntoView {
    view! {
        <div class="content-blocks">
            {blocks.into_iter().map(|block| view! { <Block block=block/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let link = card.link.map(|link| {
        let href = link.href().to_string();
        if link.is_external() {
            view! {
                <a class="card-link" href=href target="_blank" rel="noopener noreferrer">
                    "View project"
                </a>
            }
            .into_any()
        } else {
            view! { <a class="card-link" href=href>"Read more"</a> }.into_any()
        }
    });
    let id = card.id.to_string();
    let alt = card.title.clone();

    view! {
        <article class="project-card" data-project-id=id>
            <img src=card.image alt=alt loading="lazy"/>
            <div class="card-body">
                <h3>{card.title}</h3>
                <p>{card.subtitle}</p>
                <ul class="tags">
                    {card.tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                </ul>
                {link}
            </div>
        </article>
    }
}

#[component]
fn NavLink(option: NavOption, on_home: bool, active_tab: Option<Category>) -> impl IntoView {
    let icon = option.icon;
    let name = option.name;
    match option.target {
        NavTarget::Tab(category) => {
            // Off the home page a tab link has to go home first
            let href = if on_home {
                category.fragment()
            } else {
                format!("/{}", category.fragment())
            };
            let selected = if active_tab == Some(category) {
                "true"
            } else {
                "false"
            };
            let slug = category.slug();
            view! {
                <a class="nav-link" href=href role="tab" data-tab=slug aria-selected=selected>
                    <span class="icon" data-icon=icon></span>
                    {name}
                </a>
            }
            .into_any()
        }
        NavTarget::Route(path) => view! {
            <a class="nav-link" href=path>
                <span class="icon" data-icon=icon></span>
                {name}
            </a>
        }
        .into_any(),
    }
}

#[component]
pub fn SiteHeader(
    author: String,
    nav: Vec<NavOption>,
    active_tab: Option<Category>,
) -> impl IntoView {
    let on_home = active_tab.is_some();
    view! {
        <header class="site-header">
            <a class="brand" href="/">{author}</a>
            <nav>
                <ul class="site-nav" role="tablist">
                    {nav
                        .into_iter()
                        .map(|option| {
                            view! {
                                <li>
                                    <NavLink option=option on_home=on_home active_tab=active_tab/>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter(site: SiteMeta) -> impl IntoView {
    let mailto = site.mailto();
    let resume = site.resume_url.map(|url| {
        view! {
            <p>
                <a href=url target="_blank" rel="noopener noreferrer">"Résumé"</a>
            </p>
        }
    });
    let copyright = format!("© {}", site.author);

    view! {
        <footer class="site-footer">
            <p>
                <a href=mailto>{site.email}</a>
            </p>
            {resume}
            <p>{copyright}</p>
        </footer>
    }
}

/// Full HTML document around a page body
#[component]
pub fn Document(
    site: SiteMeta,
    page_title: String,
    nav: Vec<NavOption>,
    active_tab: Option<Category>,
    preview: bool,
    children: Children,
) -> impl IntoView {
    let full_title = if page_title.is_empty() {
        site.title.clone()
    } else {
        format!("{} | {}", page_title, site.title)
    };
    let accent = accent_css(&site.accent_color);
    let description = site.tagline.clone();
    let author = site.author.clone();
    let stylesheet = format!("/{}", STYLESHEET_PATH);
    let tabs_script = format!("/{}", TABS_SCRIPT_PATH);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=description/>
                <title>{full_title}</title>
                <link rel="stylesheet" href=stylesheet/>
                <style inner_html=accent></style>
            </head>
            <body>
                <SiteHeader author=author nav=nav active_tab=active_tab/>
                <main class="page">{children()}</main>
                <SiteFooter site=site/>
                <script src=tabs_script></script>
                {preview.then(|| view! { <script inner_html=RELOAD_JS></script> })}
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_fragment;
    use folio_core::Link;

    fn block_kinds(html: &str) -> Vec<&str> {
        html.match_indices("data-block=\"")
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn test_one_node_per_block_in_order() {
        let blocks = vec![
            ContentBlock::heading(2, "Intro"),
            ContentBlock::paragraph("First"),
            ContentBlock::list(["a", "b", "c"]),
            ContentBlock::code("rust", "fn main() {}"),
            ContentBlock::quote("Quoted"),
            ContentBlock::image("/assets/a.png", "An image", Some("Caption")),
            ContentBlock::paragraph("Last"),
        ];
        let html = render_fragment(move || view! { <ContentBlocks blocks=blocks/> });

        assert_eq!(
            block_kinds(&html),
            vec!["heading", "paragraph", "list", "code", "quote", "image", "paragraph"]
        );
        assert!(html.find("First").unwrap() < html.find("Last").unwrap());
    }

    #[test]
    fn test_unknown_blocks_render_nothing() {
        let blocks = vec![
            ContentBlock::paragraph("Before"),
            ContentBlock::Unknown,
            ContentBlock::paragraph("After"),
        ];
        let html = render_fragment(move || view! { <ContentBlocks blocks=blocks/> });
        assert_eq!(block_kinds(&html), vec!["paragraph", "paragraph"]);
    }

    #[test]
    fn test_heading_levels_render_distinctly() {
        let h2 = render_fragment(|| view! { <Block block={ContentBlock::heading(2, "Two")}/> });
        let h3 = render_fragment(|| view! { <Block block={ContentBlock::heading(3, "Three")}/> });
        let h5 = render_fragment(|| view! { <Block block={ContentBlock::heading(5, "Five")}/> });

        assert!(h2.contains("<h2"));
        assert!(h2.contains("class=\"heading-lg\""));
        assert!(h3.contains("<h3"));
        assert!(h3.contains("class=\"heading-md\""));
        assert!(!h3.contains("<h2"));
        assert!(h5.contains("<h4"));
        assert!(h5.contains("class=\"heading\""));
        assert!(!h5.contains("<h2") && !h5.contains("<h3"));
    }

    #[test]
    fn test_list_renders_one_bullet_per_item() {
        let html = render_fragment(|| {
            view! { <Block block={ContentBlock::list(["one", "two", "three"])}/> }
        });
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn test_code_block_carries_language() {
        let html = render_fragment(|| {
            view! { <Block block={ContentBlock::code("rust", "let x = 1 < 2;")}/> }
        });
        assert!(html.contains("class=\"language-rust\""));
        assert!(html.contains(">rust</span>"));
        assert!(html.contains("<pre>"));
        assert!(html.contains("1 &lt; 2"));
    }

    #[test]
    fn test_image_caption_is_optional() {
        let with = render_fragment(|| {
            view! { <Block block={ContentBlock::image("/a.png", "Alt", Some("Cap"))}/> }
        });
        let without = render_fragment(|| {
            view! { <Block block={ContentBlock::image("/a.png", "Alt", None)}/> }
        });

        assert!(with.contains("<figcaption>Cap</figcaption>"));
        assert!(!without.contains("figcaption"));
        assert!(without.contains("alt=\"Alt\""));
    }

    #[test]
    fn test_project_card_links() {
        let mut card = ProjectCard {
            id: 7,
            title: "Icon Set".into(),
            subtitle: "Icons".into(),
            tags: vec!["Figma".into()],
            image: "/assets/icons.png".into(),
            link: Some(Link::External("https://www.figma.com/file/icons".into())),
            category: Category::Figma,
        };

        let external = render_fragment({
            let card = card.clone();
            move || view! { <ProjectCardView card=card/> }
        });
        assert!(external.contains("href=\"https://www.figma.com/file/icons\""));
        assert!(external.contains("target=\"_blank\""));
        assert!(external.contains("data-project-id=\"7\""));

        card.link = Some(Link::Internal("/process/transit-checkout".into()));
        let internal = render_fragment({
            let card = card.clone();
            move || view! { <ProjectCardView card=card/> }
        });
        assert!(internal.contains("href=\"/process/transit-checkout\""));
        assert!(internal.contains("Read more"));
        assert!(!internal.contains("target=\"_blank\""));

        card.link = None;
        let unlinked = render_fragment(move || view! { <ProjectCardView card=card/> });
        assert!(!unlinked.contains("card-link"));
    }
}
