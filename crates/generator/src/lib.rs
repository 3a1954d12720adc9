// Static site generation with Leptos SSR

pub mod assets;
pub mod components;
pub mod markdown;
pub mod pages;

use components::Document;
use folio_core::{Article, Category, ContentStore, Route, SiteConfig, TabController};
use leptos::prelude::*;
use pages::{
    AboutPage, ArticleNotFound, ArticlePage, ConfigErrorPage, ExperiencePage, HomePage,
    NotFoundPage, ProcessIndex, ProcessStudyPage, StudyNotFound,
};
use std::path::Path;
use tracing::{debug, info};

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Inject the hot-reload script used by the preview server
    pub preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub status: PageStatus,
    pub html: String,
}

struct PageBody {
    title: String,
    status: PageStatus,
    active_tab: Option<Category>,
    view: AnyView,
}

/// Render a view to HTML inside a fresh reactive owner
pub(crate) fn render_fragment<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

/// Built-in content plus any Markdown articles the config points at
pub fn load_store(site_dir: &Path, config: &SiteConfig) -> folio_core::Result<ContentStore> {
    let mut store = ContentStore::builtin();

    if let Some(dir) = &config.content.articles_dir {
        let dir = site_dir.join(dir);
        if dir.is_dir() {
            let articles = markdown::load_articles(&dir, &config.site.author)?;
            info!(count = articles.len(), dir = %dir.display(), "loaded markdown articles");
            store.add_articles(articles)?;
        } else {
            debug!(dir = %dir.display(), "articles directory does not exist, skipping");
        }
    }

    Ok(store)
}

fn page_body(
    route: &Route,
    config: &SiteConfig,
    store: &ContentStore,
    tabs: TabController,
) -> PageBody {
    let ok = |title: &str, view: AnyView| PageBody {
        title: title.to_string(),
        status: PageStatus::Ok,
        active_tab: None,
        view,
    };
    let not_found = |title: &str, view: AnyView| PageBody {
        title: title.to_string(),
        status: PageStatus::NotFound,
        active_tab: None,
        view,
    };

    match route {
        Route::Home => {
            let active = tabs.active();
            let panels: Vec<_> = Category::ALL
                .into_iter()
                .map(|category| {
                    let cards = store.projects_in(category).into_iter().cloned().collect();
                    (category, cards)
                })
                .collect();
            let articles: Vec<Article> = store.articles_by_date().into_iter().cloned().collect();
            let author = config.site.author.clone();
            let tagline = config.site.tagline.clone();
            PageBody {
                title: String::new(),
                status: PageStatus::Ok,
                active_tab: Some(active),
                view: view! {
                    <HomePage
                        author=author
                        tagline=tagline
                        panels=panels
                        articles=articles
                        active=active
                    />
                }
                .into_any(),
            }
        }
        Route::About => {
            let author = config.site.author.clone();
            let profile = store.profile().clone();
            let mailto = config.site.mailto();
            let resume_url = config.site.resume_url.clone();
            ok(
                "About",
                view! {
                    <AboutPage author=author profile=profile mailto=mailto resume_url=resume_url/>
                }
                .into_any(),
            )
        }
        Route::Article(slug) => match store.article(slug) {
            Some(article) => {
                let related = article
                    .related
                    .iter()
                    .filter_map(|s| store.article(s))
                    .cloned()
                    .collect();
                let title = article.title.clone();
                let article = article.clone();
                ok(
                    &title,
                    view! { <ArticlePage article=article related=related/> }.into_any(),
                )
            }
            None => {
                let slug = slug.clone();
                not_found(
                    "Article Not Found",
                    view! { <ArticleNotFound slug=slug/> }.into_any(),
                )
            }
        },
        Route::Process => {
            let studies = store.studies().to_vec();
            ok(
                "Process",
                view! { <ProcessIndex studies=studies/> }.into_any(),
            )
        }
        Route::ProcessStudy(slug) => match store.study(slug) {
            Some(study) => {
                let study = study.clone();
                let title = study.title.clone();
                ok(
                    &title,
                    view! { <ProcessStudyPage study=study/> }.into_any(),
                )
            }
            None => {
                let slug = slug.clone();
                not_found(
                    "Project Not Found",
                    view! { <StudyNotFound slug=slug/> }.into_any(),
                )
            }
        },
        Route::Experience => {
            let entries = store.experience().to_vec();
            let resume_url = config.site.resume_url.clone();
            ok(
                "Experience",
                view! { <ExperiencePage entries=entries resume_url=resume_url/> }.into_any(),
            )
        }
        Route::NotFound(path) => {
            let path = path.clone();
            not_found(
                "Page Not Found",
                view! { <NotFoundPage path=path/> }.into_any(),
            )
        }
    }
}

/// Render one route to a complete HTML document.
///
/// Never fails: unknown slugs and paths render their not-found views with
/// [`PageStatus::NotFound`].
pub fn render_route(
    route: &Route,
    config: &SiteConfig,
    store: &ContentStore,
    tabs: TabController,
    options: RenderOptions,
) -> RenderedPage {
    let site = config.site.clone();
    let nav = store.nav().to_vec();
    let preview = options.preview;

    let mut status = PageStatus::Ok;
    let html = render_fragment(|| {
        let body = page_body(route, config, store, tabs);
        status = body.status;
        let page_title = body.title;
        let active_tab = body.active_tab;
        let view = body.view;
        view! {
            <Document
                site=site
                page_title=page_title
                nav=nav
                active_tab=active_tab
                preview=preview
            >
                {view}
            </Document>
        }
    });

    RenderedPage {
        status,
        html: format!("<!DOCTYPE html>{}", html),
    }
}

/// Standalone page describing a site that failed to load.
///
/// Used by the preview server while `site.toml` or an article is broken;
/// it carries the reload script so fixing the file recovers the page.
pub fn render_config_error(message: &str) -> String {
    let message = message.to_string();
    let html = render_fragment(move || view! { <ConfigErrorPage message=message/> });
    format!("<!DOCTYPE html>{}", html)
}

/// Render every page of the site plus the shared static files
pub fn generate_site(
    config: &SiteConfig,
    store: &ContentStore,
    options: RenderOptions,
) -> GeneratedSite {
    let tabs = TabController::new(config.home.default_tab);

    let mut routes = Route::static_routes(store);
    routes.push(Route::NotFound("/404".into()));

    let pages = routes
        .iter()
        .map(|route| {
            let page = render_route(route, config, store, tabs, options);
            debug!(route = %route.path(), bytes = page.html.len(), "rendered page");
            (route.output_path(), page.html)
        })
        .collect();

    GeneratedSite {
        pages,
        assets: vec![
            (
                assets::STYLESHEET_PATH.to_string(),
                assets::STYLE_CSS.as_bytes().to_vec(),
            ),
            (
                assets::TABS_SCRIPT_PATH.to_string(),
                assets::TABS_JS.as_bytes().to_vec(),
            ),
        ],
    }
}
