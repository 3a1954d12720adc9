use crate::assets::RELOAD_JS;
use crate::components::{ContentBlocks, ProjectCardView};
use folio_core::{
    Article, Category, ExperienceEntry, ProcessStudy, Profile, ProjectCard, Testimonial,
};
use leptos::prelude::*;

const WRITING_LISTING: &str = "/#writing";

/// Every article, newest first, with its teaser
#[component]
fn ArticleList(articles: Vec<Article>) -> impl IntoView {
    view! {
        <ul class="article-list">
            {articles
                .into_iter()
                .map(|article| {
                    let href = article.path();
                    let iso_date = article.date.format("%Y-%m-%d").to_string();
                    let display_date = article.display_date();
                    let excerpt = article
                        .excerpt()
                        .map(|text| view! { <p class="excerpt">{text.to_string()}</p> });
                    view! {
                        <li class="article-summary">
                            <h3><a href=href>{article.title}</a></h3>
                            <p class="byline">
                                <time datetime=iso_date>{display_date}</time>
                                " · "
                                <span class="read-time">{article.read_time}</span>
                            </p>
                            {excerpt}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn TabPanel(
    category: Category,
    cards: Vec<ProjectCard>,
    articles: Vec<Article>,
    active: bool,
) -> impl IntoView {
    let slug = category.slug();
    let listing = (!articles.is_empty()).then(|| view! { <ArticleList articles=articles/> });
    view! {
        <section id=slug class="tab-panel" role="tabpanel" data-tab-panel=slug hidden={!active}>
            <h2>{category.label()}</h2>
            <div class="card-grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <ProjectCardView card=card/> })
                    .collect_view()}
            </div>
            {listing}
        </section>
    }
}

/// Landing page: hero plus one panel per category, only `active` visible.
///
/// The Writing panel also lists every article, since it is where article
/// pages link back to.
#[component]
pub fn HomePage(
    author: String,
    tagline: String,
    panels: Vec<(Category, Vec<ProjectCard>)>,
    articles: Vec<Article>,
    active: Category,
) -> impl IntoView {
    let panels = panels
        .into_iter()
        .map(|(category, cards)| {
            let is_active = category == active;
            let articles = if category == Category::Writing {
                articles.clone()
            } else {
                Vec::new()
            };
            view! {
                <TabPanel category=category cards=cards articles=articles active=is_active/>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <h1>{author}</h1>
            <p class="tagline">{tagline}</p>
        </section>
        {panels}
    }
}

#[component]
fn TestimonialQuote(testimonial: Testimonial) -> impl IntoView {
    view! {
        <blockquote class="testimonial">
            <p>{testimonial.quote}</p>
            <cite>{testimonial.name}", "{testimonial.title}</cite>
        </blockquote>
    }
}

#[component]
pub fn AboutPage(
    author: String,
    profile: Profile,
    mailto: String,
    resume_url: Option<String>,
) -> impl IntoView {
    let resume = resume_url.map(|url| {
        view! {
            <a class="resume-link" href=url target="_blank" rel="noopener noreferrer">
                "Download résumé"
            </a>
        }
    });
    let alt = format!("Portrait of {}", author);

    view! {
        <section class="hero about">
            <img class="portrait" src=profile.portrait alt=alt/>
            <h1>{author}</h1>
            <p class="tagline">{profile.headline}</p>
            <p class="location">{profile.location}</p>
        </section>
        <section class="bio">
            {profile.bio.into_iter().map(|para| view! { <p>{para}</p> }).collect_view()}
        </section>
        <section class="skills">
            <h2>"What I do"</h2>
            <ul class="tags">
                {profile.skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
            </ul>
        </section>
        <section class="testimonials">
            <h2>"Kind words"</h2>
            {profile
                .testimonials
                .into_iter()
                .map(|t| view! { <TestimonialQuote testimonial=t/> })
                .collect_view()}
        </section>
        <section class="contact">
            <h2>"Get in touch"</h2>
            <p>
                <a href=mailto>"Send me an email"</a>
            </p>
            {resume}
        </section>
    }
}

#[component]
pub fn ArticlePage(article: Article, related: Vec<Article>) -> impl IntoView {
    let iso_date = article.date.format("%Y-%m-%d").to_string();
    let display_date = article.display_date();
    let hero = (!article.hero_image.is_empty()).then(|| {
        let alt = article.title.clone();
        view! { <img class="hero-image" src=article.hero_image alt=alt/> }
    });
    let related_section = (!related.is_empty()).then(|| {
        view! {
            <aside class="related">
                <h2>"Related"</h2>
                <ul>
                    {related
                        .into_iter()
                        .map(|r| {
                            let href = r.path();
                            view! { <li><a href=href>{r.title}</a></li> }
                        })
                        .collect_view()}
                </ul>
            </aside>
        }
    });

    view! {
        <article class="article">
            <header class="article-header">
                <a class="back-link" href=WRITING_LISTING>"← All writing"</a>
                <h1 class="article-title">{article.title}</h1>
                <p class="byline">
                    <span class="author">{article.author}</span>
                    " · "
                    <time datetime=iso_date>{display_date}</time>
                    " · "
                    <span class="read-time">{article.read_time}</span>
                </p>
                <ul class="tags">
                    {article.tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                </ul>
            </header>
            {hero}
            <ContentBlocks blocks=article.content/>
            {related_section}
        </article>
    }
}

#[component]
pub fn ArticleNotFound(slug: String) -> impl IntoView {
    let path = format!("/article/{}", slug);
    view! {
        <section class="not-found">
            <h1>"Article Not Found"</h1>
            <p>"Nothing is published at "<code>{path}</code></p>
            <a href=WRITING_LISTING>"Back to all articles"</a>
        </section>
    }
}

#[component]
pub fn ProcessIndex(studies: Vec<ProcessStudy>) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Process"</h1>
            <p class="tagline">"How projects went from question to shipped."</p>
        </section>
        <div class="card-grid">
            {studies
                .into_iter()
                .map(|study| {
                    let href = study.path();
                    let alt = study.title.clone();
                    view! {
                        <article class="project-card study-card">
                            <img src=study.hero_image alt=alt loading="lazy"/>
                            <div class="card-body">
                                <h3>{study.title}</h3>
                                <p>{study.subtitle}</p>
                                <a class="card-link" href=href>"Read case study"</a>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProcessStudyPage(study: ProcessStudy) -> impl IntoView {
    let alt = study.title.clone();
    let tools = study.tools.join(", ");

    view! {
        <article class="article study">
            <header class="article-header">
                <a class="back-link" href="/process">"← All case studies"</a>
                <h1 class="article-title">{study.title}</h1>
                <p class="tagline">{study.subtitle}</p>
                <dl class="study-meta">
                    <dt>"Role"</dt>
                    <dd>{study.role}</dd>
                    <dt>"Timeline"</dt>
                    <dd>{study.timeline}</dd>
                    <dt>"Tools"</dt>
                    <dd>{tools}</dd>
                </dl>
            </header>
            <img class="hero-image" src=study.hero_image alt=alt/>
            <p class="summary">{study.summary}</p>
            <ContentBlocks blocks=study.sections/>
        </article>
    }
}

#[component]
pub fn StudyNotFound(slug: String) -> impl IntoView {
    let path = format!("/process/{}", slug);
    view! {
        <section class="not-found">
            <h1>"Project Not Found"</h1>
            <p>"There is no case study at "<code>{path}</code></p>
            <a href="/process">"Back to all case studies"</a>
        </section>
    }
}

#[component]
pub fn ExperiencePage(entries: Vec<ExperienceEntry>, resume_url: Option<String>) -> impl IntoView {
    let resume = resume_url.map(|url| {
        view! {
            <a class="resume-link" href=url target="_blank" rel="noopener noreferrer">
                "Full résumé"
            </a>
        }
    });

    view! {
        <section class="hero">
            <h1>"Experience"</h1>
            {resume}
        </section>
        <ol class="timeline">
            {entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <li class="experience">
                            <h2>{entry.role}</h2>
                            <p class="company">{entry.company}</p>
                            <p class="period">{entry.period}" · "{entry.location}</p>
                            <p>{entry.summary}</p>
                            <ul class="block-list">
                                {entry
                                    .highlights
                                    .into_iter()
                                    .map(|h| view! { <li>{h}</li> })
                                    .collect_view()}
                            </ul>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"Nothing lives at "<code>{path}</code></p>
            <a href="/">"Go home"</a>
        </section>
    }
}

#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <title>"Configuration Error"</title>
            </head>
            <body>
                <h1>"Configuration Error"</h1>
                <pre class="config-error">{message}</pre>
                <script inner_html=RELOAD_JS></script>
            </body>
        </html>
    }
}
