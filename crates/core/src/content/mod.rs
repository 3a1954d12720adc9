//! The content store: every record the site renders.
//!
//! Built-in content is defined in the sibling modules and assembled by
//! [`ContentStore::builtin`]. Markdown articles loaded from the site
//! directory are merged in with [`ContentStore::add_articles`] before any
//! page renders; after that the store is read-only.

mod articles;
mod experience;
mod nav;
mod process;
mod profile;
mod projects;

use crate::error::{Error, Result};
use crate::types::{
    Article, Category, ExperienceEntry, NavOption, ProcessStudy, Profile, ProjectCard,
};

#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    articles: Vec<Article>,
    projects: Vec<ProjectCard>,
    studies: Vec<ProcessStudy>,
    experience: Vec<ExperienceEntry>,
    nav: Vec<NavOption>,
}

impl ContentStore {
    pub fn new(
        profile: Profile,
        articles: Vec<Article>,
        projects: Vec<ProjectCard>,
        studies: Vec<ProcessStudy>,
        experience: Vec<ExperienceEntry>,
        nav: Vec<NavOption>,
    ) -> Self {
        Self {
            profile,
            articles,
            projects,
            studies,
            experience,
            nav,
        }
    }

    /// The hard-coded portfolio content
    pub fn builtin() -> Self {
        Self::new(
            profile::profile(),
            articles::articles(),
            projects::projects(),
            process::studies(),
            experience::experience(),
            nav::nav_options(),
        )
    }

    /// Merge externally authored articles. Slugs must stay unique.
    pub fn add_articles(&mut self, articles: Vec<Article>) -> Result<()> {
        for article in articles {
            if self.article(&article.slug).is_some() {
                return Err(Error::InvalidData(format!(
                    "Duplicate article slug '{}'",
                    article.slug
                )));
            }
            self.articles.push(article);
        }
        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Articles newest first, for listings
    pub fn articles_by_date(&self) -> Vec<&Article> {
        let mut sorted: Vec<&Article> = self.articles.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn projects(&self) -> &[ProjectCard] {
        &self.projects
    }

    pub fn projects_in(&self, category: Category) -> Vec<&ProjectCard> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn studies(&self) -> &[ProcessStudy] {
        &self.studies
    }

    pub fn study(&self, slug: &str) -> Option<&ProcessStudy> {
        self.studies.iter().find(|s| s.slug == slug)
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn nav(&self) -> &[NavOption] {
        &self.nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentBlock, Link};
    use chrono::NaiveDate;

    fn article(slug: &str, year: i32) -> Article {
        Article {
            slug: slug.into(),
            title: slug.to_uppercase(),
            date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            read_time: "1 min read".into(),
            author: "Tester".into(),
            hero_image: "/assets/hero.png".into(),
            content: vec![ContentBlock::paragraph("body")],
            tags: vec![],
            related: vec![],
        }
    }

    #[test]
    fn test_builtin_articles_are_complete() {
        let store = ContentStore::builtin();
        assert!(!store.articles().is_empty());
        for a in store.articles() {
            assert!(!a.title.is_empty(), "{} has no title", a.slug);
            assert!(!a.content.is_empty(), "{} has no content", a.slug);
            assert_eq!(store.article(&a.slug).map(|x| &x.title), Some(&a.title));
            assert_ne!(a.date, NaiveDate::default(), "{} has no real date", a.slug);
        }
    }

    #[test]
    fn test_figma_tab_has_four_linked_entries() {
        let store = ContentStore::builtin();
        let figma = store.projects_in(Category::Figma);
        assert_eq!(figma.len(), 4);
        assert!(figma.iter().all(|p| p.link.is_some()));
    }

    #[test]
    fn test_every_category_has_projects() {
        let store = ContentStore::builtin();
        for category in Category::ALL {
            assert!(
                !store.projects_in(category).is_empty(),
                "{} is empty",
                category.label()
            );
        }
    }

    #[test]
    fn test_internal_links_resolve() {
        let store = ContentStore::builtin();
        for project in store.projects() {
            if let Some(Link::Internal(path)) = &project.link {
                assert!(
                    crate::router::Route::resolve(path).exists_in(&store),
                    "project {} links to missing {}",
                    project.id,
                    path
                );
            }
        }
        for a in store.articles() {
            for related in &a.related {
                assert!(store.article(related).is_some(), "{} -> {}", a.slug, related);
            }
        }
    }

    #[test]
    fn test_add_articles_rejects_duplicate_slug() {
        let mut store = ContentStore::builtin();
        let existing = store.articles()[0].slug.clone();

        store.add_articles(vec![article("fresh-post", 2030)]).unwrap();
        assert!(store.article("fresh-post").is_some());

        let err = store.add_articles(vec![article(&existing, 2031)]).unwrap_err();
        assert!(err.to_string().contains(&existing));
    }

    #[test]
    fn test_articles_by_date_newest_first() {
        let mut store = ContentStore::builtin();
        store.add_articles(vec![article("from-the-future", 2099)]).unwrap();
        let sorted = store.articles_by_date();
        assert_eq!(sorted[0].slug, "from-the-future");
        assert!(sorted.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
