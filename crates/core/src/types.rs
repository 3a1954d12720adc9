use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Smallest unit of authored content.
///
/// Authored data (Markdown, TOML) may carry kinds this build does not know
/// about; those deserialize to [`ContentBlock::Unknown`] and render nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
    },
    List {
        items: Vec<String>,
    },
    Code {
        language: String,
        source: String,
    },
    Quote {
        text: String,
    },
    Image {
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn code(language: impl Into<String>, source: impl Into<String>) -> Self {
        ContentBlock::Code {
            language: language.into(),
            source: source.into(),
        }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        ContentBlock::Quote { text: text.into() }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>, caption: Option<&str>) -> Self {
        ContentBlock::Image {
            src: src.into(),
            alt: alt.into(),
            caption: caption.map(str::to_string),
        }
    }

    /// Words of visible text, used for read-time estimates
    pub fn word_count(&self) -> usize {
        match self {
            ContentBlock::Paragraph { text }
            | ContentBlock::Heading { text, .. }
            | ContentBlock::Quote { text } => text.split_whitespace().count(),
            ContentBlock::List { items } => {
                items.iter().map(|i| i.split_whitespace().count()).sum()
            }
            ContentBlock::Code { source, .. } => source.split_whitespace().count(),
            ContentBlock::Image { caption, .. } => caption
                .as_deref()
                .map(|c| c.split_whitespace().count())
                .unwrap_or(0),
            ContentBlock::Unknown => 0,
        }
    }
}

/// Visual weight of a heading block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Section,
    Subsection,
    Default,
}

impl HeadingLevel {
    pub fn from_level(level: u8) -> Self {
        match level {
            2 => HeadingLevel::Section,
            3 => HeadingLevel::Subsection,
            _ => HeadingLevel::Default,
        }
    }
}

/// Blog-style article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub author: String,
    pub hero_image: String,
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Slugs of related articles
    #[serde(default)]
    pub related: Vec<String>,
}

impl Article {
    pub fn path(&self) -> String {
        format!("/article/{}", self.slug)
    }

    /// Long-form date, e.g. "March 4, 2024"
    pub fn display_date(&self) -> String {
        format_date(self.date)
    }

    /// First paragraph, used as a teaser on listings
    pub fn excerpt(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Paragraph { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Home page content category, one per tab
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Prototype,
    Figma,
    DesignDocs,
    Writing,
    Experiments,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Prototype,
        Category::Figma,
        Category::DesignDocs,
        Category::Writing,
        Category::Experiments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Prototype => "Prototype",
            Category::Figma => "Figma",
            Category::DesignDocs => "Design Docs",
            Category::Writing => "Writing",
            Category::Experiments => "Experiments",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Prototype => "prototype",
            Category::Figma => "figma",
            Category::DesignDocs => "design-docs",
            Category::Writing => "writing",
            Category::Experiments => "experiments",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Hash fragment used by the in-page tab links
    pub fn fragment(self) -> String {
        format!("#{}", self.slug())
    }
}

/// Where a project card points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Link {
    /// Third-party hosted demo, document, etc.
    External(String),
    /// Path on this site, resolved through the router
    Internal(String),
}

impl Link {
    pub fn href(&self) -> &str {
        match self {
            Link::External(url) | Link::Internal(url) => url,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Link::External(_))
    }
}

/// Project showcase card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    /// In-page tab switch on the home page
    Tab(Category),
    /// Full navigation to another route
    Route(String),
}

/// Navigation entry shown in the site header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOption {
    pub name: String,
    pub icon: String,
    pub target: NavTarget,
}

impl NavOption {
    pub fn tab(category: Category, icon: impl Into<String>) -> Self {
        NavOption {
            name: category.label().to_string(),
            icon: icon.into(),
            target: NavTarget::Tab(category),
        }
    }

    pub fn route(
        name: impl Into<String>,
        icon: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        NavOption {
            name: name.into(),
            icon: icon.into(),
            target: NavTarget::Route(path.into()),
        }
    }

    pub fn is_tab(&self) -> bool {
        matches!(self.target, NavTarget::Tab(_))
    }

    /// Hash fragment for tab switches, route path otherwise
    pub fn href(&self) -> String {
        match &self.target {
            NavTarget::Tab(category) => category.fragment(),
            NavTarget::Route(path) => path.clone(),
        }
    }
}

/// Case study shown under `/process/{slug}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStudy {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub role: String,
    pub timeline: String,
    pub hero_image: String,
    pub summary: String,
    pub tools: Vec<String>,
    pub sections: Vec<ContentBlock>,
}

impl ProcessStudy {
    pub fn path(&self) -> String {
        format!("/process/{}", self.slug)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
}

/// Biographical content for the about page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub headline: String,
    pub bio: Vec<String>,
    pub location: String,
    pub portrait: String,
    pub skills: Vec<String>,
    pub testimonials: Vec<Testimonial>,
}

/// Format a date the way article bylines show it
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Estimate a read-time label at 200 words per minute
pub fn read_time_label(blocks: &[ContentBlock]) -> String {
    let words: usize = blocks.iter().map(ContentBlock::word_count).sum();
    let minutes = words.div_ceil(200).max(1);
    format!("{} min read", minutes)
}

/// Get a URL-safe slug from a title
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-' || c == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_mapping() {
        assert_eq!(HeadingLevel::from_level(2), HeadingLevel::Section);
        assert_eq!(HeadingLevel::from_level(3), HeadingLevel::Subsection);
        assert_eq!(HeadingLevel::from_level(1), HeadingLevel::Default);
        assert_eq!(HeadingLevel::from_level(6), HeadingLevel::Default);
    }

    #[test]
    fn test_category_slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("sketches"), None);
        assert_eq!(Category::DesignDocs.label(), "Design Docs");
        assert_eq!(Category::Figma.fragment(), "#figma");
    }

    #[test]
    fn test_unknown_block_kind_deserializes() {
        let json = r#"[
            {"type": "paragraph", "text": "hello"},
            {"type": "carousel", "slides": 3},
            {"type": "image", "src": "/assets/a.png", "alt": "a"}
        ]"#;
        let blocks: Vec<ContentBlock> = serde_json::from_str(json).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], ContentBlock::paragraph("hello"));
        assert_eq!(blocks[1], ContentBlock::Unknown);
        assert_eq!(blocks[2], ContentBlock::image("/assets/a.png", "a", None));
    }

    #[test]
    fn test_read_time_label() {
        assert_eq!(read_time_label(&[]), "1 min read");

        let long = vec!["word"; 450].join(" ");
        assert_eq!(
            read_time_label(&[ContentBlock::paragraph(long)]),
            "3 min read"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Designing for Latency"), "designing-for-latency");
        assert_eq!(slugify("  Tabs,  Hashes & Routes "), "tabs-hashes-routes");
        assert_eq!(slugify("snake_case-title"), "snake-case-title");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_date(date), "March 4, 2024");
    }

    #[test]
    fn test_nav_option_href() {
        let tab = NavOption::tab(Category::Writing, "pen");
        assert!(tab.is_tab());
        assert_eq!(tab.href(), "#writing");
        assert_eq!(tab.name, "Writing");

        let route = NavOption::route("About", "user", "/about");
        assert!(!route.is_tab());
        assert_eq!(route.href(), "/about");
    }

    #[test]
    fn test_link_kinds() {
        let external = Link::External("https://www.figma.com/file/abc".into());
        assert!(external.is_external());
        assert_eq!(external.href(), "https://www.figma.com/file/abc");

        let internal = Link::Internal("/process/transit-checkout".into());
        assert!(!internal.is_external());
        assert_eq!(internal.href(), "/process/transit-checkout");
    }
}
