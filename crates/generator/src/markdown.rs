//! Markdown articles with TOML front matter.
//!
//! ```text
//! +++
//! title = "Tabs, Hashes and Routes"
//! date = "2024-05-20"
//! tags = ["web"]
//! +++
//!
//! Body in CommonMark...
//! ```
//!
//! The file stem becomes the article slug.

use chrono::NaiveDate;
use folio_core::{Article, ContentBlock, Error, Result, read_time_label, slugify};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const FRONT_MATTER_DELIMITER: &str = "+++";

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    date: String,
    read_time: Option<String>,
    author: Option<String>,
    #[serde(default)]
    hero_image: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    related: Vec<String>,
}

/// Load every `*.md` file in `dir`, sorted by file name
pub fn load_articles(dir: &Path, default_author: &str) -> Result<Vec<Article>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| parse_article_file(path, default_author))
        .collect()
}

pub fn parse_article_file(path: &Path, default_author: &str) -> Result<Article> {
    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .ok_or_else(|| {
            Error::InvalidData(format!("Cannot derive a slug from {}", path.display()))
        })?;

    let source = fs::read_to_string(path)?;
    parse_article(&slug, &source, default_author).map_err(|err| match err {
        Error::InvalidData(msg) => Error::InvalidData(format!("{}: {}", path.display(), msg)),
        Error::ConfigParse(msg) => Error::ConfigParse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parse one article from its Markdown source
pub fn parse_article(slug: &str, source: &str, default_author: &str) -> Result<Article> {
    let (front, body) = split_front_matter(source)?;
    let meta: FrontMatter = toml::from_str(front)?;

    let date = NaiveDate::parse_from_str(&meta.date, "%Y-%m-%d")
        .map_err(|e| Error::ConfigParse(format!("Invalid date '{}': {}", meta.date, e)))?;

    let content = markdown_to_blocks(body);
    if content.is_empty() {
        return Err(Error::InvalidData(format!("Article '{}' has no content", slug)));
    }

    let read_time = meta
        .read_time
        .unwrap_or_else(|| read_time_label(&content));

    Ok(Article {
        slug: slug.to_string(),
        title: meta.title,
        date,
        read_time,
        author: meta.author.unwrap_or_else(|| default_author.to_string()),
        hero_image: meta.hero_image,
        content,
        tags: meta.tags,
        related: meta.related,
    })
}

fn split_front_matter(source: &str) -> Result<(&str, &str)> {
    let rest = source.trim_start_matches('\u{feff}').trim_start();
    let rest = rest.strip_prefix(FRONT_MATTER_DELIMITER).ok_or_else(|| {
        Error::InvalidData("Missing +++ front matter at the top of the file".into())
    })?;

    let closing = format!("\n{}", FRONT_MATTER_DELIMITER);
    let end = rest
        .find(&closing)
        .ok_or_else(|| Error::InvalidData("Unterminated +++ front matter".into()))?;

    Ok((&rest[..end], &rest[end + closing.len()..]))
}

#[derive(Debug)]
enum Frame {
    Paragraph,
    Heading(u8),
    Quote,
    List,
    Item,
    Code(String),
    Image { src: String, title: String },
    Inline,
}

/// Accumulates pulldown-cmark events into flat content blocks.
///
/// Nested lists flatten into their outermost list; paragraphs inside quotes
/// and list items join into the enclosing block's text. A code block inside a
/// list or quote splits it, so the text before the code is emitted first.
/// Images inside headings, lists and quotes contribute only their alt text.
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<ContentBlock>,
    stack: Vec<Frame>,
    text: String,
    alt: String,
    items: Vec<String>,
}

impl BlockBuilder {
    fn in_quote(&self) -> bool {
        self.stack.iter().any(|f| matches!(f, Frame::Quote))
    }

    fn in_list(&self) -> bool {
        self.stack.iter().any(|f| matches!(f, Frame::List))
    }

    fn in_heading(&self) -> bool {
        self.stack.iter().any(|f| matches!(f, Frame::Heading(_)))
    }

    fn in_image(&self) -> bool {
        self.stack.iter().any(|f| matches!(f, Frame::Image { .. }))
    }

    fn take_text(&mut self) -> String {
        let text = self.text.trim().to_string();
        self.text.clear();
        text
    }

    fn push_text(&mut self, text: &str) {
        if self.in_image() {
            self.alt.push_str(text);
        } else {
            self.text.push_str(text);
        }
    }

    fn flush_item(&mut self) {
        let text = self.take_text();
        if !text.is_empty() {
            self.items.push(text);
        }
    }

    /// Emit what an open list or quote has collected so far
    fn flush_enclosing(&mut self) {
        if self.in_list() {
            self.flush_item();
            let items = std::mem::take(&mut self.items);
            if !items.is_empty() {
                self.blocks.push(ContentBlock::List { items });
            }
        } else if self.in_quote() {
            let text = self.take_text();
            if !text.is_empty() {
                self.blocks.push(ContentBlock::Quote { text });
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph if self.in_quote() || self.in_list() => {
                if !self.text.is_empty() {
                    self.text.push(' ');
                }
                Frame::Inline
            }
            Tag::Paragraph => Frame::Paragraph,
            Tag::Heading { level, .. } => Frame::Heading(level as u8),
            Tag::BlockQuote(_) if self.in_quote() => Frame::Inline,
            Tag::BlockQuote(_) => Frame::Quote,
            Tag::List(_) if self.in_quote() || self.in_list() => Frame::Inline,
            Tag::List(_) => Frame::List,
            Tag::Item if self.in_quote() => Frame::Inline,
            Tag::Item => {
                self.flush_item();
                Frame::Item
            }
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .unwrap_or("text")
                        .to_string(),
                    CodeBlockKind::Indented => "text".to_string(),
                };
                self.flush_enclosing();
                Frame::Code(language)
            }
            Tag::Image { .. } if self.in_heading() || self.in_list() || self.in_quote() => {
                Frame::Inline
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.alt.clear();
                Frame::Image {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                }
            }
            _ => Frame::Inline,
        };
        self.stack.push(frame);
    }

    fn end(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        match frame {
            Frame::Paragraph => {
                let text = self.take_text();
                if !text.is_empty() {
                    self.blocks.push(ContentBlock::Paragraph { text });
                }
            }
            Frame::Heading(level) => {
                let text = self.take_text();
                self.blocks.push(ContentBlock::Heading { level, text });
            }
            Frame::Quote => {
                let text = self.take_text();
                if !text.is_empty() {
                    self.blocks.push(ContentBlock::Quote { text });
                }
            }
            Frame::List => {
                self.flush_item();
                let items = std::mem::take(&mut self.items);
                if !items.is_empty() {
                    self.blocks.push(ContentBlock::List { items });
                }
            }
            Frame::Item => self.flush_item(),
            Frame::Code(language) => {
                let source = self.text.trim_end_matches('\n').to_string();
                self.text.clear();
                self.blocks.push(ContentBlock::Code { language, source });
            }
            Frame::Image { src, title } => {
                // Text before an inline image becomes its own paragraph
                let text = self.take_text();
                if !text.is_empty() {
                    self.blocks.push(ContentBlock::Paragraph { text });
                }
                let alt = std::mem::take(&mut self.alt).trim().to_string();
                let caption = (!title.is_empty()).then_some(title);
                self.blocks.push(ContentBlock::Image { src, alt, caption });
            }
            Frame::Inline => {}
        }
    }
}

/// Convert a CommonMark body into content blocks, in document order
pub fn markdown_to_blocks(markdown: &str) -> Vec<ContentBlock> {
    let mut builder = BlockBuilder::default();

    for event in Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(_) => builder.end(),
            Event::Text(text) | Event::Code(text) => builder.push_text(&text),
            Event::SoftBreak => builder.push_text(" "),
            Event::HardBreak => builder.push_text("\n"),
            _ => {}
        }
    }

    builder.blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ARTICLE: &str = r#"+++
title = "Tabs, Hashes and Routes"
date = "2024-05-20"
tags = ["web"]
related = ["designing-for-latency"]
+++

Intro paragraph with `inline code` and *emphasis*.

## Section

- one
- two
  - nested

### Detail

```rust
fn main() {}
```

> Quoted line
> continues

![Alt text](/assets/x.png "Caption here")

#### Small
"#;

    #[test]
    fn test_markdown_to_blocks_in_document_order() {
        let (_, body) = split_front_matter(ARTICLE).unwrap();
        let blocks = markdown_to_blocks(body);

        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("Intro paragraph with inline code and emphasis."),
                ContentBlock::heading(2, "Section"),
                ContentBlock::list(["one", "two", "nested"]),
                ContentBlock::heading(3, "Detail"),
                ContentBlock::code("rust", "fn main() {}"),
                ContentBlock::quote("Quoted line continues"),
                ContentBlock::image("/assets/x.png", "Alt text", Some("Caption here")),
                ContentBlock::heading(4, "Small"),
            ]
        );
    }

    #[test]
    fn test_parse_article_front_matter() {
        let article = parse_article("tabs-hashes-routes", ARTICLE, "Rowan Vale").unwrap();
        assert_eq!(article.slug, "tabs-hashes-routes");
        assert_eq!(article.title, "Tabs, Hashes and Routes");
        assert_eq!(article.display_date(), "May 20, 2024");
        assert_eq!(article.author, "Rowan Vale");
        assert_eq!(article.read_time, "1 min read");
        assert_eq!(article.tags, vec!["web"]);
        assert_eq!(article.related, vec!["designing-for-latency"]);
    }

    #[test]
    fn test_parse_article_keeps_explicit_read_time_and_author() {
        let source = "+++\ntitle = \"T\"\ndate = \"2024-01-02\"\nread_time = \"12 min read\"\nauthor = \"Guest\"\n+++\nBody.\n";
        let article = parse_article("t", source, "Rowan Vale").unwrap();
        assert_eq!(article.read_time, "12 min read");
        assert_eq!(article.author, "Guest");
    }

    #[test]
    fn test_indented_code_uses_text_language() {
        let blocks = markdown_to_blocks("Para.\n\n    let x = 1;\n");
        assert_eq!(blocks[1], ContentBlock::code("text", "let x = 1;"));
    }

    #[test]
    fn test_code_inside_list_splits_the_list() {
        let blocks = markdown_to_blocks("- Run the build:\n\n  ```sh\n  make\n  ```\n- Done\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::list(["Run the build:"]),
                ContentBlock::code("sh", "make"),
                ContentBlock::list(["Done"]),
            ]
        );
    }

    #[test]
    fn test_code_inside_quote_keeps_quote_text() {
        let blocks = markdown_to_blocks("> Said before code\n>\n> ```\n> x\n> ```\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::quote("Said before code"),
                ContentBlock::code("text", "x"),
            ]
        );
    }

    #[test]
    fn test_images_inside_lists_quotes_and_headings_stay_inline() {
        let blocks = markdown_to_blocks("Intro.\n\n- first ![a](/assets/a.png)\n- second\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("Intro."),
                ContentBlock::list(["first a", "second"]),
            ]
        );

        let blocks = markdown_to_blocks("> Look ![chart](/assets/c.png) here\n");
        assert_eq!(blocks, vec![ContentBlock::quote("Look chart here")]);

        let blocks = markdown_to_blocks("## Logo ![l](/assets/l.png) here\n");
        assert_eq!(blocks, vec![ContentBlock::heading(2, "Logo l here")]);
    }

    #[test]
    fn test_image_inside_paragraph_splits_text() {
        let blocks = markdown_to_blocks("Before ![pic](/assets/p.png) after\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("Before"),
                ContentBlock::image("/assets/p.png", "pic", None),
                ContentBlock::paragraph("after"),
            ]
        );
    }

    #[test]
    fn test_parse_article_errors() {
        assert!(parse_article("x", "no front matter", "A").is_err());
        assert!(parse_article("x", "+++\ntitle = \"T\"\n", "A").is_err());

        let bad_date = "+++\ntitle = \"T\"\ndate = \"May 5\"\n+++\nBody\n";
        let err = parse_article("x", bad_date, "A").unwrap_err();
        assert!(err.to_string().contains("Invalid date"));

        let empty = "+++\ntitle = \"T\"\ndate = \"2024-01-01\"\n+++\n\n";
        let err = parse_article("x", empty, "A").unwrap_err();
        assert!(err.to_string().contains("no content"));
    }

    #[test]
    fn test_load_articles_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Second Post.md"), ARTICLE).unwrap();
        fs::write(
            dir.path().join("a-first.md"),
            "+++\ntitle = \"First\"\ndate = \"2020-01-01\"\n+++\nHello.\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let articles = load_articles(dir.path(), "Rowan Vale").unwrap();
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["second-post", "a-first"]);
    }

    #[test]
    fn test_load_articles_reports_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.md"), "no front matter").unwrap();

        let err = load_articles(dir.path(), "A").unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }
}
