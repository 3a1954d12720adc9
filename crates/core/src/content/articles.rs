use crate::types::{Article, ContentBlock as B};
use chrono::NaiveDate;

const AUTHOR: &str = "Rowan Vale";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

pub(super) fn articles() -> Vec<Article> {
    vec![
        Article {
            slug: "designing-for-latency".into(),
            title: "Designing for Latency".into(),
            date: date(2024, 3, 4),
            read_time: "6 min read".into(),
            author: AUTHOR.into(),
            hero_image: "/assets/articles/latency-hero.jpg".into(),
            content: vec![
                B::paragraph(
                    "Every interface has a speed limit set by the slowest system behind it. \
                     Most of the time we design as if that limit does not exist, and then \
                     users meet the spinner.",
                ),
                B::heading(2, "Perceived time is the product"),
                B::paragraph(
                    "A request that takes 800ms can feel instant or broken depending on what \
                     the screen does during those 800ms. The work is in choosing what to show.",
                ),
                B::list([
                    "Acknowledge input within 100ms, even if the result is not ready",
                    "Keep layout stable while content streams in",
                    "Prefer optimistic updates for actions that rarely fail",
                ]),
                B::heading(3, "A small example"),
                B::code(
                    "ts",
                    "button.disabled = true;\nlabel.textContent = \"Saving…\";\nawait save(draft);\nlabel.textContent = \"Saved\";",
                ),
                B::quote("Fast is a feeling before it is a number."),
                B::image(
                    "/assets/articles/latency-timeline.png",
                    "Timeline of a save interaction with feedback states",
                    Some("Feedback states mapped against network time"),
                ),
                B::paragraph(
                    "None of this replaces making the backend faster. It buys the goodwill you \
                     need while you do.",
                ),
            ],
            tags: tags(&["interaction", "performance"]),
            related: vec!["prototypes-over-decks".into()],
        },
        Article {
            slug: "prototypes-over-decks".into(),
            title: "Prototypes Over Decks".into(),
            date: date(2023, 11, 18),
            read_time: "4 min read".into(),
            author: AUTHOR.into(),
            hero_image: "/assets/articles/prototypes-hero.jpg".into(),
            content: vec![
                B::paragraph(
                    "A slide can describe a flow. A prototype lets someone fall through it. \
                     The second is where the real feedback comes from.",
                ),
                B::heading(2, "What a prototype settles"),
                B::list([
                    "Whether the happy path is actually short",
                    "Where people hesitate",
                    "Which edge cases nobody wrote down",
                ]),
                B::heading(2, "What it does not"),
                B::paragraph(
                    "Prototypes are bad at arguing strategy. Keep a written doc for the why \
                     and let the prototype carry the how.",
                ),
            ],
            tags: tags(&["process", "prototyping"]),
            related: vec![
                "designing-for-latency".into(),
                "design-docs-people-read".into(),
            ],
        },
        Article {
            slug: "design-docs-people-read".into(),
            title: "Design Docs People Actually Read".into(),
            date: date(2023, 6, 2),
            read_time: "5 min read".into(),
            author: AUTHOR.into(),
            hero_image: "/assets/articles/docs-hero.jpg".into(),
            content: vec![
                B::paragraph(
                    "The best design doc I ever wrote was two pages long and had one diagram. \
                     The worst had forty screens and no decisions.",
                ),
                B::heading(2, "Lead with the decision"),
                B::paragraph(
                    "Readers skim. Put the recommendation in the first paragraph and the \
                     alternatives after it.",
                ),
                B::heading(3, "A skeleton that works"),
                B::code(
                    "markdown",
                    "# Problem\n# Decision\n# Alternatives considered\n# Open questions",
                ),
                B::quote("If a reviewer has to ask what you decided, the doc is not done."),
            ],
            tags: tags(&["writing", "process"]),
            related: vec!["prototypes-over-decks".into()],
        },
        Article {
            slug: "notes-on-motion".into(),
            title: "Notes on Motion".into(),
            date: date(2022, 9, 14),
            read_time: "3 min read".into(),
            author: AUTHOR.into(),
            hero_image: "/assets/articles/motion-hero.jpg".into(),
            content: vec![
                B::paragraph(
                    "Animation earns its place when it explains where something came from or \
                     where it went.",
                ),
                B::heading(4, "Rules of thumb"),
                B::list([
                    "Entrances slower than exits",
                    "Never animate layout the user is reading",
                    "Respect reduced-motion settings",
                ]),
                B::image(
                    "/assets/articles/motion-curves.png",
                    "Easing curves compared side by side",
                    None,
                ),
            ],
            tags: tags(&["motion", "interaction"]),
            related: vec![],
        },
    ]
}
