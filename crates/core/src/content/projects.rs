use crate::types::{Category, Link, ProjectCard};

fn card(
    id: u32,
    category: Category,
    title: &str,
    subtitle: &str,
    tags: &[&str],
    image: &str,
    link: Option<Link>,
) -> ProjectCard {
    ProjectCard {
        id,
        title: title.into(),
        subtitle: subtitle.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: image.into(),
        link,
        category,
    }
}

fn external(url: &str) -> Option<Link> {
    Some(Link::External(url.into()))
}

fn internal(path: &str) -> Option<Link> {
    Some(Link::Internal(path.into()))
}

pub(super) fn projects() -> Vec<ProjectCard> {
    use Category::*;

    vec![
        card(
            1,
            Prototype,
            "Transit Checkout",
            "Tap-to-ride fare flow for a regional transit app",
            &["React", "Framer Motion", "Usability testing"],
            "/assets/projects/transit.png",
            internal("/process/transit-checkout"),
        ),
        card(
            2,
            Prototype,
            "Clinic Scheduler",
            "Booking flow that cut no-shows for a community clinic",
            &["Prototype", "Research"],
            "/assets/projects/clinic.png",
            internal("/process/clinic-scheduling"),
        ),
        card(
            3,
            Prototype,
            "Offline Notes",
            "Sync-conflict UI explored as a clickable prototype",
            &["Svelte", "IndexedDB"],
            "/assets/projects/notes.png",
            external("https://notes-prototype.example.app"),
        ),
        card(
            4,
            Figma,
            "Design System Tokens",
            "Color, type and spacing tokens with light and dark themes",
            &["Figma", "Design systems"],
            "/assets/figma/tokens.png",
            external("https://www.figma.com/file/tokens-community"),
        ),
        card(
            5,
            Figma,
            "Transit Wayfinding",
            "Station maps and live departure boards",
            &["Figma", "Wayfinding"],
            "/assets/figma/wayfinding.png",
            external("https://www.figma.com/file/transit-wayfinding"),
        ),
        card(
            6,
            Figma,
            "Onboarding Flows",
            "Five onboarding variants tested with new users",
            &["Figma", "Onboarding"],
            "/assets/figma/onboarding.png",
            external("https://www.figma.com/file/onboarding-flows"),
        ),
        card(
            7,
            Figma,
            "Icon Set",
            "Ninety-six icons drawn on a 24px grid",
            &["Figma", "Iconography"],
            "/assets/figma/icons.png",
            external("https://www.figma.com/file/icon-set"),
        ),
        card(
            8,
            DesignDocs,
            "Notifications Strategy",
            "When to interrupt, when to batch and when to stay quiet",
            &["Design doc", "Strategy"],
            "/assets/docs/notifications.png",
            external("https://docs.example.com/notifications-strategy"),
        ),
        card(
            9,
            DesignDocs,
            "Accessible Forms Guide",
            "Patterns for validation, errors and focus management",
            &["Design doc", "Accessibility"],
            "/assets/docs/forms.png",
            external("https://docs.example.com/accessible-forms"),
        ),
        card(
            10,
            Writing,
            "Designing for Latency",
            "Making slow systems feel responsive",
            &["Essay"],
            "/assets/articles/latency-hero.jpg",
            internal("/article/designing-for-latency"),
        ),
        card(
            11,
            Writing,
            "Prototypes Over Decks",
            "Why clickable beats describable",
            &["Essay"],
            "/assets/articles/prototypes-hero.jpg",
            internal("/article/prototypes-over-decks"),
        ),
        card(
            12,
            Writing,
            "Design Docs People Actually Read",
            "Lead with the decision",
            &["Essay"],
            "/assets/articles/docs-hero.jpg",
            internal("/article/design-docs-people-read"),
        ),
        card(
            13,
            Experiments,
            "Generative Patterns",
            "Tiling experiments driven by a seeded noise field",
            &["Canvas", "Generative"],
            "/assets/experiments/patterns.png",
            external("https://patterns.example.app"),
        ),
        card(
            14,
            Experiments,
            "Haptic Sketches",
            "Vibration patterns as a second feedback channel",
            &["Mobile", "Haptics"],
            "/assets/experiments/haptics.png",
            None,
        ),
    ]
}
