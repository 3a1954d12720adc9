use crate::types::{Profile, Testimonial};

pub(super) fn profile() -> Profile {
    Profile {
        headline: "Product designer who prototypes in code".into(),
        bio: vec![
            "I design interfaces for systems that are slower, messier and more important \
             than they look: transit, healthcare, public services."
                .into(),
            "Most of my work starts as a prototype. I would rather put something clickable \
             in front of people on day three than polish a deck for a month."
                .into(),
            "Outside of work I make generative pattern experiments and write about process."
                .into(),
        ],
        location: "Portland, Oregon".into(),
        portrait: "/assets/portrait.jpg".into(),
        skills: [
            "Interaction design",
            "Prototyping",
            "Design systems",
            "User research",
            "Front-end development",
            "Technical writing",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        testimonials: vec![
            Testimonial {
                quote: "Rowan turns arguments into prototypes. Meetings got shorter and \
                        decisions got better."
                    .into(),
                name: "Priya Natarajan".into(),
                title: "VP Product, Metro Mobility Co.".into(),
            },
            Testimonial {
                quote: "The rare designer who reads the API docs before drawing the screen."
                    .into(),
                name: "Marcus Hale".into(),
                title: "Staff Engineer".into(),
            },
        ],
    }
}
