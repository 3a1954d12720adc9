use crate::types::{ContentBlock as B, ProcessStudy};

pub(super) fn studies() -> Vec<ProcessStudy> {
    vec![
        ProcessStudy {
            slug: "transit-checkout".into(),
            title: "Transit Checkout".into(),
            subtitle: "Getting riders through the gate in under ten seconds".into(),
            role: "Lead product designer".into(),
            timeline: "Jan – Jun 2023".into(),
            hero_image: "/assets/process/transit-hero.jpg".into(),
            summary: "Redesigned the fare purchase flow of a regional transit app, moving \
                      from a six-step checkout to a single confirmation sheet."
                .into(),
            tools: vec!["Figma".into(), "React".into(), "Maze".into()],
            sections: vec![
                B::heading(2, "Problem"),
                B::paragraph(
                    "Riders bought tickets while walking to the platform. The old flow asked \
                     for zone, fare type, quantity and payment on separate screens.",
                ),
                B::heading(2, "Research"),
                B::list([
                    "Twelve intercept interviews at three stations",
                    "Funnel analytics showed 31% drop-off at the zone picker",
                    "Most riders repeated the same trip every day",
                ]),
                B::heading(2, "Approach"),
                B::paragraph(
                    "We defaulted to the rider's last trip and moved every choice onto one \
                     editable summary sheet.",
                ),
                B::image(
                    "/assets/process/transit-sheet.png",
                    "Single-sheet checkout with editable trip summary",
                    Some("The confirmation sheet after three rounds of testing"),
                ),
                B::heading(3, "Testing"),
                B::paragraph(
                    "A coded prototype let us test with real tap timings. Median purchase \
                     time fell from 41 to 9 seconds.",
                ),
                B::quote("I didn't realise I'd already bought it. That's the point, right?"),
                B::heading(2, "Outcome"),
                B::list([
                    "Checkout completion up 18%",
                    "Support tickets about wrong zones down by half",
                ]),
            ],
        },
        ProcessStudy {
            slug: "clinic-scheduling".into(),
            title: "Clinic Scheduling".into(),
            subtitle: "Fewer missed appointments for a community clinic".into(),
            role: "Designer and front-end developer".into(),
            timeline: "Aug – Nov 2022".into(),
            hero_image: "/assets/process/clinic-hero.jpg".into(),
            summary: "Built a booking and reminder flow for a clinic whose patients mostly \
                      use prepaid phones and change numbers often."
                .into(),
            tools: vec!["Figma".into(), "SMS".into(), "Svelte".into()],
            sections: vec![
                B::heading(2, "Context"),
                B::paragraph(
                    "One in four appointments went unattended. Reminder calls reached \
                     disconnected numbers.",
                ),
                B::heading(2, "What we built"),
                B::list([
                    "Two-tap rebooking from an SMS link",
                    "Plain-language reminders in four languages",
                    "A front-desk view that flags stale phone numbers",
                ]),
                B::code(
                    "text",
                    "Reminder: your visit is Tue 10:30. Reply 1 to confirm, 2 to move it.",
                ),
                B::heading(2, "Outcome"),
                B::paragraph("No-shows fell from 24% to 13% over the first quarter."),
            ],
        },
    ]
}
