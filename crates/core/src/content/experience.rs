use crate::types::ExperienceEntry;

fn entry(
    company: &str,
    role: &str,
    period: &str,
    location: &str,
    summary: &str,
    highlights: &[&str],
) -> ExperienceEntry {
    ExperienceEntry {
        company: company.into(),
        role: role.into(),
        period: period.into(),
        location: location.into(),
        summary: summary.into(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

pub(super) fn experience() -> Vec<ExperienceEntry> {
    vec![
        entry(
            "Metro Mobility Co.",
            "Lead Product Designer",
            "2022 – present",
            "Remote",
            "Own the rider app experience from trip planning to payment.",
            &[
                "Shipped single-sheet checkout used by 400k monthly riders",
                "Started a prototype-first review process for the design team",
                "Mentor two junior designers",
            ],
        ),
        entry(
            "Northside Health Collective",
            "Product Designer & Front-end Developer",
            "2020 – 2022",
            "Portland, OR",
            "Designed and built patient-facing tools for a network of community clinics.",
            &[
                "Cut appointment no-shows nearly in half with SMS rebooking",
                "Introduced an accessible component library",
            ],
        ),
        entry(
            "Studio Brightline",
            "Interaction Designer",
            "2017 – 2020",
            "Seattle, WA",
            "Agency work across fintech, retail and civic clients.",
            &[
                "Led motion guidelines for a national bank's app",
                "Prototyped kiosk flows tested in twelve stores",
            ],
        ),
    ]
}
