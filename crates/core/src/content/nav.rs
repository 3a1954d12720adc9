use crate::types::{Category, NavOption};

pub(super) fn nav_options() -> Vec<NavOption> {
    vec![
        NavOption::tab(Category::Prototype, "cursor"),
        NavOption::tab(Category::Figma, "figma"),
        NavOption::tab(Category::DesignDocs, "file-text"),
        NavOption::tab(Category::Writing, "pen"),
        NavOption::tab(Category::Experiments, "flask"),
        NavOption::route("Process", "layers", "/process"),
        NavOption::route("Experience", "briefcase", "/experience"),
        NavOption::route("About", "user", "/about"),
    ]
}
