use crate::types::{Category, NavOption, NavTarget};

/// Result of selecting a nav option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The home page now shows this category
    Switched(Category),
    /// The option leaves the home page for another route
    Navigate(String),
}

/// Which home-page category is visible.
///
/// Exactly one category is active at a time. Tab options switch it; route
/// options navigate away and leave it alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabController {
    active: Category,
}

impl TabController {
    pub fn new(initial: Category) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active == category
    }

    pub fn select(&mut self, option: &NavOption) -> NavOutcome {
        match &option.target {
            NavTarget::Tab(category) => {
                self.active = *category;
                NavOutcome::Switched(*category)
            }
            NavTarget::Route(path) => NavOutcome::Navigate(path.clone()),
        }
    }

    /// Select by URL slug (`?tab=figma`); unknown slugs keep the current tab
    pub fn select_slug(&mut self, slug: &str) -> Category {
        if let Some(category) = Category::from_slug(slug) {
            self.active = category;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_default_tab_is_prototype() {
        assert_eq!(TabController::default().active(), Category::Prototype);
        assert_eq!(
            TabController::new(Category::Writing).active(),
            Category::Writing
        );
    }

    #[test]
    fn test_select_every_tab_option() {
        let store = ContentStore::builtin();
        let mut tabs = TabController::default();

        for option in store.nav().iter().filter(|o| o.is_tab()) {
            let outcome = tabs.select(option);
            let NavTarget::Tab(expected) = option.target else {
                unreachable!()
            };
            assert_eq!(outcome, NavOutcome::Switched(expected));
            assert_eq!(tabs.active().label(), option.name);
            assert_eq!(
                Category::ALL.iter().filter(|c| tabs.is_active(**c)).count(),
                1
            );
        }
    }

    #[test]
    fn test_route_option_keeps_active_tab() {
        let mut tabs = TabController::new(Category::Figma);
        let about = NavOption::route("About", "user", "/about");

        assert_eq!(tabs.select(&about), NavOutcome::Navigate("/about".into()));
        assert_eq!(tabs.active(), Category::Figma);
    }

    #[test]
    fn test_select_slug() {
        let mut tabs = TabController::default();
        assert_eq!(tabs.select_slug("experiments"), Category::Experiments);
        assert_eq!(tabs.select_slug("bogus"), Category::Experiments);
    }
}
