use crate::surface::PageSurface;

/// Open/closed flag of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Element id an in-page link points at, `None` for anything that is not a
/// `#fragment` link.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOutcome {
    /// The browser's own jump navigation must be suppressed.
    pub prevent_default: bool,
    pub scrolled: bool,
}

/// Handles a click on a navigation link.
///
/// Fragment links are taken over (no default jump) and smooth-scrolled when
/// their target exists. The menu always ends up closed.
pub fn follow_link(href: &str, menu: &mut MenuState, surface: &impl PageSurface) -> NavOutcome {
    let mut outcome = NavOutcome::default();
    if href.starts_with('#') {
        outcome.prevent_default = true;
        if let Some(id) = anchor_id(href) {
            outcome.scrolled = match surface.scroll_to_anchor(id) {
                Ok(found) => found,
                Err(e) => {
                    log::warn!("couldn't scroll to {href}: {e}");
                    false
                }
            };
        }
    }
    menu.close();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_even_toggles_return_to_closed() {
        let mut menu = MenuState::default();
        for n in 1..=8 {
            menu.toggle();
            assert_eq!(menu.is_open(), n % 2 == 1);
        }
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("#projects"), Some("projects"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://github.com/abhishekth0203"), None);
        assert_eq!(anchor_id("/about#top"), None);
    }

    #[test]
    fn test_anchor_with_target_scrolls() {
        let surface = RecordingSurface::with_anchors(&["projects", "contact"]);
        let mut menu = MenuState::default();
        menu.toggle();

        let outcome = follow_link("#contact", &mut menu, &surface);
        assert!(outcome.prevent_default);
        assert!(outcome.scrolled);
        assert!(!menu.is_open());
        assert_eq!(*surface.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn test_anchor_without_target_does_not_scroll() {
        let surface = RecordingSurface::with_anchors(&["projects"]);
        let mut menu = MenuState::default();
        menu.toggle();

        let outcome = follow_link("#missing", &mut menu, &surface);
        assert!(outcome.prevent_default);
        assert!(!outcome.scrolled);
        assert!(!menu.is_open());
        assert!(surface.scrolled.borrow().is_empty());

        // bare fragment never reaches the surface
        let outcome = follow_link("#", &mut menu, &surface);
        assert!(outcome.prevent_default);
        assert!(!outcome.scrolled);
    }

    #[test]
    fn test_external_link_keeps_default() {
        let surface = RecordingSurface::with_anchors(&["projects"]);
        let mut menu = MenuState::default();
        menu.toggle();

        let outcome = follow_link("https://github.com/abhishekth0203", &mut menu, &surface);
        assert_eq!(outcome, NavOutcome::default());
        assert!(!menu.is_open());
        assert!(surface.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_surface_failure_still_closes_menu() {
        let surface = RecordingSurface::failing();
        let mut menu = MenuState::default();
        menu.toggle();

        let outcome = follow_link("#projects", &mut menu, &surface);
        assert!(outcome.prevent_default);
        assert!(!outcome.scrolled);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_every_nav_link_closes_menu() {
        let ids = NAV_LINKS
            .iter()
            .filter_map(|l| anchor_id(l.href))
            .collect::<Vec<_>>();
        let surface = RecordingSurface::with_anchors(&ids);
        for link in NAV_LINKS.iter() {
            let mut menu = MenuState::default();
            menu.toggle();
            let outcome = follow_link(link.href, &mut menu, &surface);
            assert!(outcome.scrolled, "{} should scroll", link.label);
            assert!(!menu.is_open());
        }
        assert_eq!(surface.scrolled.borrow().len(), NAV_LINKS.len());
    }
}
