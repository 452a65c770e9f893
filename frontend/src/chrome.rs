use crate::config;

pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

/// Open/closed state of the small-screen nav. The links class and the
/// hamburger glyph are both derived from it so they can never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }
}

/// Element id a same-page link points at, if it is one.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    source: Option<String>,
}

impl LightboxState {
    pub fn opened(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Clicks that land on the image itself keep the overlay open.
    pub fn after_click(&self, on_image: bool) -> Self {
        if on_image {
            self.clone()
        } else {
            Self::default()
        }
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            "auto"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_class_threshold_is_exclusive() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(50.0));
        assert!(nav_scrolled(50.5));
        assert!(nav_scrolled(900.0));
    }

    #[test]
    fn menu_icon_follows_links_class() {
        let menu = MobileMenu::default();
        assert_eq!(menu.links_class(), "nav-links");
        assert_eq!(menu.icon_class(), "fas fa-bars");

        let open = menu.toggled();
        assert!(open.is_open());
        assert_eq!(open.links_class(), "nav-links active");
        assert_eq!(open.icon_class(), "fas fa-times");

        let shut = open.toggled();
        assert_eq!(shut, menu);
        assert_eq!(open.closed().icon_class(), "fas fa-bars");
    }

    #[test]
    fn only_non_empty_fragments_are_targets() {
        assert_eq!(fragment_target("#story"), Some("story"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/videos"), None);
        assert_eq!(fragment_target("https://example.com/#rsvp"), None);
    }

    #[test]
    fn backdrop_click_closes_and_restores_scroll() {
        let lightbox = LightboxState::opened("/assets/photos/first-dance.jpg");
        assert!(lightbox.is_open());
        assert_eq!(lightbox.source(), Some("/assets/photos/first-dance.jpg"));
        assert_eq!(lightbox.body_overflow(), "hidden");

        let still = lightbox.after_click(true);
        assert!(still.is_open());

        let closed = lightbox.after_click(false);
        assert!(!closed.is_open());
        assert_eq!(closed.body_overflow(), "auto");
    }
}
