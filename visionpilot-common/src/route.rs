use std::fmt::Display;
use std::str::FromStr;

use crate::error::SiteError;

/// The seven pages of the site. Each variant owns exactly one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Hero,
    Technical,
    Demos,
    Models,
    Roadmap,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Hero,
        Page::Technical,
        Page::Demos,
        Page::Models,
        Page::Roadmap,
        Page::About,
        Page::Contact,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::Hero => "/",
            Page::Technical => "/technical",
            Page::Demos => "/demos",
            Page::Models => "/models",
            Page::Roadmap => "/roadmap",
            Page::About => "/about",
            Page::Contact => "/contact",
        }
    }

    /// Label used in navigation and analytics.
    pub const fn title(self) -> &'static str {
        match self {
            Page::Hero => "Home",
            Page::Technical => "Technical",
            Page::Demos => "Demos",
            Page::Models => "Models",
            Page::Roadmap => "Roadmap",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Resolves a URL path to its page. A single trailing slash is
    /// tolerated; query strings and fragments are not part of a path.
    pub fn resolve(path: &str) -> Option<Page> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Page {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::resolve(s).ok_or_else(|| SiteError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_path_resolves_to_its_page() {
        for page in Page::ALL {
            assert_eq!(Page::resolve(page.path()), Some(page));
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(paths.len(), Page::ALL.len());
        let pages: HashSet<Page> = Page::ALL.iter().map(|p| Page::resolve(p.path()).unwrap()).collect();
        assert_eq!(pages.len(), 7);
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(Page::resolve("/nope"), None);
        assert_eq!(Page::resolve(""), None);
        assert_eq!(Page::resolve("/roadmap/2026"), None);
        assert_eq!(Page::resolve("/Demos"), None);
        assert_eq!(
            "/missing".parse::<Page>(),
            Err(SiteError::UnknownRoute("/missing".to_string()))
        );
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Page::resolve("/demos/"), Some(Page::Demos));
        assert_eq!(Page::resolve("/"), Some(Page::Hero));
        assert_eq!(Page::resolve("/demos//"), None);
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(Page::About.to_string(), "/about");
        assert_eq!("/about".parse::<Page>().unwrap(), Page::About);
    }
}
