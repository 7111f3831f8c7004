/// The three static pages of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Route {
    /// Landing page embedding the frame player.
    #[default]
    Home,
    /// Static specification tables.
    Specs,
    /// Local-only contact form.
    Contact,
}

impl Route {
    /// Parse a request path; unknown paths resolve to `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/specs" => Some(Self::Specs),
            "/contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Canonical path for this route.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Specs => "/specs",
            Self::Contact => "/contact",
        }
    }
}
