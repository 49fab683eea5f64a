//! Sidebar bottom section.
//!
//! The bottom of the dashboard sidebar shows a sign-in prompt to anonymous
//! visitors followed by the bottom navigation links. Users belonging to more
//! than one organisation get an organisation switcher on their profile link.

use serde::{Deserialize, Serialize};

/// Id of the navigation link that carries the organisation switcher.
pub const PROFILE_LINK_ID: &str = "profile";

/// The signed-in user, as far as the sidebar is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Login name.
    pub login: String,
    /// Number of organisations the user belongs to.
    #[serde(default)]
    pub org_count: u32,
}

/// A snapshot of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the visitor is signed in.
    #[serde(default)]
    pub is_signed_in: bool,
    /// The user, when known.
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// A sidebar navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link id (e.g. "profile", "help").
    pub id: String,
    /// Display text.
    pub text: String,
    /// Target URL.
    pub url: String,
    /// Whether the link shows the organisation switcher.
    #[serde(default)]
    pub show_org_switcher: bool,
}

impl NavLink {
    /// Creates a link.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            url: url.into(),
            show_org_switcher: false,
        }
    }
}

/// The rendered content of the sidebar bottom section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottomSection {
    /// Whether to show the sign-in prompt.
    pub show_sign_in: bool,
    /// The bottom navigation links, in order.
    pub links: Vec<NavLink>,
}

/// Builds the bottom section for the session from the configured links.
///
/// # Example
///
/// ```
/// use shared::sidemenu::{bottom_section, NavLink, Session, SessionUser};
///
/// let session = Session {
///     is_signed_in: true,
///     user: Some(SessionUser { login: "admin".into(), org_count: 2 }),
/// };
/// let nav = vec![NavLink::new("profile", "admin", "/profile")];
///
/// let section = bottom_section(&session, &nav);
/// assert!(!section.show_sign_in);
/// assert!(section.links[0].show_org_switcher);
/// ```
#[must_use]
pub fn bottom_section(session: &Session, nav: &[NavLink]) -> BottomSection {
    let multi_org = session.user.as_ref().is_some_and(|u| u.org_count > 1);

    let mut links = nav.to_vec();
    // Only the first profile link carries the switcher.
    if multi_org {
        if let Some(profile) = links.iter_mut().find(|link| link.id == PROFILE_LINK_ID) {
            profile.show_org_switcher = true;
        }
    }

    BottomSection {
        show_sign_in: !session.is_signed_in,
        links,
    }
}
