//! Mobile menu state and scroll-position navigation rules.

pub const MENU_ICON_OPEN: &str = "✕";
pub const MENU_ICON_CLOSED: &str = "☰";

const DEFAULT_PAGE: &str = "index.html";

/// Open/closed state of the off-canvas mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the state and returns whether the menu is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the menu, returning whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.open {
            MENU_ICON_OPEN
        } else {
            MENU_ICON_CLOSED
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// A click outside both the menu and its toggle closes an open menu.
    pub fn dismissed_by_click(&self, inside_menu: bool, inside_toggle: bool) -> bool {
        self.open && !inside_menu && !inside_toggle
    }

    pub fn dismissed_by_key(&self, key: &str) -> bool {
        self.open && key == "Escape"
    }
}

/// Widths strictly above the breakpoint use the desktop layout.
pub fn exceeds_breakpoint(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

/// CSS `animation-delay` for the mobile menu entry at `index`.
pub fn slide_in_delay(index: usize, stagger_ms: u32) -> String {
    format!("{}ms", index as u64 * u64::from(stagger_ms))
}

/// Scroll destination for an in-page anchor, leaving room for the fixed header.
pub fn anchor_scroll_top(offset_top: f64, header_height: f64, gap: f64) -> f64 {
    offset_top - header_height - gap
}

/// One desktop navigation entry cloned into the mobile menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub href: Option<String>,
    pub inner_html: String,
    pub active: bool,
    pub cta: bool,
}

/// A measured page section used for active-link tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    /// Key from the element id, falling back to its first heading's text.
    pub fn key_from(id: Option<&str>, heading: Option<&str>) -> String {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => heading
                .map(|h| h.trim().to_lowercase())
                .unwrap_or_default(),
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// The last section spanning `position` wins; an empty key means no section.
pub fn current_section(sections: &[Section], position: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(position))
        .last()
        .map(|section| section.key.as_str())
        .filter(|key| !key.is_empty())
}

/// Lowercased link target with the first `.html` removed.
pub fn link_target(href: &str) -> String {
    href.replacen(".html", "", 1).to_lowercase()
}

/// Loose match: either string contains the other.
pub fn link_matches_section(href: &str, section: &str) -> bool {
    if section.is_empty() {
        return false;
    }
    let target = link_target(href);
    target.contains(section) || section.contains(target.as_str())
}

/// Filename of the current page, `index.html` for directory paths.
pub fn page_from_path(path: &str) -> String {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page.to_string(),
        _ => DEFAULT_PAGE.to_string(),
    }
}

/// Which navigation links carry the active modifier.
///
/// Until the first scroll the server-rendered markup decides; afterwards the
/// section under the viewport's effective top does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkHighlight {
    #[default]
    Markup,
    Section(Option<String>),
}

impl LinkHighlight {
    pub fn is_active(&self, href: Option<&str>, markup_active: bool) -> bool {
        match self {
            LinkHighlight::Markup => markup_active,
            LinkHighlight::Section(Some(section)) => {
                href.is_some_and(|href| link_matches_section(href, section))
            }
            LinkHighlight::Section(None) => false,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, LinkHighlight::Section(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabWrap {
    ToFirst,
    ToLast,
}

/// Focus wrap-around for Tab inside the open menu.
///
/// `active` is the index of the focused element among the menu's focusable
/// elements, if focus is inside the menu at all.
pub fn tab_wrap(active: Option<usize>, count: usize, shift: bool) -> Option<TabWrap> {
    let last = count.checked_sub(1)?;
    match (active, shift) {
        (Some(0), true) => Some(TabWrap::ToLast),
        (Some(i), false) if i == last => Some(TabWrap::ToFirst),
        _ => None,
    }
}
