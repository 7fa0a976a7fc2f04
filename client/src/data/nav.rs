//! In-page navigation anchors.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub static NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Projects", section_id: "projects" },
    NavItem { label: "Contact", section_id: "contact" },
];

/// Scroll offset past which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}
