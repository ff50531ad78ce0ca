//! Sidebar navigation state
//!
//! The menu itself is a compile-time constant. The only mutable pieces are
//! whether the sidebar shows labels and which single group is unfolded.

use tracing::debug;

/// Link nested under a group entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubEntry {
    pub title: &'static str,
    pub destination: &'static str,
}

/// Top-level sidebar entry
///
/// A leaf links somewhere directly, a group only unfolds its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Leaf {
        title: &'static str,
        icon: &'static str,
        destination: &'static str,
    },
    Group {
        title: &'static str,
        icon: &'static str,
        children: &'static [SubEntry],
    },
}

impl MenuEntry {
    pub fn title(&self) -> &'static str {
        match self {
            MenuEntry::Leaf { title, .. } | MenuEntry::Group { title, .. } => *title,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuEntry::Leaf { icon, .. } | MenuEntry::Group { icon, .. } => *icon,
        }
    }

    pub fn destination(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Leaf { destination, .. } => Some(*destination),
            MenuEntry::Group { .. } => None,
        }
    }

    pub fn children(&self) -> &'static [SubEntry] {
        match self {
            MenuEntry::Leaf { .. } => &[],
            MenuEntry::Group { children, .. } => *children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, MenuEntry::Group { .. })
    }

    /// Groups are never highlighted, only the links inside them.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.destination()
            .is_some_and(|destination| is_active(current_path, destination))
    }
}

/// Icon names understood by `ui::Icon`
pub mod menu_icons {
    pub const HOME: &str = "home";
    pub const DASHBOARD: &str = "layout-dashboard";
    pub const USERS: &str = "users";
    pub const ANALYTICS: &str = "bar-chart";
    pub const REPORTS: &str = "file-text";
    pub const SETTINGS: &str = "settings";
}

/// The application menu
pub const MENU: &[MenuEntry] = &[
    MenuEntry::Leaf {
        title: "Início",
        icon: menu_icons::HOME,
        destination: "/",
    },
    MenuEntry::Group {
        title: "Dashboard",
        icon: menu_icons::DASHBOARD,
        children: &[
            SubEntry {
                title: "Overview",
                destination: "/overview",
            },
            SubEntry {
                title: "Analytics",
                destination: "/analytics",
            },
            SubEntry {
                title: "Reports",
                destination: "/reports",
            },
        ],
    },
    MenuEntry::Group {
        title: "Users",
        icon: menu_icons::USERS,
        children: &[
            SubEntry {
                title: "All Users",
                destination: "/users",
            },
            SubEntry {
                title: "User Groups",
                destination: "/user-groups",
            },
            SubEntry {
                title: "Permissions",
                destination: "/permissions",
            },
        ],
    },
    MenuEntry::Group {
        title: "Analytics",
        icon: menu_icons::ANALYTICS,
        children: &[
            SubEntry {
                title: "Statistics",
                destination: "/statistics",
            },
            SubEntry {
                title: "Performance",
                destination: "/performance",
            },
            SubEntry {
                title: "Metrics",
                destination: "/metrics",
            },
        ],
    },
    MenuEntry::Group {
        title: "Reports",
        icon: menu_icons::REPORTS,
        children: &[
            SubEntry {
                title: "Daily",
                destination: "/daily-reports",
            },
            SubEntry {
                title: "Weekly",
                destination: "/weekly-reports",
            },
            SubEntry {
                title: "Monthly",
                destination: "/monthly-reports",
            },
        ],
    },
    MenuEntry::Leaf {
        title: "Settings",
        icon: menu_icons::SETTINGS,
        destination: "/settings",
    },
];

/// Exact path match, no prefix matching.
pub fn is_active(current_path: &str, destination: &str) -> bool {
    current_path == destination
}

/// Title of the leaf or sub-entry that links to `path`
pub fn find_title(menu: &[MenuEntry], path: &str) -> Option<&'static str> {
    menu.iter().find_map(|entry| match entry {
        MenuEntry::Leaf {
            title, destination, ..
        } => is_active(path, destination).then_some(*title),
        MenuEntry::Group { children, .. } => children
            .iter()
            .find(|sub| is_active(path, sub.destination))
            .map(|sub| sub.title),
    })
}

/// Per-sidebar navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    menu: &'static [MenuEntry],
    sidebar_expanded: bool,
    expanded_group: Option<&'static str>,
}

impl NavigationState {
    /// Expanded sidebar with the first group unfolded
    pub fn new(menu: &'static [MenuEntry]) -> Self {
        let expanded_group = menu
            .iter()
            .find(|entry| entry.is_group())
            .map(MenuEntry::title);

        Self {
            menu,
            sidebar_expanded: true,
            expanded_group,
        }
    }

    pub fn menu(&self) -> &'static [MenuEntry] {
        self.menu
    }

    pub fn sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    /// Recorded open group, kept even while the sidebar is collapsed
    pub fn expanded_group(&self) -> Option<&'static str> {
        self.expanded_group
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
        debug!(expanded = self.sidebar_expanded, "sidebar toggled");
    }

    /// Open `title`, closing any other group, or close it if already open.
    ///
    /// Ignored while the sidebar is collapsed and for titles that are not a
    /// group with children.
    pub fn toggle_group(&mut self, title: &str) {
        if !self.sidebar_expanded {
            return;
        }

        let Some(group) = self
            .menu
            .iter()
            .find(|entry| entry.title() == title && !entry.children().is_empty())
        else {
            return;
        };

        self.expanded_group = if self.expanded_group == Some(group.title()) {
            None
        } else {
            Some(group.title())
        };
        debug!(group = ?self.expanded_group, "menu group toggled");
    }

    /// Whether the children of `title` are rendered
    pub fn is_group_open(&self, title: &str) -> bool {
        self.sidebar_expanded && self.expanded_group == Some(title)
    }

    pub fn shows_labels(&self) -> bool {
        self.sidebar_expanded
    }

    /// Hover label, only used in icon-only mode
    pub fn tooltip(&self, title: &'static str) -> Option<&'static str> {
        (!self.sidebar_expanded).then_some(title)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(MENU)
    }
}
