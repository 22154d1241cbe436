use serde::Serialize;

/// A static outbound shortcut shown in the "Quick jump" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub href: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const QUICK_LINKS: [QuickLink; 3] = [
    QuickLink {
        href: "https://keep.google.com/",
        title: "Capture a note",
        description: "Jot down the next idea before it slips away.",
    },
    QuickLink {
        href: "https://calendar.google.com/",
        title: "Check your calendar",
        description: "See what's on deck and block a little breathing room.",
    },
    QuickLink {
        href: "https://www.loom.com/",
        title: "Record a hello",
        description: "Face-to-face beats text when you want to connect fast.",
    },
];
