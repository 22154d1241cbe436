/// Daily suggestions, picked by weekday.
pub const PROMPTS: [&str; 7] = [
    "Take a deep breath and notice what already feels good.",
    "Send someone a quick message just to say hi.",
    "Move your body for five minutes, even if it's just a stretch.",
    "Pick one thing you can finish in under ten minutes and do it first.",
    "Drink a glass of water before you dive back in.",
    "Step outside for a moment and let the light reset your focus.",
    "Celebrate a tiny win you had this week.",
];

/// Returns the suggestion at `index`, wrapping around the catalog.
pub fn suggestion(index: usize) -> &'static str {
    PROMPTS[index % PROMPTS.len()]
}
