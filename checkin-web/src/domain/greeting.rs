use super::TimeContext;

pub const INTENTION_NUDGE: &str = "Set a tiny intention for today so you know what matters next.";

/// The saved name wins once it is non-blank; otherwise the live draft shows.
pub fn compose_greeting(day_name: &str, name_draft: &str, saved_name: &str) -> String {
    let saved_name = saved_name.trim();
    let candidate = if saved_name.is_empty() {
        name_draft.trim()
    } else {
        saved_name
    };

    if candidate.is_empty() {
        format!("Hi, happy {day_name}!")
    } else {
        format!("Hi {candidate}, happy {day_name}!")
    }
}

pub fn compose_intention_line(intention: &str) -> String {
    if intention.is_empty() {
        INTENTION_NUDGE.to_string()
    } else {
        format!("Let's make a little progress on \"{intention}\".")
    }
}

pub fn compose_subheading(context: &TimeContext, intention: &str) -> String {
    let focus = if intention.is_empty() {
        "What do you want to show up for?".to_string()
    } else {
        format!("You chose \"{intention}\" as your focus.")
    };

    format!(
        "It's {} and the time is {}. Here's to {}. {}",
        context.day_name,
        context.clock_time,
        context.time_of_day.phrase(),
        focus
    )
}
