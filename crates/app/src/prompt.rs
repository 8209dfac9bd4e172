//! Turning a typed line into a quiz or reader action.

/// Moving through pages, shared by every paged prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Back,
    Quit,
}

/// Parse `n`, `b`, `q` (or their long forms).
pub fn parse_nav(line: &str) -> Option<Nav> {
    match line.trim() {
        "n" | "next" => Some(Nav::Next),
        "b" | "back" => Some(Nav::Back),
        "q" | "quit" => Some(Nav::Quit),
        _ => None,
    }
}

/// What the learner asked for at the quiz prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Select this option text for the current question.
    Answer(String),
    Next,
    Back,
    Quit,
    Unrecognized(String),
}

/// Parse a prompt line against the current question's options.
///
/// Accepts a 1-based option number, the option text itself (case-insensitive),
/// or one of `n`, `b`, `q`.
pub fn parse_choice(line: &str, options: &[String]) -> Choice {
    match parse_nav(line) {
        Some(Nav::Next) => return Choice::Next,
        Some(Nav::Back) => return Choice::Back,
        Some(Nav::Quit) => return Choice::Quit,
        None => {}
    }
    let input = line.trim();

    if let Ok(number) = input.parse::<usize>() {
        return match number.checked_sub(1).and_then(|i| options.get(i)) {
            Some(option) => Choice::Answer(option.clone()),
            None => Choice::Unrecognized(input.to_string()),
        };
    }

    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(input))
        .map_or_else(
            || Choice::Unrecognized(input.to_string()),
            |option| Choice::Answer(option.clone()),
        )
}
