//! `:shortcut:` to emoji replacement.

const EMOJI: &[(&str, &str)] = &[
    (":smile:", "😊"),
    (":heart:", "❤️"),
    (":star:", "⭐"),
    (":fire:", "🔥"),
    (":check:", "✅"),
    (":cross:", "❌"),
    (":warning:", "⚠️"),
    (":info:", "ℹ️"),
    (":rocket:", "🚀"),
    (":bulb:", "💡"),
    (":gear:", "⚙️"),
    (":book:", "📚"),
    (":computer:", "💻"),
    (":mobile:", "📱"),
    (":email:", "📧"),
    (":calendar:", "📅"),
];

pub fn process(content: &str) -> String {
    EMOJI
        .iter()
        .fold(content.to_string(), |acc, (shortcut, emoji)| {
            acc.replace(shortcut, emoji)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_shortcuts() {
        assert_eq!(process(":fire: hot :fire:"), "🔥 hot 🔥");
        assert_eq!(process(":bulb: idea"), "💡 idea");
    }

    #[test]
    fn unknown_shortcuts_stay() {
        assert_eq!(process(":unicorn:"), ":unicorn:");
    }
}
