/// A line typed on stdin while the session runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    TogglePlay,
    ToggleAutoAdvance,
    Quit,
}

impl Command {
    /// Empty input means "next" so that Enter walks through the prayers.
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Some(Command::Next),
            "b" | "back" | "prev" => Some(Command::Previous),
            "p" | "play" | "pause" => Some(Command::TogglePlay),
            "a" | "auto" => Some(Command::ToggleAutoAdvance),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

pub const HELP: &str = "commands: <enter>/n next, b back, p play/pause, a auto-advance, q quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_advances() {
        assert_eq!(Command::parse(""), Some(Command::Next));
        assert_eq!(Command::parse("  \n"), Some(Command::Next));
    }

    #[test]
    fn parses_words_and_letters() {
        assert_eq!(Command::parse("B"), Some(Command::Previous));
        assert_eq!(Command::parse("pause"), Some(Command::TogglePlay));
        assert_eq!(Command::parse("a"), Some(Command::ToggleAutoAdvance));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("x"), None);
    }
}
