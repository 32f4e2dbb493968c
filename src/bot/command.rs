use std::fmt;

/// Commands the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    About,
    Upcoming,
    Schedule,
    Create,
    Edit,
    Delete,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        let command = match token {
            "start" => Command::Start,
            "help" => Command::Help,
            "about" => Command::About,
            "upcoming" => Command::Upcoming,
            "schedule" => Command::Schedule,
            "create" => Command::Create,
            "edit" => Command::Edit,
            "delete" => Command::Delete,
            _ => return None,
        };
        Some(command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::About => "about",
            Command::Upcoming => "upcoming",
            Command::Schedule => "schedule",
            Command::Create => "create",
            Command::Edit => "edit",
            Command::Delete => "delete",
        }
    }

    pub fn is_mutation(self) -> bool {
        matches!(self, Command::Create | Command::Edit | Command::Delete)
    }

    /// `start` is the only reply sent as plain text.
    pub fn rich_text(self) -> bool {
        self != Command::Start
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// A slash command split into its token and raw argument tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub token: String,
    pub args: &'a str,
}

/// Splits `/token@bot rest of line` into `token` and `rest of line`.
/// Returns `None` when the text is not a slash command.
pub fn parse_invocation(text: &str) -> Option<Invocation<'_>> {
    let text = text.trim_start();
    let body = text.strip_prefix('/')?;

    let (head, args) = match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], body[idx..].trim()),
        None => (body, ""),
    };
    let token = head.split('@').next().unwrap_or_default().to_lowercase();
    if token.is_empty() {
        return None;
    }

    Some(Invocation { token, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bot_mention_and_keeps_tail() {
        let invocation = parse_invocation("/create@ClubBot Talk | About Rust").unwrap();
        assert_eq!(invocation.token, "create");
        assert_eq!(invocation.args, "Talk | About Rust");
    }

    #[test]
    fn command_without_args() {
        let invocation = parse_invocation("/Upcoming").unwrap();
        assert_eq!(invocation.token, "upcoming");
        assert_eq!(invocation.args, "");
    }

    #[test]
    fn tail_is_trimmed_but_inner_spacing_kept() {
        let invocation = parse_invocation("/delete   Talk  |  10/01/2024  ").unwrap();
        assert_eq!(invocation.args, "Talk  |  10/01/2024");
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert!(parse_invocation("hello there").is_none());
        assert!(parse_invocation("/").is_none());
        assert!(parse_invocation("/@ClubBot").is_none());
    }

    #[test]
    fn tokens_match_exactly() {
        assert_eq!(Command::from_token("schedule"), Some(Command::Schedule));
        assert_eq!(Command::from_token("recreate"), None);
        assert_eq!(Command::from_token("createx"), None);
    }

    #[test]
    fn only_start_is_plain_text() {
        assert!(!Command::Start.rich_text());
        assert!(Command::Help.rich_text());
        assert!(Command::Create.is_mutation());
        assert!(!Command::Upcoming.is_mutation());
    }
}
