use crate::app::shell;
use crate::core::session::{CategoryChange, Session};
use crate::utils::error::Result;
use rand::Rng;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "\
Commands:
  list                   show categories
  select <name|number>   choose a category (a name wins over a number)
  clear                  clear the selected category
  generate | g | <enter> draw a random topic
  show                   redraw the screen
  help                   this text
  quit | exit            leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Select(String),
    Clear,
    Generate,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" | "g" | "generate" => Command::Generate,
            "list" | "ls" => Command::List,
            "select" | "s" | "category" => Command::Select(rest.to_string()),
            "clear" => Command::Clear,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Line-oriented front end over a loaded session.
pub struct Interactive<R> {
    session: Session,
    rng: R,
    reveal_delay: Duration,
}

impl<R: Rng> Interactive<R> {
    pub fn new(session: Session, rng: R, reveal_delay: Duration) -> Self {
        Self {
            session,
            rng,
            reveal_delay,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<I, O>(&mut self, input: I, output: &mut O) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        output.write_all(shell::render(&self.session).as_bytes()).await?;
        if self.session.topics().is_none() {
            output.flush().await?;
            return Ok(());
        }
        output.write_all(b"Type `help` for commands.\n").await?;
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = Command::parse(&line);
            tracing::debug!("Command: {:?}", command);
            if command == Command::Quit {
                break;
            }
            let reply = self.execute(command).await;
            output.write_all(reply.as_bytes()).await?;
            output.flush().await?;
        }

        Ok(())
    }

    async fn execute(&mut self, command: Command) -> String {
        match command {
            Command::List => match self.session.topics() {
                Some(set) => shell::render_category_list(set),
                None => String::new(),
            },
            Command::Select(target) => self.select(&target),
            Command::Clear => {
                self.session.select_category("");
                "Category cleared\n".to_string()
            }
            Command::Generate => self.generate().await,
            Command::Show => shell::render(&self.session),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
            Command::Unknown(line) => format!("Unknown command: {} (try `help`)\n", line),
        }
    }

    fn select(&mut self, target: &str) -> String {
        let named = self
            .session
            .topics()
            .is_some_and(|set| set.find_category(target).is_some());

        let change = match target.parse::<usize>() {
            Ok(n) if n >= 1 && !named => self.session.select_category_at(n - 1),
            _ => self.session.select_category(target),
        };

        match change {
            CategoryChange::Selected => format!(
                "Selected category: {}\n",
                self.session.selected_category().unwrap_or_default()
            ),
            CategoryChange::Cleared => "Category cleared\n".to_string(),
            CategoryChange::Unknown => format!("No category named '{}'\n", target),
            CategoryChange::Unavailable => "Topics are not loaded\n".to_string(),
        }
    }

    async fn generate(&mut self) -> String {
        if !self.session.can_generate() {
            return "Select a category first\n".to_string();
        }

        // 短暫延遲後才顯示新主題
        if !self.reveal_delay.is_zero() {
            tokio::time::sleep(self.reveal_delay).await;
        }

        let category = self.session.selected_category().unwrap_or_default().to_string();
        match self.session.generate(&mut self.rng) {
            Some(topic) => shell::render_topic(topic, &category),
            None => format!("Category '{}' has no topics\n", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Command::Generate);
        assert_eq!(Command::parse("  G "), Command::Generate);
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(
            Command::parse("select  Would You Rather "),
            Command::Select("Would You Rather".to_string())
        );
        assert_eq!(Command::parse("s 2"), Command::Select("2".to_string()));
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".to_string()));
    }
}
