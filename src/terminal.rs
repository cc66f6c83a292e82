//! Line-oriented terminal input.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

enum Source {
    Stdin(Lines<BufReader<Stdin>>),
    #[cfg(test)]
    Script(std::collections::VecDeque<String>),
}

/// Reads user input one line at a time. Reading is the only await point in a
/// view between two renders, so a view can never have two of its own requests
/// in flight at once.
pub struct Terminal {
    source: Source,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            source: Source::Stdin(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// A terminal that replays canned input, then reports EOF
    #[cfg(test)]
    pub(crate) fn scripted(lines: &[&str]) -> Self {
        Self {
            source: Source::Script(lines.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Print a label and read one trimmed line. `None` means stdin closed,
    /// which callers treat as quit.
    pub async fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{} ", label);
        std::io::stdout().flush().ok();

        match &mut self.source {
            Source::Stdin(lines) => match lines.next_line().await {
                Ok(Some(line)) => Some(line.trim().to_string()),
                Ok(None) => None,
                Err(e) => {
                    tracing::error!("stdin read failed: {}", e);
                    None
                }
            },
            #[cfg(test)]
            Source::Script(lines) => lines.pop_front().map(|l| l.trim().to_string()),
        }
    }

    /// Like [`prompt`](Self::prompt) but re-asks until the line is non-empty
    pub async fn prompt_required(&mut self, label: &str) -> Option<String> {
        loop {
            let line = self.prompt(label).await?;
            if !line.is_empty() {
                return Some(line);
            }
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_required_skips_blank_lines() {
        let mut terminal = Terminal::scripted(&["", "  ", "Pacific Rim"]);
        let line = terminal.prompt_required("Movie title:").await;
        assert_eq!(line.as_deref(), Some("Pacific Rim"));
    }

    #[tokio::test]
    async fn test_exhausted_script_reads_as_eof() {
        let mut terminal = Terminal::scripted(&[]);
        assert_eq!(terminal.prompt("anything?").await, None);
    }
}
