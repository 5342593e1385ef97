//! Line commands of the interactive view
//!
//! The terminal stands in for the form fields and buttons of the view: each
//! input line is one command.

use anyhow::{Result, bail};
use std::path::PathBuf;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  company <text>    set the company to search for
  search [<text>]   search for jobs (optionally setting the company first)
  select <id>       select a job from the list
  resume [<path>]   choose the resume file to apply with (no path clears it)
  apply             apply for the selected job
  refresh           reload the job list now
  show              redraw the view (an empty line does the same)
  help, ?           show this help
  quit, exit, q     close the view";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the company text, kept verbatim
    Company(String),
    /// Submit the search form, optionally replacing the company text first
    Search(Option<String>),
    Select(String),
    Resume(Option<PathBuf>),
    Apply,
    Refresh,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        // The argument is everything after the first separator, untouched.
        let (word, rest) = match trimmed.find(char::is_whitespace) {
            Some(i) => {
                let sep = trimmed[i..].chars().next().map_or(1, char::len_utf8);
                (&trimmed[..i], &trimmed[i + sep..])
            }
            None => (trimmed, ""),
        };

        let command = match word {
            "" | "show" => Command::Show,
            "company" => Command::Company(rest.to_string()),
            "search" => {
                Command::Search((!rest.is_empty()).then(|| rest.to_string()))
            }
            "select" => {
                let id = rest.trim();
                if id.is_empty() {
                    bail!("usage: select <id>");
                }
                Command::Select(id.to_string())
            }
            "resume" => {
                let path = rest.trim();
                Command::Resume((!path.is_empty()).then(|| PathBuf::from(path)))
            }
            "apply" => Command::Apply,
            "refresh" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{}' (type 'help')", other),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_is_verbatim() {
        assert_eq!(
            "company  Acme  Corp ".parse::<Command>().unwrap(),
            Command::Company(" Acme  Corp ".to_string())
        );
        assert_eq!(
            "company".parse::<Command>().unwrap(),
            Command::Company(String::new())
        );
    }

    #[test]
    fn test_search_with_and_without_text() {
        assert_eq!("search".parse::<Command>().unwrap(), Command::Search(None));
        assert_eq!(
            "search Acme Corp\n".parse::<Command>().unwrap(),
            Command::Search(Some("Acme Corp".to_string()))
        );
    }

    #[test]
    fn test_select_requires_id() {
        assert_eq!(
            "select  42 ".parse::<Command>().unwrap(),
            Command::Select("42".to_string())
        );
        assert!("select".parse::<Command>().is_err());
    }

    #[test]
    fn test_resume_path() {
        assert_eq!(
            "resume ~/docs/cv_final.pdf".parse::<Command>().unwrap(),
            Command::Resume(Some(PathBuf::from("~/docs/cv_final.pdf")))
        );
        assert_eq!("resume".parse::<Command>().unwrap(), Command::Resume(None));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!("apply".parse::<Command>().unwrap(), Command::Apply);
        assert_eq!("refresh".parse::<Command>().unwrap(), Command::Refresh);
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_unknown_command() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'dance' (type 'help')");
    }
}
