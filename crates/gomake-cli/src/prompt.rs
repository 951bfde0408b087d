//! Yes/no questions.
//!
//! On a terminal (with the `interactive` feature) the question is a
//! `dialoguer` prompt. Otherwise one line is read from stdin, so scripts can
//! pipe an answer in and a closed stdin takes the default.

use std::io::{self, BufRead, Write};

use crate::error::{CliResult, IntoCli};

/// Ask `question`; `default` is used for an empty answer.
pub fn confirm(question: &str, default: bool) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(question)
                .default(default)
                .interact()
                .map_err(io::Error::other)
                .with_cli_context(|| "failed to read confirmation");
        }
    }

    let hint = if default { "(Y/n)" } else { "(y/N)" };
    print!("{question} {hint}: ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .with_cli_context(|| "failed to read confirmation input")?;

    Ok(parse_answer(&answer, default))
}

fn parse_answer(answer: &str, default: bool) -> bool {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert!(parse_answer("y\n", false));
        assert!(parse_answer(" YES ", false));
        assert!(!parse_answer("n", true));
        assert!(!parse_answer("maybe", true));
    }

    #[test]
    fn empty_answer_takes_default() {
        assert!(parse_answer("\n", true));
        assert!(!parse_answer("", false));
    }
}
