use crate::preset::presets;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

pub const DEFAULT_MESSAGE: &str = "General Edits on Current Branch";
pub const DEFAULT_BRANCH: &str = "main";

/// Tokens are collected raw and interpreted by [`Invocation::from_tokens`]:
/// flags may sit anywhere between the type and message words, and `--help`
/// only counts as the first token.
#[derive(Parser, Debug)]
#[command(
    name = "commit",
    about = "Stage everything, commit with a typed message and push",
    override_usage = "commit [TYPE] [MESSAGE]... [--no-push|-n] [--branch <NAME>] [--help|-h]",
    after_long_help = details(),
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Commit type followed by the message words
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parses `args` (program name first) so that every token after the
    /// program name reaches [`Invocation::from_tokens`] unchanged, a leading
    /// `--` included.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("commit"));
        let escaped = [program, OsString::from("--")].into_iter().chain(args);
        Cli::parse_from(escaped)
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::from_tokens(&self.tokens)
    }

    pub fn help_text() -> String {
        Cli::command().render_long_help().to_string()
    }
}

fn details() -> String {
    let mut out = String::from("Commit types:\n");
    for preset in presets() {
        let usage = match preset.keyword {
            "first" => "first <URL>".to_string(),
            "default" => "(anything else)".to_string(),
            keyword => keyword.to_string(),
        };
        let effect = match preset.keyword {
            "first" => "init, commit, rename branch, add origin, push -u".to_string(),
            _ => format!("\"{}: <message>\"", preset.prefix),
        };
        out.push_str(&format!("  {usage:<18}{effect}\n"));
    }
    out.push_str("\nOptions:\n");
    out.push_str("  -n, --no-push     Commit without pushing\n");
    out.push_str(&format!(
        "  --branch <NAME>   Branch created by `first` (default: {DEFAULT_BRANCH})\n"
    ));
    out.push_str("  -h, --help        Show this help (first argument only)\n");
    out.push_str(&format!("\nWithout a message, \"{DEFAULT_MESSAGE}\" is used.\n"));
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Commit(ParsedArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub commit_type: Option<String>,
    pub message: String,
    /// False when `message` is [`DEFAULT_MESSAGE`] filled in by the parser.
    pub message_given: bool,
    pub no_push: bool,
    pub branch: String,
}

impl Invocation {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        if matches!(tokens.first().map(AsRef::as_ref), Some("--help" | "-h")) {
            return Invocation::Help;
        }

        let mut no_push = false;
        let mut branch: Option<&str> = None;
        let mut positional = Vec::new();

        let mut iter = tokens.iter().map(AsRef::as_ref);
        while let Some(token) = iter.next() {
            match token {
                "--no-push" | "-n" => no_push = true,
                "--branch" => branch = iter.next(),
                other => positional.push(other),
            }
        }

        let mut positional = positional.into_iter();
        let commit_type = positional.next().map(str::to_string);
        let joined = positional.collect::<Vec<_>>().join(" ");
        let joined = joined.trim();

        let (message, message_given) = if joined.is_empty() {
            (DEFAULT_MESSAGE.to_string(), false)
        } else {
            (joined.to_string(), true)
        };

        let branch = branch
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_BRANCH)
            .to_string();

        Invocation::Commit(ParsedArgs {
            commit_type,
            message,
            message_given,
            no_push,
            branch,
        })
    }
}
