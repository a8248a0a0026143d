//! Interactive shell: type a URL to analyze it, `/`-commands to control the view.

use anyhow::{Context, Result};
use console::style;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::analyze::build_session;
use crate::analysis::Category;
use crate::ui::render::render_error;
use crate::ui::{Session, SubmitOutcome, ViewState};

const HELP: &str = "\
Enter a website URL (e.g., https://example.com) to analyze it.

Commands:
  /toggle <ux|design|seo|product>  collapse or expand one section
  /expand                          expand all sections
  /collapse                        collapse all sections
  /show                            show the current results again
  /help                            show this help
  /exit, /quit                     leave the shell

Lines typed while an analysis is running are queued and run after it finishes.";

const TITLE: &str = "AI Website Analyzer";
const SUBTITLE: &str = "Get AI-powered insights to enhance your website's user experience, \
                        design, SEO, and product appeal.";
const PROMPT_HINT: &str = "Enter a URL to analyze, or /help for commands.";

const NO_RESULTS: &str = "No results yet. Enter a URL to analyze.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Analyze(String),
    Toggle(Category),
    ExpandAll,
    CollapseAll,
    Show,
    Help,
    Exit,
}

/// What a command produced, and where it goes.
#[derive(Debug, PartialEq, Eq)]
enum Output {
    Stdout(String),
    Stderr(String),
}

pub async fn run(
    config_path: Option<String>,
    model_override: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let mut session = build_session(config_path, model_override, dry_run)?;
    print_banner();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{} ", style("url>").cyan().bold());
        io::stdout().flush()?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            println!();
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse_shell_command(input) {
            Ok(ShellCommand::Exit) => break,
            Ok(command) => match execute(&mut session, command).await {
                Output::Stdout(text) => println!("{}", text),
                Output::Stderr(text) => eprintln!("{}", text),
            },
            Err(msg) => {
                eprintln!("error: {}", msg);
                eprintln!("hint: type /help for the list of commands");
            }
        }
    }

    Ok(())
}

fn print_banner() {
    println!();
    println!("  {}", style(TITLE).cyan().bold());
    println!("  {}", style(SUBTITLE).dim());
    println!("  {}", style(PROMPT_HINT).dim());
    println!();
}

fn parse_shell_command(input: &str) -> Result<ShellCommand, String> {
    if !input.starts_with('/') {
        return Ok(ShellCommand::Analyze(input.to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts[0] {
        "/exit" | "/quit" => Ok(ShellCommand::Exit),
        "/help" => Ok(ShellCommand::Help),
        "/show" => Ok(ShellCommand::Show),
        "/expand" => Ok(ShellCommand::ExpandAll),
        "/collapse" => Ok(ShellCommand::CollapseAll),
        "/toggle" => match parts.as_slice() {
            [_, name] => Category::from_str(name)
                .map(ShellCommand::Toggle)
                .map_err(|e| e.to_string()),
            _ => Err("usage: /toggle <ux|design|seo|product>".to_string()),
        },
        other => Err(format!("unknown command: {}", other)),
    }
}

async fn execute(session: &mut Session, command: ShellCommand) -> Output {
    match command {
        ShellCommand::Analyze(input) => match session.submit(&input).await {
            SubmitOutcome::Rejected(field_error) => {
                Output::Stderr(render_error(&field_error.to_string()))
            }
            SubmitOutcome::Completed => Output::Stdout(session.render()),
        },
        ShellCommand::Toggle(category) => {
            session.toggles_mut().toggle(category);
            show(session)
        }
        ShellCommand::ExpandAll => {
            session.toggles_mut().expand_all();
            show(session)
        }
        ShellCommand::CollapseAll => {
            session.toggles_mut().collapse_all();
            show(session)
        }
        ShellCommand::Show => show(session),
        ShellCommand::Help => Output::Stdout(HELP.to_string()),
        // Handled by the read loop
        ShellCommand::Exit => Output::Stdout(String::new()),
    }
}

fn show(session: &Session) -> Output {
    match session.state() {
        ViewState::Idle => Output::Stdout(NO_RESULTS.to_string()),
        _ => Output::Stdout(session.render()),
    }
}
