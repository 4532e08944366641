//! Interactive prompt loop

use super::CommandContext;
use super::history;
use super::search::search_once;

const PROMPT: &str = "search>";

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Reset,
    History,
    Help,
    Search(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        ":quit" | ":q" | ":exit" => Input::Quit,
        ":reset" => Input::Reset,
        ":history" => Input::History,
        ":help" => Input::Help,
        _ => Input::Search(line),
    }
}

const COMMANDS: &[(&str, &str)] = &[
    (":reset", "clear the current result"),
    (":history", "show recent searches"),
    (":help", "show this help"),
    (":quit", "exit"),
];

fn help_lines() -> Vec<String> {
    let mut lines = vec!["Enter a value between 0 and 1,000,000 to search.".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(name, about)| format!("  {name:<9} {about}")),
    );
    lines
}

fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}

/// Prompt for values until `:quit` or end of input.
pub async fn run(ctx: &CommandContext) -> anyhow::Result<i32> {
    let coordinator = ctx.coordinator()?;
    ctx.console.print_header("Quick Index");
    print_help();

    loop {
        let Some(line) = ctx.console.prompt(PROMPT)? else {
            println!();
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Reset => {
                coordinator.reset();
                ctx.console.info("Search reset");
            }
            Input::History => history::print(ctx),
            Input::Help => print_help(),
            Input::Search(raw) => {
                search_once(ctx, &coordinator, raw, None).await;
            }
        }
    }

    Ok(0)
}
