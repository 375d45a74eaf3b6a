mod commands;

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;
use users_core::{render, Confirm, Fetcher, HttpFetcher, ListingView, UserClient, DEFAULT_BASE_URL};

use commands::Command;

#[derive(Parser)]
#[command(name = "user-listing", about = "Browse, like, edit and delete users fetched from a remote API")]
struct Args {
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, help = "Print the listing once and exit")]
    once: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    tracing::debug!(base_url = %args.base_url, "starting");

    let fetcher = HttpFetcher::new(UserClient::new(&args.base_url));
    let mut view = ListingView::new();

    view.start_loading();
    print!("{}", render(&view));
    view.finish_loading(fetcher.fetch_users());
    print!("{}", render(&view));

    if args.once {
        return Ok(());
    }
    run_repl(&mut view)
}

/// Logs go to stderr so they never interleave with the listing.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_repl(view: &mut ListingView) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("type help for commands, quit to exit");

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                let command = match commands::parse(line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                let mut ask = |prompt: &str| {
                    rl.readline(&format!("{prompt} [y/N] "))
                        .map(|answer| commands::is_yes(&answer))
                        .unwrap_or(false)
                };
                if apply(view, command, &mut ask) {
                    print!("{}", render(view));
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        }
    }
    Ok(())
}

/// Run one command against the view. Returns true when the listing should
/// be redrawn.
fn apply(view: &mut ListingView, command: Command, confirm: &mut impl Confirm) -> bool {
    match command {
        Command::List => true,
        Command::Like(id) => report_missing(view.toggle_like(id), id),
        Command::Edit(id) => report_missing(view.begin_edit(id), id),
        Command::Set(field, value) => {
            if view.editing().is_none() {
                eprintln!("no user is being edited");
                return false;
            }
            view.form_mut().set(field, value);
            true
        }
        Command::Save => {
            if let Err(e) = view.submit_edit() {
                eprintln!("{e}");
            }
            true
        }
        Command::Cancel => {
            view.cancel_edit();
            true
        }
        Command::Delete(id) => {
            if view.user(id).is_none() {
                return report_missing(false, id);
            }
            view.delete(id, confirm);
            true
        }
        Command::Help => {
            println!("{}", commands::HELP);
            false
        }
        Command::Quit => false,
    }
}

fn report_missing(found: bool, id: u64) -> bool {
    if !found {
        eprintln!("no user with id {id}");
    }
    found
}
