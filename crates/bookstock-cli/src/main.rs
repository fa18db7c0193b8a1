//! Bookstock CLI - inventory tracker for a single bookstore
//!
//! This is the command-line interface for Bookstock. It wraps the core
//! `Inventory` service in one-shot subcommands and an interactive menu.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};
use commands::books::{
    handle_add, handle_remove, handle_set_price, handle_set_quantity, handle_show,
};
use commands::listing::{handle_list, handle_search, handle_shelves};
use commands::menu::handle_menu;
use commands::misc::handle_completions;
use commands::seed::handle_seed;
use commands::stats::handle_stats;
use constants::DEFAULT_LOG_LEVEL;
use errors::{exit_code_for, hint_for};
use ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    // A broken config still gets reported through the normal error path below.
    let directive = ctx
        .log_directive()
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    logging::init_tracing(&directive);

    if let Err(err) = run(&ctx) {
        let ui = UiContext::from_env(false, cli.no_color);
        print_error(&ui, &err.to_string(), hint_for(&err));
        std::process::exit(exit_code_for(&err));
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        None | Some(Commands::Menu) => handle_menu(ctx),
        Some(Commands::Add(args)) => handle_add(ctx, args),
        Some(Commands::Remove(args)) => handle_remove(ctx, args),
        Some(Commands::SetQuantity(args)) => handle_set_quantity(ctx, args),
        Some(Commands::SetPrice(args)) => handle_set_price(ctx, args),
        Some(Commands::Show(args)) => handle_show(ctx, args),
        Some(Commands::Search(args)) => handle_search(ctx, args),
        Some(Commands::List(args)) => handle_list(ctx, args),
        Some(Commands::Shelves(args)) => handle_shelves(ctx, args),
        Some(Commands::Stats(args)) => handle_stats(ctx, args),
        Some(Commands::Seed) => handle_seed(ctx),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
    }
}
