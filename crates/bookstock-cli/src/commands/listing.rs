//! Read-only listing commands: search, list and shelves.

use crate::app::AppContext;
use crate::cli::{JsonArgs, ListArgs, SearchArgs};
use crate::errors::CliError;
use crate::output::{books_json, print_json, render_book_list, render_shelves, shelves_json};
use crate::ui::{format_genre, header};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let inventory = ctx.open_inventory()?;
    let books = inventory.find_books(&args.term).map_err(CliError::from)?;

    if args.json {
        return print_json(&books_json(&books));
    }
    let ui = ctx.ui(false)?;
    if !ctx.quiet() {
        println!("{}", header(&ui, "search", Some(args.term.trim())));
    }
    let empty = format!("No books match \"{}\"", args.term.trim());
    println!("{}", render_book_list(&ui, &books, ctx.currency()?, &empty));
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let inventory = ctx.open_inventory()?;
    let books = match args.genre.as_deref() {
        Some(genre) => inventory.list_by_genre(genre),
        None => inventory.list_all(),
    }
    .map_err(CliError::from)?;

    if args.json {
        return print_json(&books_json(&books));
    }
    let ui = ctx.ui(false)?;
    let genre = args
        .genre
        .as_deref()
        .map(|g| format_genre(Some(g.trim()).filter(|g| !g.is_empty())).to_string());
    if !ctx.quiet() {
        println!("{}", header(&ui, "list", genre.as_deref()));
    }
    let empty = match &genre {
        Some(g) => format!("No books in genre {}", g),
        None => "No books in inventory".to_string(),
    };
    println!("{}", render_book_list(&ui, &books, ctx.currency()?, &empty));
    Ok(())
}

pub fn handle_shelves(ctx: &AppContext, args: &JsonArgs) -> anyhow::Result<()> {
    let inventory = ctx.open_inventory()?;
    let shelves = inventory.shelves().map_err(CliError::from)?;

    if args.json {
        return print_json(&shelves_json(&shelves));
    }
    let ui = ctx.ui(false)?;
    if !ctx.quiet() {
        println!("{}", header(&ui, "shelves", None));
    }
    println!("{}", render_shelves(&ui, &shelves, ctx.currency()?));
    Ok(())
}
