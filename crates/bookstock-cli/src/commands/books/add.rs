use bookstock_core::BookDraft;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::ui::{format_genre, format_price, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut inventory = ctx.open_inventory()?;

    let mut draft = BookDraft::new(
        args.id.as_str(),
        args.title.as_str(),
        args.author.as_str(),
        args.quantity.as_str(),
        args.price.as_str(),
    );
    if let Some(genre) = args.genre.as_deref() {
        draft = draft.genre(genre);
    }

    let book = inventory.add_book(&draft).map_err(CliError::from)?;
    inventory.close().map_err(CliError::from)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false)?;
        let currency = ctx.currency()?;
        let items = [
            ("ID", book.id.to_string()),
            ("Title", book.title.clone()),
            ("Genre", format_genre(book.genre.as_deref()).to_string()),
            ("Quantity", book.quantity.to_string()),
            ("Price", format_price(book.price, currency)),
        ];
        println!("{}", receipt(&ui, "Added book", &items));
    }
    Ok(())
}
