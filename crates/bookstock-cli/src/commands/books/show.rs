use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::{book_json, print_json, render_book_detail};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let inventory = ctx.open_inventory()?;
    let book = inventory.get_book(&args.id).map_err(CliError::from)?;

    if args.json {
        return print_json(&book_json(&book));
    }
    let ui = ctx.ui(false)?;
    println!("{}", render_book_detail(&ui, &book, ctx.currency()?));
    Ok(())
}
