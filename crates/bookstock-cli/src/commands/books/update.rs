use crate::app::AppContext;
use crate::cli::{SetPriceArgs, SetQuantityArgs};
use crate::errors::CliError;
use crate::ui::{format_price, receipt};

pub fn handle_set_quantity(ctx: &AppContext, args: &SetQuantityArgs) -> anyhow::Result<()> {
    let mut inventory = ctx.open_inventory()?;
    let book = inventory
        .set_quantity(&args.id, &args.quantity)
        .map_err(CliError::from)?;
    inventory.close().map_err(CliError::from)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false)?;
        let items = [
            ("ID", book.id.to_string()),
            ("Title", book.title),
            ("Quantity", book.quantity.to_string()),
        ];
        println!("{}", receipt(&ui, "Updated quantity", &items));
    }
    Ok(())
}

pub fn handle_set_price(ctx: &AppContext, args: &SetPriceArgs) -> anyhow::Result<()> {
    let mut inventory = ctx.open_inventory()?;
    let book = inventory
        .set_price(&args.id, &args.price)
        .map_err(CliError::from)?;
    inventory.close().map_err(CliError::from)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false)?;
        let items = [
            ("ID", book.id.to_string()),
            ("Title", book.title),
            ("Price", format_price(book.price, ctx.currency()?)),
        ];
        println!("{}", receipt(&ui, "Updated price", &items));
    }
    Ok(())
}
