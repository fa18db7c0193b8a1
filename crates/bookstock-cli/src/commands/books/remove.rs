use crate::app::AppContext;
use crate::cli::IdArgs;
use crate::errors::CliError;
use crate::ui::receipt;

pub fn handle_remove(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let mut inventory = ctx.open_inventory()?;
    let book = inventory.remove_book(&args.id).map_err(CliError::from)?;
    inventory.close().map_err(CliError::from)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false)?;
        let items = [("ID", book.id.to_string()), ("Title", book.title)];
        println!("{}", receipt(&ui, "Removed book", &items));
    }
    Ok(())
}
