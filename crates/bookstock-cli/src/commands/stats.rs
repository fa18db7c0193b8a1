use crate::app::AppContext;
use crate::cli::JsonArgs;
use crate::errors::CliError;
use crate::output::{print_json, render_stats};
use crate::ui::header;

pub fn handle_stats(ctx: &AppContext, args: &JsonArgs) -> anyhow::Result<()> {
    let inventory = ctx.open_inventory()?;
    let stats = inventory.statistics().map_err(CliError::from)?;

    if args.json {
        return print_json(&stats);
    }
    let ui = ctx.ui(false)?;
    if !ctx.quiet() {
        println!("{}", header(&ui, "stats", None));
    }
    println!("{}", render_stats(&ui, &stats, ctx.currency()?));
    Ok(())
}
