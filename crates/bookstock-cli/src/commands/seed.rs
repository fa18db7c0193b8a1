use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, Badge};

pub fn handle_seed(ctx: &AppContext) -> anyhow::Result<()> {
    let mut inventory = ctx.open_inventory()?;
    let report = inventory.seed_samples().map_err(CliError::from)?;
    inventory.close().map_err(CliError::from)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui(false)?;
    println!(
        "{}",
        badge(
            &ui,
            Badge::Ok,
            &format!("Loaded {} sample books", report.added.len())
        )
    );
    if !report.skipped.is_empty() {
        let ids: Vec<String> = report.skipped.iter().map(i64::to_string).collect();
        println!(
            "{}",
            badge(
                &ui,
                Badge::Info,
                &format!("Kept existing IDs: {}", ids.join(", "))
            )
        );
    }
    Ok(())
}
