//! Customization options command.

use anyhow::Result;
use flame_commerce::catalog::{self, SpiceLevel};
use serde::Serialize;

use crate::context::Context;
use crate::output::spice_badge;

#[derive(Serialize)]
struct Options<'a> {
    spice_levels: Vec<SpiceLevel>,
    sides: &'a [catalog::SideItem],
    sauces: &'a [catalog::Sauce],
}

/// Run the options command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&Options {
            spice_levels: SpiceLevel::ALL.to_vec(),
            sides: catalog::sides(),
            sauces: catalog::sauces(),
        });
        return Ok(());
    }

    ctx.output.header("Spice levels");
    for level in SpiceLevel::ALL {
        ctx.output
            .list_item(&format!("{:12} {}", level.slug(), spice_badge(level)));
    }

    ctx.output.header("Sides");
    for side in catalog::sides() {
        ctx.output.table_row(
            &[side.id.as_str(), side.name.as_str(), format!("+{}", side.price).as_str()],
            &[10, 20, 0],
        );
    }

    ctx.output.header("Sauces");
    for sauce in catalog::sauces() {
        ctx.output
            .table_row(&[sauce.id.as_str(), sauce.name.as_str()], &[10, 0]);
    }

    Ok(())
}
