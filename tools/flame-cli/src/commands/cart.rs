//! Cart commands.

use anyhow::{bail, Result};
use console::style;
use dialoguer::Confirm;
use flame_commerce::cart::{CartLine, Selection};
use flame_commerce::catalog::{self, SpiceLevel};
use flame_commerce::{CommerceError, LineItemId, MenuItemId};

use super::{CartArgs, CartCommand};
use crate::context::{Context, Store};
use crate::output::spice_badge;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add {
            item_id,
            spice,
            sides,
            sauces,
            note,
            qty,
        } => add(&mut store, &item_id, spice, &sides, &sauces, note, qty, ctx)?,
        CartCommand::Remove { item_id } => {
            let removed = store.remove_item(&MenuItemId::new(item_id.as_str()));
            if removed == 0 {
                ctx.output.warn(&format!("Item {} is not in the cart", item_id));
            } else {
                ctx.output
                    .success(&format!("Removed {} line(s) for item {}", removed, item_id));
            }
        }
        CartCommand::RemoveLine { line_id } => {
            if !store.remove_line(&LineItemId::new(line_id.as_str())) {
                return Err(CommerceError::LineNotInCart(line_id).into());
            }
            ctx.output.success(&format!("Removed line {}", line_id));
        }
        CartCommand::Update { item_id, qty } => {
            let touched = store.update_quantity(&MenuItemId::new(item_id.as_str()), qty);
            if touched == 0 {
                ctx.output.warn(&format!("Item {} is not in the cart", item_id));
            } else if qty <= 0 {
                ctx.output.success(&format!("Removed item {}", item_id));
            } else {
                ctx.output
                    .success(&format!("Set {} line(s) of item {} to {}", touched, item_id, qty));
            }
        }
        CartCommand::UpdateLine { line_id, qty } => {
            if !store.update_line_quantity(&LineItemId::new(line_id.as_str()), qty) {
                return Err(CommerceError::LineNotInCart(line_id).into());
            }
            if qty <= 0 {
                ctx.output.success(&format!("Removed line {}", line_id));
            } else {
                ctx.output.success(&format!("Set line {} to {}", line_id, qty));
            }
        }
        CartCommand::Clear { yes } => {
            if store.is_empty() {
                ctx.output.info("Cart is already empty");
            } else {
                if !yes && !ctx.output.is_json() {
                    let confirmed = Confirm::new()
                        .with_prompt(format!(
                            "Remove all {} items from the cart?",
                            store.total_items()
                        ))
                        .default(false)
                        .interact()?;

                    if !confirmed {
                        ctx.output.warn("Clear cancelled");
                        return Ok(());
                    }
                }
                store.clear_cart();
                ctx.output.success("Cart cleared");
            }
        }
    }

    show(&store, ctx);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add(
    store: &mut Store,
    item_id: &str,
    spice: Option<SpiceLevel>,
    sides: &[String],
    sauces: &[String],
    note: Option<String>,
    qty: i64,
    ctx: &Context,
) -> Result<()> {
    if qty < 1 {
        bail!("Quantity must be at least 1, got {}", qty);
    }

    let item = catalog::find_item(item_id)?;

    let mut selection = Selection::new();
    if let Some(level) = spice {
        selection = selection.with_spice_level(level);
    }
    for side_id in sides {
        selection = selection.with_side(catalog::find_side(side_id)?.clone());
    }
    for sauce_id in sauces {
        selection = selection.with_sauce(catalog::find_sauce(sauce_id)?.id.clone());
    }
    if let Some(note) = note {
        selection = selection.with_instructions(note);
    }

    let Some(line_id) = store.add_item_quantity(item, selection, qty) else {
        bail!(
            "{} is priced in {}, the cart is in {}",
            item.name,
            item.price.currency,
            store.cart().currency()
        );
    };
    ctx.output.success(&format!(
        "Added {} × {} (line {})",
        qty,
        item.name,
        style(&line_id).dim()
    ));
    Ok(())
}

fn show(store: &Store, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&store.summary());
        return;
    }

    ctx.output.header("Your cart");
    if store.is_empty() {
        ctx.output.info("Cart is empty");
        return;
    }

    for line in store.lines() {
        print_line(line, ctx);
    }

    println!();
    ctx.output.kv("Items", &store.total_items().to_string());
    ctx.output
        .kv("Total", &style(store.total_price().display()).bold().to_string());
}

fn print_line(line: &CartLine, ctx: &Context) {
    let quantity = format!("{}×", line.quantity);
    let total = line.total_price.display();
    ctx.output.table_row(
        &[quantity.as_str(), line.item.name.as_str(), total.as_str(), line.line_id.as_str()],
        &[4, 32, 10, 0],
    );

    if let Some(level) = line.selected_spice_level {
        ctx.output.kv("      spice", &spice_badge(level));
    }
    if !line.selected_sides.is_empty() {
        let sides: Vec<String> = line
            .selected_sides
            .iter()
            .map(|side| format!("{} (+{})", side.name, side.price))
            .collect();
        ctx.output.kv("      sides", &sides.join(", "));
    }
    if !line.selected_sauces.is_empty() {
        let sauces: Vec<&str> = line.selected_sauces.iter().map(|id| id.as_str()).collect();
        ctx.output.kv("      sauces", &sauces.join(", "));
    }
    if let Some(ref note) = line.special_instructions {
        ctx.output.kv("      note", note);
    }
}
