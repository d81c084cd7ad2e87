//! Menu listing command.

use anyhow::Result;
use console::style;
use flame_commerce::catalog::{self, MenuItem};
use flame_commerce::search::{self, MenuQuery, MenuResults};
use tracing::debug;

use super::MenuArgs;
use crate::context::Context;
use crate::output::spice_badge;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let mut query = MenuQuery::new()
        .with_search(args.search)
        .with_category(args.category)
        .with_spice_level(args.spice);
    if args.veg {
        query = query.vegetarian_only();
    }

    let results = search::search(catalog::menu(), &query);
    debug!(matched = results.len(), catalog = results.catalog_size, "filtered menu");

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    print_results(&results, ctx);
    Ok(())
}

fn print_results(results: &MenuResults, ctx: &Context) {
    ctx.output.header("Menu");
    print_chips(results);

    if results.is_empty() {
        ctx.output.warn("No items match your filters");
        return;
    }

    ctx.output.info(&format!(
        "Showing {} of {} items",
        results.len(),
        results.catalog_size
    ));
    println!();
    for item in &results.items {
        print_item(item, ctx);
    }
}

fn print_chips(results: &MenuResults) {
    let chips: Vec<String> = results
        .facets
        .iter()
        .map(|facet| {
            let label = format!("{} ({})", facet.category, facet.count);
            if facet.selected {
                style(label).bold().reverse().to_string()
            } else if facet.count == 0 {
                style(label).dim().to_string()
            } else {
                label
            }
        })
        .collect();
    println!("  {}", chips.join("  "));
}

fn print_item(item: &MenuItem, ctx: &Context) {
    let mut tags = Vec::new();
    if item.is_vegetarian {
        tags.push(style("veg").green().to_string());
    }
    if item.popular {
        tags.push(style("popular").magenta().to_string());
    }
    if item.new {
        tags.push(style("new").cyan().to_string());
    }

    let price = item.price.display();
    let heat = item.spice_level.map(spice_badge).unwrap_or_default();
    let tags = tags.join(" ");
    ctx.output.table_row(
        &[
            item.id.as_str(),
            item.name.as_str(),
            price.as_str(),
            tags.as_str(),
            heat.as_str(),
        ],
        &[3, 32, 10, 0, 0],
    );
    println!("       {}", style(&item.description).dim());
}
