//! Catalog listing command.

use anyhow::{Context as _, Result};
use mini_commerce::search::QueryParams;
use serde_json::json;

use super::ListArgs;
use crate::context::Context;
use crate::view::{describe_params, listing_json, render_listing};

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let params = resolve_params(&args, ctx.config.defaults.params())?;
    let listing = ctx.catalog.query(&params);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "params": params,
            "products": listing_json(&listing),
        }))?;
        return Ok(());
    }

    ctx.output.debug(&describe_params(&params));
    render_listing(&ctx.output, "Products", &listing);
    Ok(())
}

/// Overlay command line flags on the configured defaults.
fn resolve_params(args: &ListArgs, defaults: QueryParams) -> Result<QueryParams> {
    let mut params = defaults;
    if let Some(search) = &args.search {
        params.search_text = search.clone();
    }
    if let Some(category) = &args.category {
        params.category = category
            .parse()
            .with_context(|| format!("Invalid --category {:?}", category))?;
    }
    if let Some(sort) = &args.sort {
        params.sort = sort
            .parse()
            .with_context(|| format!("Invalid --sort {:?}", sort))?;
    }
    Ok(params)
}
