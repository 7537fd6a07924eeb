//! Catalog inspection command.

use anyhow::Result;
use mini_commerce::search::Listing;

use super::CatalogArgs;
use crate::context::Context;
use crate::view::{listing_json, render_listing};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let source = ctx
        .config
        .catalog
        .path
        .as_deref()
        .unwrap_or("built-in");

    if args.validate {
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({
                "source": source,
                "products": ctx.catalog.len(),
                "valid": true,
            }))?;
        } else {
            ctx.output.success(&format!(
                "Catalog OK: {} products ({})",
                ctx.catalog.len(),
                source
            ));
        }
        return Ok(());
    }

    let listing = Listing::new(ctx.catalog.products().to_vec());
    if ctx.output.is_json() {
        ctx.output.json(&listing_json(&listing))?;
        return Ok(());
    }

    render_listing(&ctx.output, &format!("Catalog ({})", source), &listing);
    Ok(())
}
