//! Cart commands.

use anyhow::{bail, Result};
use plant_commerce::prelude::*;
use plant_views::adapters::SharedCart;
use plant_views::ProductDetail;
use tracing::debug;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::format_timestamp;
use crate::store;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Add { id, qty }) => add_to_cart(&id, &qty, ctx).await,
        Some(CartCommand::Set { id, qty }) => set_quantity(&id, qty, ctx).await,
        Some(CartCommand::Remove { id }) => remove_from_cart(&id, ctx).await,
        Some(CartCommand::Show) | None => show_cart(ctx).await,
        Some(CartCommand::Clear) => clear_cart(ctx).await,
    }
}

async fn add_to_cart(id: &str, qty: &str, ctx: &Context) -> Result<()> {
    let cart_path = ctx.cart_path()?;
    let cart = SharedCart::new(store::load_cart(&cart_path)?);
    let ports = ctx.ports(cart.clone())?;
    let mut detail = ProductDetail::new(ctx.client()?, ports).with_locale(ctx.locale());

    let id = ProductId::new(id);
    if let Err(err) = detail.load(&id).await {
        debug!(product_id = %id, error = %err, "product unavailable for cart");
    }
    if !detail.enter_quantity(qty) {
        bail!("Invalid quantity: {qty:?}");
    }

    detail.add_to_cart()?;
    let snapshot = cart.snapshot();
    store::save_cart(&cart_path, &snapshot)?;

    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
    } else if let Some(line) = snapshot.get_item(&id) {
        ctx.output.kv(
            &line.product_name,
            &format!("{} x {} = {}", line.quantity, line.unit_price, line.total_price),
        );
    }
    Ok(())
}

async fn set_quantity(id: &str, qty: u64, ctx: &Context) -> Result<()> {
    let path = ctx.cart_path()?;
    let mut cart = store::load_cart(&path)?;
    cart.update_quantity(&ProductId::new(id), qty)?;
    store::save_cart(&path, &cart)?;

    if ctx.output.is_json() {
        ctx.output.json(&cart);
    } else if qty == 0 {
        ctx.output.success(&format!("Removed {id} from the cart"));
    } else {
        ctx.output.success(&format!("Set {id} to {qty}"));
    }
    Ok(())
}

async fn remove_from_cart(id: &str, ctx: &Context) -> Result<()> {
    let path = ctx.cart_path()?;
    let mut cart = store::load_cart(&path)?;
    if !cart.remove_item(&ProductId::new(id)) {
        bail!("Product {id} is not in the cart");
    }
    store::save_cart(&path, &cart)?;
    ctx.output.success(&format!("Removed {id} from the cart"));
    Ok(())
}

async fn show_cart(ctx: &Context) -> Result<()> {
    let cart = store::load_cart(&ctx.cart_path()?)?;

    if ctx.output.is_json() {
        ctx.output.json(&cart);
        return Ok(());
    }

    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let widths = [16, 28, 6, 14, 14];
    ctx.output
        .table_row(&["ID", "NAME", "QTY", "UNIT", "TOTAL"], &widths);
    ctx.output.info(&"-".repeat(widths.iter().sum::<usize>() + widths.len()));
    for line in &cart.items {
        let quantity = line.quantity.to_string();
        let unit = line.unit_price.display();
        let total = line.total_price.display();
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &line.product_name,
                &quantity,
                &unit,
                &total,
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.kv("Lines", &cart.unique_item_count().to_string());
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Subtotal", &cart.subtotal()?.display());
    ctx.output.kv("Updated", &format_timestamp(cart.updated_at));
    Ok(())
}

async fn clear_cart(ctx: &Context) -> Result<()> {
    let path = ctx.cart_path()?;
    let mut cart = store::load_cart(&path)?;
    cart.clear();
    store::save_cart(&path, &cart)?;
    ctx.output.success("Cart cleared");
    Ok(())
}
