//! Admin table and product detail commands.

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Confirm;
use plant_commerce::prelude::*;
use plant_data::StoreClient;
use plant_views::adapters::SharedCart;
use plant_views::{ProductDetail, ProductForm, ProductManager, ViewError};
use serde_json::json;

use super::{ProductFields, ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::{rating_stars, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(ProductsCommand::List {
            search,
            sort,
            desc,
            page,
        }) => list_products(search.as_deref(), sort.as_deref(), desc, page, ctx).await,
        None => list_products(None, None, false, 1, ctx).await,
        Some(ProductsCommand::Show {
            id,
            related_page,
            image,
        }) => show_product(&id, related_page, image, ctx).await,
        Some(ProductsCommand::Add(fields)) => add_product(fields, ctx).await,
        Some(ProductsCommand::Edit { id, fields }) => edit_product(&id, fields, ctx).await,
        Some(ProductsCommand::Delete { id, yes }) => delete_product(&id, yes, ctx).await,
    }
}

fn manager(ctx: &Context) -> Result<ProductManager<StoreClient>> {
    let ports = ctx.ports(SharedCart::default())?;
    Ok(ProductManager::new(ctx.client()?, ports)
        .with_locale(ctx.locale())
        .with_page_size(ctx.config.storefront.admin_page_size))
}

fn parse_sort(column: &str, desc: bool) -> Result<SortSpec> {
    let key = SortKey::from_str(column)
        .ok_or_else(|| anyhow!("Unknown sort column '{column}' (expected name, price or sales)"))?;
    Ok(if desc {
        SortSpec::descending(key)
    } else {
        SortSpec::ascending(key)
    })
}

async fn list_products(
    search: Option<&str>,
    sort: Option<&str>,
    desc: bool,
    page: usize,
    ctx: &Context,
) -> Result<()> {
    let mut manager = manager(ctx)?;
    manager.load_all().await?;

    if let Some(query) = search {
        manager.search(query);
    }
    if let Some(column) = sort {
        manager.set_sort(Some(parse_sort(column, desc)?));
    }
    manager.set_page(page);

    let rows = manager.rows();
    let pagination = manager.pagination();

    if ctx.output.is_json() {
        let rows: Vec<_> = rows
            .iter()
            .map(|row| {
                json!({
                    "index": row.index,
                    "id": row.product.id,
                    "name": row.product.name,
                    "price": row.product.price,
                    "units_sold": row.units_sold,
                    "tags": row.tags,
                })
            })
            .collect();
        ctx.output.json(&json!({ "rows": rows, "pagination": pagination }));
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", manager.filtered().len()));
    if rows.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    let widths = [4, 16, 28, 14, 6, 24];
    ctx.output
        .table_row(&["#", "ID", "NAME", "PRICE", "SOLD", "CATEGORY"], &widths);
    ctx.output.info(&"-".repeat(widths.iter().sum::<usize>() + widths.len()));

    for row in &rows {
        let index = row.index.to_string();
        let name = truncate(&row.product.name, widths[2] - 1);
        let price = row.product.price.display();
        let sold = row.units_sold.to_string();
        let tags = row.tags.join(" / ");
        ctx.output.table_row(
            &[&index, row.product.id.as_str(), &name, &price, &sold, &tags],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {} of {})",
        pagination.start_item(),
        pagination.end_item(),
        pagination.total,
        pagination.page,
        pagination.total_pages
    ));

    Ok(())
}

async fn show_product(
    id: &str,
    related_page: usize,
    image: Option<usize>,
    ctx: &Context,
) -> Result<()> {
    let ports = ctx.ports(SharedCart::default())?;
    let mut detail = ProductDetail::new(ctx.client()?, ports).with_locale(ctx.locale());

    let id = ProductId::new(id);
    if let Err(err) = detail.open(&id).await {
        if detail.product().is_none() {
            return Err(err).with_context(|| format!("Product '{id}' could not be loaded"));
        }
        ctx.output.warn("Related products are unavailable.");
    }

    while detail.related_page() < related_page && detail.can_go_next() {
        detail.next_related_page();
    }

    if let Some(index) = image {
        let images = detail
            .product()
            .map(|p| p.images.clone())
            .unwrap_or_default();
        let Some(src) = images.get(index).cloned() else {
            bail!(
                "Product '{id}' has {} image(s); index {index} is out of range",
                images.len()
            );
        };
        detail.select_image(src);
    }

    if ctx.output.is_json() {
        let info: Vec<_> = detail
            .info_rows()
            .into_iter()
            .map(|row| json!({ "label": row.label, "value": row.value }))
            .collect();
        ctx.output.json(&json!({
            "product": detail.product(),
            "rating": detail.rating(),
            "active_image": detail.active_image(),
            "info": info,
            "related": detail.related_slice(),
            "related_page": detail.related_page(),
            "related_pages": detail.related_nav_bound(),
            "share_url": detail.share_url(&ctx.config.storefront.share_origin),
        }));
        return Ok(());
    }

    let Some(product) = detail.product() else {
        bail!("Product '{id}' could not be loaded");
    };

    ctx.output.header(&product.name);
    if product.is_on_sale() {
        if let Some(old) = product.old_price {
            ctx.output.kv("Price", &format!("{} (was {})", product.price, old));
        }
    } else {
        ctx.output.kv("Price", &product.price.display());
    }
    if let Some(discount) = product.discount {
        ctx.output.kv("Discount", &format!("{discount}%"));
    }
    ctx.output.kv(
        "Rating",
        &format!(
            "{} ({} comments)",
            rating_stars(detail.rating()),
            detail.comments().len()
        ),
    );
    let tags = ProductManager::<StoreClient>::category_tags(product);
    if !tags.is_empty() {
        ctx.output.kv("Category", &tags.join(" / "));
    }
    if let Some(description) = &product.description {
        ctx.output.info("");
        ctx.output.info(description);
    }

    if !product.images.is_empty() {
        ctx.output.info("");
        ctx.output.info("Images:");
        for src in &product.images {
            let marker = if detail.active_image() == Some(src.as_str()) {
                "*"
            } else {
                " "
            };
            ctx.output.list_item(&format!("{marker} {src}"));
        }
    }

    ctx.output.info("");
    ctx.output.info("Information:");
    for row in detail.info_rows() {
        if row.value.is_empty() {
            continue;
        }
        match row.label {
            Some(label) => ctx.output.kv(label, &row.value),
            None => ctx.output.list_item(&row.value),
        }
    }

    if !detail.comments().is_empty() {
        ctx.output.info("");
        ctx.output.info("Comments:");
        for comment in detail.comments() {
            ctx.output.list_item(&format!(
                "{} {}",
                rating_stars(comment.rating),
                comment.content
            ));
        }
    }

    if !detail.related().is_empty() {
        ctx.output.info("");
        ctx.output.info(&format!(
            "Related products (page {} of {}):",
            detail.related_page(),
            detail.related_nav_bound()
        ));
        for related in detail.related_slice() {
            ctx.output.list_item(&format!(
                "[{}] {} - {}",
                related.id, related.name, related.price
            ));
        }
    }

    if let Some(url) = detail.share_url(&ctx.config.storefront.share_origin) {
        ctx.output.info("");
        ctx.output.kv("Share", &url);
    }

    Ok(())
}

/// Overlay the flags that were given onto `form`.
fn apply_fields(form: &mut ProductForm, fields: ProductFields) {
    fn set(slot: &mut String, value: Option<String>) {
        if let Some(value) = value {
            *slot = value;
        }
    }

    set(&mut form.name, fields.name);
    set(&mut form.price, fields.price);
    set(&mut form.common_name, fields.common_name);
    set(&mut form.scientific_name, fields.scientific_name);
    set(&mut form.plant_family, fields.plant_family);
    set(&mut form.height, fields.height);
    set(&mut form.origin, fields.origin);
    set(&mut form.description, fields.description);
    set(&mut form.describe, fields.describe);

    if let Some(lv0) = fields.lv0 {
        form.category.select_lv0(lv0);
    }
    if let Some(lv1) = fields.lv1 {
        form.category.select_lv1(lv1);
    }
    if !fields.images.is_empty() {
        form.images = fields.images;
    }
}

/// Print one hint per empty required field, then fail.
fn explain_rejection(err: ViewError, ctx: &Context) -> anyhow::Error {
    if let ViewError::Form(form_err) = &err {
        for field in form_err.missing() {
            ctx.output.list_item(&field.required_message(ctx.locale()));
        }
    }
    err.into()
}

async fn add_product(fields: ProductFields, ctx: &Context) -> Result<()> {
    let mut manager = manager(ctx)?;
    // Category failures are already reported; the form still works without them.
    let _ = manager.load_categories().await;

    let mut form = manager.open_editor(None);
    apply_fields(&mut form, fields);

    let created = manager
        .save(&form, None)
        .await
        .map_err(|err| explain_rejection(err, ctx))?;

    if ctx.output.is_json() {
        ctx.output.json(&created);
    } else {
        ctx.output.kv("ID", created.id.as_str());
    }
    Ok(())
}

async fn edit_product(id: &str, fields: ProductFields, ctx: &Context) -> Result<()> {
    let mut manager = manager(ctx)?;
    manager.load_all().await?;

    let id = ProductId::new(id);
    let Some(existing) = manager.find(&id) else {
        bail!("Product not found: {id}");
    };
    let mut form = manager.open_editor(Some(existing));
    apply_fields(&mut form, fields);

    let updated = manager
        .save(&form, Some(&id))
        .await
        .map_err(|err| explain_rejection(err, ctx))?;

    if ctx.output.is_json() {
        ctx.output.json(&updated);
    }
    Ok(())
}

async fn delete_product(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let mut manager = manager(ctx)?;
    manager.load_all().await?;

    let id = ProductId::new(id);
    let name = manager
        .find(&id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string());

    if !yes && !ctx.output.is_json() {
        let confirm = Confirm::new()
            .with_prompt(format!("Delete product '{name}'?"))
            .default(false)
            .interact()?;

        if !confirm {
            ctx.output.info("Delete cancelled.");
            return Ok(());
        }
    }

    manager.remove(&id).await?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "deleted": id }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(
            parse_sort("sales", true).unwrap(),
            SortSpec::descending(SortKey::UnitsSold)
        );
        assert_eq!(
            parse_sort("Name", false).unwrap(),
            SortSpec::ascending(SortKey::Name)
        );
        assert!(parse_sort("rating", false).is_err());
    }

    #[test]
    fn test_apply_fields_keeps_unset_values() {
        let product = Product::new("1", "Rose", Price::new(10_000))
            .with_category(ProductCategory::new("Outdoor", Some("Flower".into())))
            .with_image("/images/rose.png");
        let mut form = ProductForm::from_product(&product);

        apply_fields(
            &mut form,
            ProductFields {
                price: Some("12000".into()),
                ..ProductFields::default()
            },
        );

        assert_eq!(form.name, "Rose");
        assert_eq!(form.price, "12000");
        assert_eq!(form.category.lv1.as_deref(), Some("Flower"));
        assert_eq!(form.images, vec!["/images/rose.png".to_string()]);
    }

    #[test]
    fn test_apply_fields_new_parent_clears_child() {
        let product = Product::new("1", "Rose", Price::new(10_000))
            .with_category(ProductCategory::new("Outdoor", Some("Flower".into())));
        let mut form = ProductForm::from_product(&product);

        apply_fields(
            &mut form,
            ProductFields {
                lv0: Some("Indoor".into()),
                ..ProductFields::default()
            },
        );

        assert_eq!(form.category.lv0, "Indoor");
        assert_eq!(form.category.lv1, None);
    }
}
