//! Marketplace service pages.

use clap::Args;

use creator_portal::constants::{
    ERR_CREATE_SERVICE, ERR_DELETE_OWN_SERVICE, ERR_LOAD_SERVICE, ERR_LOAD_SERVICES,
    ERR_UPDATE_SERVICE, MSG_SERVICE_CREATED, MSG_SERVICE_DELETED, MSG_SERVICE_UPDATED,
};
use creator_portal::models::{Listing, ServiceDraft};
use creator_portal::services::ListingService;

use super::{page_error, Context, PageResult};

/// Listing form fields. Left optional here so the form check reports them.
#[derive(Debug, Args)]
pub struct DraftArgs {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Comma separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
    #[arg(long)]
    pub price: Option<f64>,
    /// Delivery time in days
    #[arg(long)]
    pub delivery_time: Option<i64>,
}

impl From<DraftArgs> for ServiceDraft {
    fn from(args: DraftArgs) -> Self {
        ServiceDraft {
            title: args.title,
            description: args.description,
            tags: args.tags,
            price: args.price,
            delivery_time: args.delivery_time,
        }
    }
}

pub async fn browse(ctx: &Context) -> PageResult {
    let listings = ListingService::new(ctx.api.clone())
        .list()
        .await
        .map_err(page_error(ERR_LOAD_SERVICES))?;
    if listings.is_empty() {
        println!("No services yet.");
    }
    for listing in &listings {
        print_listing_row(listing);
    }
    Ok(())
}

pub async fn open(ctx: &Context, id: i64) -> PageResult {
    let listing = ListingService::new(ctx.api.clone())
        .open(id)
        .await
        .map_err(page_error(ERR_LOAD_SERVICE))?;

    println!("{}", listing.title);
    println!("  by {} | {:.2} | {} day(s)", listing.owner_name, listing.price, listing.delivery_time);
    let tags = listing.tag_list();
    if !tags.is_empty() {
        println!("  tags: {}", tags.join(", "));
    }
    println!();
    println!("{}", listing.description);
    Ok(())
}

pub async fn create(ctx: &Context, draft: DraftArgs) -> PageResult {
    if ctx.mount("/services/create", false).is_none() {
        return Ok(());
    }
    ListingService::new(ctx.api.clone())
        .create(&draft.into())
        .await
        .map_err(page_error(ERR_CREATE_SERVICE))?;
    println!("{}", MSG_SERVICE_CREATED);
    Ok(())
}

pub async fn update(ctx: &Context, id: i64, draft: DraftArgs) -> PageResult {
    if ctx.mount(&ctx.config.dashboard_path, false).is_none() {
        return Ok(());
    }
    ListingService::new(ctx.api.clone())
        .update(id, &draft.into())
        .await
        .map_err(page_error(ERR_UPDATE_SERVICE))?;
    println!("{}", MSG_SERVICE_UPDATED);
    Ok(())
}

pub async fn delete(ctx: &Context, id: i64) -> PageResult {
    if ctx.mount(&ctx.config.dashboard_path, false).is_none() {
        return Ok(());
    }
    ListingService::new(ctx.api.clone())
        .delete(id)
        .await
        .map_err(page_error(ERR_DELETE_OWN_SERVICE))?;
    println!("{}", MSG_SERVICE_DELETED);
    Ok(())
}

pub fn print_listing_row(listing: &Listing) {
    let status = listing.status.map(|s| s.to_string()).unwrap_or_default();
    println!(
        "#{:<5} {:<36} {:>10.2} {:>3}d {:<20} {}",
        listing.id, listing.title, listing.price, listing.delivery_time, listing.owner_name, status
    );
}
