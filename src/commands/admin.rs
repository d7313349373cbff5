//! Admin moderation pages. Each one requires the admin role.

use creator_portal::constants::{
    ERR_APPROVE, ERR_DELETE_SERVICE, ERR_LOAD_ADMIN_SERVICES, ERR_LOAD_VERIFICATIONS, ERR_REJECT,
    ERR_UPDATE_STATUS, MSG_SERVICE_DELETED, MSG_STATUS_UPDATED, MSG_VERIFICATION_APPROVED,
    MSG_VERIFICATION_REJECTED,
};
use creator_portal::models::ServiceStatus;
use creator_portal::services::AdminService;

use super::listings::print_listing_row;
use super::{page_error, Context, PageResult};

const ADMIN_SERVICES_PATH: &str = "/admin/services";
const ADMIN_VERIFICATIONS_PATH: &str = "/admin/creator-verification";

/// Moderation pages reachable from the admin home, with the command opening each.
const ADMIN_PAGES: [(&str, &str, &str); 2] = [
    (
        "Creator verification",
        "Approve or reject creator verification submissions.",
        "admin-verifications",
    ),
    (
        "Service moderation",
        "Filter by status, approve listings, or remove violations.",
        "admin-services --status <STATUS>",
    ),
];

/// Admin home: lists the moderation pages.
pub fn home(ctx: &Context) -> PageResult {
    if ctx.mount(&ctx.config.admin_path, true).is_none() {
        return Ok(());
    }
    println!("Admin control center");
    for (title, summary, command) in ADMIN_PAGES {
        println!("  {:<22} {}", title, summary);
        println!("  {:<22} creator-portal {}", "", command);
    }
    Ok(())
}

fn admin_service(ctx: &Context, path: &str) -> Option<AdminService> {
    ctx.mount(path, true)
        .map(|_| AdminService::new(ctx.api.clone()))
}

pub async fn services(ctx: &Context, status: ServiceStatus) -> PageResult {
    let Some(admin) = admin_service(ctx, ADMIN_SERVICES_PATH) else {
        return Ok(());
    };
    let listings = admin
        .services(status)
        .await
        .map_err(page_error(ERR_LOAD_ADMIN_SERVICES))?;

    println!("Services in {} ({}):", status, listings.len());
    for listing in &listings {
        print_listing_row(listing);
    }
    Ok(())
}

pub async fn set_status(ctx: &Context, id: i64, status: ServiceStatus) -> PageResult {
    let Some(admin) = admin_service(ctx, ADMIN_SERVICES_PATH) else {
        return Ok(());
    };
    admin
        .set_service_status(id, status)
        .await
        .map_err(page_error(ERR_UPDATE_STATUS))?;
    println!("{}: #{} is now {}", MSG_STATUS_UPDATED, id, status);
    Ok(())
}

pub async fn delete_service(ctx: &Context, id: i64) -> PageResult {
    let Some(admin) = admin_service(ctx, ADMIN_SERVICES_PATH) else {
        return Ok(());
    };
    admin
        .delete_service(id)
        .await
        .map_err(page_error(ERR_DELETE_SERVICE))?;
    println!("{}", MSG_SERVICE_DELETED);
    Ok(())
}

pub async fn verifications(ctx: &Context) -> PageResult {
    let Some(admin) = admin_service(ctx, ADMIN_VERIFICATIONS_PATH) else {
        return Ok(());
    };
    let requests = admin
        .verifications()
        .await
        .map_err(page_error(ERR_LOAD_VERIFICATIONS))?;

    if requests.is_empty() {
        println!("No verification requests.");
    }
    for request in &requests {
        println!(
            "#{:<5} {:<28} {:<15} {}",
            request.id.map(|id| id.to_string()).unwrap_or_default(),
            request.creator_name().unwrap_or("-"),
            request.status.as_deref().unwrap_or("PENDING"),
            request.reason.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

pub async fn approve(ctx: &Context, id: i64) -> PageResult {
    let Some(admin) = admin_service(ctx, ADMIN_VERIFICATIONS_PATH) else {
        return Ok(());
    };
    admin.approve(id).await.map_err(page_error(ERR_APPROVE))?;
    println!("{}", MSG_VERIFICATION_APPROVED);
    Ok(())
}

pub async fn reject(ctx: &Context, id: i64) -> PageResult {
    let Some(admin) = admin_service(ctx, ADMIN_VERIFICATIONS_PATH) else {
        return Ok(());
    };
    admin.reject(id).await.map_err(page_error(ERR_REJECT))?;
    println!("{}", MSG_VERIFICATION_REJECTED);
    Ok(())
}
