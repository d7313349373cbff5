//! Creator pages: dashboard, profile, verification and the creators directory.

use clap::Args;

use creator_portal::constants::{
    ERR_LOAD_CREATOR, ERR_LOAD_CREATORS, ERR_LOAD_PROFILE, ERR_SUBMIT_VERIFICATION, ERR_UPDATE_PROFILE,
    MSG_PROFILE_UPDATED,
    MSG_VERIFICATION_SUBMITTED,
};
use creator_portal::models::{Profile, VerificationLabel};
use creator_portal::services::{load_creators, CreatorService, Dashboard, ProfileService};

use super::listings::print_listing_row;
use super::{page_error, Context, PageResult};

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    /// Comma separated skills
    #[arg(long)]
    pub skills: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub avatar_url: Option<String>,
}

impl ProfileArgs {
    fn apply(self, profile: &mut Profile) {
        if let Some(v) = self.display_name {
            profile.display_name = v;
        }
        if let Some(v) = self.bio {
            profile.bio = v;
        }
        if let Some(v) = self.skills {
            profile.skills = v;
        }
        if let Some(v) = self.location {
            profile.location = v;
        }
        if let Some(v) = self.avatar_url {
            profile.avatar_url = v;
        }
    }
}

pub async fn dashboard(ctx: &Context) -> PageResult {
    let Some(guard) = ctx.mount(&ctx.config.dashboard_path, false) else {
        return Ok(());
    };

    let Some(data) = guard.ticket().run(Dashboard::load(&ctx.api)).await else {
        return Ok(());
    };

    println!("Dashboard (role: {})", guard.role());
    if let Some(profile) = &data.profile {
        print_profile(profile);
    }
    println!("Verification: {}", data.verification_label());

    if let Some(stats) = data.stats.as_ref().filter(|s| !s.is_empty()) {
        println!("Stats:");
        for row in stats.rows() {
            println!("  {:<24} {}", row.label, row.value);
        }
    }

    let mine = data.my_services();
    println!("My services ({}):", mine.len());
    for listing in mine {
        print_listing_row(listing);
    }

    if let Some(notice) = &data.notice {
        println!("{}", notice);
    }
    Ok(())
}

pub async fn profile(ctx: &Context) -> PageResult {
    let profile = ProfileService::new(ctx.api.clone())
        .me()
        .await
        .map_err(page_error(ERR_LOAD_PROFILE))?;
    print_profile(&profile);
    Ok(())
}

pub async fn update_profile(ctx: &Context, args: ProfileArgs) -> PageResult {
    let profiles = ProfileService::new(ctx.api.clone());
    let mut profile = profiles.me().await.map_err(page_error(ERR_LOAD_PROFILE))?;
    args.apply(&mut profile);
    profiles
        .update_me(&profile)
        .await
        .map_err(page_error(ERR_UPDATE_PROFILE))?;
    println!("{}", MSG_PROFILE_UPDATED);
    Ok(())
}

pub async fn verify(ctx: &Context, reason: &str) -> PageResult {
    if ctx.mount(&ctx.config.dashboard_path, false).is_none() {
        return Ok(());
    }
    let verification = CreatorService::new(ctx.api.clone())
        .submit_verification(reason)
        .await
        .map_err(page_error(ERR_SUBMIT_VERIFICATION))?;
    println!("{} ({})", MSG_VERIFICATION_SUBMITTED, verification.label());
    Ok(())
}

pub async fn creators(ctx: &Context) -> PageResult {
    let cards = load_creators(&ctx.api)
        .await
        .map_err(page_error(ERR_LOAD_CREATORS))?;
    if cards.is_empty() {
        println!("No creators yet.");
    }
    for card in cards {
        println!(
            "#{:<5} {:<28} {:<11} {} service(s)",
            card.id,
            card.name(),
            card.verification().to_string(),
            card.service_count
        );
    }
    Ok(())
}

/// Public page of a single creator.
pub async fn creator(ctx: &Context, id: i64) -> PageResult {
    let profile = ProfileService::new(ctx.api.clone())
        .by_id(id)
        .await
        .map_err(page_error(ERR_LOAD_CREATOR))?;
    for line in creator_lines(id, &profile) {
        println!("{}", line);
    }
    Ok(())
}

fn creator_lines(id: i64, profile: &Profile) -> Vec<String> {
    let name = match profile.display_name.as_str() {
        "" => "Unnamed creator",
        name => name,
    };
    let label = VerificationLabel::from_status(profile.verification_status.as_deref());

    let mut lines = vec![
        format!("Creator #{}", profile.id.unwrap_or(id)),
        format!("{} [{}]", name, label),
    ];
    if !profile.location.is_empty() {
        lines.push(format!("  Location: {}", profile.location));
    }
    if !profile.bio.is_empty() {
        lines.push(format!("  Bio: {}", profile.bio));
    }
    let skills = profile.skill_list();
    if !skills.is_empty() {
        lines.push(format!("  Skills: {}", skills.join(", ")));
    }
    lines
}

fn print_profile(profile: &Profile) {
    let name = match profile.display_name.as_str() {
        "" => "(no display name)",
        name => name,
    };
    println!("{}", name);
    if !profile.location.is_empty() {
        println!("  Location: {}", profile.location);
    }
    if !profile.bio.is_empty() {
        println!("  Bio: {}", profile.bio);
    }
    let skills = profile.skill_list();
    if !skills.is_empty() {
        println!("  Skills: {}", skills.join(", "));
    }
}
