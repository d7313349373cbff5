//! Command handlers, one per portal page.
//!
//! Each protected command mounts an `AuthGuard` first. A redirect is a normal
//! outcome and is reported, not treated as a failure. Failures of the page
//! itself come back as [`PageError`] carrying the text shown to the user.

pub mod admin;
pub mod auth;
pub mod creator;
pub mod listings;

use clap::{Parser, Subcommand};
use log::debug;
use std::sync::Arc;
use thiserror::Error;

use creator_portal::config::Config;
use creator_portal::errors::ClientError;
use creator_portal::guard::{AuthGuard, GuardOptions, GuardOutcome, HistoryNavigator};
use creator_portal::models::ServiceStatus;
use creator_portal::services::{ApiClient, FileSessionStore, SessionStore};

#[derive(Debug, Parser)]
#[command(name = "creator-portal", about = "Creator marketplace portal client")]
pub struct Cli {
    /// Base URL of the marketplace API (overrides PORTAL_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show the role of the stored session
    Whoami,
    /// Creator dashboard: profile, stats, verification and own services
    Dashboard,
    /// Browse marketplace services, or open one with --id
    Services {
        #[arg(long)]
        id: Option<i64>,
    },
    /// Create a service
    ServiceCreate {
        #[command(flatten)]
        draft: listings::DraftArgs,
    },
    /// Edit one of your services
    ServiceUpdate {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        draft: listings::DraftArgs,
    },
    /// Delete one of your services
    ServiceDelete {
        #[arg(long)]
        id: i64,
    },
    /// Browse creators, or open one creator's profile with --id
    Creators {
        #[arg(long)]
        id: Option<i64>,
    },
    /// Show your profile
    Profile,
    /// Update your profile; omitted fields keep their current value
    ProfileUpdate {
        #[command(flatten)]
        profile: creator::ProfileArgs,
    },
    /// Ask for creator verification
    Verify {
        #[arg(long, default_value = "")]
        reason: String,
    },
    /// Admin home: the moderation pages available to admins
    Admin,
    /// Admin: list services by moderation status
    AdminServices {
        #[arg(long, default_value_t = ServiceStatus::PendingReview)]
        status: ServiceStatus,
    },
    /// Admin: change the moderation status of a service
    AdminSetStatus {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        status: ServiceStatus,
    },
    /// Admin: delete a service
    AdminDeleteService {
        #[arg(long)]
        id: i64,
    },
    /// Admin: list creator verification requests
    AdminVerifications,
    /// Admin: approve a verification request
    AdminApprove {
        #[arg(long)]
        id: i64,
    },
    /// Admin: reject a verification request
    AdminReject {
        #[arg(long)]
        id: i64,
    },
}

/// Page-local error text.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PageError(pub String);

pub type PageResult = Result<(), PageError>;

/// Convert a client error into page text, with a fallback for empty messages.
pub fn page_error(fallback: &'static str) -> impl Fn(ClientError) -> PageError {
    move |e| PageError(e.page_message(fallback))
}

/// Shared state of one command run.
pub struct Context {
    pub config: Config,
    pub session: Arc<dyn SessionStore>,
    pub api: ApiClient,
}

impl Context {
    pub fn new(config: Config) -> Self {
        let session: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));
        let api = ApiClient::new(&config, Arc::clone(&session));
        Self {
            config,
            session,
            api,
        }
    }

    /// Mount a guard for the page at `path`.
    ///
    /// Returns `None` after reporting the redirect when the page may not render.
    pub fn mount(&self, path: &str, require_admin: bool) -> Option<AuthGuard<HistoryNavigator>> {
        let mut guard = AuthGuard::new(
            Arc::clone(&self.session),
            HistoryNavigator::new(path),
            GuardOptions::from_config(&self.config, require_admin),
        )
        .with_login_path(self.config.login_path.clone());

        match guard.activate(path) {
            GuardOutcome::Allowed { .. } => Some(guard),
            GuardOutcome::Redirected { to, role } => {
                debug!("Page {} not shown to role {}", path, role);
                println!("{}", redirect_notice(&to));
                None
            }
        }
    }
}

/// Line printed when a guard sends the user elsewhere.
pub fn redirect_notice(to: &str) -> String {
    format!("redirect → {}", to)
}

pub async fn run(command: Command, ctx: &Context) -> PageResult {
    match command {
        Command::Login { email, password } => auth::login(ctx, email, password).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Whoami => auth::whoami(ctx),
        Command::Dashboard => creator::dashboard(ctx).await,
        Command::Services { id: None } => listings::browse(ctx).await,
        Command::Services { id: Some(id) } => listings::open(ctx, id).await,
        Command::ServiceCreate { draft } => listings::create(ctx, draft).await,
        Command::ServiceUpdate { id, draft } => listings::update(ctx, id, draft).await,
        Command::ServiceDelete { id } => listings::delete(ctx, id).await,
        Command::Creators { id: None } => creator::creators(ctx).await,
        Command::Creators { id: Some(id) } => creator::creator(ctx, id).await,
        Command::Profile => creator::profile(ctx).await,
        Command::ProfileUpdate { profile } => creator::update_profile(ctx, profile).await,
        Command::Verify { reason } => creator::verify(ctx, &reason).await,
        Command::Admin => admin::home(ctx),
        Command::AdminServices { status } => admin::services(ctx, status).await,
        Command::AdminSetStatus { id, status } => admin::set_status(ctx, id, status).await,
        Command::AdminDeleteService { id } => admin::delete_service(ctx, id).await,
        Command::AdminVerifications => admin::verifications(ctx).await,
        Command::AdminApprove { id } => admin::approve(ctx, id).await,
        Command::AdminReject { id } => admin::reject(ctx, id).await,
    }
}
