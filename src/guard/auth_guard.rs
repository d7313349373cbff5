//! Authentication guard for protected pages.

use log::{debug, info};
use std::sync::Arc;

use crate::config::Config;
use crate::constants::{DASHBOARD_PATH, LOGIN_PATH};
use crate::models::Role;
use crate::services::{resolve_role, SessionStore};

use super::{Navigator, PageLifecycle, ScopeTicket};

/// Per-page guard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOptions {
    pub require_admin: bool,
    /// Where visitors without a session are sent.
    pub redirect_if_unauthed: String,
    /// Where non-admins are sent from admin-only pages.
    pub redirect_non_admin_to: String,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self {
            require_admin: false,
            redirect_if_unauthed: LOGIN_PATH.to_string(),
            redirect_non_admin_to: DASHBOARD_PATH.to_string(),
        }
    }
}

impl GuardOptions {
    /// Options for an admin-only page.
    pub fn admin() -> Self {
        Self {
            require_admin: true,
            ..Self::default()
        }
    }

    /// Options using the configured login and dashboard routes.
    pub fn from_config(config: &Config, require_admin: bool) -> Self {
        Self {
            require_admin,
            redirect_if_unauthed: config.login_path.clone(),
            redirect_non_admin_to: config.dashboard_path.clone(),
        }
    }
}

/// Decision of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The page may render.
    Allowed { role: Role },
    /// The visitor was sent elsewhere; the page should not render.
    Redirected { to: String, role: Role },
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allowed { .. })
    }

    pub fn role(&self) -> Role {
        match self {
            GuardOutcome::Allowed { role } | GuardOutcome::Redirected { role, .. } => *role,
        }
    }
}

/// Guard mounted by a protected page.
///
/// Evaluation happens on [`activate`](Self::activate): once when the page is
/// entered and again whenever the route path changes. Nothing here fails;
/// every problem resolves to a redirect.
pub struct AuthGuard<N: Navigator> {
    session: Arc<dyn SessionStore>,
    navigator: N,
    options: GuardOptions,
    login_path: String,
    role: Role,
    last: Option<(String, GuardOutcome)>,
    lifecycle: PageLifecycle,
}

impl<N: Navigator> AuthGuard<N> {
    pub fn new(session: Arc<dyn SessionStore>, navigator: N, options: GuardOptions) -> Self {
        Self {
            session,
            navigator,
            options,
            login_path: LOGIN_PATH.to_string(),
            role: Role::Unknown,
            last: None,
            lifecycle: PageLifecycle::new(),
        }
    }

    /// Route `logout` sends the user to. Defaults to `/login`.
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Evaluate the guard for the page at `path`.
    ///
    /// Activating again with the same path returns the previous decision
    /// without re-reading the session; a different path re-evaluates and
    /// invalidates tickets issued for the previous one.
    pub fn activate(&mut self, path: &str) -> GuardOutcome {
        if let Some((last_path, outcome)) = &self.last {
            if last_path == path {
                return outcome.clone();
            }
        }

        self.lifecycle.advance();
        let outcome = self.evaluate(path);
        self.last = Some((path.to_string(), outcome.clone()));
        outcome
    }

    fn evaluate(&mut self, path: &str) -> GuardOutcome {
        let Some(credential) = self.session.read() else {
            self.role = Role::Unknown;
            debug!("No session for {}, redirecting to {}", path, self.options.redirect_if_unauthed);
            let to = self.options.redirect_if_unauthed.clone();
            self.navigator.replace(&to);
            return GuardOutcome::Redirected {
                to,
                role: Role::Unknown,
            };
        };

        let role = resolve_role(Some(&credential));
        self.session.save(&credential, role);
        self.role = role;

        if self.options.require_admin && !role.is_admin() {
            info!(
                "Role {} may not open admin page {}, redirecting to {}",
                role, path, self.options.redirect_non_admin_to
            );
            let to = self.options.redirect_non_admin_to.clone();
            self.navigator.replace(&to);
            return GuardOutcome::Redirected { to, role };
        }

        GuardOutcome::Allowed { role }
    }

    /// Role resolved by the latest evaluation.
    pub fn role(&self) -> Role {
        self.role
    }

    /// End the local session and go to the login page.
    ///
    /// Server-side logout is the calling page's business.
    pub fn logout(&mut self) {
        self.session.clear();
        self.role = Role::Unknown;
        self.last = None;
        self.lifecycle.advance();
        info!("Session cleared");
        let to = self.login_path.clone();
        self.navigator.replace(&to);
    }

    /// Ticket for a request issued by the page right now.
    pub fn ticket(&self) -> ScopeTicket {
        self.lifecycle.ticket()
    }

    /// The page is going away: results of its pending requests are discarded.
    pub fn unmount(&mut self) {
        self.lifecycle.advance();
        self.last = None;
    }

    pub fn options(&self) -> &GuardOptions {
        &self.options
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

impl<N: Navigator> Drop for AuthGuard<N> {
    fn drop(&mut self) {
        self.lifecycle.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROLE_KEY;
    use crate::guard::HistoryNavigator;
    use crate::services::MemorySessionStore;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::{json, Value};

    fn token_with(claims: Value) -> String {
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(claims.to_string()))
    }

    fn session_with(token: Option<String>) -> Arc<MemorySessionStore> {
        let store = Arc::new(MemorySessionStore::new());
        if let Some(token) = token {
            // Stale role label on purpose: the guard must refresh it.
            store.save(&token, Role::Unknown);
        }
        store
    }

    fn guard(
        store: &Arc<MemorySessionStore>,
        options: GuardOptions,
        at: &str,
    ) -> AuthGuard<HistoryNavigator> {
        let session: Arc<dyn SessionStore> = store.clone();
        AuthGuard::new(session, HistoryNavigator::new(at), options)
    }

    #[test]
    fn test_no_session_redirects_to_login() {
        let store = session_with(None);
        let mut g = guard(&store, GuardOptions::default(), "/dashboard");

        let outcome = g.activate("/dashboard");
        assert_eq!(
            outcome,
            GuardOutcome::Redirected {
                to: "/login".to_string(),
                role: Role::Unknown
            }
        );
        assert_eq!(g.navigator().current(), Some("/login"));
        assert_eq!(g.navigator().entries().len(), 1);
    }

    #[test]
    fn test_no_session_on_admin_page_skips_admin_check() {
        let store = session_with(None);
        let options = GuardOptions {
            redirect_if_unauthed: "/signin".to_string(),
            ..GuardOptions::admin()
        };
        let mut g = guard(&store, options, "/admin");

        let outcome = g.activate("/admin");
        assert_eq!(
            outcome,
            GuardOutcome::Redirected {
                to: "/signin".to_string(),
                role: Role::Unknown
            }
        );
        assert_eq!(g.navigator().current(), Some("/signin"));
    }

    #[test]
    fn test_user_on_admin_page_is_redirected() {
        let store = session_with(Some(token_with(json!({"role": "user"}))));
        let options = GuardOptions {
            redirect_non_admin_to: "/home".to_string(),
            ..GuardOptions::admin()
        };
        let mut g = guard(&store, options, "/admin");

        let outcome = g.activate("/admin");
        assert_eq!(
            outcome,
            GuardOutcome::Redirected {
                to: "/home".to_string(),
                role: Role::User
            }
        );
        assert_eq!(g.role(), Role::User);
        assert_eq!(g.navigator().current(), Some("/home"));
    }

    #[test]
    fn test_admin_on_admin_page_is_allowed() {
        let store = session_with(Some(token_with(json!({"isAdmin": true}))));
        let mut g = guard(&store, GuardOptions::admin(), "/admin");

        assert_eq!(g.activate("/admin"), GuardOutcome::Allowed { role: Role::Admin });
        assert_eq!(g.navigator().current(), Some("/admin"));
    }

    #[test]
    fn test_evaluation_refreshes_stored_role() {
        let store = session_with(Some(token_with(json!({"roles": ["ROLE_ADMIN"]}))));
        assert_eq!(store.get_item(ROLE_KEY).as_deref(), Some("unknown"));

        let mut g = guard(&store, GuardOptions::default(), "/dashboard");
        g.activate("/dashboard");
        assert_eq!(store.stored_role(), Role::Admin);
    }

    #[test]
    fn test_undecodable_credential_is_allowed_as_unknown() {
        let store = session_with(Some("garbage".to_string()));
        let mut g = guard(&store, GuardOptions::default(), "/dashboard");

        assert_eq!(g.activate("/dashboard"), GuardOutcome::Allowed { role: Role::Unknown });
        assert_eq!(store.read().as_deref(), Some("garbage"));
    }

    #[test]
    fn test_same_path_is_evaluated_once() {
        let store = session_with(Some(token_with(json!({"role": "user"}))));
        let mut g = guard(&store, GuardOptions::default(), "/dashboard");

        assert!(g.activate("/dashboard").is_allowed());
        store.clear();
        // Same path: cached decision, session not re-read.
        assert!(g.activate("/dashboard").is_allowed());
        // Path change: re-evaluated and redirected.
        assert!(!g.activate("/services").is_allowed());
    }

    #[test]
    fn test_path_change_invalidates_tickets() {
        let store = session_with(Some(token_with(json!({"role": "user"}))));
        let mut g = guard(&store, GuardOptions::default(), "/dashboard");
        g.activate("/dashboard");

        let ticket = g.ticket();
        assert!(ticket.is_current());
        g.activate("/services");
        assert!(!ticket.is_current());
        assert!(g.ticket().is_current());
    }

    #[test]
    fn test_logout_clears_session_and_redirects() {
        let store = session_with(Some(token_with(json!({"role": "user"}))));
        let mut g = guard(&store, GuardOptions::default(), "/dashboard");
        g.activate("/dashboard");
        let ticket = g.ticket();

        g.logout();
        assert_eq!(store.read(), None);
        assert_eq!(store.get_item(ROLE_KEY), None);
        assert_eq!(g.role(), Role::Unknown);
        assert_eq!(g.navigator().current(), Some("/login"));
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_unmount_and_drop_invalidate_tickets() {
        let store = session_with(Some(token_with(json!({"role": "user"}))));
        let mut g = guard(&store, GuardOptions::default(), "/dashboard");
        g.activate("/dashboard");

        let before_unmount = g.ticket();
        g.unmount();
        assert!(!before_unmount.is_current());

        let before_drop = g.ticket();
        drop(g);
        assert!(!before_drop.is_current());
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::with_api_url("http://backend.test");
        config.login_path = "/auth".to_string();
        let options = GuardOptions::from_config(&config, true);
        assert!(options.require_admin);
        assert_eq!(options.redirect_if_unauthed, "/auth");
        assert_eq!(options.redirect_non_admin_to, "/dashboard");
    }
}
