//! Application state management.

use std::collections::BTreeSet;

use qc_navigation::{
    extract_label_text, find_top_level_parent_keys, Breadcrumb, MenuNode, MenuTree, PageRef,
    PathIndex, RouteEntry,
};
use shared_types::{PermissionSet, INDEX_ROUTE, ROOT_ROUTE};
use tracing::{debug, info, warn};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Menu and page view.
    #[default]
    Console,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Whether a menu row can be opened or navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Navigable page.
    Leaf,
    /// Group, open or closed.
    Branch {
        /// Children currently shown.
        expanded: bool,
    },
}

/// One line of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub key: String,
    pub label: String,
    pub depth: usize,
    pub kind: RowKind,
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Error message to display (if any).
    pub error_message: Option<String>,
    /// Last successful permission refresh.
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,
    /// Session summary shown in the header.
    pub session_label: String,
    menu: MenuTree,
    index: PathIndex,
    permissions: PermissionSet,
    visible: Vec<MenuNode>,
    routes: Vec<RouteEntry>,
    active_route: String,
    expanded: BTreeSet<String>,
    selected: usize,
    refresh_requested: bool,
    logout_requested: bool,
}

impl App {
    /// Create the console over `menu`, opening `initial_route` if allowed.
    pub fn new(menu: MenuTree, permissions: PermissionSet, initial_route: &str) -> Self {
        let index = menu.path_index();
        let mut app = Self {
            state: AppState::Console,
            error_message: None,
            last_refresh: None,
            session_label: "signed out".to_string(),
            menu,
            index,
            permissions: PermissionSet::new(),
            visible: Vec::new(),
            routes: Vec::new(),
            active_route: INDEX_ROUTE.to_string(),
            expanded: BTreeSet::new(),
            selected: 0,
            refresh_requested: false,
            logout_requested: false,
        };
        app.set_permissions(permissions);
        app.navigate(initial_route);
        app
    }

    /// Re-project the menu for a new permission set.
    ///
    /// If the active page is no longer visible the console falls back to
    /// the landing page.
    pub fn set_permissions(&mut self, permissions: PermissionSet) {
        self.visible = self.menu.filter_menu(&permissions);
        self.routes = self.menu.filter_routes(&permissions);
        self.permissions = permissions;
        debug!(
            permissions = self.permissions.len(),
            routes = self.routes.len(),
            "Menu projected"
        );

        if !self.is_navigable(&self.active_route) {
            info!(route = %self.active_route, "Active page no longer visible");
            self.active_route = INDEX_ROUTE.to_string();
        }
        self.expand_for_active();
        self.select_active();
    }

    /// Open `route`, following redirects. Returns false when the route is
    /// unknown or not visible under the current permissions.
    ///
    /// Group redirects come from the full menu and may point at a hidden
    /// page; the group's first visible page is opened instead.
    pub fn navigate(&mut self, route: &str) -> bool {
        let target = if route == ROOT_ROUTE {
            INDEX_ROUTE
        } else {
            route
        };
        if self.index.get(target).is_none() {
            warn!(route, "Unknown route");
            self.error_message = Some(format!("Unknown route {}", route));
            return false;
        }

        let mut resolved = self.index.resolve(target).unwrap_or(target).to_string();
        if !self.is_navigable(&resolved) {
            if let Some(first) = self.first_visible_under(target) {
                resolved = first;
            }
        }

        if !self.is_navigable(&resolved) {
            warn!(route, "Navigation refused");
            self.error_message = Some(format!("No access to {}", route));
            return false;
        }

        info!(route = %resolved, "Navigated");
        self.active_route = resolved;
        self.expand_for_active();
        self.select_active();
        true
    }

    fn first_visible_under(&self, group: &str) -> Option<String> {
        self.routes
            .iter()
            .find(|entry| {
                self.index
                    .breadcrumbs(&entry.path)
                    .iter()
                    .any(|crumb| crumb.key == group)
            })
            .map(|entry| entry.path.clone())
    }

    /// Whether `route` mounts a visible page.
    pub fn is_navigable(&self, route: &str) -> bool {
        self.routes.iter().any(|entry| entry.path == route)
    }

    fn expand_for_active(&mut self) {
        self.expanded
            .extend(find_top_level_parent_keys(&self.visible, &self.active_route));
    }

    fn select_active(&mut self) {
        let rows = self.rows();
        if let Some(position) = rows.iter().position(|row| row.key == self.active_route) {
            self.selected = position;
        } else if self.selected >= rows.len() {
            self.selected = rows.len().saturating_sub(1);
        }
    }

    /// Visible menu flattened for display, honouring expanded groups.
    pub fn rows(&self) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        push_rows(&self.visible, 0, &self.expanded, &mut rows);
        rows
    }

    /// Index of the highlighted row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Toggle the selected group or open the selected page.
    pub fn activate_selected(&mut self) {
        let Some(row) = self.rows().into_iter().nth(self.selected) else {
            return;
        };
        match row.kind {
            RowKind::Branch { expanded: true } => {
                self.expanded.remove(&row.key);
            }
            RowKind::Branch { expanded: false } => {
                self.expanded.insert(row.key);
            }
            RowKind::Leaf => {
                self.navigate(&row.key);
            }
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: char) {
        match self.state {
            AppState::Console => self.handle_console_key(key),
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Console;
            }
            AppState::Quit => {}
        }
    }

    fn handle_console_key(&mut self, key: char) {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            'r' | 'R' => self.refresh_requested = true,
            'l' | 'L' => self.logout_requested = true,
            'h' | 'H' => {
                self.navigate(INDEX_ROUTE);
            }
            _ => {}
        }
    }

    /// Consume a pending refresh request.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    /// Consume a pending sign-out request.
    pub fn take_logout_request(&mut self) -> bool {
        std::mem::take(&mut self.logout_requested)
    }

    /// Show the most recent of `messages`.
    pub fn apply_notifications(&mut self, messages: Vec<String>) {
        if let Some(last) = messages.into_iter().last() {
            self.error_message = Some(last);
        }
    }

    /// Follow forced navigation, in order.
    pub fn apply_navigation(&mut self, routes: Vec<String>) {
        for route in routes {
            self.navigate(&route);
        }
    }

    /// Route of the open page.
    pub fn active_route(&self) -> &str {
        &self.active_route
    }

    /// Page mounted on the active route.
    pub fn active_page(&self) -> Option<&PageRef> {
        self.routes
            .iter()
            .find(|entry| entry.path == self.active_route)
            .map(|entry| &entry.page)
    }

    /// Trail from the top-level item to the active page.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.index.breadcrumbs(&self.active_route)
    }

    /// Permissions the menu is projected for.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Visible pages.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

fn push_rows(
    nodes: &[MenuNode],
    depth: usize,
    expanded: &BTreeSet<String>,
    rows: &mut Vec<MenuRow>,
) {
    for node in nodes {
        let label = extract_label_text(node.label());
        match node.children() {
            Some(children) => {
                let open = expanded.contains(node.key());
                rows.push(MenuRow {
                    key: node.key().to_string(),
                    label,
                    depth,
                    kind: RowKind::Branch { expanded: open },
                });
                if open {
                    push_rows(children, depth + 1, expanded, rows);
                }
            }
            None => rows.push(MenuRow {
                key: node.key().to_string(),
                label,
                depth,
                kind: RowKind::Leaf,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(perms: &[u32], route: &str) -> App {
        App::new(
            MenuTree::console_default(),
            perms.iter().copied().collect(),
            route,
        )
    }

    fn keys(rows: &[MenuRow]) -> Vec<&str> {
        rows.iter().map(|row| row.key.as_str()).collect()
    }

    #[test]
    fn test_guest_sees_landing_page_only() {
        let app = app(&[], "/system/role");
        assert_eq!(app.active_route(), "/index");
        assert_eq!(keys(&app.rows()), vec!["/index"]);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_initial_route_expands_its_group() {
        let app = app(&[3, 5], "/system/setting");
        assert_eq!(app.active_route(), "/system/setting");
        assert_eq!(
            keys(&app.rows()),
            vec!["/index", "/system", "/system/role", "/system/setting"]
        );
        assert_eq!(app.rows()[app.selected()].key, "/system/setting");
        assert_eq!(app.active_page().map(PageRef::as_str), Some("Setting"));
    }

    #[test]
    fn test_branch_route_redirects_to_first_leaf() {
        let mut app = app(&[1, 2], "/index");
        assert!(app.navigate("/user"));
        assert_eq!(app.active_route(), "/user/account");
    }

    #[test]
    fn test_group_with_hidden_redirect_opens_first_visible_page() {
        let mut app = app(&[2], "/index");
        assert!(app.navigate("/user"));
        assert_eq!(app.active_route(), "/user/organization");
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_group_without_visible_pages_refused() {
        let mut app = app(&[2], "/index");
        assert!(!app.navigate("/system"));
        assert_eq!(app.active_route(), "/index");
        assert_eq!(app.error_message.as_deref(), Some("No access to /system"));
    }

    #[test]
    fn test_unknown_route_refused() {
        let mut app = app(&[2], "/index");
        assert!(!app.navigate("/nowhere"));
        assert_eq!(app.error_message.as_deref(), Some("Unknown route /nowhere"));
    }

    #[test]
    fn test_root_route_opens_landing_page() {
        let mut app = app(&[7], "/profile");
        assert!(app.navigate("/"));
        assert_eq!(app.active_route(), "/index");
    }

    #[test]
    fn test_hidden_route_refused() {
        let mut app = app(&[2], "/index");
        assert!(!app.navigate("/data"));
        assert_eq!(app.active_route(), "/index");
        assert_eq!(app.error_message.as_deref(), Some("No access to /data"));
    }

    #[test]
    fn test_losing_permission_falls_back_to_index() {
        let mut app = app(&[6], "/data");
        assert_eq!(app.active_route(), "/data");

        app.set_permissions(PermissionSet::new());
        assert_eq!(app.active_route(), "/index");
        assert_eq!(app.routes().len(), 1);
    }

    #[test]
    fn test_breadcrumbs_follow_active_page() {
        let app = app(&[4], "/system/permission");
        let trail: Vec<_> = app.breadcrumbs().into_iter().map(|b| b.key).collect();
        assert_eq!(trail, vec!["/system", "/system/permission"]);
    }

    #[test]
    fn test_activate_toggles_group_and_opens_page() {
        let mut app = app(&[1, 2], "/index");
        assert_eq!(keys(&app.rows()), vec!["/index", "/user"]);

        app.select_next();
        app.activate_selected();
        assert_eq!(
            keys(&app.rows()),
            vec!["/index", "/user", "/user/account", "/user/organization"]
        );

        app.select_next();
        app.select_next();
        app.activate_selected();
        assert_eq!(app.active_route(), "/user/organization");

        app.select_prev();
        app.select_prev();
        app.activate_selected();
        assert_eq!(keys(&app.rows()), vec!["/index", "/user"]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app(&[6, 7], "/index");
        assert_eq!(app.rows().len(), 3);
        app.select_prev();
        assert_eq!(app.selected(), 2);
        app.select_next();
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_keys_drive_state() {
        let mut app = app(&[], "/index");
        app.handle_key('?');
        assert_eq!(app.state, AppState::Help);
        app.handle_key('x');
        assert_eq!(app.state, AppState::Console);

        app.handle_key('r');
        assert!(app.take_refresh_request());
        assert!(!app.take_refresh_request());

        app.handle_key('l');
        assert!(app.take_logout_request());

        app.handle_key('q');
        assert!(app.should_quit());
    }

    #[test]
    fn test_notifications_and_forced_navigation() {
        let mut app = app(&[7], "/profile");
        app.apply_notifications(vec!["first".into(), "Session expired".into()]);
        assert_eq!(app.error_message.as_deref(), Some("Session expired"));

        app.apply_navigation(vec!["/".into()]);
        assert_eq!(app.active_route(), "/index");
    }
}
