//! Terminal rendering
//!
//! comfy-table for entity listings, indented text for the menu tree.

use comfy_table::{ContentArrangement, Table};
use directory::application::DashboardSummary;
use directory::{Application, MenuNode, MenuTree, MenuTreeNode, Role, UserRecord};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn active(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

pub fn applications(items: &[Application]) -> String {
    let mut t = table(&["id", "alias", "name", "description", "active"]);
    for app in items {
        t.add_row([
            app.id.to_string(),
            app.alias.clone(),
            app.name.clone(),
            app.description.clone(),
            active(app.is_active),
        ]);
    }
    t.to_string()
}

pub fn users(items: &[UserRecord]) -> String {
    let mut t = table(&["id", "username", "full name", "email", "active", "roles"]);
    for user in items {
        let roles = user
            .roles
            .iter()
            .map(|a| format!("{}: {}", a.application, a.roles.len()))
            .collect::<Vec<_>>()
            .join(", ");
        t.add_row([
            user.id.to_string(),
            user.username.clone(),
            user.full_name.clone(),
            user.email.clone(),
            active(user.is_active),
            roles,
        ]);
    }
    t.to_string()
}

pub fn roles(items: &[Role]) -> String {
    let mut t = table(&["id", "name", "description", "application", "menus", "active"]);
    for role in items {
        let application = role
            .application
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        t.add_row([
            role.id.to_string(),
            role.name.clone(),
            role.description.clone(),
            application,
            role.menus.len().to_string(),
            active(role.is_active),
        ]);
    }
    t.to_string()
}

pub fn menus(items: &[MenuNode]) -> String {
    let mut t = table(&[
        "id",
        "application",
        "label",
        "path",
        "icon",
        "order",
        "parent",
        "active",
    ]);
    for node in items {
        t.add_row([
            node.id.to_string(),
            node.application.to_string(),
            node.label.clone(),
            node.path.clone().unwrap_or_else(|| "-".to_string()),
            node.icon.clone(),
            node.order.to_string(),
            node.parent
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            active(node.is_active),
        ]);
    }
    t.to_string()
}

pub fn summary(summary: &DashboardSummary) -> String {
    let mut t = table(&["applications", "users", "roles", "menus"]);
    t.add_row([
        summary.applications.to_string(),
        summary.users.to_string(),
        summary.roles.to_string(),
        summary.menus.to_string(),
    ]);
    t.to_string()
}

/// The sidebar hierarchy, one entry per line
pub fn tree(tree: &MenuTree) -> String {
    let mut out = String::new();
    for root in &tree.roots {
        tree_node(root, 0, &mut out);
    }
    out
}

fn tree_node(node: &MenuTreeNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match &node.node.path {
        Some(path) => out.push_str(&format!("{indent}{}  ({path})\n", node.node.label)),
        None => out.push_str(&format!("{indent}{}\n", node.node.label)),
    }
    for child in &node.children {
        tree_node(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory::infra::dataset;
    use kernel::id::ApplicationId;

    #[test]
    fn test_tree_indents_children() {
        let flat = dataset::admin_menu(&ApplicationId::from_raw("admin-app-id"));
        let built = MenuTree::build(flat).unwrap();
        let rendered = tree(&built);

        assert!(rendered.contains("Dashboard  (/dashboard)"));
        assert!(rendered.contains("  Usuarios  (/users)"));
    }

    #[test]
    fn test_applications_table_has_all_rows() {
        let rendered = applications(&dataset::applications());
        assert!(rendered.contains("crm"));
        assert!(rendered.contains("Sistema ERP"));
    }
}
