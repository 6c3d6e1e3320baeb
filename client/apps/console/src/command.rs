//! REPL command parsing
//!
//! Plain whitespace splitting; trailing free-text fields (names,
//! descriptions) swallow the rest of the line.

/// Resources the console manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Applications,
    Users,
    Roles,
    Menus,
}

impl Resource {
    /// Screen path, as the route guard sees it
    pub fn route(&self) -> &'static str {
        match self {
            Resource::Applications => "/applications",
            Resource::Users => "/users",
            Resource::Roles => "/roles",
            Resource::Menus => "/menus",
        }
    }
}

/// Action on a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `list [applicationId]`
    List { application: Option<String> },
    /// `show <id>`
    Show { id: String },
    /// `create <args...>`, shape depends on the resource
    Create { args: Vec<String> },
    /// `update <id> <field> <value...>`
    Update {
        id: String,
        field: String,
        value: String,
    },
    /// `delete <id>`
    Delete { id: String },
    /// `assign <roleId> <menuId,menuId,...>` (roles only)
    Assign { id: String, menus: Vec<String> },
    /// `tree <applicationId>` (menus only)
    Tree { application: String },
}

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Login {
        username: String,
        password: String,
        alias: Option<String>,
    },
    Logout,
    Whoami,
    Dashboard,
    Menu,
    Theme,
    Resource(Resource, Action),
}

/// Parse one input line. `Ok(None)` means a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match head {
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "logout" => Command::Logout,
        "whoami" => Command::Whoami,
        "dashboard" => Command::Dashboard,
        "menu" => Command::Menu,
        "theme" => Command::Theme,
        "login" => match rest {
            [username, password] => Command::Login {
                username: username.to_string(),
                password: password.to_string(),
                alias: None,
            },
            [username, password, alias] => Command::Login {
                username: username.to_string(),
                password: password.to_string(),
                alias: Some(alias.to_string()),
            },
            _ => return Err("usage: login <username> <password> [alias]".to_string()),
        },
        "applications" | "apps" => {
            Command::Resource(Resource::Applications, parse_action(Resource::Applications, rest)?)
        }
        "users" => Command::Resource(Resource::Users, parse_action(Resource::Users, rest)?),
        "roles" => Command::Resource(Resource::Roles, parse_action(Resource::Roles, rest)?),
        "menus" => Command::Resource(Resource::Menus, parse_action(Resource::Menus, rest)?),
        other => return Err(format!("unknown command {other:?}, try \"help\"")),
    };

    Ok(Some(command))
}

fn parse_action(resource: Resource, words: &[&str]) -> Result<Action, String> {
    let usage = || format!("usage: {} list|show|create|update|delete ...", name(resource));

    let Some((&verb, rest)) = words.split_first() else {
        return Err(usage());
    };

    match verb {
        "list" => match rest {
            [] => Ok(Action::List { application: None }),
            [app] => Ok(Action::List {
                application: Some(app.to_string()),
            }),
            _ => Err(format!("usage: {} list [applicationId]", name(resource))),
        },
        "show" => match rest {
            [id] => Ok(Action::Show { id: id.to_string() }),
            _ => Err(format!("usage: {} show <id>", name(resource))),
        },
        "create" => {
            if rest.is_empty() {
                return Err(create_usage(resource));
            }
            Ok(Action::Create {
                args: rest.iter().map(|s| s.to_string()).collect(),
            })
        }
        "update" => match rest {
            [id, field, value @ ..] if !value.is_empty() => Ok(Action::Update {
                id: id.to_string(),
                field: field.to_string(),
                value: value.join(" "),
            }),
            _ => Err(format!(
                "usage: {} update <id> <field> <value>",
                name(resource)
            )),
        },
        "delete" => match rest {
            [id] => Ok(Action::Delete { id: id.to_string() }),
            _ => Err(format!("usage: {} delete <id>", name(resource))),
        },
        "assign" if resource == Resource::Roles => match rest {
            [id, menus] => Ok(Action::Assign {
                id: id.to_string(),
                menus: menus
                    .split(',')
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect(),
            }),
            _ => Err("usage: roles assign <roleId> <menuId,menuId,...>".to_string()),
        },
        "tree" if resource == Resource::Menus => match rest {
            [app] => Ok(Action::Tree {
                application: app.to_string(),
            }),
            _ => Err("usage: menus tree <applicationId>".to_string()),
        },
        _ => Err(usage()),
    }
}

fn name(resource: Resource) -> &'static str {
    match resource {
        Resource::Applications => "applications",
        Resource::Users => "users",
        Resource::Roles => "roles",
        Resource::Menus => "menus",
    }
}

fn create_usage(resource: Resource) -> String {
    match resource {
        Resource::Applications => "usage: applications create <alias> <name...>",
        Resource::Users => "usage: users create <username> <password> <email> <fullName...>",
        Resource::Roles => "usage: roles create <applicationId> <name> [description...]",
        Resource::Menus => {
            "usage: menus create <applicationId> <label> <path|-> <icon> <order> [parentId]"
        }
    }
    .to_string()
}

pub const HELP: &str = "\
Session
  login <username> <password> [alias]   sign in (alias defaults to the configured one)
  logout                                sign out and clear the stored session
  whoami                                show the signed-in user
  theme                                 toggle dark mode

Screens
  dashboard                             entity counts
  menu                                  the session's menu tree

Resources (applications | users | roles | menus)
  <resource> list [applicationId]
  <resource> show <id>
  <resource> create ...                 run without args for the shape
  <resource> update <id> <field> <value>
  <resource> delete <id>
  roles assign <roleId> <menuId,menuId,...>
  menus tree <applicationId>

quit | exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_login_with_and_without_alias() {
        assert_eq!(
            parse("login admin admin123").unwrap().unwrap(),
            Command::Login {
                username: "admin".to_string(),
                password: "admin123".to_string(),
                alias: None,
            }
        );
        assert!(matches!(
            parse("login admin admin123 crm").unwrap().unwrap(),
            Command::Login { alias: Some(a), .. } if a == "crm"
        ));
        assert!(parse("login admin").is_err());
    }

    #[test]
    fn test_resource_actions() {
        assert_eq!(
            parse("apps list").unwrap().unwrap(),
            Command::Resource(Resource::Applications, Action::List { application: None })
        );
        assert_eq!(
            parse("users update 2 email juan@empresa.com").unwrap().unwrap(),
            Command::Resource(
                Resource::Users,
                Action::Update {
                    id: "2".to_string(),
                    field: "email".to_string(),
                    value: "juan@empresa.com".to_string(),
                }
            )
        );
        assert_eq!(
            parse("roles assign admin-role-2 1,4").unwrap().unwrap(),
            Command::Resource(
                Resource::Roles,
                Action::Assign {
                    id: "admin-role-2".to_string(),
                    menus: vec!["1".to_string(), "4".to_string()],
                }
            )
        );
    }

    #[test]
    fn test_update_value_swallows_the_rest() {
        let Command::Resource(_, Action::Update { value, .. }) =
            parse("applications update 1 name Panel Administrativo Central")
                .unwrap()
                .unwrap()
        else {
            panic!("expected update");
        };
        assert_eq!(value, "Panel Administrativo Central");
    }

    #[test]
    fn test_assign_outside_roles_rejected() {
        assert!(parse("users assign 1 2,3").is_err());
        assert!(parse("menus tree 1").is_ok());
        assert!(parse("roles tree 1").is_err());
    }
}
