//! The interactive console
//!
//! Owns the session store and the configured service strategies, reads
//! lines, dispatches commands. Every protected screen goes through the
//! route guard first; resource errors print as notices and the loop
//! keeps going.

use std::sync::Arc;

use auth::application::guard::{self, POST_LOGIN_ROUTE, RouteDecision};
use auth::{
    ApplicationAlias, AuthGateway, Credentials, RestoreSessionUseCase, SessionStore,
    SignInUseCase, SignOutUseCase,
};
use directory::application::Directory;
use directory::{
    Application, ApplicationDraft, ApplicationService, MenuDraft, MenuNode, MenuService, Role,
    RoleDraft, RoleService, UserDraft, UserRecord, UserService,
};
use kernel::id::{ApplicationId, MenuId, RoleId, UserId};
use platform::storage::keys;
use platform::{ApiClient, ConsoleConfig, LocalStore};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::command::{self, Action, Command, Resource};
use crate::render;

pub struct Console<D, G>
where
    D: ApplicationService + UserService + RoleService + MenuService + Send + Sync,
    G: AuthGateway + Send + Sync,
{
    config: ConsoleConfig,
    client: Arc<ApiClient>,
    local: LocalStore,
    store: SessionStore,
    directory: Directory<D>,
    sign_in: SignInUseCase<G>,
    sign_out: SignOutUseCase,
}

impl<D, G> Console<D, G>
where
    D: ApplicationService + UserService + RoleService + MenuService + Send + Sync,
    G: AuthGateway + Send + Sync,
{
    pub fn new(
        config: ConsoleConfig,
        client: Arc<ApiClient>,
        local: LocalStore,
        services: Arc<D>,
        gateway: Arc<G>,
    ) -> Self {
        let sign_in = SignInUseCase::new(gateway, Arc::clone(&client), local.clone());
        let sign_out = SignOutUseCase::new(Arc::clone(&client), local.clone());

        Self {
            config,
            client: Arc::clone(&client),
            local,
            store: SessionStore::new(),
            directory: Directory::new(services),
            sign_in,
            sign_out,
        }
    }

    /// Rehydrate the stored session, then read and dispatch until quit.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        RestoreSessionUseCase::new(Arc::clone(&self.client), self.local.clone())
            .execute(&mut self.store);

        println!("{}", self.config.display_name());
        match self.store.session() {
            Some(session) => println!("Signed in as {}", session.user.username),
            None => println!("Not signed in; try \"login\" or \"help\""),
        }

        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(&line);
                    match command::parse(&line) {
                        Ok(Some(Command::Quit)) => break,
                        Ok(Some(command)) => self.dispatch(command).await,
                        Ok(None) => {}
                        Err(usage) => println!("{usage}"),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) {
        match command {
            Command::Help => println!("{}", command::HELP),
            Command::Quit => unreachable!("handled by the loop"),
            Command::Login {
                username,
                password,
                alias,
            } => self.login(&username, &password, alias.as_deref()).await,
            Command::Logout => {
                if let Err(e) = self.sign_out.execute(&mut self.store) {
                    println!("error: {e}");
                } else {
                    println!("Signed out");
                }
            }
            Command::Whoami => self.whoami(),
            Command::Theme => self.toggle_theme(),
            Command::Dashboard => {
                if self.guard(POST_LOGIN_ROUTE) {
                    match self.directory.summary().await {
                        Ok(summary) => println!("{}", render::summary(&summary)),
                        Err(e) => println!("error: {e}"),
                    }
                }
            }
            Command::Menu => {
                if self.guard("/menu") {
                    // Guard passed, so a session is present
                    let Some(session) = self.store.session() else {
                        return;
                    };
                    match session.menu_tree() {
                        Ok(tree) => print!("{}", render::tree(&tree)),
                        Err(e) => println!("error: {e}"),
                    }
                }
            }
            Command::Resource(resource, action) => {
                if self.guard(resource.route()) {
                    self.resource(resource, action).await;
                }
            }
        }
    }

    /// Apply the route guard; prints the redirect notice when it denies.
    fn guard(&self, destination: &str) -> bool {
        match guard::decide(&self.store, destination) {
            RouteDecision::Allow => true,
            RouteDecision::Loading => {
                println!("Session still loading, try again");
                false
            }
            RouteDecision::RedirectToLogin { from } => {
                println!("Not signed in (wanted {from}); use \"login\" first");
                false
            }
        }
    }

    async fn login(&mut self, username: &str, password: &str, alias: Option<&str>) {
        let alias = alias.unwrap_or(&self.config.app_alias);
        let credentials = ApplicationAlias::new(alias)
            .and_then(|alias| Credentials::new(username, password, alias));
        let credentials = match credentials {
            Ok(c) => c,
            Err(e) => {
                println!("{e}");
                return;
            }
        };

        match self.sign_in.execute(&mut self.store, &credentials).await {
            Ok(()) => {
                // Guaranteed present right after a successful sign-in
                if let Some(session) = self.store.session() {
                    println!(
                        "Signed in as {} ({})",
                        session.user.username, session.application.name
                    );
                }
                println!("-> {POST_LOGIN_ROUTE}");
            }
            Err(_) => {
                if let Some(message) = self.store.error() {
                    println!("{message}");
                }
            }
        }
    }

    fn whoami(&self) {
        match self.store.session() {
            Some(session) => {
                println!("{} <{}>", session.user.full_name, session.user.email);
                println!("application: {} ({})", session.application.name, session.application.alias);
                for role in &session.roles {
                    println!("role: {} - {}", role.name, role.description);
                }
            }
            None => println!("Not signed in"),
        }
    }

    /// Flip the persisted dark-mode preference.
    fn toggle_theme(&self) {
        let current = self
            .local
            .get(keys::DARK_MODE)
            .ok()
            .flatten()
            .map(|v| v == "true")
            .unwrap_or(false);
        let next = !current;
        match self.local.set(keys::DARK_MODE, if next { "true" } else { "false" }) {
            Ok(()) => println!("Dark mode: {}", if next { "on" } else { "off" }),
            Err(e) => println!("error: {e}"),
        }
    }

    async fn resource(&self, resource: Resource, action: Action) {
        let outcome = match resource {
            Resource::Applications => self.applications(action).await,
            Resource::Users => self.users(action).await,
            Resource::Roles => self.roles(action).await,
            Resource::Menus => self.menus(action).await,
        };
        if let Err(message) = outcome {
            println!("{message}");
        }
    }

    async fn applications(&self, action: Action) -> Result<(), String> {
        let services = self.directory.services();
        match action {
            Action::List { .. } => {
                let items = ApplicationService::list(services)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("{}", render::applications(&items));
            }
            Action::Show { id } => {
                let app = ApplicationService::get(services, &ApplicationId::from_raw(id))
                    .await
                    .map_err(|e| e.to_string())?;
                println!("{}", render::applications(std::slice::from_ref(&app)));
            }
            Action::Create { args } => {
                let [alias, name @ ..] = args.as_slice() else {
                    return Err("usage: applications create <alias> <name...>".to_string());
                };
                if name.is_empty() {
                    return Err("usage: applications create <alias> <name...>".to_string());
                }
                let draft = ApplicationDraft {
                    alias: alias.clone(),
                    name: name.join(" "),
                    description: String::new(),
                    is_active: true,
                };
                let created = ApplicationService::create(services, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("created {}", created.id);
            }
            Action::Update { id, field, value } => {
                let id = ApplicationId::from_raw(id);
                let current = ApplicationService::get(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                let draft = application_draft(&current, &field, &value)?;
                ApplicationService::update(services, &id, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("updated {id}");
            }
            Action::Delete { id } => {
                let id = ApplicationId::from_raw(id);
                ApplicationService::delete(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("deleted {id}");
            }
            _ => return Err("not supported for applications".to_string()),
        }
        Ok(())
    }

    async fn users(&self, action: Action) -> Result<(), String> {
        let services = self.directory.services();
        match action {
            Action::List { application: None } => {
                let items = UserService::list(services).await.map_err(|e| e.to_string())?;
                println!("{}", render::users(&items));
            }
            Action::List {
                application: Some(app),
            } => {
                let items =
                    UserService::list_by_application(services, &ApplicationId::from_raw(app))
                        .await
                        .map_err(|e| e.to_string())?;
                println!("{}", render::users(&items));
            }
            Action::Show { id } => {
                let user = UserService::get(services, &UserId::from_raw(id))
                    .await
                    .map_err(|e| e.to_string())?;
                println!("{}", render::users(std::slice::from_ref(&user)));
            }
            Action::Create { args } => {
                let [username, password, email, full_name @ ..] = args.as_slice() else {
                    return Err(
                        "usage: users create <username> <password> <email> <fullName...>"
                            .to_string(),
                    );
                };
                let draft = UserDraft {
                    username: username.clone(),
                    full_name: full_name.join(" "),
                    email: email.clone(),
                    is_active: true,
                    password: Some(password.clone()),
                    roles: Vec::new(),
                };
                let created = UserService::create(services, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("created {}", created.id);
            }
            Action::Update { id, field, value } => {
                let id = UserId::from_raw(id);
                let current = UserService::get(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                let draft = user_draft(&current, &field, &value)?;
                UserService::update(services, &id, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("updated {id}");
            }
            Action::Delete { id } => {
                let id = UserId::from_raw(id);
                UserService::delete(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("deleted {id}");
            }
            _ => return Err("not supported for users".to_string()),
        }
        Ok(())
    }

    async fn roles(&self, action: Action) -> Result<(), String> {
        let services = self.directory.services();
        match action {
            Action::List { application: None } => {
                let items = RoleService::list(services).await.map_err(|e| e.to_string())?;
                println!("{}", render::roles(&items));
            }
            Action::List {
                application: Some(app),
            } => {
                let items =
                    RoleService::list_by_application(services, &ApplicationId::from_raw(app))
                        .await
                        .map_err(|e| e.to_string())?;
                println!("{}", render::roles(&items));
            }
            Action::Show { id } => {
                let role = RoleService::get(services, &RoleId::from_raw(id))
                    .await
                    .map_err(|e| e.to_string())?;
                println!("{}", render::roles(std::slice::from_ref(&role)));
            }
            Action::Create { args } => {
                let [application, name, description @ ..] = args.as_slice() else {
                    return Err(
                        "usage: roles create <applicationId> <name> [description...]".to_string()
                    );
                };
                let draft = RoleDraft {
                    name: name.clone(),
                    description: description.join(" "),
                    application: Some(ApplicationId::from_raw(application.clone())),
                    is_active: true,
                };
                let created = RoleService::create(services, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("created {}", created.id);
            }
            Action::Update { id, field, value } => {
                let id = RoleId::from_raw(id);
                let current = RoleService::get(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                let draft = role_draft(&current, &field, &value)?;
                RoleService::update(services, &id, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("updated {id}");
            }
            Action::Delete { id } => {
                let id = RoleId::from_raw(id);
                RoleService::delete(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("deleted {id}");
            }
            Action::Assign { id, menus } => {
                let id = RoleId::from_raw(id);
                let menus: Vec<MenuId> = menus.into_iter().map(MenuId::from_raw).collect();
                let updated = RoleService::assign_menus(services, &id, &menus)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("{}", render::roles(std::slice::from_ref(&updated)));
            }
            _ => return Err("not supported for roles".to_string()),
        }
        Ok(())
    }

    async fn menus(&self, action: Action) -> Result<(), String> {
        let services = self.directory.services();
        match action {
            Action::List { application: None } => {
                let items = MenuService::list(services).await.map_err(|e| e.to_string())?;
                println!("{}", render::menus(&items));
            }
            Action::List {
                application: Some(app),
            } => {
                let items =
                    MenuService::list_by_application(services, &ApplicationId::from_raw(app))
                        .await
                        .map_err(|e| e.to_string())?;
                println!("{}", render::menus(&items));
            }
            Action::Show { id } => {
                let node = MenuService::get(services, &MenuId::from_raw(id))
                    .await
                    .map_err(|e| e.to_string())?;
                println!("{}", render::menus(std::slice::from_ref(&node)));
            }
            Action::Create { args } => {
                let [application, label, path, icon, order, rest @ ..] = args.as_slice() else {
                    return Err(
                        "usage: menus create <applicationId> <label> <path|-> <icon> <order> [parentId]"
                            .to_string(),
                    );
                };
                let order: i32 = order
                    .parse()
                    .map_err(|_| format!("order must be a number, got {order:?}"))?;
                let draft = MenuDraft {
                    application: ApplicationId::from_raw(application.clone()),
                    label: label.clone(),
                    path: (path != "-").then(|| path.clone()),
                    icon: icon.clone(),
                    order,
                    parent: rest.first().map(MenuId::from_raw),
                    is_active: true,
                };
                let created = MenuService::create(services, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("created {}", created.id);
            }
            Action::Update { id, field, value } => {
                let id = MenuId::from_raw(id);
                let current = MenuService::get(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                let draft = menu_draft(&current, &field, &value)?;
                MenuService::update(services, &id, &draft)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("updated {id}");
            }
            Action::Delete { id } => {
                let id = MenuId::from_raw(id);
                MenuService::delete(services, &id)
                    .await
                    .map_err(|e| e.to_string())?;
                println!("deleted {id}");
            }
            Action::Tree { application } => {
                let tree =
                    MenuService::hierarchy(services, &ApplicationId::from_raw(application))
                        .await
                        .map_err(|e| e.to_string())?;
                print!("{}", render::tree(&tree));
            }
            _ => return Err("not supported for menus".to_string()),
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------
// Field edits: current record + one changed field -> update payload
// ----------------------------------------------------------------------

fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected true or false, got {other:?}")),
    }
}

fn application_draft(
    current: &Application,
    field: &str,
    value: &str,
) -> Result<ApplicationDraft, String> {
    let mut draft = ApplicationDraft {
        alias: current.alias.clone(),
        name: current.name.clone(),
        description: current.description.clone(),
        is_active: current.is_active,
    };
    match field {
        "alias" => draft.alias = value.to_string(),
        "name" => draft.name = value.to_string(),
        "description" => draft.description = value.to_string(),
        "active" => draft.is_active = parse_bool(value)?,
        other => return Err(format!("unknown field {other:?} (alias|name|description|active)")),
    }
    Ok(draft)
}

fn user_draft(current: &UserRecord, field: &str, value: &str) -> Result<UserDraft, String> {
    let mut draft = UserDraft {
        username: current.username.clone(),
        full_name: current.full_name.clone(),
        email: current.email.clone(),
        is_active: current.is_active,
        password: None,
        roles: current.roles.clone(),
    };
    match field {
        "username" => draft.username = value.to_string(),
        "fullName" => draft.full_name = value.to_string(),
        "email" => draft.email = value.to_string(),
        "password" => draft.password = Some(value.to_string()),
        "active" => draft.is_active = parse_bool(value)?,
        other => {
            return Err(format!(
                "unknown field {other:?} (username|fullName|email|password|active)"
            ));
        }
    }
    Ok(draft)
}

fn role_draft(current: &Role, field: &str, value: &str) -> Result<RoleDraft, String> {
    let mut draft = RoleDraft {
        name: current.name.clone(),
        description: current.description.clone(),
        application: current.application.clone(),
        is_active: current.is_active,
    };
    match field {
        "name" => draft.name = value.to_string(),
        "description" => draft.description = value.to_string(),
        "active" => draft.is_active = parse_bool(value)?,
        other => return Err(format!("unknown field {other:?} (name|description|active)")),
    }
    Ok(draft)
}

fn menu_draft(current: &MenuNode, field: &str, value: &str) -> Result<MenuDraft, String> {
    let mut draft = MenuDraft {
        application: current.application.clone(),
        label: current.label.clone(),
        path: current.path.clone(),
        icon: current.icon.clone(),
        order: current.order,
        parent: current.parent.clone(),
        is_active: current.is_active,
    };
    match field {
        "label" => draft.label = value.to_string(),
        "path" => draft.path = (value != "-").then(|| value.to_string()),
        "icon" => draft.icon = value.to_string(),
        "order" => {
            draft.order = value
                .parse()
                .map_err(|_| format!("order must be a number, got {value:?}"))?;
        }
        "parent" => draft.parent = (value != "-").then(|| MenuId::from_raw(value)),
        "active" => draft.is_active = parse_bool(value)?,
        other => {
            return Err(format!(
                "unknown field {other:?} (label|path|icon|order|parent|active)"
            ));
        }
    }
    Ok(draft)
}
