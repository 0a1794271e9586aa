use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::modules::auth::use_cases::current_user::handler::CurrentUserController;
use crate::modules::auth::use_cases::login::command::Credentials;
use crate::modules::auth::use_cases::login::handler::LoginController;
use crate::modules::auth::use_cases::sign_out::handler::sign_out;
use crate::modules::profiles::use_cases::list_profiles::handler::ProfileListController;
use crate::modules::profiles::use_cases::view_profile_permissions::handler::ProfilePermissionsController;
use crate::modules::users::core::user::LockedOption;
use crate::modules::users::use_cases::list_users::handler::UserListController;
use crate::shell::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "forseti_admin")]
#[command(about = "Forseti back-office from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Exchange credentials for a token and keep it for later commands
    Login { username: String, password: String },
    /// Forget the stored token
    Logout,
    /// Show who the stored token belongs to
    Whoami,
    /// List users, filtered locally
    Users {
        #[arg(long, default_value = "")]
        search: String,
        /// Profile label, e.g. "Administrateur"
        #[arg(long)]
        profile: Option<String>,
        #[arg(long, default_value = "all")]
        locked: LockedOption,
        /// Zero-based display page
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// List profiles as role cards
    Roles {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show the labelled permissions of one profile
    Permissions { profile_id: String },
}

pub async fn run(cli: Cli, state: AppState, cancel: CancellationToken) -> anyhow::Result<()> {
    match cli.command {
        Commands::Login { username, password } => {
            let mut controller = LoginController::new(state.client.clone());
            let user = controller.submit(&Credentials::new(username, password), &cancel).await?;
            println!("Connecté en tant que {}", user.name);
        }
        Commands::Logout => {
            sign_out(&state.session).await?;
            println!("Déconnecté");
        }
        Commands::Whoami => {
            let mut controller = CurrentUserController::new(state.client.clone());
            let user = controller.load(None, &cancel).await?;
            match &user.email {
                Some(email) => println!("{} <{email}>", user.display_name),
                None => println!("{}", user.display_name),
            }
        }
        Commands::Users {
            search,
            profile,
            locked,
            page,
        } => {
            let mut controller =
                UserListController::new(state.client.clone(), state.notifier.clone(), state.config.user_page_size);
            controller.load(&cancel).await?;
            controller.set_search_term(search);
            controller.set_profile_filter(profile);
            controller.set_locked_filter(locked);

            let page = controller.page(page);
            for user in &page.items {
                let mut flags = Vec::new();
                if user.locked {
                    flags.push("verrouillé");
                }
                if user.deleted {
                    flags.push("supprimé");
                }
                println!(
                    "{:>6}  {:<28} {:<32} {:<16} {}",
                    user.display_id(),
                    user.display_name,
                    user.email,
                    user.profile,
                    flags.join(", ")
                );
            }
            println!(
                "page {}/{} ({} utilisateurs{})",
                page.index + 1,
                page.page_count.max(1),
                page.total,
                if controller.has_next_page() { ", liste tronquée" } else { "" }
            );
        }
        Commands::Roles { search } => {
            let mut controller = ProfileListController::new(
                state.client.clone(),
                state.notifier.clone(),
                state.config.profile_page_size,
            );
            controller.load(&cancel).await?;
            controller.set_search_term(search);
            for card in controller.visible() {
                println!("{:<24} {:<32} {} permissions", card.id, card.name, card.permissions_count);
            }
        }
        Commands::Permissions { profile_id } => {
            let mut controller = ProfilePermissionsController::new(
                state.client.clone(),
                state.notifier.clone(),
                state.config.permission_page_size,
            );
            let profile = controller.load(&profile_id, &cancel).await?;
            println!("{}", profile.label.as_deref().unwrap_or(&profile.id));
            if profile.permissions.is_empty() {
                println!("  Aucune permission définie pour ce profil.");
            }
            for permission in &profile.permissions {
                println!("  {:<32} {}", permission.role, permission.label);
            }
        }
    }
    Ok(())
}
