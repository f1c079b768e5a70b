//! User command - look up and register users

use std::path::Path;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::NewUser;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Find a user by email or id (prints null when absent)
    Get {
        /// Email address to look up
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        email: Option<String>,
        /// User id to look up
        #[arg(long)]
        id: Option<i32>,
    },
    /// Register a user (password should already be hashed)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

pub async fn run_user(args: UserArgs, config: Option<&Path>) -> Result<()> {
    let db = connect(config).await?;

    match args.command {
        UserCommand::Get { email, id } => {
            let user = match (email, id) {
                (Some(email), _) => db.get_user_with_email(&email).await?,
                (None, Some(id)) => db.get_user_with_id(id).await?,
                (None, None) => bail!("Provide --email or --id"),
            };
            print_json(&user)
        }
        UserCommand::Add {
            name,
            email,
            password,
        } => {
            let new_user = NewUser {
                name,
                email,
                password,
            };
            match db.add_user(&new_user).await {
                Ok(user) => print_json(&user),
                Err(err) if err.is_unique_violation() => {
                    bail!("A user with email {} already exists", new_user.email)
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
