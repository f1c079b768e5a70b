//! Reservations command

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use lightbnb_db::DEFAULT_LIMIT;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest whose reservations to list
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum number of reservations to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

pub async fn run_reservations(args: ReservationsArgs, config: Option<&Path>) -> Result<()> {
    let db = connect(config).await?;
    let reservations = db.get_all_reservations(args.guest_id, args.limit).await?;
    print_json(&reservations)
}
