use sea_orm_migration::prelude::*;

use casework_records_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
