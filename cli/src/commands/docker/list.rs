//! # toolrs Docker List Handler
//!
//! File: cli/src/commands/docker/list.rs
//!
//! Implements `toolrs docker list`: renders `docker ps` as a boxed table.
//! No running containers is reported and exits successfully.
//!
use crate::{
    common::{
        docker::{state::CONTAINER_HEADERS, ContainerRow},
        ui::table::render_table,
    },
    core::{context::AppContext, error::Result},
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List running Docker containers")]
pub struct ListArgs {}

pub async fn handle_list(_args: ListArgs, ctx: &AppContext) -> Result<()> {
    info!("Handling docker list command...");
    let rows = ctx.docker().list_containers().await?;
    if rows.is_empty() {
        println!("No running containers found.");
        return Ok(());
    }
    print!("{}", render_rows(&rows));
    Ok(())
}

fn render_rows(rows: &[ContainerRow]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(ContainerRow::cells).collect();
    render_table(&CONTAINER_HEADERS, &cells)
}
