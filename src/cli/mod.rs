pub mod render;
pub mod shared;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use render::{render, RenderArgs};
use show::show;

use crate::api::{api, ServeArgs};

#[derive(Parser, Debug)]
#[command(about = "Monthly holdings report with Indian number formatting")]
struct Args {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    /// Fetch the report data and write the rendered HTML page
    Render {
        /// Base URL of the backend serving /api/data
        #[arg(short, long)]
        backend: Option<String>,
        /// Write the page to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Fetch the report data and print it as a terminal table
    Show {
        #[arg(short, long)]
        backend: Option<String>,
    },
    /// Serve the rendered page over HTTP
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short, long)]
        backend: Option<String>,
        /// JSON payload file to answer /api/data with
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

pub async fn cli() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.cmd {
        Command::Render { backend, out } => {
            render(RenderArgs { backend, out }).await?;
        }
        Command::Show { backend } => {
            show(backend).await?;
        }
        Command::Serve {
            port,
            backend,
            data,
        } => {
            api(ServeArgs {
                port,
                backend,
                data,
            })
            .await?;
        }
    }
    Ok(())
}
