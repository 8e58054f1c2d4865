use std::{
    io::{self, Write},
    path::PathBuf,
};

use log::info;
use spinners_rs::{Spinner, Spinners};

use crate::services::{
    fetcher::DataFetcher,
    page::{load_report, render_document, ReportSurface},
    shared::env::{backend_url, report_title},
};

use super::shared::print_failure;

pub struct RenderArgs {
    pub backend: Option<String>,
    pub out: Option<PathBuf>,
}

pub async fn render(args: RenderArgs) -> anyhow::Result<()> {
    let fetcher = DataFetcher::new(&backend_url(args.backend));
    let mut surface = ReportSurface::new();

    // the spinner shares stdout with the page, only show it when writing a file
    let outcome = match &args.out {
        Some(_) => {
            let mut sp = Spinner::new(Spinners::Point, "Fetching holdings report...");
            sp.start();
            let outcome = load_report(&fetcher, &mut surface).await;
            sp.stop();
            outcome
        }
        None => load_report(&fetcher, &mut surface).await,
    };

    let document = render_document(&report_title(), &surface);
    match args.out {
        Some(path) => {
            tokio::fs::write(&path, document).await?;
            info!("Report written to {}", path.display());
        }
        None => {
            print!("{}", document);
            io::stdout().flush()?;
        }
    }

    if let Err(err) = outcome {
        print_failure(&err);
        std::process::exit(1);
    }
    Ok(())
}
