use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tokio::sync::{mpsc, watch};
use tracing::{error, info};

use newsdesk::dashboard::Dashboard;
use newsdesk::dates::DateWindow;
use newsdesk::environment::DeskConfig;
use newsdesk::error::DashboardError;
use newsdesk::export::{Clipboard, ShareOutcome};
use newsdesk::logging;
use newsdesk::schedule::{DeliveryFormat, Frequency, ScheduleRequest};
use newsdesk::state::{PriorityFilter, ViewMode};
use newsdesk::view::{self, ViewContext};

#[derive(Parser)]
#[clap(
    name = "newsdesk",
    about = "AP State Police daily news digest desk"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DigestArgs {
    /// Digest date (YYYY-MM-DD), at most 30 days back
    #[clap(short, long, global = true)]
    date: Option<String>,

    /// Seed for a reproducible digest
    #[clap(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a digest and print the dashboard
    Show {
        #[clap(flatten)]
        digest: DigestArgs,

        /// Priority filter: all, high, medium or low
        #[clap(short, long, default_value = "all")]
        filter: PriorityFilter,

        /// Case-insensitive match on cluster title or summary
        #[clap(short, long, default_value = "")]
        search: String,

        /// Cluster layout: grid or list
        #[clap(short, long, default_value = "grid")]
        view: ViewMode,

        /// Show the full detail of the cluster at this 1-based position
        #[clap(short, long)]
        cluster: Option<usize>,
    },

    /// Write the printable daily report
    Report {
        #[clap(flatten)]
        digest: DigestArgs,

        /// Output directory (defaults to NEWSDESK_EXPORT_DIR)
        #[clap(short, long)]
        out: Option<PathBuf>,

        /// Keep ANSI colours in the written report
        #[clap(long)]
        ansi: bool,
    },

    /// Export digest data as JSON or CSV
    Export {
        #[clap(subcommand)]
        kind: ExportKind,

        #[clap(flatten)]
        digest: DigestArgs,

        /// Output directory (defaults to NEWSDESK_EXPORT_DIR)
        #[clap(short, long, global = true)]
        out: Option<PathBuf>,
    },

    /// Share a cluster or draft the digest email; nothing leaves the machine
    Share {
        /// 1-based cluster position
        #[clap(required_unless_present = "email")]
        index: Option<usize>,

        /// Draft the digest email for these comma-separated recipients
        #[clap(short, long)]
        email: Option<String>,

        /// Opening message of the email draft
        #[clap(short, long, requires = "email")]
        message: Option<String>,

        #[clap(flatten)]
        digest: DigestArgs,
    },

    /// Validate and record a report delivery schedule
    Schedule {
        /// Recipient address, repeatable
        #[clap(short, long = "recipient")]
        recipients: Vec<String>,

        #[clap(short, long, value_enum, default_value = "daily")]
        frequency: Frequency,

        /// Delivery time, HH:MM IST
        #[clap(short, long, default_value = "08:00")]
        time: String,

        #[clap(long, value_enum, default_value = "both")]
        format: DeliveryFormat,

        #[clap(long)]
        no_alerts: bool,

        #[clap(long)]
        no_analytics: bool,
    },

    /// Keep resynthesizing on the auto-refresh interval
    Watch {
        /// Seconds between refreshes (defaults to NEWSDESK_REFRESH_SECS)
        #[clap(short, long)]
        interval: Option<u64>,

        /// Stop after this many refreshes
        #[clap(short, long)]
        cycles: Option<u64>,

        #[clap(flatten)]
        digest: DigestArgs,
    },
}

#[derive(Subcommand)]
enum ExportKind {
    /// One cluster with its articles
    ClusterJson {
        /// 1-based cluster position
        index: usize,
    },
    /// Headline counts for the digest
    SummaryJson,
    /// One row per cluster
    Csv,
}

/// Prints what would have gone to the system clipboard.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

fn dashboard(config: DeskConfig, seed: Option<u64>) -> Dashboard<StdRng> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Dashboard::new(config, rng, Local::now().date_naive())
}

/// Cancels processing on ctrl-c.
fn cancel_on_ctrl_c() -> watch::Receiver<bool> {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_err() {
            error!("Failed to listen for ctrl-c");
        }
        let _ = cancel_tx.send(true);
    });
    cancel_rx
}

/// Mirrors processing progress to stderr.
fn show_progress(mut status_rx: watch::Receiver<Option<newsdesk::types::ProcessingStatus>>) {
    tokio::spawn(async move {
        while status_rx.changed().await.is_ok() {
            let status = status_rx.borrow_and_update().clone();
            if let Some(status) = status {
                eprintln!("{}", view::render_progress(&status));
            }
        }
    });
}

async fn load(
    desk: &mut Dashboard<StdRng>,
    args: &DigestArgs,
    cancel_rx: &mut watch::Receiver<bool>,
) -> Result<()> {
    let window = DateWindow::new(Local::now().date_naive());
    show_progress(desk.subscribe_status());
    match &args.date {
        Some(input) => desk.select_date(&window, input, cancel_rx).await?,
        None => desk.process_news_feed(window.today, cancel_rx).await?,
    };
    Ok(())
}

fn print_dashboard(desk: &Dashboard<StdRng>) {
    let status = desk.status();
    println!(
        "{}",
        view::render_dashboard(ViewContext {
            state: desk.state(),
            analytics: desk.analytics(),
            status: status.as_ref(),
        })
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = DeskConfig::from_env();
    logging::configure_logging(&config.log_dir);
    let mut cancel_rx = cancel_on_ctrl_c();

    match cli.command {
        Commands::Show {
            digest,
            filter,
            search,
            view: view_mode,
            cluster,
        } => {
            let mut desk = dashboard(config, digest.seed);
            load(&mut desk, &digest, &mut cancel_rx).await?;
            if let Some(position) = cluster {
                let id = desk.cluster_id_at(position)?;
                println!(
                    "{}",
                    view::render_cluster_detail(desk.state(), desk.cluster(&id)?)
                );
                return Ok(());
            }
            let state = desk.state_mut();
            state.set_filter(filter);
            state.set_search(&search);
            state.set_view_mode(view_mode);
            print_dashboard(&desk);
        }
        Commands::Report { digest, out, ansi } => {
            if let Some(out) = out {
                config.export_dir = out;
            }
            let mut desk = dashboard(config, digest.seed);
            load(&mut desk, &digest, &mut cancel_rx).await?;
            let path = desk.export_report(ansi, Utc::now())?;
            println!("{} {}", "Report written to".bright_green(), path.display());
        }
        Commands::Export { kind, digest, out } => {
            if let Some(out) = out {
                config.export_dir = out;
            }
            let mut desk = dashboard(config, digest.seed);
            load(&mut desk, &digest, &mut cancel_rx).await?;
            let path = match kind {
                ExportKind::ClusterJson { index } => {
                    let id = desk.cluster_id_at(index)?;
                    desk.export_cluster_json(&id, Local::now().date_naive())?
                }
                ExportKind::SummaryJson => desk.export_summary_json()?,
                ExportKind::Csv => desk.export_clusters_csv()?,
            };
            println!("{} {}", "Exported".bright_green(), path.display());
        }
        Commands::Share {
            index,
            email,
            message,
            digest,
        } => {
            let mut desk = dashboard(config, digest.seed);
            load(&mut desk, &digest, &mut cancel_rx).await?;
            if let Some(to) = email {
                let draft = desk.draft_email(&to, message.as_deref())?;
                println!("To: {}", draft.recipients.join(", "));
                println!("Subject: {}\n", draft.subject);
                println!("{}\n", draft.body);
                println!("{}", "Email draft prepared, not sent".bright_green());
            }
            if let Some(index) = index {
                let id = desk.cluster_id_at(index)?;
                if desk.share_cluster(&id, None, &mut StdoutClipboard)? == ShareOutcome::Copied {
                    println!("{}", "Cluster details copied to clipboard".bright_green());
                }
            }
        }
        Commands::Schedule {
            recipients,
            frequency,
            time,
            format,
            no_alerts,
            no_analytics,
        } => {
            let mut request = ScheduleRequest {
                frequency,
                time,
                format,
                include_alerts: !no_alerts,
                include_analytics: !no_analytics,
                ..ScheduleRequest::default()
            };
            for recipient in &recipients {
                request.add_recipient(recipient);
            }
            let mut desk = dashboard(config, None);
            desk.schedule_report(&request)?;
            println!("{}", request.confirmation().bright_green());
            for line in request.preview() {
                println!("  {}", line);
            }
        }
        Commands::Watch {
            interval,
            cycles,
            digest,
        } => {
            if let Some(secs) = interval {
                config.refresh_interval = Duration::from_secs(secs);
            }
            let mut desk = dashboard(config, digest.seed);
            load(&mut desk, &digest, &mut cancel_rx).await?;
            print_dashboard(&desk);

            let (tick_tx, mut tick_rx) = mpsc::channel(1);
            desk.toggle_auto_refresh(tick_tx);
            loop {
                tokio::select! {
                    tick = tick_rx.recv() => {
                        let Some(tick) = tick else { break };
                        let refreshed = desk.refresh(tick, &mut cancel_rx).await.map(|_| ());
                        match refreshed {
                            Ok(()) => print_dashboard(&desk),
                            Err(DashboardError::Cancelled) => {
                                info!("Interrupted, stopping auto-refresh");
                                break;
                            }
                            Err(e) => return Err(e).context("Auto-refresh failed"),
                        }
                        if cycles.is_some_and(|n| tick.sequence >= n) {
                            break;
                        }
                    }
                    _ = cancel_rx.changed() => {
                        info!("Interrupted, stopping auto-refresh");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
