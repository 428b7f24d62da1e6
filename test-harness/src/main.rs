//! Group page test harness
//!
//! Composes the in-memory collaborators, seeds one group, one viewer and
//! optionally a membership, then prints the rendered group page as JSON.
//!
//!   cargo run -p test-harness -- --viewer Alice --membership active

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use grouppage_core::config::Config;
use grouppage_core::core_group::{
    Group, GroupAccessPolicy, GroupId, InMemoryMembershipStore, MembershipState, MembershipStore,
    Viewer, ViewerId,
};
use grouppage_core::logging::init_logging_with_config;
use grouppage_core::metrics::MetricsExporter;
use grouppage_core::render::DefaultLayout;
use grouppage_core::widget::{GroupPageBuilder, GroupPageSubscriptionWidget};

#[derive(Parser, Debug)]
#[command(name = "test-harness")]
#[command(about = "Render a group page for a seeded viewer", long_about = None)]
struct Args {
    /// Title of the seeded group
    #[arg(long, default_value = "Test Group")]
    group_title: String,

    /// Display name of the viewer; omit with --anonymous
    #[arg(long, default_value = "Alice")]
    viewer: String,

    /// Render the page for an anonymous viewer
    #[arg(long)]
    anonymous: bool,

    /// Seed a membership in this state (active, pending, blocked)
    #[arg(long)]
    membership: Option<String>,

    /// Seed a plain content item instead of a group
    #[arg(long)]
    not_a_group: bool,

    /// Configuration file (TOML); environment overrides apply otherwise
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,

    /// Print the recorded counters (Prometheus text) to stderr
    #[arg(long)]
    print_metrics: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::from_env().context("Invalid environment configuration")?,
    };

    init_logging_with_config(config.logging.to_log_config()?)?;
    let exporter = MetricsExporter::install(&config.metrics)?;

    let store = Arc::new(InMemoryMembershipStore::new());
    let policy = Arc::new(GroupAccessPolicy::new(store.clone()));

    let group = if args.not_a_group {
        Group::plain(GroupId::new("1"), &args.group_title)
    } else {
        Group::new(GroupId::new("1"), &args.group_title).with_owner(ViewerId::new("creator"))
    };

    let viewer = if args.anonymous {
        Viewer::anonymous()
    } else {
        Viewer::authenticated(ViewerId::new("2"), &args.viewer)
    };

    if let Some(state) = &args.membership {
        if viewer.is_anonymous() {
            bail!("--membership cannot be combined with --anonymous");
        }
        let state: MembershipState = state.parse()?;
        let mut membership =
            store.create_membership(&group, &viewer, &config.widget.membership_type())?;
        membership.set_state(state);
        store.save(&membership)?;
        info!(%state, "Seeded membership");
    }

    let widget = GroupPageSubscriptionWidget::new(policy, store, config.widget.clone());
    let page = GroupPageBuilder::new(widget, Arc::new(DefaultLayout));
    let tree = page.build_full(&group, &viewer)?;

    let json = if args.compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{}", json);

    if args.print_metrics {
        match &exporter {
            Some(exporter) => eprint!("{}", exporter.render()),
            None => warn!("Metrics are disabled, nothing to print"),
        }
    }

    Ok(())
}
