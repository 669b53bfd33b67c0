use anyhow::Context;
use clap::Parser;
use edacore::view::ChartSpec;
use edacore::DashboardView;
use gui_bridge::bridge::{bridge_bind_address, DashboardBridge};
use std::fs;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{DashboardConfig, Selections};
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Track exploratory-data-analysis dashboard driver")]
struct Args {
    /// Load datasets, selections and an interaction script from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the synthetic track tables (ignored with --config)
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Dataset filter, e.g. "USA Tracks"
    #[arg(long)]
    dataset: Option<String>,
    /// Primary metric, e.g. "danceability"
    #[arg(long)]
    metric: Option<String>,
    /// Secondary metric used by scatter plots
    #[arg(long)]
    secondary_metric: Option<String>,
    /// "Bar Chart" or "Scatter Plot"
    #[arg(long)]
    chart_type: Option<String>,
    /// Write the resulting view as JSON
    #[arg(long)]
    output: Option<PathBuf>,
    /// Keep the HTTP bridge alive for a presentation client
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let overrides = Selections {
        dataset: args.dataset,
        metric: args.metric,
        secondary_metric: args.secondary_metric,
        chart_type: args.chart_type,
    };
    let dashboard_config = if let Some(path) = args.config {
        let mut config = DashboardConfig::load(path)?;
        config.selections = config.selections.overridden_by(overrides);
        config
    } else {
        DashboardConfig::from_args(args.seed, overrides)
    };

    let runner = Runner::new(dashboard_config);
    let view_model = runner.execute()?;
    print_view(view_model.view());

    if let Some(report_path) = args.output {
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let report = serde_json::to_string_pretty(view_model.view())
            .context("serializing dashboard view")?;
        fs::write(&report_path, report)
            .with_context(|| format!("writing {}", report_path.display()))?;
    }

    if args.serve {
        let bridge = DashboardBridge::new(view_model);
        let addr = bridge.spawn(bridge_bind_address())?;
        bridge.publish_status(&format!(
            "HTTP bridge running on {} (Ctrl+C to stop)...",
            addr
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

fn print_view(view: &DashboardView) {
    println!("### {}", view.summary.heading);
    for summary in &view.summary.summaries {
        println!("**{}**", summary.metric);
        for line in summary.formatted() {
            println!("{}: {}", line.label, line.value);
        }
    }

    match view.chart.as_ref() {
        Some(ChartSpec::Bar(spec)) => println!(
            "{} -> bar chart of {} over {} tracks, y range [{}, {}]",
            view.state.selected_dataset,
            spec.y_metric,
            spec.points.len(),
            spec.y_range.min,
            spec.y_range.max
        ),
        Some(ChartSpec::Scatter(spec)) => println!(
            "{} -> scatter plot of {} vs {} over {} tracks (normalized)",
            view.state.selected_dataset,
            spec.x_metric,
            spec.y_metric,
            spec.points.len()
        ),
        None => println!("{} -> no chart available", view.state.selected_dataset),
    }
    if let Some(notice) = &view.notice {
        println!("notice: {notice}");
    }
    println!("{}", view.correlation.title);
}
