//! gridview - a wide standout-grid table in the scrolling viewer.
//!
//! Builds `Column_1..Column_n` with `Data_r_c` cells and opens it in the
//! horizontal viewer. Use `--print` to write the full table to stdout instead.
//!
//! ```text
//! gridview                       # 39 columns, 5 rows, box borders
//! gridview --border rounded --columns 12 --wrap
//! RUST_LOG=standout_grid=trace gridview 2>trace.log
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use standout_grid::{
    BorderStyle, Column, ConsoleScreen, Overflow, ScrollViewer, Table, TableStyle, TerminalKeys,
    ViewerConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Browse a generated wide table one column at a time
#[derive(Parser)]
#[command(name = "gridview")]
#[command(version)]
struct Args {
    /// Number of columns to generate
    #[arg(short, long, default_value_t = 39)]
    columns: usize,

    /// Number of data rows to generate
    #[arg(short, long, default_value_t = 5)]
    rows: usize,

    /// Border style: markdown, light, heavy, double, rounded (plain/box also accepted)
    #[arg(short, long, default_value = "light")]
    border: BorderStyle,

    /// Draw a separator between data rows
    #[arg(long)]
    horizontal_lines: bool,

    /// Cap every column at this display width
    #[arg(long, default_value_t = 10)]
    max_width: usize,

    /// Wrap overflowing cells instead of truncating them
    #[arg(long)]
    wrap: bool,

    /// Print the whole table and exit instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// YAML file with viewer settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_table(args: &Args) -> Result<Table> {
    let overflow = if args.wrap {
        Overflow::Wrap
    } else {
        Overflow::Truncate
    };
    let style = TableStyle::new(args.border).horizontal_lines(args.horizontal_lines);

    let mut table = Table::new(style);
    for c in 1..=args.columns {
        table.add_column(
            Column::new(format!("Column_{}", c))
                .center()
                .max_width(args.max_width)
                .overflow(overflow),
        );
    }
    table.add_rows(
        (0..args.rows).map(|r| (1..=args.columns).map(move |c| format!("Data_{}_{}", r, c))),
    )?;
    Ok(table)
}

fn load_config(path: Option<&PathBuf>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("reading viewer config {}", path.display()))?;
    ViewerConfig::from_yaml(&yaml)
        .with_context(|| format!("parsing viewer config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging();

    let table = build_table(&args)?;
    info!(
        columns = table.num_columns(),
        rows = table.num_rows(),
        border = %args.border,
        "table built"
    );

    if args.print {
        println!("{}", table.render());
        return Ok(());
    }

    let config = load_config(args.config.as_ref())?;
    ScrollViewer::new(&table, ConsoleScreen::stdout(), TerminalKeys)
        .config(config)
        .run()?;
    Ok(())
}
