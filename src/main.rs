use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use fieldwork::config::Config;
use fieldwork::logging;
use fieldwork::ui::app::Screen;
use fieldwork::ui::runtime;

#[derive(Debug, Parser)]
#[command(
    name = "fieldwork",
    version,
    about = "Terminal playground for explicit form state and keyed query caching"
)]
struct Args {
    /// View shown at startup.
    #[arg(long, value_enum, default_value = "form")]
    screen: ScreenArg,

    /// Alternate config file path.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScreenArg {
    Form,
    Query,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Form => Screen::Form,
            ScreenArg::Query => Screen::Query,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    runtime::run(config, args.screen.into())
}
