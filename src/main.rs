mod app;
mod content;
mod debounce;
mod layout;
mod scene;
mod util;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::layout::{LayoutConfig, Viewport};
use crate::scene::layout_json;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Content tree JSON; the bundled KKA dataset is used when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Quiet period before a burst of window resizes re-renders the galaxy.
    #[arg(long, default_value_t = 250)]
    resize_quiet_ms: u64,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 820.0)]
    height: f32,

    /// Print the layout for a width x height viewport as JSON instead of opening a window.
    #[arg(long)]
    print_layout: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let tree = content::load_content_tree(args.data.as_deref())?;
    let layout = LayoutConfig::default();

    if args.print_layout {
        let viewport = Viewport::new(args.width, args.height);
        println!("{}", layout_json(&tree, viewport, &layout)?);
        return Ok(());
    }

    let resize_quiet = Duration::from_millis(args.resize_quiet_ms);
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    eframe::run_native(
        "KKA Galaxy Explorer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::GalaxyApp::new(
                cc,
                tree,
                layout,
                resize_quiet,
            )))
        }),
    )
    .map_err(|error| anyhow!("failed to run galaxy window: {error}"))
}
