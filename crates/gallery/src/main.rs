use arcdial::registry::ScreenLabel;
use clap::Parser;
use gallery::config;
use gallery::gui::app::AppModel;
use gallery::sys::runtime;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "gallery", version, about, long_about = None)]
struct Cli {
    /// Demo screen to show first (HalfCircleSlider, ListPicker, UnderLineTextField)
    #[arg(short = 's', long)]
    screen: Option<String>,

    /// Write the default config file if missing, print its path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();
    let screen = cli.screen.map(ScreenLabel::new);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    // GTK would try to parse our own flags
    let app = RelmApp::new("org.arcdial.gallery").with_args(Vec::new());

    app.run::<AppModel>((config, screen, rx));
    Ok(())
}
