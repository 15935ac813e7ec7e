use clap::{Parser, Subcommand};
use pillbar::config;
use pillbar::gui::app::AppModel;
use pillbar::sys;
use pillbar::sys::server::SOCKET_PATH;
use relm4::prelude::*;
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "pillbar", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Select a menu item in the running instance.
    Select { index: usize },
    /// Drive the continuous selection value in the running instance.
    /// Fractional values scrub the indicator mid-transition.
    Value { value: f64 },
    /// Replace the menu items in the running instance.
    Items { items: Vec<String> },
    /// Write the default config file if none exists and print its path.
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Select { index }) => send_command(&format!("select {index}")),
        Some(Commands::Value { value }) => send_command(&format!("value {value}")),
        Some(Commands::Items { items }) => send_command(&format!("items {}", items.join("|"))),
        Some(Commands::Init) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => run_app(),
    }
}

fn send_command(cmd: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!("Could not reach a running pillbar at {}: {}", SOCKET_PATH, e)
    })?;
    writeln!(stream, "{}", cmd)?;
    Ok(())
}

fn run_app() -> anyhow::Result<()> {
    let config = config::load_or_setup();
    let (tx, rx) = async_channel::bounded(32);

    sys::runtime::start_background_services(tx);

    let app = RelmApp::new("dev.pillbar.Pillbar");
    app.run::<AppModel>((config, rx));
    Ok(())
}
