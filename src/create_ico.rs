use anyhow::Result;
use clap::Parser;
use watam_icons::config::Config;
use watam_icons::constants::{paths, sizes};
use watam_icons::ico;

#[derive(Parser)]
#[command(name = "create-ico")]
#[command(about = "Package the WATAM AI base icon into a Windows .ico file", long_about = None)]
struct Cli {
    /// Directory holding icon-1024.png and receiving icon.ico (overrides icon.yaml)
    #[arg(long)]
    out_dir: Option<String>,
}

fn main() {
    if let Err(e) = run(&Cli::parse()) {
        println!("❌ Error: {e:#}");
        println!("   Run create-icon first to produce {}.", paths::BASE_ICON_FILE);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load_or_default()?;
    if let Some(out_dir) = &cli.out_dir {
        config.output_dir = out_dir.clone();
    }
    config.validate()?;

    let input = config.output_dir().join(paths::BASE_ICON_FILE);
    let output = config.output_dir().join(paths::ICO_FILE);
    ico::package(&input, &output)?;

    println!(
        "✅ Windows icon created: {} ({}x{})",
        output.display(),
        sizes::ICO_EMBED_SIZE,
        sizes::ICO_EMBED_SIZE
    );

    Ok(())
}
