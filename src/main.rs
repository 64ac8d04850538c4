use anyhow::Result;
use clap::{App as ClapApp, Arg};
use showcase_tui::app::App;
use showcase_tui::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory containing config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("source")
                .short("s")
                .long("source")
                .value_name("URL|PATH")
                .help("Location of the project data file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .value_name("MODE")
                .help("Dataset variant: group or individual")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Colour theme")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(source) = matches.value_of("source") {
        config.source = Some(source.to_string());
    }
    if let Some(mode) = matches.value_of("mode") {
        config.set_mode(mode)?;
    }
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }

    App::start(config).await?;
    Ok(())
}
