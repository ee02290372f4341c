use std::path::PathBuf;

use clap::Command;
use glyphsbuild::{BuildConfig, GlyphsBuildError};

fn main() {
    let command = Command::new("glyphsbuild")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Processes Glyphs font source files according to your config file")
        .author("Glyphsbuild Developers")
        .arg(
            clap::Arg::new("root")
                .help("Project directory containing the config file")
                .index(1),
        )
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("The config file, relative to the project directory")
                .default_value("glyphs.config.json"),
        )
        .arg(
            clap::Arg::new("build")
                .short('b')
                .long("build")
                .help("Only run the named build from the config file"),
        )
        .arg(
            clap::Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .help("Set the level of verbosity")
                .action(clap::ArgAction::Count),
        );

    let args = command.get_matches();
    env_logger::Builder::new()
        .filter_level(match args.get_count("verbosity") {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let root = PathBuf::from(
        args.get_one::<String>("root")
            .map(String::as_str)
            .unwrap_or("."),
    );
    #[allow(clippy::unwrap_used)] // the argument has a default value
    let config_path = root.join(args.get_one::<String>("config").unwrap());

    let config_text = std::fs::read_to_string(&config_path).unwrap_or_else(|_| {
        log::error!("Could not find config file {}", config_path.display());
        std::process::exit(1);
    });
    let config: BuildConfig = serde_json::from_str(&config_text).unwrap_or_else(|error| {
        log::error!(
            "Config file {} is not a valid build configuration: {}",
            config_path.display(),
            error
        );
        std::process::exit(1);
    });

    let result = match args.get_one::<String>("build") {
        Some(name) => config
            .builds
            .get(name)
            .ok_or_else(|| GlyphsBuildError::UnknownBuild { name: name.clone() })
            .and_then(|build| glyphsbuild::run_build(name, build)),
        None => glyphsbuild::build(&config),
    };
    if let Err(error) = result {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
