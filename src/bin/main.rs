use clap::{Arg, ArgAction, Command};
use log::{debug, error, info};
use pbxfontprune::config::{self, ConfigSource, PruneConfig};
use pbxfontprune::{PruneError, PruneStats, SUCCESS_MESSAGE};
use std::path::PathBuf;
use std::process;

/// Verbosity level for output
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verbosity {
    Quiet,   // No output except errors
    Normal,  // Standard output
    Verbose, // Detailed output
}

fn get_verbosity(matches: &clap::ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Get the configuration source based on CLI arguments or default behavior.
///
/// Priority order:
/// 1. If `--config` is explicitly provided, use that file
/// 2. If `pbxfontprunerc.toml` exists in current directory, use it
/// 3. Otherwise use default configuration
fn get_config_source(matches: &clap::ArgMatches) -> ConfigSource<'_> {
    if let Some(config_file) = matches.get_one::<String>("config") {
        return ConfigSource::File(config_file.as_str());
    }

    if std::path::Path::new(config::DEFAULT_CONFIG_FILE).exists() {
        return ConfigSource::File(config::DEFAULT_CONFIG_FILE);
    }

    ConfigSource::Default
}

/// Loads the configuration and applies command line overrides on top of it.
fn resolve_config(matches: &clap::ArgMatches) -> Result<PruneConfig, PruneError> {
    let source = get_config_source(matches);
    debug!("Configuration source: {:?}", source);
    let mut config = config::load_config_from_source(source)?;

    if let Some(project) = matches.get_one::<String>("project") {
        config.project_file = PathBuf::from(project);
    }

    let fonts: Vec<String> = matches
        .get_many::<String>("font")
        .map(|values| values.map(|s| s.to_string()).collect())
        .unwrap_or_default();
    if !fonts.is_empty() {
        config.font_names = pbxfontprune::fonts::normalize_font_names(fonts);
    }

    if matches.get_flag("in-place") {
        config.atomic_write = false;
    }

    Ok(config)
}

fn print_stats(stats: &PruneStats) {
    println!("   PBXBuildFile entries removed:     {}", stats.build_files);
    println!("   PBXFileReference entries removed: {}", stats.file_references);
    println!("   Resources list entries removed:   {}", stats.resource_entries);
}

fn run(matches: &clap::ArgMatches) -> Result<(), PruneError> {
    let verbosity = get_verbosity(matches);
    let config = resolve_config(matches)?;

    if matches.get_flag("list-fonts") {
        for font in &config.font_names {
            println!("{}", font);
        }
        return Ok(());
    }

    if verbosity == Verbosity::Verbose {
        info!("📄 Project file: {}", config.project_file.display());
        info!("   Fonts: {}", config.font_names.join(", "));
    }

    let stats = pbxfontprune::prune_with_config(&config)?;

    if verbosity != Verbosity::Quiet {
        println!("{}", SUCCESS_MESSAGE);
        if verbosity == Verbosity::Verbose {
            print_stats(&stats);
        }
    }

    Ok(())
}

fn build_cli() -> Command {
    Command::new("pbxfontprune")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove duplicate react-native-vector-icons font references from an Xcode project file")
        .after_help(
            "EXAMPLES:\n  \
            pbxfontprune\n  \
            pbxfontprune -p ios/MyApp.xcodeproj/project.pbxproj --verbose\n  \
            pbxfontprune -f FontAwesome.ttf -f Ionicons.ttf\n  \
            pbxfontprune --get-default-configuration > pbxfontprunerc.toml\n",
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("PBXPROJ_PATH")
                .help(format!(
                    "Path to the project.pbxproj file (defaults to {})",
                    config::DEFAULT_PROJECT_FILE
                )),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG_FILE")
                .help("Path to configuration file (TOML format). Auto-detects pbxfontprunerc.toml if not specified"),
        )
        .arg(
            Arg::new("font")
                .short('f')
                .long("font")
                .value_name("FONT_FILE")
                .help("Font file name to remove (can be specified multiple times; replaces the built-in list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("in-place")
                .long("in-place")
                .help("Overwrite the project file directly instead of replacing it atomically")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show the effective settings and per-kind removal counts")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress all output except errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("list-fonts")
                .long("list-fonts")
                .help("Print the font names that would be removed and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("get-default-configuration")
                .long("get-default-configuration")
                .help("Print a default pbxfontprunerc.toml to stdout and exit")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    // RUST_LOG wins; otherwise --verbose raises the default level to info
    let default_level = match get_verbosity(&matches) {
        Verbosity::Verbose => "info",
        Verbosity::Normal | Verbosity::Quiet => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();

    if matches.get_flag("get-default-configuration") {
        println!("{}", config::default_config_toml());
        process::exit(0);
    }

    if let Err(e) = run(&matches) {
        match e {
            PruneError::FileAccess { .. } => error!("[X] Error accessing project file:\n{}", e),
            PruneError::Config { .. } => error!("[X] Configuration error:\n{}", e),
            PruneError::Pattern { .. } => error!("[X] Pattern error:\n{}", e),
        }
        process::exit(1);
    }
}
