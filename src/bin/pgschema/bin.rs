use clap::{crate_description, crate_version, Arg, ArgAction, Command};
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod config;

#[tokio::main]
async fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let matches = Command::new("pgschema")
        .about(crate_description!())
        .version(format!("v{}", crate_version!()))
        .name("pgschema")
        .arg(
            Arg::new("env-file")
                .short('e')
                .long("env-file")
                .help("Path to the env file holding DATABASE_URL")
                .action(ArgAction::Set)
                .num_args(0..=1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("File to write the schema dump to")
                .action(ArgAction::Set)
                .num_args(0..=1),
        )
        .arg(
            Arg::new("image")
                .long("image")
                .help("Docker image providing pg_dump")
                .action(ArgAction::Set)
                .num_args(0..=1),
        )
        .get_matches();

    let env_file = matches
        .get_one::<String>("env-file")
        .cloned()
        .unwrap_or_else(config::env_file);
    let output_file = matches
        .get_one::<String>("output")
        .cloned()
        .unwrap_or_else(config::output_file);
    let image = matches
        .get_one::<String>("image")
        .cloned()
        .unwrap_or_else(config::dump_image);

    info!("Loading environment from: {}", env_file);

    match pgschema::dump_schema(env_file, output_file, image).await {
        Err(err) => {
            error!("{:?}", err);
            std::process::exit(1);
        }
        Ok(_) => info!("Success"),
    };
}
