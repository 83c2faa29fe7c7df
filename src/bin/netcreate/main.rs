use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;

use netcreate::{
    config::Config,
    generate::{GenerateError, Generator},
    loader::JsonLoader,
    network::Network,
};

/// create the genesis file and node configurations of a private network
#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// run configuration in TOML
    #[clap(long, short, conflicts_with_all = ["init_file", "to"])]
    config: Option<PathBuf>,
    /// the JSON network description
    #[clap(long, short, required_unless_present = "config")]
    init_file: Option<PathBuf>,
    /// output directory
    #[clap(long, short, required_unless_present = "config")]
    to: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<Config, anyhow::Error> {
        if let Some(ref path) = self.config {
            return Config::load(path);
        }

        match (self.init_file, self.to) {
            (Some(init_file), Some(output)) => Ok(Config {
                init_file,
                output,
                resources: None,
            }),
            _ => Err(anyhow!("either --config or --init-file and --to are required")),
        }
    }
}

fn run(config: Config) -> Result<(), anyhow::Error> {
    let loader = match config.resources {
        Some(ref root) => JsonLoader::with_root(root.clone()),
        None => JsonLoader::new(),
    };

    let network: Network = loader.load_file(&config.init_file)?;
    let generator = Generator::new(loader);

    let outcome = match generator.run(&network, &config.output) {
        Ok(outcome) => outcome,
        Err(GenerateError::Invalid(report)) => {
            for error in report.iter() {
                eprintln!("  {}", error);
            }
            bail!("{} problem(s) in {}", report.len(), config.init_file.display());
        }
        Err(e) => return Err(e.into()),
    };

    let failed = outcome.failed_nodes().count();
    if failed > 0 {
        bail!("{} of {} node configuration(s) could not be written", failed, outcome.nodes.len());
    }

    log::info!("-- done --");

    Ok(())
}

fn main() {
    let args = Args::parse();

    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let result = args.into_config().and_then(run);

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
