use std::path::PathBuf;

use anyhow::Result;
use autoconf_core::{AutoConf, AutoConfOptions};
use clap::Parser;
use tracing::debug;

/// Register a plugin module into the host project's configuration file
#[derive(Parser)]
#[command(name = "autoconf")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    INIT_CWD          Root of the consuming project (set by npm during install)\n    RUST_LOG=debug    Enable debug logging"
)]
struct Args {
    /// Working directory of the plugin being installed (defaults to the current directory)
    #[arg(long = "cwd")]
    cwd: Option<PathBuf>,

    /// Module name to register (defaults to the plugin manifest's name)
    #[arg(long = "mod-name")]
    mod_name: Option<String>,

    /// Root of the consuming project (defaults to $INIT_CWD)
    #[arg(long = "base-dir")]
    base_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    debug!(
        "cwd={:?}, mod_name={:?}, base_dir={:?}",
        args.cwd, args.mod_name, args.base_dir
    );

    let autoconf = AutoConf::new(AutoConfOptions {
        cwd: args.cwd,
        mod_name: args.mod_name,
        base_dir: args.base_dir,
    })?;
    autoconf.run()?;
    Ok(())
}
