use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Every command line argument is accepted and ignored, so the only exit statuses are 0 and 1.
#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<String>,
}

fn main() -> ExitCode {
    let _ = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    match ibdev::enumerate_and_print(&ibdev::ibv::System, &mut stdout) {
        Ok(count) => {
            tracing::debug!("listed {} ib devices", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("list ib devices failed: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
