mod args;
mod commands;
mod config;
mod git;
mod preset;
mod ui;


use miette::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    ui::setup_colors();

    let cli = args::Cli::parse_args(std::env::args_os());
    commands::run(cli.invocation())
}
