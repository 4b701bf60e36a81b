use env_logger::Env;

mod command;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    command::run()
}
