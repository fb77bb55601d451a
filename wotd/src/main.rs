use std::io::{self, IsTerminal, Write};

use render::RenderedBlock;
use settings::Settings;
use utilities::terminal_width;

mod app;
mod custom_words;
mod day_selector;
mod render;
mod settings;
mod utilities;
mod word_pool;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let width = terminal_width(settings.columns);
    let block = app::word_of_the_day(&settings, width).await?;
    print_block(&block)?;
    Ok(())
}

fn print_block(block: &RenderedBlock) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if stdout.is_terminal() {
        for line in &block.lines {
            writeln!(stdout, "{}", line.styled())?;
        }
    } else {
        write!(stdout, "{block}")?;
    }
    stdout.flush()
}
