//! Run a sequence of navigation steps

use crate::config::CliConfigLoader;
use crate::session::{Session, Step};
use crate::views::pages;
use anyhow::Result;
use colored::Colorize;

/// Start the router, then apply each step in order and print what was
/// mounted. Navigation failures are shown and the sequence continues.
pub async fn visit_command(
    loader: CliConfigLoader,
    steps: Vec<String>,
    start: Option<String>,
) -> Result<()> {
    let loaded = loader.load().await?;
    let mut session = Session::new(&loaded, pages::planets(), start.as_deref())?;

    for page in session.take_mounted() {
        println!("{}", page);
    }

    for raw in steps {
        println!("{} {}", "»".dimmed(), raw);
        let step = match raw.parse::<Step>() {
            Ok(step) => step,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        let output = session.run(step);
        for line in output.lines {
            println!("{}", line);
        }
        if output.quit {
            break;
        }
    }

    Ok(())
}
