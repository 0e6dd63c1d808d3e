//! Interactive navigation shell

use crate::config::CliConfigLoader;
use crate::session::{Session, Step, HELP};
use crate::views::pages;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Read commands from stdin until `quit` or end of input
pub async fn interactive_command(loader: CliConfigLoader, start: Option<String>) -> Result<()> {
    let loaded = loader.load().await?;
    let mut session = Session::new(&loaded, pages::planets(), start.as_deref())?;

    println!("{} ({})", "orbit".bold(), loaded.source);
    println!("{}", HELP.dimmed());
    for page in session.take_mounted() {
        println!("{}", page);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let path = session
            .router()
            .current_location()
            .map(|location| location.path.clone())
            .unwrap_or_default();
        print!("{} ", format!("orbit {}>", path).cyan());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Step>() {
            Ok(step) => {
                let output = session.run(step);
                for line in output.lines {
                    println!("{}", line);
                }
                if output.quit {
                    break;
                }
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    Ok(())
}
