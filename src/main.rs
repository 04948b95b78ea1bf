mod config;
mod data;
mod export;
mod shell;
mod state;
mod ui;

use std::io;
use std::path::Path;

use anyhow::Result;
use log::error;

use config::{Settings, SETTINGS_FILE};
use data::loader::load_directory;
use data::model::{LoadReport, PriceTable};
use shell::Shell;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{err:?}");
        eprintln!("Ошибка: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load(Path::new(SETTINGS_FILE))?;

    let (table, report) = match load_directory(&settings.directory) {
        Ok(loaded) => loaded,
        Err(err) => {
            // Continue with an empty table.
            eprintln!("Ошибка загрузки: {err}");
            (PriceTable::default(), LoadReport::default())
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&table, settings.default_export, stdin.lock(), stdout.lock());
    shell.print_load_summary(&report)?;
    shell.run()?;
    Ok(())
}
