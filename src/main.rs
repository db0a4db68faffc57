use std::io;

use tokenize_copilot::app::App;
use tokenize_copilot::cli;
use tokenize_copilot::logging::{self, LogDestination};
use tokenize_copilot::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli::command().get_matches();
    let config = cli::config_from_matches(&matches);
    logging::initialize(LogDestination::for_config(&config), config.log.level)?;

    if config.print_only {
        cli::print_tokens(&config, &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut app = App::from_config(&config);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
