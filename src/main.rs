mod cli;
mod display;
mod error;
mod form;
mod parser;
mod schedule;
mod web;

use clap::Parser;
use cli::{Cli, Command, ScheduleArgs};
use display::print_schedule;
use form::{export_schedule_to_csv, write_report_to_file, InputStore};
use schedule::schedule_groups;

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run_schedule(args: &ScheduleArgs, store: &InputStore) -> Result<(), Box<dyn std::error::Error>> {
    let saved = match store.load() {
        Ok(saved) => saved.unwrap_or_default(),
        Err(e) => {
            // A broken save file should not block scheduling from flags
            log::warn!("Ignoring saved input at {}: {}", store.path().display(), e);
            Default::default()
        }
    };
    let input = args.apply(saved);

    let validated = input.validate()?;
    log::info!(
        "Scheduling {} slots for {} players in groups of {}",
        validated.slots.len(),
        validated.roster.len(),
        validated.group_size
    );

    let schedule = schedule_groups(&validated.roster, &validated.slots, validated.group_size);
    log::debug!("Generated schedule: {:?}", schedule);
    print_schedule(&schedule);

    // Output and save failures are reported but do not undo the printed result
    if let Some(path) = &args.out {
        match write_report_to_file(path, &input, &schedule) {
            Ok(()) => println!("Result saved to {}", path.display()),
            Err(e) => log::error!("Could not save result to {}: {}", path.display(), e),
        }
    }
    if let Some(path) = &args.csv {
        match export_schedule_to_csv(path, &schedule) {
            Ok(()) => println!("Groups exported to {}", path.display()),
            Err(e) => log::error!("Could not export groups to {}: {}", path.display(), e),
        }
    }
    if args.save_input {
        match store.save(&input) {
            Ok(()) => println!("Input saved to {}", store.path().display()),
            Err(e) => log::error!("Could not save input: {}", e),
        }
    }

    Ok(())
}

fn show_input(store: &InputStore) -> Result<(), Box<dyn std::error::Error>> {
    match store.load()? {
        Some(input) => {
            println!("Players ({}): {}", input.num_players, input.player_names.join(", "));
            println!("Dates: {}", input.dates_text);
            println!("Group size: {}", input.group_size);
        }
        None => println!("No saved input at {}", store.path().display()),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let store = InputStore::new(cli.input_file);

    match cli.command {
        Command::Schedule(args) => run_schedule(&args, &store)?,
        Command::ShowInput => show_input(&store)?,
        Command::Web { port } => {
            println!("Starting web server on port {}...", port);
            println!("Access the site at http://localhost:{}", port);
            web::start_server(port, store).await?;
        }
    }

    Ok(())
}
