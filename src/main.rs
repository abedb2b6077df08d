use clap::Parser;
use game_crud::{
    api::{GamesBackend, GamesClient},
    cli::{Cli, Commands},
    config::Config,
    controller::{GameListController, ListEntry},
    Result,
};
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.server_url = server;
        config.validate()?;
    }

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::debug!("Using backend at {}", config.server_url);

    let command = match cli.command {
        None | Some(Commands::Gui) => {
            return run_gui(config);
        }
        Some(command) => command,
    };

    let client = GamesClient::from_config(&config)?;
    let mut controller = GameListController::new(client, config.default_status());

    match command {
        Commands::List => {
            controller.load().await;
            exit_on_error(&controller);
            print_entries(controller.state().entries());
        }

        Commands::Info { game_id } => match controller.backend().get_game(&game_id).await {
            Ok(game) => {
                println!("Game Information:");
                println!("================");
                println!("ID: {}", game.game_id);
                println!("Name: {}", game.game);
                println!("Description: {}", game.description);
                println!("Status: {}", game.status);
                if !game.created.is_empty() {
                    println!("Created: {}", game.created);
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },

        Commands::Create {
            name,
            description,
            status,
        } => {
            let form = &mut controller.state_mut().form;
            form.name = name;
            form.description = description;
            if let Some(status) = status {
                form.status = status;
            }

            controller.submit().await;
            exit_on_error(&controller);
            println!("✓ Game created");
            print_entries(controller.state().entries());
        }

        Commands::Update {
            game_id,
            name,
            description,
            status,
        } => {
            controller.load().await;
            exit_on_error(&controller);

            if let Err(e) = controller.edit_game(&game_id) {
                eprintln!("{}", e);
                std::process::exit(1);
            }

            let form = &mut controller.state_mut().form;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(status) = status {
                form.status = status;
            }

            controller.submit().await;
            exit_on_error(&controller);
            println!("✓ Game {} updated", game_id);
            print_entries(controller.state().entries());
        }

        Commands::Delete { game_id, yes } => {
            controller.request_delete(game_id.as_str());

            if yes || confirm("Are you sure you want to delete this game?")? {
                controller.confirm_delete().await;
                exit_on_error(&controller);
                println!("✓ Game {} deleted", game_id);
            } else {
                controller.cancel_delete();
                println!("Delete cancelled");
            }
        }

        Commands::Status => {
            println!("Game CRUD Status");
            println!("================");
            println!();
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Configuration:");
            println!("  Server URL: {}", config.server_url);
            println!("  Log Level: {}", config.log_level);
            println!("  Statuses: {}", config.statuses.join(", "));
            match config.request_timeout_secs {
                Some(secs) => println!("  Request Timeout: {}s", secs),
                None => println!("  Request Timeout: none"),
            }
            println!();

            if let Ok(config_path) = Config::config_path() {
                println!("Config Path: {:?}", config_path);
            }
        }

        Commands::Gui => unreachable!("handled above"),
    }

    Ok(())
}

fn run_gui(config: Config) -> Result<()> {
    use game_crud::gui::GameCrudApp;

    let client = GamesClient::from_config(&config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Game CRUD"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Game CRUD",
        native_options,
        Box::new(move |cc| Ok(Box::new(GameCrudApp::new(cc, client, config.statuses)))),
    ) {
        eprintln!("Failed to run GUI: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn exit_on_error<B: GamesBackend>(controller: &GameListController<B>) {
    if let Some(message) = controller.state().error() {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}

fn print_entries(entries: &[ListEntry]) {
    if entries.is_empty() {
        println!("No games");
        return;
    }

    println!("Games:");
    println!("======");
    for entry in entries {
        println!("  {} {}", entry.title(), entry.id_label());
        println!("    {}", entry.description_line());
        println!("    {}", entry.status_line());
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
