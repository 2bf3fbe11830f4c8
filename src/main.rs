use clap::Parser;
use sthlm_map_search::config::Command;
use sthlm_map_search::utils::error::ErrorCategory;
use sthlm_map_search::utils::{logger, validation};
use sthlm_map_search::utils::validation::Validate;
use sthlm_map_search::{
    build_map_url, AddressHooks, AutocompleteController, CliConfig, LocalStorage, SearchConfig,
    SearchError, SelectionEvent, StdoutNotifier, StoredSource, SuggestionStore,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_search_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    run(cli.command, config)
}

fn run(command: Command, config: SearchConfig) -> anyhow::Result<()> {
    let hooks = AddressHooks::new(config.candidates.clone(), StdoutNotifier);

    match command {
        Command::MapUrl { address } => {
            println!("{}", build_map_url(&config.map, &address));
        }
        Command::Suggest {
            term,
            render,
            store,
        } => {
            let store_path = store.or_else(|| config.store.path.clone());
            let rows = match store_path {
                Some(path) => {
                    let store = load_store(&path);
                    suggest_rows(
                        &AutocompleteController::new(
                            config.widget.clone(),
                            StoredSource::new(store, hooks),
                        ),
                        &term,
                        render,
                    )
                }
                None => suggest_rows(
                    &AutocompleteController::new(config.widget.clone(), hooks),
                    &term,
                    render,
                ),
            };
            for row in rows.unwrap_or_else(|e| exit_with(e)) {
                println!("{}", row);
            }
        }
        Command::Select { term, index, event } => {
            let controller = AutocompleteController::new(config.widget.clone(), hooks);
            let rendered = controller
                .query(&term)
                .unwrap_or_else(|e| exit_with(e))
                .unwrap_or_default();
            let Some(markup) = rendered.get(index) else {
                anyhow::bail!(
                    "No suggestion #{} for '{}' ({} available)",
                    index,
                    term,
                    rendered.len()
                );
            };
            controller
                .select(&SelectionEvent::from_event_type(&event), &term, markup)
                .unwrap_or_else(|e| exit_with(e));
        }
        Command::BuildIndex { output, max_prefix } => {
            let max_prefix = max_prefix.unwrap_or(config.store.max_prefix_chars);
            if let Err(e) = validation::validate_positive_number("max_prefix", max_prefix, 1) {
                exit_with(e);
            }
            let store = SuggestionStore::build_from(&config.candidates, max_prefix);
            store
                .save(&LocalStorage::new(".".to_string()), &output)
                .unwrap_or_else(|e| exit_with(e));
            println!("✅ {} prefix entries written to {}", store.len(), output);
        }
        Command::Check { address } => {
            if validation::valid_address(&address) {
                println!("✅ valid address");
            } else {
                println!("❌ address contains characters outside the allowed set");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn load_store(path: &str) -> SuggestionStore {
    SuggestionStore::load(&LocalStorage::new(".".to_string()), path).unwrap_or_else(|e| exit_with(e))
}

fn suggest_rows<H: sthlm_map_search::core::AutocompleteHooks>(
    controller: &AutocompleteController<H>,
    term: &str,
    render: bool,
) -> sthlm_map_search::Result<Vec<String>> {
    if render {
        return Ok(controller.query(term)?.unwrap_or_default());
    }

    Ok(controller
        .suggestions(term)
        .unwrap_or_default()
        .into_iter()
        .map(|c| format!("{} ({})", c.label, c.tag))
        .collect())
}

fn exit_with(e: SearchError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.category() {
        ErrorCategory::Configuration => 2,
        ErrorCategory::Page | ErrorCategory::Storage => 1,
        ErrorCategory::Internal => 3,
    };
    std::process::exit(exit_code)
}
