use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

use word_jumble::cli::{CliView, parse_cli};
use word_jumble::config::{self, GameConfig};
use word_jumble::logging;
use word_jumble::session::play;
use word_jumble::tui::TuiView;

fn main() {
    let cli = parse_cli();
    logging::init(cli.debug || config::debug_env_set());

    let game_config = match GameConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let vocab = match config::load_vocab(&game_config) {
        Ok(vocab) => vocab,
        Err(e) => {
            eprintln!("Failed to load vocabulary: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} words, {} to find.",
        vocab.len(),
        game_config.success_at_count.min(vocab.len())
    );

    let mut rng = match game_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = if cli.tui {
        match TuiView::new() {
            Ok(mut view) => play(&vocab, &game_config, &mut rng, &mut view),
            Err(e) => Err(e),
        }
    } else {
        let stdin = io::stdin();
        let mut view = CliView::new(stdin.lock());
        play(&vocab, &game_config, &mut rng, &mut view)
    };

    if let Err(e) = result {
        eprintln!("Game aborted: {e}");
        std::process::exit(1);
    }
}
