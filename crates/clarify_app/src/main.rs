mod app;
mod effects;
mod lexicon_file;
mod logging;

use std::path::PathBuf;

use clarify_core::Heuristics;
use clarify_engine::BackendSettings;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::destination_from_env());

    let lexicon_path = std::env::var("CLARIFY_LEXICON")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(lexicon_file::LEXICON_FILENAME));
    let lexicon = lexicon_file::load_lexicon(&lexicon_path)?;
    let heuristics = Heuristics::compile(&lexicon)?;

    let settings = match std::env::var("CLARIFY_BACKEND_URL") {
        Ok(url) => BackendSettings::new(url),
        Err(_) => BackendSettings::default(),
    };

    app::run(heuristics, settings)
}
