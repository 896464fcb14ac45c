mod app;
use hsk_flashcards::*;

use app::MyApp;
use config::AppConfig;
use database::db::init_database;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let conn = init_database(&config.db_path).expect("Failed to initialize database");

    let mut rng = ChaCha8Rng::from_entropy();
    let dataset = dataset::load_dataset(&conn, &config, &mut rng);

    log::info!(
        "Loaded {} words from {}",
        dataset.catalog.len(),
        dataset.origin
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "HSK Flashcards",
        options,
        Box::new(|_cc| Ok(Box::new(MyApp::new(config, conn, dataset, rng)))),
    )
}
