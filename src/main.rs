fn main() -> Result<(), eframe::Error> {
    // Set up logging, controlled by RUST_LOG
    env_logger::init();

    // Run the editor
    drawer::run_app()
}
