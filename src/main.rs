//! Binary entry point: resolve paths, start logging, open the database and
//! hand control to the terminal UI until the user quits.
use car_info_manager::config::{AppPaths, Settings};
use car_info_manager::logging::init_file_logger;
use car_info_manager::ui::Logo;
use car_info_manager::{open_database, run_app, App, Controller, SqliteCarRepository};

/// A database that cannot be opened stops startup here with the error
/// printed to the terminal.
fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    paths.ensure_data_dir()?;
    init_file_logger(&paths.log_file())?;
    log::info!("using data directory {}", paths.data_dir().display());

    let settings = Settings::load(&paths.settings_file());
    let conn = open_database(&settings.database_path(&paths))?;
    let controller = Controller::new(SqliteCarRepository::new(conn))?;
    let logo = Logo::load(&settings.logo_path);

    let mut app = App::new(controller, settings)
        .with_logo(logo)
        .persist_settings_to(paths.settings_file());
    run_app(&mut app)
}
