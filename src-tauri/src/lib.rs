pub mod api;
pub mod config;
pub mod logging;

#[cfg(feature = "desktop")]
pub fn run() {
    use log::{error, info};
    use tauri::Manager;

    use api::commands::{self, AppState};
    use config::AppConfig;

    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("{}, falling back to defaults", e);
        AppConfig::default()
    });
    if let Err(e) = logging::init_logger(&config) {
        eprintln!("{}", e);
    }
    info!("starting {}", config.window_title);

    let title = config.window_title.clone();
    let result = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            commands::set_field,
            commands::get_form,
            commands::list_students,
            commands::search_types,
            commands::add_student,
            commands::select_students,
            commands::update_student,
            commands::delete_students,
            commands::search_students,
            commands::show_all_students,
            commands::clear_form,
        ])
        .setup(move |app| {
            if let Some(window) = app.get_webview_window("main") {
                window.set_title(&title)?;
            }
            Ok(())
        })
        .run(tauri::generate_context!());

    if let Err(e) = result {
        error!("error while running the application: {}", e);
    }
}
