pub mod analysis;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod heatmap;
pub mod logging;
pub mod models;
pub mod parse;
pub mod records;
pub mod reports;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(test)]
mod test_utils;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  use config::AppConfig;
  use db::AppState;
  use log::{error, info, warn};
  use std::sync::Arc;
  use tauri::Manager;

  let (config, config_error) = match AppConfig::load() {
    Ok(config) => (config, None),
    Err(e) => (AppConfig::default(), Some(e)),
  };
  logging::init(&config);
  if let Some(e) = config_error {
    warn!("Falling back to default configuration: {}", e);
  }

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(move |app| {
      let app_handle = app.handle().clone();
      let data_dir = app_handle.path().app_data_dir()?;
      let db_path = config.resolve_db_path(&data_dir);

      tauri::async_runtime::block_on(async move {
        match db::initialize_db(&db_path, &config).await {
          Ok(pool) => {
            let state = Arc::new(AppState { db: pool });
            app_handle.manage(state);
            info!("Database ready");
          }
          Err(e) => {
            error!("Failed to initialize database: {}", e);
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_tasks,
      commands::add_task,
      commands::update_task,
      commands::complete_task,
      commands::delete_task,
      // Body weight
      commands::records::add_weight,
      commands::records::delete_weight,
      commands::records::get_weights,
      commands::records::get_latest_weight,
      // Templates and routine
      commands::records::get_templates,
      commands::records::add_template,
      commands::records::update_template,
      commands::records::delete_template,
      commands::records::get_routine,
      commands::records::set_routine_day,
      commands::records::clear_routine_day,
      commands::records::schedule_day,
      // Charts
      commands::reports::get_chart_series,
      commands::reports::get_weight_series,
      commands::reports::get_cardio_series,
      commands::reports::get_heat_map,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
