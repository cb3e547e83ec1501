use std::sync::{Mutex, MutexGuard};

use log::debug;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use super::{
    controller::{FormController, FormField, Outcome, StudentForm},
    student::{SearchField, StudentRecord},
};

pub struct AppState {
    pub controller: Mutex<FormController>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: Mutex::new(FormController::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, FormController>, String> {
        self.controller
            .lock()
            .map_err(|e| format!("Failed to lock the student list: {}", e))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// show the outcome of an action in a message box
/// return whether the action went through, so the frontend knows to refresh
fn report(app: &AppHandle, action: &str, outcome: Outcome) -> bool {
    match outcome {
        Ok(Some(notice)) => {
            app.dialog()
                .message(notice.message)
                .title(notice.title)
                .kind(MessageDialogKind::Info)
                .show(|_| {});
            true
        }
        Ok(None) => true,
        Err(err) => {
            // debug only, the message box below is what tells the user
            debug!("{} refused: {}", action, err);
            app.dialog()
                .message(err.to_string())
                .title("Error")
                .kind(MessageDialogKind::Error)
                .show(|_| {});
            false
        }
    }
}

#[tauri::command]
pub fn set_field(state: State<'_, AppState>, field: FormField, value: String) -> Result<bool, String> {
    Ok(state.lock()?.set_field(field, &value))
}

#[tauri::command]
pub fn get_form(state: State<'_, AppState>) -> Result<StudentForm, String> {
    Ok(state.lock()?.form().clone())
}

#[tauri::command]
pub fn list_students(state: State<'_, AppState>) -> Result<Vec<StudentRecord>, String> {
    Ok(state.lock()?.rows().into_iter().cloned().collect())
}

#[tauri::command]
pub fn search_types() -> Vec<&'static str> {
    SearchField::ALL.iter().map(|field| field.label()).collect()
}

#[tauri::command]
pub fn add_student(app: AppHandle, state: State<'_, AppState>) -> Result<bool, String> {
    let outcome = state.lock()?.add();
    Ok(report(&app, "add", outcome))
}

#[tauri::command]
pub fn select_students(
    app: AppHandle,
    state: State<'_, AppState>,
    rows: Vec<usize>,
) -> Result<bool, String> {
    let outcome = state.lock()?.select(&rows);
    Ok(report(&app, "select", outcome))
}

#[tauri::command]
pub fn update_student(app: AppHandle, state: State<'_, AppState>) -> Result<bool, String> {
    let outcome = state.lock()?.update();
    Ok(report(&app, "update", outcome))
}

#[tauri::command]
pub fn delete_students(app: AppHandle, state: State<'_, AppState>) -> Result<bool, String> {
    let outcome = state.lock()?.delete();
    Ok(report(&app, "delete", outcome))
}

#[tauri::command]
pub fn search_students(
    app: AppHandle,
    state: State<'_, AppState>,
    search_type: String,
    keyword: String,
) -> Result<bool, String> {
    let outcome = state.lock()?.search(&search_type, &keyword);
    Ok(report(&app, "search", outcome))
}

#[tauri::command]
pub fn show_all_students(app: AppHandle, state: State<'_, AppState>) -> Result<bool, String> {
    let outcome = state.lock()?.show_all();
    Ok(report(&app, "show all", outcome))
}

#[tauri::command]
pub fn clear_form(state: State<'_, AppState>) -> Result<(), String> {
    state.lock()?.clear();
    Ok(())
}
