#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> Result<(), akshara_shift::app::AppError> {
    akshara_shift::app::run()
}
