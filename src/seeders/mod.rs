pub mod demo_seeder;

use crate::config::AppState;

pub async fn run_seeders(state: &AppState) -> Result<(), String> {
    demo_seeder::seed_demo_data(state).await
}
