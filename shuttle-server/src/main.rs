use std::net::SocketAddr;

use shuttle_server::timetable::Timetable;
use shuttle_server::weather::WeatherFeed;
use shuttle_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The timetable is fixed configuration data, loaded once.
    let timetable = Timetable::campus_default();
    println!("Loaded {} shuttle schedules", timetable.len());

    // Weather starts from the mild default; PUT /weather replaces it.
    let weather = WeatherFeed::default();

    let state = AppState::new(timetable, weather);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Campus shuttle server listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /health              - Health check");
    println!("  GET  /schedules           - List all shuttle schedules");
    println!("  GET  /schedules/:bus/eta  - Delay-adjusted arrival for a bus");
    println!("  GET  /weather             - Current weather and implied delay");
    println!("  PUT  /weather             - Replace the weather reading");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
