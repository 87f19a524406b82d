// demos/observation_by_station.rs
use smhi::{ObservationsClient, ObservationsError};

#[tokio::main]
async fn main() -> Result<(), ObservationsError> {
    // Set RUST_LOG=debug to follow every hop of the traversal
    env_logger::init();

    let client = ObservationsClient::new();

    // Parameter "1" is the hourly air temperature
    let value = client
        .by_station_name("lund")
        .parameter("1")
        .period("latest-day")
        .call()
        .await?;

    println!(
        "{} ({}), {} in {}",
        value.station.name, value.station.key, value.parameter.name, value.parameter.unit
    );
    for reading in &value.value {
        println!("{}  {:>6}  [{}]", reading.date, reading.value, reading.quality);
    }

    Ok(())
}
