// demos/observation_by_location.rs
use smhi::{condition_description, ObservationsClient, ObservationsError};

#[tokio::main]
async fn main() -> Result<(), ObservationsError> {
    env_logger::init();

    let client = ObservationsClient::new();

    // Present weather (parameter 13) at the station closest to Helsingborg
    let value = client
        .by_coordinates(56.0465, 12.6945)
        .parameter("13")
        .call()
        .await?;

    println!("Closest station: {}", value.station.name);
    match value.latest() {
        Some(reading) => {
            let description = reading
                .value
                .parse::<u16>()
                .ok()
                .and_then(condition_description)
                .unwrap_or("okänd kod");
            println!("{}: {} ({})", reading.date, description, reading.value);
        }
        None => println!("No readings in the latest hour"),
    }

    Ok(())
}
