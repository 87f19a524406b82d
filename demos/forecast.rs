// demos/forecast.rs
use smhi::{dew_point, Coordinates, ForecastService, SmhiError, Weather};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), SmhiError> {
    env_logger::init();

    let helsingborg = Coordinates::new(56.0465, 12.6945);
    let weather = Weather::builder()
        .service(Arc::new(ForecastService::new().skip_incomplete(true)))
        .coordinates(helsingborg)
        .build();

    weather.fetch(false).await?;

    let now = chrono::Utc::now();
    if let Some(current) = weather.closest(now) {
        println!(
            "{}: {:.1}°C (feels like {:.1}°C, dew point {:.1}°C), {:?}, wind {:.1} m/s",
            current.time,
            current.air_temperature,
            current.air_temperature_feels_like,
            dew_point(current.air_temperature, current.relative_humidity as f64),
            current.symbol,
            current.wind_speed,
        );
    }

    let next_day = weather.between(now, now + chrono::Duration::hours(24));
    println!("{} forecast records in the next 24 hours", next_day.len());
    for record in next_day.iter().step_by(3) {
        println!(
            "{}  {:>5.1}°C  {:>3}%  {:?}",
            record.time.format("%a %H:%M"),
            record.air_temperature,
            record.relative_humidity,
            record.precipitation_category
        );
    }

    Ok(())
}
