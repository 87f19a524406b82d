//! The [`Weather`] orchestrator: holds the latest fetched records for a
//! location, decides when to refresh them and publishes every successful batch.

use crate::error::SmhiError;
use crate::staleness::{FetchStatus, StalenessPolicy, DEFAULT_MAX_AGE};
use crate::types::coordinates::Coordinates;
use crate::types::precipitation::PrecipitationCategory;
use crate::types::weather_data::WeatherData;
use crate::types::weather_symbol::WeatherSymbol;
use async_trait::async_trait;
use bon::bon;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use log::{debug, error, info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A source of weather records for a coordinate.
#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn fetch(&self, coordinates: Coordinates) -> Result<Vec<WeatherData>, SmhiError>;
}

/// What a call to [`Weather::fetch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Canned preview data was published.
    Preview,
    /// Another fetch is already running.
    InFlight,
    /// Held data is still fresh; nothing was fetched.
    Fresh,
    /// No coordinates or no service configured.
    NotConfigured,
    /// A new batch with this many records was published.
    Fetched(usize),
}

struct State {
    coordinates: Option<Coordinates>,
    service: Option<Arc<dyn WeatherService>>,
    policy: StalenessPolicy,
    fetch_automatically: bool,
    preview: bool,
}

struct Inner {
    state: Mutex<State>,
    sender: watch::Sender<Arc<[WeatherData]>>,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks the in-flight fetch as failed unless it is disarmed, so a fetch
/// future that is dropped or panics does not block later fetches.
struct InFlightGuard<'a> {
    inner: &'a Inner,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(inner: &'a Inner) -> Self {
        Self { inner, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("Weather fetch was abandoned before it finished");
            self.inner.state().policy.failed();
        }
    }
}

/// Keeps the best known weather records for one location.
///
/// Subscribers see an empty batch until the first successful fetch and after
/// that only successful batches, sorted by time. A failed fetch leaves the
/// previous batch in place.
///
/// Only one fetch runs at a time; further calls while one is in flight return
/// [`FetchOutcome::InFlight`]. A fetch future that is dropped before it
/// finishes, for example by `tokio::time::timeout`, counts as failed.
/// Cloning is cheap and clones share state.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use smhi::{Coordinates, ForecastService, SmhiError, Weather};
/// # #[tokio::main]
/// # async fn main() -> Result<(), SmhiError> {
/// let weather = Weather::builder()
///     .service(Arc::new(ForecastService::new()))
///     .coordinates(Coordinates::new(56.0465, 12.6945))
///     .build();
///
/// weather.fetch(false).await?;
/// if let Some(now) = weather.closest(chrono::Utc::now()) {
///     println!("{:.1}° and {:?}", now.air_temperature, now.symbol);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Weather {
    inner: Arc<Inner>,
}

#[bon]
impl Weather {
    /// Creates an orchestrator. Nothing is fetched until [`Weather::fetch`] is
    /// called or a setter triggers an automatic fetch.
    ///
    /// # Builder Methods
    ///
    /// * `.service(Arc<dyn WeatherService>)`: Optional data source.
    /// * `.coordinates(Coordinates)`: Optional location.
    /// * `.fetch_automatically(bool)`: Fetch when coordinates or service change.
    ///   Defaults to `true`.
    /// * `.max_age(Duration)`: How long a successful batch stays fresh.
    ///   Defaults to 10 minutes.
    #[builder]
    pub fn new(
        service: Option<Arc<dyn WeatherService>>,
        coordinates: Option<Coordinates>,
        fetch_automatically: Option<bool>,
        max_age: Option<Duration>,
    ) -> Self {
        Self::from_state(State {
            coordinates,
            service,
            policy: StalenessPolicy::new(max_age.unwrap_or(DEFAULT_MAX_AGE)),
            fetch_automatically: fetch_automatically.unwrap_or(true),
            preview: false,
        })
    }

    fn from_state(state: State) -> Self {
        let (sender, _) = watch::channel(Arc::<[WeatherData]>::from(Vec::new()));
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                sender,
            }),
        }
    }

    /// An orchestrator that only ever serves [`Weather::preview_data`] and never
    /// touches the network. The preview batch is published immediately.
    pub fn preview() -> Self {
        let weather = Self::from_state(State {
            coordinates: Some(preview_coordinates()),
            service: None,
            policy: StalenessPolicy::default(),
            fetch_automatically: false,
            preview: true,
        });
        weather.publish(Self::preview_data());
        weather
    }

    /// A single canned record one minute in the future.
    pub fn preview_data() -> Vec<WeatherData> {
        vec![WeatherData {
            is_forecast: true,
            time: Utc::now() + ChronoDuration::seconds(60),
            coordinates: preview_coordinates(),
            air_pressure: 1018.0,
            air_temperature: 20.1,
            air_temperature_feels_like: 24.0,
            horizontal_visibility: 49.2,
            wind_direction: 173.0,
            wind_speed: 5.7,
            wind_gust_speed: 9.2,
            relative_humidity: 71,
            thunder_probability: 1,
            total_cloud_cover: 6,
            low_level_cloud_cover: 2,
            medium_level_cloud_cover: 0,
            high_level_cloud_cover: 5,
            min_precipitation: 0.0,
            max_precipitation: 0.0,
            frozen_precipitation_percentage: 0,
            mean_precipitation_intensity: 0.0,
            median_precipitation_intensity: 0.0,
            precipitation_category: PrecipitationCategory::None,
            symbol: WeatherSymbol::VariableCloudiness,
        }]
    }

    /// Fetches a new batch unless held data is fresh.
    ///
    /// With `force` the freshness check is skipped, but a fetch already in flight
    /// still suppresses a new one.
    ///
    /// # Errors
    ///
    /// The error of the underlying [`WeatherService`]. Previously published data
    /// stays untouched.
    pub async fn fetch(&self, force: bool) -> Result<FetchOutcome, SmhiError> {
        let (service, coordinates) = {
            let mut state = self.inner.state();
            if state.preview {
                self.publish(Self::preview_data());
                return Ok(FetchOutcome::Preview);
            }
            if state.policy.is_in_flight() {
                debug!("Fetch already in flight");
                return Ok(FetchOutcome::InFlight);
            }
            if !force && state.policy.is_fresh() && !self.latest().is_empty() {
                debug!("Weather data is still fresh");
                return Ok(FetchOutcome::Fresh);
            }
            let (Some(coordinates), Some(service)) = (state.coordinates, state.service.clone())
            else {
                debug!("No coordinates or service configured");
                return Ok(FetchOutcome::NotConfigured);
            };
            state.policy.started();
            (service, coordinates)
        };

        let guard = InFlightGuard::new(&self.inner);
        let result = service.fetch(coordinates).await;
        guard.disarm();

        let mut state = self.inner.state();
        match result {
            Ok(mut records) => {
                records.sort_by_key(|record| record.time);
                let count = records.len();
                self.publish(records);
                state.policy.completed();
                info!("Published {count} weather records for {coordinates}");

                let moved = state.coordinates != Some(coordinates);
                if moved && state.fetch_automatically {
                    drop(state);
                    self.trigger(true);
                }
                Ok(FetchOutcome::Fetched(count))
            }
            Err(e) => {
                state.policy.failed();
                error!("Failed to fetch weather for {coordinates}: {e}");
                Err(e)
            }
        }
    }

    /// Runs [`Weather::fetch`] on a spawned task. Must be called within a Tokio runtime.
    pub fn trigger(&self, force: bool) -> JoinHandle<Result<FetchOutcome, SmhiError>> {
        let weather = self.clone();
        tokio::spawn(async move { weather.fetch(force).await })
    }

    /// Sets the location. A changed location triggers a forced fetch when
    /// automatic fetching is enabled.
    pub fn set_coordinates(&self, coordinates: Coordinates) {
        let mut state = self.inner.state();
        if state.coordinates == Some(coordinates) {
            return;
        }
        state.coordinates = Some(coordinates);
        if state.fetch_automatically {
            drop(state);
            self.trigger(true);
        }
    }

    /// Replaces the data source, triggering a fetch when automatic fetching is enabled.
    pub fn set_service(&self, service: Arc<dyn WeatherService>) {
        let mut state = self.inner.state();
        state.service = Some(service);
        if state.fetch_automatically {
            drop(state);
            self.trigger(false);
        }
    }

    pub fn set_fetch_automatically(&self, enabled: bool) {
        self.inner.state().fetch_automatically = enabled;
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.inner.state().coordinates
    }

    pub fn status(&self) -> FetchStatus {
        self.inner.state().policy.status()
    }

    /// Starts a background task that calls `fetch(false)` every `max_age` while
    /// automatic fetching is enabled. The task ends once every handle to this
    /// orchestrator is dropped.
    pub fn spawn_auto_refresh(&self) -> JoinHandle<()> {
        let period = self.inner.state().policy.max_age();
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                let weather = Weather { inner };
                let enabled = weather.inner.state().fetch_automatically;
                if enabled {
                    // Failures are logged by `fetch`.
                    let _ = weather.fetch(false).await;
                }
            }
        })
    }

    /// Receives every published batch. The initial value is the current batch.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[WeatherData]>> {
        self.inner.sender.subscribe()
    }

    /// The currently published batch.
    pub fn latest(&self) -> Arc<[WeatherData]> {
        self.inner.sender.borrow().clone()
    }

    /// The record closest in time to `instant`. Ties go to the earlier record.
    pub fn closest(&self, instant: DateTime<Utc>) -> Option<WeatherData> {
        self.latest()
            .iter()
            .min_by_key(|record| (record.time - instant).abs())
            .cloned()
    }

    /// Records with `from <= time <= to`.
    pub fn between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<WeatherData> {
        self.latest()
            .iter()
            .filter(|record| record.time >= from && record.time <= to)
            .cloned()
            .collect()
    }

    fn publish(&self, records: Vec<WeatherData>) {
        self.inner.sender.send_replace(records.into());
    }
}

fn preview_coordinates() -> Coordinates {
    Coordinates::new(56.0014127, 12.7416203)
}
