use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    app::events::AppEvent,
    app::settings::RuntimeSettings,
    data::forecast::ForecastClient,
    domain::{
        localtime::Localizer,
        oracle::{DayOutlook, consult_date},
        thresholds::Thresholds,
        weather::ForecastBundle,
    },
    error::OracleError,
};

/// One consultation request: everything the orchestrator needs, carried as
/// an explicit value instead of closures over ambient variables.
#[derive(Debug, Clone)]
pub struct ConsultRequest {
    pub location: String,
    pub thresholds: Thresholds,
    pub localizer: Localizer,
    pub days: u8,
    /// Date to show first; `None` means today in the configured zone.
    pub initial_date: Option<NaiveDate>,
}

impl ConsultRequest {
    #[must_use]
    pub fn from_settings(settings: &RuntimeSettings, initial_date: Option<NaiveDate>) -> Self {
        Self {
            location: settings.location.clone(),
            thresholds: settings.thresholds(),
            localizer: Localizer::new(settings.zone()),
            days: settings.days,
            initial_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Fetching,
    DisplayingDay,
    NoData,
    Error,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub request: ConsultRequest,
    pub loading_message: String,
    pub last_error: Option<String>,
    /// Retained for the whole session; date re-selection never re-fetches.
    pub bundle: Option<ForecastBundle>,
    pub selected_date: Option<NaiveDate>,
    pub outlook: Option<DayOutlook>,
    pub fetch_in_flight: bool,
    pub client: ForecastClient,
}

impl AppState {
    #[must_use]
    pub fn new(request: ConsultRequest, client: ForecastClient) -> Self {
        Self {
            mode: AppMode::Idle,
            running: true,
            request,
            loading_message: "Enter a location and consult the oracle".to_string(),
            last_error: None,
            bundle: None,
            selected_date: None,
            outlook: None,
            fetch_in_flight: false,
            client,
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                self.start_fetch(tx).await?;
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                self.mode = AppMode::Fetching;
                self.loading_message =
                    format!("Consulting the forecast for {}...", self.request.location);
            }
            AppEvent::FetchSucceeded(bundle) => {
                self.fetch_in_flight = false;
                self.last_error = None;
                self.bundle = Some(bundle);
                let date = self.initial_date(Utc::now());
                self.apply_consultation(date, Utc::now());
            }
            AppEvent::FetchFailed(message) => {
                self.fetch_in_flight = false;
                self.mode = AppMode::Error;
                self.last_error = Some(message);
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    /// Date shown right after a fetch: the explicit request date, else
    /// today in the configured zone.
    #[must_use]
    pub fn initial_date(&self, now: DateTime<Utc>) -> NaiveDate {
        self.request
            .initial_date
            .unwrap_or_else(|| self.request.localizer.local_date(now))
    }

    /// Re-runs the orchestrator against the retained bundle. Synchronous:
    /// date selection never touches the network.
    pub fn apply_consultation(&mut self, date: NaiveDate, now: DateTime<Utc>) {
        let Some(bundle) = &self.bundle else {
            return;
        };

        self.selected_date = Some(date);
        match consult_date(
            bundle,
            date,
            &self.request.thresholds,
            &self.request.localizer,
            now,
        ) {
            Ok(outlook) => {
                self.outlook = Some(outlook);
                self.mode = AppMode::DisplayingDay;
            }
            Err(OracleError::NotFound(date)) => {
                debug!(%date, "selected date outside the fetched horizon");
                self.outlook = None;
                self.mode = AppMode::NoData;
            }
            Err(err) => {
                self.outlook = None;
                self.mode = AppMode::Error;
                self.last_error = Some(err.to_string());
            }
        }
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    tx.send(AppEvent::Quit).await?;
                }
                KeyCode::Char('r') => {
                    self.start_fetch(tx).await?;
                }
                KeyCode::Char(digit @ '1'..='5') => {
                    let idx = (digit as usize) - ('1' as usize);
                    if let Some(date) = self.forecast_dates().get(idx).copied() {
                        self.apply_consultation(date, Utc::now());
                    }
                }
                KeyCode::Left => self.select_adjacent(-1),
                KeyCode::Right => self.select_adjacent(1),
                _ => {}
            },
            _ => {}
        }

        Ok(())
    }

    fn select_adjacent(&mut self, step: i64) {
        let dates = self.forecast_dates();
        let Some(current) = self.selected_date else {
            return;
        };
        let Some(position) = dates.iter().position(|d| *d == current) else {
            return;
        };
        let next = position as i64 + step;
        if next >= 0
            && let Some(date) = dates.get(next as usize).copied()
        {
            self.apply_consultation(date, Utc::now());
        }
    }

    #[must_use]
    pub fn forecast_dates(&self) -> Vec<NaiveDate> {
        self.bundle.as_ref().map(ForecastBundle::dates).unwrap_or_default()
    }

    /// Kicks off a new consultation: one fetch per explicit request.
    async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }

        tx.send(AppEvent::FetchStarted).await?;

        let client = self.client.clone();
        let request = self.request.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = client
                .fetch(
                    &request.location,
                    request.days,
                    &request.localizer,
                    Utc::now(),
                )
                .await;
            let event = match result {
                Ok(bundle) => AppEvent::FetchSucceeded(bundle),
                Err(err) => AppEvent::FetchFailed(err.to_string()),
            };
            let _ = tx2.send(event).await;
        });

        Ok(())
    }
}
