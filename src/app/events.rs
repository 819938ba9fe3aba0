use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::domain::weather::ForecastBundle;

/// Session events. Fetch results arrive from spawned tasks over the same
/// channel the input stream feeds, so the state machine sees one ordered
/// stream.
#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    FetchStarted,
    FetchSucceeded(ForecastBundle),
    FetchFailed(String),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
