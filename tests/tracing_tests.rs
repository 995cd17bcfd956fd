//! Trace events emitted when a combinator skips its mapping function.

#![cfg(all(feature = "tracing", feature = "combinators"))]

use rstest::rstest;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use vacant::combinators::{bind, chain, fmap};

/// Collects the `combinator` field of every event.
#[derive(Clone, Default)]
struct Recorder {
    combinators: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn recorded(&self) -> Vec<String> {
        self.combinators.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct CombinatorField(Option<String>);

impl Visit for CombinatorField {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "combinator" {
            self.0 = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut visitor = CombinatorField::default();
        event.record(&mut visitor);
        if let Some(combinator) = visitor.0 {
            self.combinators.lock().unwrap().push(combinator);
        }
    }
}

fn recording<R>(body: impl FnOnce() -> R) -> (R, Vec<String>) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, recorder.recorded())
}

#[rstest]
fn empty_fmap_emits_one_event() {
    let (result, events) = recording(|| fmap(&None::<i32>, |value| value + 1));
    assert_eq!(result, None);
    assert_eq!(events, vec!["fmap"]);
}

#[rstest]
fn empty_bind_emits_one_event() {
    let (result, events) = recording(|| bind(&None::<&str>, |text| text.parse::<u8>().ok()));
    assert_eq!(result, None);
    assert_eq!(events, vec!["bind"]);
}

#[rstest]
fn populated_input_emits_nothing() {
    let (result, events) = recording(|| fmap(&Some(2), |value| value * 2));
    assert_eq!(result, Some(4));
    assert!(events.is_empty());
}

#[rstest]
fn short_circuit_is_traced_at_every_skipped_step() {
    let parse = |text: &String| text.parse::<i32>().ok();
    let (result, events) = recording(|| {
        (chain(Some(String::from("x"))) >> parse | (|number: &i32| number + 1)).into_inner()
    });
    assert_eq!(result, None);
    assert_eq!(events, vec!["fmap"]);
}

#[rstest]
fn fmt_subscriber_with_filter_leaves_results_unchanged() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("vacant=trace"))
        .with_test_writer()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        let empty = chain(None::<u32>) >> (|id: &u32| Some(id + 1)) | (|id: &u32| id.to_string());
        let full = chain(Some(1_u32)) >> (|id: &u32| Some(id + 1)) | (|id: &u32| id.to_string());
        (empty.into_inner(), full.into_inner())
    });

    assert_eq!(result, (None, Some(String::from("2"))));
}
