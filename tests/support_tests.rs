//! Tests for the support helpers and for mixing `bind` with `fmap`.

#![cfg(feature = "support")]

use rstest::rstest;
use std::cell::{Cell, RefCell};
use vacant::combinators::{Chain, bind, chain, fmap};
use vacant::support::{ExecutionStatus, FAILURE, SUCCESS, attempt, discard, from_variant, sink};

#[derive(Debug, Clone, PartialEq)]
struct Person;

#[derive(Debug, Clone, PartialEq)]
struct Address;

fn zip_code(_: &Address) -> &'static str {
    "123"
}

// =============================================================================
// bind followed by fmap
// =============================================================================

#[rstest]
fn hierarchy_all_present_returns_zip_code() {
    let find_person = || Some(Person);
    let find_address = |_: &Person| Some(Address);

    let result = chain(find_person()) >> find_address | zip_code;
    assert_eq!(result.into_inner(), Some("123"));
}

#[rstest]
fn hierarchy_any_empty_returns_empty_zip_code() {
    let find_person = || Some(Person);
    let find_address = |_: &Person| Some(Address);
    let find_person_empty = || None::<Person>;
    let find_address_empty = |_: &Person| None::<Address>;

    assert_eq!((chain(find_person()) >> find_address_empty | zip_code).into_inner(), None);
    assert_eq!((chain(find_person_empty()) >> find_address | zip_code).into_inner(), None);
    assert_eq!((chain(find_person_empty()) >> find_address_empty | zip_code).into_inner(), None);
}

#[rstest]
fn discard_starts_a_chain_from_a_niladic_lookup() {
    let find_person = || Some(Person);
    let find_address = |_: &Person| Some(Address);

    let session = Some(42_u64);
    let result = fmap(&bind(&bind(&session, discard(find_person)), find_address), zip_code);
    assert_eq!(result, Some("123"));
}

// =============================================================================
// sink
// =============================================================================

#[rstest]
fn sink_keeps_chain_alive() {
    let log = RefCell::new(Vec::new());

    let saved: Chain<ExecutionStatus> = chain(Some(5)).bind(sink(|| log.borrow_mut().push("saved")));
    let result = saved.fmap(|_| "done");

    assert_eq!(result.into_inner(), Some("done"));
    assert_eq!(*log.borrow(), vec!["saved"]);
}

#[rstest]
fn sink_after_failed_lookup_never_runs() {
    let runs = Cell::new(0);
    let lookup = |id: &u32| (*id < 10).then_some(*id);

    let status: ExecutionStatus = chain(Some(99_u32))
        .bind(lookup)
        .bind(sink(|| runs.set(runs.get() + 1)))
        .into_inner();

    assert_eq!(status, FAILURE);
    assert_eq!(runs.get(), 0);
}

#[rstest]
fn consecutive_sinks_each_run_once() {
    let first = Cell::new(0);
    let second = Cell::new(0);

    let after_first: Chain<ExecutionStatus> = chain(SUCCESS).bind(sink(|| first.set(first.get() + 1)));
    let status: ExecutionStatus = after_first
        .bind(sink(|| second.set(second.get() + 1)))
        .into_inner();

    assert_eq!(status, SUCCESS);
    assert_eq!((first.get(), second.get()), (1, 1));
}

// =============================================================================
// attempt and from_variant
// =============================================================================

#[rstest]
#[case("8080", Some(8080))]
#[case("80800", None)]
#[case("http", None)]
fn attempt_drops_the_error(#[case] text: &str, #[case] expected: Option<u16>) {
    let port: Option<u16> = attempt(|| text.parse::<u16>());
    assert_eq!(port, expected);
}

#[rstest]
fn attempt_feeds_a_chain() {
    let port: Option<u16> = attempt(|| "443".parse::<u16>());
    let secure = fmap(&port, |port| *port == 443);
    assert_eq!(secure, Some(true));
}

#[derive(Debug, Clone, PartialEq)]
enum Setting {
    Flag(bool),
    Count(u32),
    Name(String),
}

impl TryFrom<Setting> for u32 {
    type Error = Setting;

    fn try_from(setting: Setting) -> Result<Self, Setting> {
        match setting {
            Setting::Count(count) => Ok(count),
            other => Err(other),
        }
    }
}

#[rstest]
#[case(Setting::Count(3), Some(3))]
#[case(Setting::Flag(true), None)]
#[case(Setting::Name(String::from("retries")), None)]
fn from_variant_selects_one_payload(#[case] setting: Setting, #[case] expected: Option<u32>) {
    let count: Option<u32> = from_variant(setting);
    assert_eq!(count, expected);
}
