//! Assertion utilities for validating Kubernetes event lists.
//!
//! Event lists are ordered oldest first. Every search walks the list from the
//! end so that the most recent matching event is the one that gets checked.

use thiserror::Error;
use tracing::debug;

use crate::events::Event;

/// Error type for event validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventAssertionError {
    #[error("Failed to find the event \"{0}\" in the list. Exiting...")]
    NotFound(String),

    #[error("Failed to find the event starting with \"{0}\" in the list. Exiting...")]
    PrefixNotFound(String),

    #[error("expected: lists are the same length (old: {old}, new: {new})")]
    LengthMismatch { old: usize, new: usize },

    #[error("Expected: no new events. There is a new event found:\"{0}\". Exiting...")]
    NewEventFound(String),

    #[error("Event count did not increase: expected more than {expected_more_than}, got {actual}")]
    CountNotIncreased { expected_more_than: u32, actual: u32 },

    #[error("Event count mismatch: expected {expected}, got {actual}")]
    CountMismatch { expected: u32, actual: u32 },

    #[error("Event message does not contain \"{field}\": {message}")]
    MissingField { field: String, message: String },
}

fn find_latest<'a>(event_text: &str, events_list: &'a [Event]) -> Result<&'a Event, EventAssertionError> {
    let event = events_list
        .iter()
        .rev()
        .find(|event| event.message.contains(event_text))
        .ok_or_else(|| EventAssertionError::NotFound(event_text.to_string()))?;

    debug!(event_text, message = %event.message, count = event.count, "matched event");
    Ok(event)
}

/// Asserts that no event counter changed between two snapshots of the same list.
///
/// # Arguments
///
/// * `old_list` - The events listed before the test step
/// * `new_list` - The events listed after the test step
///
/// # Returns
///
/// * `Ok(())` - If both lists have the same length and every count is unchanged
/// * `Err(EventAssertionError)` - Naming the newest event whose count changed
pub fn assert_no_new_events(old_list: &[Event], new_list: &[Event]) -> Result<(), EventAssertionError> {
    if old_list.len() != new_list.len() {
        return Err(EventAssertionError::LengthMismatch {
            old: old_list.len(),
            new: new_list.len(),
        });
    }

    for (old, new) in old_list.iter().zip(new_list).rev() {
        if old.count != new.count {
            return Err(EventAssertionError::NewEventFound(new.message.clone()));
        }
    }

    Ok(())
}

/// Asserts that the most recent event containing `event_text` has a counter
/// strictly greater than `count`.
///
/// # Arguments
///
/// * `event_text` - Text the event message must contain
/// * `count` - The value the counter must exceed
/// * `events_list` - The events to search
///
/// # Returns
///
/// * `Ok(())` - If the event was found and its counter increased
/// * `Err(EventAssertionError)` - If the event is missing or its counter did not increase
pub fn assert_event_count_increased(
    event_text: &str,
    count: u32,
    events_list: &[Event],
) -> Result<(), EventAssertionError> {
    let event = find_latest(event_text, events_list)?;
    if event.count <= count {
        return Err(EventAssertionError::CountNotIncreased {
            expected_more_than: count,
            actual: event.count,
        });
    }

    Ok(())
}

/// Asserts that the most recent event containing `event_text` has exactly
/// the counter `count`.
pub fn assert_event_and_count(
    event_text: &str,
    count: u32,
    events_list: &[Event],
) -> Result<(), EventAssertionError> {
    let event = find_latest(event_text, events_list)?;
    if event.count != count {
        return Err(EventAssertionError::CountMismatch {
            expected: count,
            actual: event.count,
        });
    }

    Ok(())
}

/// Returns the counter of the most recent event containing `event_text`.
pub fn assert_event_and_get_count(event_text: &str, events_list: &[Event]) -> Result<u32, EventAssertionError> {
    find_latest(event_text, events_list).map(|event| event.count)
}

/// Asserts that some event message contains `event_text`.
pub fn assert_event(event_text: &str, events_list: &[Event]) -> Result<(), EventAssertionError> {
    find_latest(event_text, events_list).map(|_| ())
}

/// Asserts that the most recent event whose message starts with `event_text`
/// mentions every entry of `fields_list`.
///
/// Only the newest prefix match is inspected; older events starting with the
/// same text are not considered even when they would contain the fields.
pub fn assert_event_starts_with_text_and_contains_errors<S: AsRef<str>>(
    event_text: &str,
    events_list: &[Event],
    fields_list: &[S],
) -> Result<(), EventAssertionError> {
    let event = events_list
        .iter()
        .rev()
        .find(|event| event.message.starts_with(event_text))
        .ok_or_else(|| EventAssertionError::PrefixNotFound(event_text.to_string()))?;

    debug!(event_text, message = %event.message, "matched event prefix");

    for field in fields_list {
        let field = field.as_ref();
        if !event.message.contains(field) {
            return Err(EventAssertionError::MissingField {
                field: field.to_string(),
                message: event.message.clone(),
            });
        }
    }

    Ok(())
}
