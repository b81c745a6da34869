//! Page states and how API replies move a page between them.
//!
//! Kept free of any view code so the transitions can be tested off the
//! browser.

use std::fmt::Display;

use crate::api::{ApiReply, Envelope, Vehicle};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";
pub const NO_RESULTS_MESSAGE: &str = "No vehicles found";
pub const VEHICLE_NOT_FOUND_MESSAGE: &str = "Vehicle not found";

#[derive(Clone, Debug, PartialEq)]
pub enum HomeState {
    Idle,
    Searching,
    Results(Vec<Vehicle>),
    Empty(String),
    Failed(String),
}

impl HomeState {
    /// Blank queries never reach the network.
    pub fn validate_query(raw: &str) -> Result<String, HomeState> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(HomeState::Failed(EMPTY_QUERY_MESSAGE.to_string()))
        } else {
            Ok(trimmed.to_string())
        }
    }

    pub fn from_reply(status: u16, body: Envelope<Vec<Vehicle>>) -> Self {
        let Envelope {
            success,
            data,
            message,
            error,
            ..
        } = body;
        match status {
            200..=299 if success => match data {
                Some(vehicles) if !vehicles.is_empty() => HomeState::Results(vehicles),
                _ => HomeState::Empty(NO_RESULTS_MESSAGE.to_string()),
            },
            404 => HomeState::Empty(message.unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string())),
            _ => HomeState::Failed(failure_message(status, message, error)),
        }
    }

    pub fn from_result<E: Display>(result: Result<ApiReply<Vec<Vehicle>>, E>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(reply.status, reply.body),
            Err(err) => {
                log::warn!("vehicle search failed: {err}");
                HomeState::Failed(err.to_string())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Found(Vehicle),
    NotFound(String),
    Failed(String),
}

impl DetailState {
    /// What the page shows: a reload after the VRM changes is `Loading` even
    /// though the resource still holds the previous vehicle.
    pub fn shown(loading: bool, current: Option<DetailState>) -> Self {
        match current {
            Some(state) if !loading => state,
            _ => DetailState::Loading,
        }
    }

    pub fn from_reply(status: u16, body: Envelope<Vehicle>) -> Self {
        let Envelope {
            success,
            data,
            message,
            error,
            ..
        } = body;
        match (status, data) {
            (200..=299, Some(vehicle)) if success => DetailState::Found(vehicle),
            (200..=299, None) | (404, _) => DetailState::NotFound(
                message.unwrap_or_else(|| VEHICLE_NOT_FOUND_MESSAGE.to_string()),
            ),
            _ => DetailState::Failed(failure_message(status, message, error)),
        }
    }

    pub fn from_result<E: Display>(result: Result<ApiReply<Vehicle>, E>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(reply.status, reply.body),
            Err(err) => {
                log::warn!("vehicle lookup failed: {err}");
                DetailState::Failed(err.to_string())
            }
        }
    }
}

fn failure_message(status: u16, message: Option<String>, error: Option<String>) -> String {
    match (message, error) {
        (Some(message), Some(error)) => format!("{message}: {error}"),
        (Some(message), None) => message,
        (None, Some(error)) => error,
        (None, None) => format!("Request failed with status {status}"),
    }
}
