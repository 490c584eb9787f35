//! Dashboard session lifecycle.
//!
//! A view name maps to at most one live [`DashboardSession`]. Opening an
//! existing view reveals it instead of creating a second one, and every fetch
//! a session starts is tagged with a [`RequestTicket`] so that responses
//! overtaken by a newer request are dropped.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use ht_api::SummaryFilters;
use ht_core::SummaryResponse;
use uuid::Uuid;

/// View name of the coding-activity dashboard.
pub const DASHBOARD_VIEW: &str = "hackatime-dashboard";

/// Whether `open_or_reveal` created a session or attached to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Created,
    Revealed,
}

/// Identifies one fetch started by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    session: Uuid,
    generation: u64,
}

/// One open dashboard and the content it currently shows.
#[derive(Debug)]
pub struct DashboardSession {
    id: Uuid,
    generation: u64,
    filters: Option<SummaryFilters>,
    content: Option<SummaryResponse>,
}

impl DashboardSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: 0,
            filters: None,
            content: None,
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Records `filters` as the active selection and supersedes any request in flight.
    pub fn begin_request(&mut self, filters: SummaryFilters) -> RequestTicket {
        self.generation += 1;
        self.filters = Some(filters);
        RequestTicket {
            session: self.id,
            generation: self.generation,
        }
    }

    /// Whether `ticket` belongs to the latest request of this session.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.session == self.id && ticket.generation == self.generation
    }

    /// Stores the response of the latest request; stale tickets are ignored.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        response: SummaryResponse,
    ) -> Option<&SummaryResponse> {
        if !self.is_current(ticket) {
            tracing::debug!(
                session = %self.id,
                generation = ticket.generation,
                latest = self.generation,
                "discarding superseded response"
            );
            return None;
        }
        self.content = Some(response);
        self.content.as_ref()
    }

    /// Filters of the latest request.
    pub const fn filters(&self) -> Option<&SummaryFilters> {
        self.filters.as_ref()
    }

    /// Last accepted response.
    pub const fn content(&self) -> Option<&SummaryResponse> {
        self.content.as_ref()
    }
}

/// Open dashboard sessions, keyed by view name.
#[derive(Debug, Default)]
pub struct DashboardRegistry {
    sessions: HashMap<String, DashboardSession>,
}

impl DashboardRegistry {
    /// Returns the session for `view`, creating it if none is open.
    pub fn open_or_reveal(&mut self, view: &str) -> (&mut DashboardSession, Presence) {
        match self.sessions.entry(view.to_string()) {
            Entry::Occupied(entry) => {
                let session = entry.into_mut();
                tracing::debug!(view, session = %session.id, "revealing dashboard");
                (session, Presence::Revealed)
            }
            Entry::Vacant(entry) => {
                let session = entry.insert(DashboardSession::new());
                tracing::debug!(view, session = %session.id, "opened dashboard");
                (session, Presence::Created)
            }
        }
    }

    pub fn get_mut(&mut self, view: &str) -> Option<&mut DashboardSession> {
        self.sessions.get_mut(view)
    }

    /// Closes the session for `view`, returning it if one was open.
    pub fn close(&mut self, view: &str) -> Option<DashboardSession> {
        let session = self.sessions.remove(view);
        if let Some(session) = &session {
            tracing::debug!(view, session = %session.id, "closed dashboard");
        }
        session
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
