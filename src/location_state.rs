// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The state behind the monitoring locations view: the list of locations,
//! the selected location, the certificate password and which panel is shown.
//!
//! Queries and mutations are done through a [`LocationService`], which the
//! application implements on top of its backend client.

use std::fmt::Display;

/// Represents the panel shown by the locations view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocationDisplay {
    #[default]
    List,
    Add,
    Edit,
    Ready,
}

impl Display for LocationDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationDisplay::List => write!(f, "List"),
            LocationDisplay::Add => write!(f, "Add"),
            LocationDisplay::Edit => write!(f, "Edit"),
            LocationDisplay::Ready => write!(f, "Ready"),
        }
    }
}

/**
This trait needs to be implemented by the type that represents a monitoring
location.

<details>
<summary>Example implementation for a GraphQL monitoring location:</summary>

```ignore
impl topology_view::Location for graphql::MonitoringLocation {
    fn location_id(&self) -> u64 {
        self.id as u64
    }
}
```

</details>
*/
pub trait Location {
    /// Returns the id of the location.
    fn location_id(&self) -> u64;
}

/**
This trait needs to be implemented by the type that runs location queries and
mutations against the backend.

Failures are reported through `Self::Error`, and are handled by
[`LocationState`]: they never reach the caller of the state's methods.
*/
pub trait LocationService {
    /// The location type returned by the backend.
    type Location: Location;
    /// The input needed to create a location.
    type CreateInput;
    /// The input needed to update a location.
    type UpdateInput;
    /// The minion certificate returned by the backend.
    type Certificate;
    /// The error returned when a request fails.
    type Error: Display;

    /// Returns all locations.
    fn fetch_locations(&mut self) -> Result<Vec<Self::Location>, Self::Error>;
    /// Returns the locations matching the given search term.
    fn search_locations(&mut self, term: &str) -> Result<Vec<Self::Location>, Self::Error>;
    /// Creates a location and returns its id.
    fn create_location(&mut self, input: Self::CreateInput) -> Result<u64, Self::Error>;
    /// Updates a location.
    fn update_location(&mut self, input: Self::UpdateInput) -> Result<(), Self::Error>;
    /// Deletes the location with the given id.
    fn delete_location(&mut self, id: u64) -> Result<(), Self::Error>;
    /// Starts loading the minions of the location with the given id.
    fn find_minions_by_location_id(&mut self, id: u64);
    /// Returns a new minion certificate for the location with the given id.
    fn minion_certificate(&mut self, id: u64) -> Result<Self::Certificate, Self::Error>;
    /// Revokes the minion certificate of the location with the given id.
    fn revoke_minion_certificate(&mut self, id: u64) -> Result<(), Self::Error>;
}

/// Holds the data shown by the locations view.
pub struct LocationState<S>
where
    S: LocationService,
{
    service: S,
    locations: Vec<S::Location>,
    selected_location_id: Option<u64>,
    certificate_password: String,
    display: LocationDisplay,
}

impl<S> LocationState<S>
where
    S: LocationService,
{
    /// Creates an empty state showing the location list.
    pub fn new(service: S) -> Self {
        Self {
            service,
            locations: vec![],
            selected_location_id: None,
            certificate_password: String::new(),
            display: LocationDisplay::default(),
        }
    }

    /// Reloads all locations.  The list is emptied if the request fails.
    pub fn fetch_locations(&mut self) {
        self.locations = self.service.fetch_locations().unwrap_or_else(|err| {
            tracing::warn!("Failed to fetch locations: {err}");
            vec![]
        });
    }

    /// Replaces the list with the locations matching `term`.  The list is
    /// emptied if the request fails.
    pub fn search_locations(&mut self, term: &str) {
        self.locations = self.service.search_locations(term).unwrap_or_else(|err| {
            tracing::warn!("Failed to search locations for {term:?}: {err}");
            vec![]
        });
    }

    /// Selects the location with the given id, and opens it for editing.
    ///
    /// Passing `None` clears the selection without changing the panel.
    pub fn select_location(&mut self, id: Option<u64>) {
        if id.is_some() {
            self.display = LocationDisplay::Edit;
        }
        self.selected_location_id = id;
        self.certificate_password.clear();
    }

    /// Opens the panel for adding a location.
    pub fn add_location(&mut self) {
        self.set_display(LocationDisplay::Add);
        self.selected_location_id = None;
    }

    /// Selects the location with the given id, shows the list, and starts
    /// loading the location's minions.  Does nothing for `None`.
    pub fn minions_for_location(&mut self, id: Option<u64>) {
        let Some(id) = id else {
            return;
        };
        self.display = LocationDisplay::List;
        self.selected_location_id = Some(id);
        self.service.find_minions_by_location_id(id);
    }

    /// Switches to the given panel, clearing the certificate password.
    pub fn set_display(&mut self, display: LocationDisplay) {
        self.display = display;
        self.certificate_password.clear();
    }

    /// Creates a location.
    ///
    /// On success the list is reloaded and the new location is selected and
    /// shown as ready.  Returns whether the location was created.
    pub fn create_location(&mut self, input: S::CreateInput) -> bool {
        match self.service.create_location(input) {
            Ok(id) => {
                self.fetch_locations();
                self.selected_location_id = Some(id);
                self.set_display(LocationDisplay::Ready);
                true
            }
            Err(err) => {
                tracing::warn!("Failed to create location: {err}");
                false
            }
        }
    }

    /// Updates a location, reloading the list on success.  Returns whether
    /// the location was updated.
    pub fn update_location(&mut self, input: S::UpdateInput) -> bool {
        match self.service.update_location(input) {
            Ok(()) => {
                self.fetch_locations();
                true
            }
            Err(err) => {
                tracing::warn!("Failed to update location: {err}");
                false
            }
        }
    }

    /// Shows the list and deletes the location with the given id, reloading
    /// the list on success.  Returns whether the location was deleted.
    pub fn delete_location(&mut self, id: u64) -> bool {
        self.display = LocationDisplay::List;
        match self.service.delete_location(id) {
            Ok(()) => {
                self.fetch_locations();
                true
            }
            Err(err) => {
                tracing::warn!("Failed to delete location {id}: {err}");
                false
            }
        }
    }

    /// Returns a new minion certificate for the selected location.
    ///
    /// Returns `None` if no listed location is selected, or if the request
    /// fails.
    pub fn minion_certificate(&mut self) -> Option<S::Certificate> {
        let id = self.selected_location()?.location_id();
        self.service
            .minion_certificate(id)
            .map_err(|err| {
                tracing::warn!("Failed to get certificate for location {id}: {err}");
            })
            .ok()
    }

    /// Revokes the minion certificate of the selected location, clearing the
    /// certificate password on success.  Returns whether it was revoked.
    pub fn revoke_minion_certificate(&mut self) -> bool {
        let Some(id) = self.selected_location().map(|l| l.location_id()) else {
            return false;
        };
        match self.service.revoke_minion_certificate(id) {
            Ok(()) => {
                self.certificate_password.clear();
                tracing::info!("Certificate successfully regenerated.");
                true
            }
            Err(err) => {
                tracing::warn!("Failed to revoke certificate for location {id}: {err}");
                false
            }
        }
    }

    pub fn set_certificate_password(&mut self, password: impl Into<String>) {
        self.certificate_password = password.into();
    }

    pub fn certificate_password(&self) -> &str {
        &self.certificate_password
    }

    pub fn locations(&self) -> &[S::Location] {
        &self.locations
    }

    pub fn selected_location_id(&self) -> Option<u64> {
        self.selected_location_id
    }

    /// Returns the first listed location with the selected id.
    pub fn selected_location(&self) -> Option<&S::Location> {
        let id = self.selected_location_id?;
        self.locations.iter().find(|l| l.location_id() == id)
    }

    pub fn display(&self) -> LocationDisplay {
        self.display
    }
}
