//! Location requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Nullable;
use crate::builder::dto_builder;
use crate::domain::{Address, ApiError, Location, LocationStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListLocationsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
}

impl ListLocationsResponse {
    pub fn active(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.is_active())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RetrieveLocationResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Sparse location sent with an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationUpdate {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Address>)]
    pub address: Nullable<Address>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub timezone: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<LocationStatus>)]
    pub status: Nullable<LocationStatus>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub business_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub website_url: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub business_email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub description: Nullable<String>,
}

impl LocationUpdate {
    pub fn apply_to(self, location: &mut Location) {
        self.name.apply_to(&mut location.name);
        self.address.apply_to(&mut location.address);
        self.timezone.apply_to(&mut location.timezone);
        self.status.apply_to(&mut location.status);
        self.phone_number.apply_to(&mut location.phone_number);
        self.business_name.apply_to(&mut location.business_name);
        self.website_url.apply_to(&mut location.website_url);
        self.business_email.apply_to(&mut location.business_email);
        self.description.apply_to(&mut location.description);
    }
}

dto_builder! {
    LocationUpdateBuilder => LocationUpdate {
        nullable {
            name: String,
            address: Address,
            timezone: String,
            status: LocationStatus,
            phone_number: String,
            business_name: String,
            website_url: String,
            business_email: String,
            description: String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateLocationRequest {
    pub location: LocationUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateLocationResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
