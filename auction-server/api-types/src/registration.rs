use {
    crate::{
        listing::ListingId,
        listing_path,
        BidderId,
        Routable,
        RouteProperties,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// The bidder has not accepted the auction terms yet.
    NotRegistered,
    /// The bidder accepted the terms and is waiting for approval.
    PendingApproval,
    /// The bidder may place bids on the listing.
    Approved,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, PartialEq, Debug)]
pub struct Registration {
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub listing_id: ListingId,
    #[schema(example = "u101")]
    pub bidder_id:  BidderId,
    pub status:     RegistrationStatus,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
#[into_params(parameter_in = Path)]
pub struct RegistrationParams {
    /// The id of the listing.
    #[param(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub listing_id: ListingId,
    /// The id of the bidder.
    #[param(example = "u101")]
    pub bidder_id:  BidderId,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = ":listing_id/registrations/:bidder_id")]
    GetRegistration,
    #[strum(serialize = ":listing_id/registrations/:bidder_id")]
    PostRegistration,
}

impl Routable for Route {
    fn properties(&self) -> RouteProperties {
        let method = match self {
            Route::GetRegistration => http::Method::GET,
            Route::PostRegistration => http::Method::POST,
        };
        RouteProperties {
            method,
            full_path: listing_path(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::PendingApproval).unwrap(),
            r#""pending_approval""#
        );
        let status: RegistrationStatus = serde_json::from_str(r#""approved""#).unwrap();
        assert_eq!(status, RegistrationStatus::Approved);
    }
}
