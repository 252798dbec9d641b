use {
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

pub mod bid;
pub mod listing;
pub mod registration;

pub type BidderId = String;

#[derive(ToResponse, ToSchema, Serialize, Deserialize, Debug)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    pub error: String,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "v1")]
    V1,
    #[strum(serialize = "listings")]
    Listing,
    #[strum(serialize = "")]
    Root,
    #[strum(serialize = "live")]
    Liveness,
    #[strum(serialize = "docs")]
    Docs,
}

pub struct RouteProperties {
    pub method:    http::Method,
    pub full_path: String,
}

pub trait Routable: AsRef<str> + Clone {
    fn properties(&self) -> RouteProperties;
}

fn listing_path(route: &impl AsRef<str>) -> String {
    let path = format!(
        "{}{}{}",
        Route::V1.as_ref(),
        Route::Listing.as_ref(),
        route.as_ref()
    );
    path.trim_end_matches('/').to_string()
}
