use {
    crate::{
        auction::{
            self,
            entities::{
                RegistrationStatus,
                SessionError,
            },
        },
        config::RunOptions,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::Store,
    },
    anyhow::Result,
    axum::{
        handler::Handler,
        http::StatusCode,
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            on,
            MethodFilter,
        },
        Json,
        Router,
    },
    clap::crate_version,
    sellar_auction_api_types::{
        bid::{
            Bid,
            BidCreate,
            BidResult,
            Bids,
        },
        listing::{
            Listing,
            ListingCreate,
            Listings,
        },
        registration::{
            Registration,
            RegistrationStatus as ApiRegistrationStatus,
        },
        ErrorBodyResponse,
        Routable,
        Route,
    },
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::OpenApi,
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

async fn root() -> String {
    format!("Sellar Auction Server API {}", crate_version!())
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The listing was not found
    ListingNotFound,
    /// The registration can not move out of its current status
    InvalidStateTransition { from: RegistrationStatus },
    /// The bidder is not approved for the listing
    NotApproved,
    /// The auction of the listing has ended
    AuctionClosed,
    /// The bid does not exceed the leading bid
    BidTooLow { leading_bid: auction::entities::BidAmount },
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::ListingNotFound => (
                StatusCode::NOT_FOUND,
                "Listing with the specified id was not found".to_string(),
            ),
            RestError::InvalidStateTransition { from } => (
                StatusCode::CONFLICT,
                format!("Invalid registration transition from {:?}", from),
            ),
            RestError::NotApproved => (
                StatusCode::FORBIDDEN,
                "Bidder is not approved for this listing".to_string(),
            ),
            RestError::AuctionClosed => {
                (StatusCode::CONFLICT, "Auction has ended".to_string())
            }
            RestError::BidTooLow { leading_bid } => (
                StatusCode::BAD_REQUEST,
                format!("Bid must be greater than the current bid of {}", leading_bid),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_status_and_message().1)
    }
}

impl From<SessionError> for RestError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::InvalidStateTransition { from } => {
                RestError::InvalidStateTransition { from }
            }
            SessionError::NotApproved => RestError::NotApproved,
            SessionError::AuctionClosed => RestError::AuctionClosed,
            SessionError::BidTooLow { leading_bid } => RestError::BidTooLow { leading_bid },
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

pub struct WrappedRouter {
    pub router: Router<Arc<Store>>,
}

impl WrappedRouter {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    pub fn route<H, T>(self, path: impl Routable, handler: H) -> Result<Self>
    where
        H: Handler<T, Arc<Store>>,
        T: 'static,
    {
        let properties = path.properties();
        let filter = MethodFilter::try_from(properties.method.clone()).map_err(|_| {
            anyhow::anyhow!(
                "Unsupported method {} for route {}",
                properties.method,
                properties.full_path
            )
        })?;
        Ok(Self {
            router: self.router.route(&properties.full_path, on(filter, handler)),
        })
    }
}

pub async fn start_api(run_options: RunOptions, store: Arc<Store>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    auction::api::get_listings,
    auction::api::post_listing,
    auction::api::get_listing,
    auction::api::delete_listing,
    auction::api::get_bids,
    auction::api::post_bid,
    auction::api::get_registration,
    auction::api::post_registration,
    ),
    components(
    schemas(
    Bid,
    BidCreate,
    BidResult,
    Bids,
    Listing,
    ListingCreate,
    Listings,
    Registration,
    ApiRegistrationStatus,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    Listing,
    BidResult,
    ),
    ),
    tags(
    (name = "Sellar Auction Server", description = "Auction Server runs the bidding sessions of the listed lots. \
    It tracks the registration of every bidder, validates the bids against the leading bid and closes each auction when its countdown ends.")
    )
    )]
    struct ApiDoc;

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url(
            Route::Docs.as_ref().to_string(),
            ApiDoc::openapi(),
        ))
        .merge(auction::api::get_routes()?)
        .route(Route::Root.as_ref(), get(root))
        .route(Route::Liveness.as_ref(), get(live))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!(listen_addr = %run_options.server.listen_addr, "Starting API server...");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down API server...");
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_status() {
        let cases = [
            (
                SessionError::InvalidStateTransition {
                    from: RegistrationStatus::PendingApproval,
                },
                StatusCode::CONFLICT,
            ),
            (SessionError::NotApproved, StatusCode::FORBIDDEN),
            (SessionError::AuctionClosed, StatusCode::CONFLICT),
            (
                SessionError::BidTooLow {
                    leading_bid: 10_500,
                },
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(RestError::from(error).to_status_and_message().0, status);
        }
    }

    #[test]
    fn test_bid_too_low_message() {
        let (_, message) = RestError::BidTooLow {
            leading_bid: 10_500,
        }
        .to_status_and_message();
        assert_eq!(message, "Bid must be greater than the current bid of 10500");
    }

    #[test]
    fn test_display_uses_response_message() {
        assert_eq!(
            RestError::ListingNotFound.to_string(),
            "Listing with the specified id was not found"
        );
        assert_eq!(
            RestError::BadParameters("empty title".to_string()).to_string(),
            "Bad parameters: empty title"
        );
    }

    #[test]
    fn test_routes_are_registered() {
        assert!(auction::api::get_routes().is_ok());
    }
}
