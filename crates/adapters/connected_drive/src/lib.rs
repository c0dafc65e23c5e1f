//! # chargebot-adapter-connected-drive
//!
//! Vehicle account adapter for BMW ConnectedDrive.
//!
//! ## Endpoints
//!
//! | Step | Request |
//! |------|---------|
//! | login | `POST {server}/gcdm/oauth/token` (form, password grant) |
//! | list vehicles | `GET {server}/webapi/v1/user/vehicles` |
//! | status | `GET {server}/webapi/v1/user/vehicles/{vin}/status` |
//! | remote lock | `POST {server}/webapi/v1/user/vehicles/{vin}/executeService` (`serviceType=DOOR_LOCK`) |
//!
//! `{server}` is chosen by [`Region`] unless [`ConnectedDriveConfig::server`]
//! overrides it. Every call after login carries the bearer token.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `chargebot-app` and `chargebot-domain`.

mod config;
mod error;
mod region;
mod status;

pub use config::ConnectedDriveConfig;
pub use error::ConnectedDriveError;
pub use region::{CountryRegionResolver, server_url};

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, header};
use url::Url;

use chargebot_app::ports::{AccountConnector, VehicleAccount};
use chargebot_domain::account::{Credentials, Region};
use chargebot_domain::error::ChargebotError;
use chargebot_domain::vehicle::{DistanceUnit, Vehicle, VehicleSnapshot};

use crate::status::{StatusResponse, TokenResponse, VehicleEntry};

const OAUTH_SCOPE: &str = "authenticate_user vehicle_data remote_services";

/// Logs into ConnectedDrive.
#[derive(Debug, Clone)]
pub struct ConnectedDriveConnector {
    client: Client,
    config: ConnectedDriveConfig,
}

impl ConnectedDriveConnector {
    /// Create a connector.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectedDriveError::Http`] when the HTTP client cannot be
    /// built, or [`ConnectedDriveError::InvalidUrl`] for a malformed server
    /// override.
    pub fn new(config: ConnectedDriveConfig) -> Result<Self, ConnectedDriveError> {
        if let Some(server) = &config.server {
            Url::parse(server)?;
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn server(&self, region: Region) -> Result<Url, ConnectedDriveError> {
        let raw = self.config.server.as_deref().unwrap_or(server_url(region));
        Ok(Url::parse(raw)?)
    }

    async fn login(
        &self,
        credentials: &Credentials,
        region: Region,
    ) -> Result<ConnectedDriveAccount, ConnectedDriveError> {
        let server = self.server(region)?;
        let url = endpoint(&server, &["gcdm", "oauth", "token"])?;

        let mut request = self.client.post(url).form(&[
            ("grant_type", "password"),
            ("scope", OAUTH_SCOPE),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ]);
        if let Some(authorization) = &self.config.oauth_authorization {
            request = request.header(header::AUTHORIZATION, authorization);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::BAD_REQUEST
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ConnectedDriveError::LoginRefused { status });
        }
        let token: TokenResponse = check("login", response).await?.json().await?;
        tracing::debug!(%region, expires_in = ?token.expires_in, "access token granted");

        Ok(ConnectedDriveAccount {
            client: self.client.clone(),
            server,
            token: token.access_token,
            unit: distance_unit(region),
            tank_capacity: self.config.tank_capacity,
        })
    }
}

impl AccountConnector for ConnectedDriveConnector {
    type Account = ConnectedDriveAccount;

    async fn connect(
        &self,
        credentials: &Credentials,
        region: Region,
    ) -> Result<Self::Account, ChargebotError> {
        self.login(credentials, region)
            .await
            .map_err(ChargebotError::from)
    }
}

/// A logged-in ConnectedDrive session.
#[derive(Clone)]
pub struct ConnectedDriveAccount {
    client: Client,
    server: Url,
    token: String,
    unit: DistanceUnit,
    tank_capacity: Option<u32>,
}

impl std::fmt::Debug for ConnectedDriveAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectedDriveAccount")
            .field("server", &self.server.as_str())
            .field("token", &"<redacted>")
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}

impl ConnectedDriveAccount {
    fn vehicle_endpoint(&self, vin: &str, tail: &str) -> Result<Url, ConnectedDriveError> {
        endpoint(&self.server, &["webapi", "v1", "user", "vehicles", vin, tail])
    }

    async fn send(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, ConnectedDriveError> {
        let response = request.bearer_auth(&self.token).send().await?;
        check(endpoint, response).await
    }

    async fn list(&self) -> Result<Vec<Vehicle>, ConnectedDriveError> {
        let url = endpoint(&self.server, &["webapi", "v1", "user", "vehicles"])?;
        let entries: Vec<VehicleEntry> = self
            .send("vehicles", self.client.get(url))
            .await?
            .json()
            .await?;
        Ok(entries.into_iter().map(Vehicle::from).collect())
    }

    async fn status(&self, vehicle: &Vehicle) -> Result<VehicleSnapshot, ConnectedDriveError> {
        let url = self.vehicle_endpoint(&vehicle.vin, "status")?;
        let body: StatusResponse = self
            .send("status", self.client.get(url))
            .await?
            .json()
            .await?;
        body.vehicle_status
            .into_snapshot(self.unit, self.tank_capacity)
    }

    async fn lock(&self, vehicle: &Vehicle) -> Result<(), ConnectedDriveError> {
        let url = self.vehicle_endpoint(&vehicle.vin, "executeService")?;
        let request = self
            .client
            .post(url)
            .form(&[("serviceType", "DOOR_LOCK")]);
        self.send("executeService", request).await?;
        tracing::debug!(vin = %vehicle.vin, "door lock requested");
        Ok(())
    }
}

impl VehicleAccount for ConnectedDriveAccount {
    async fn vehicles(&self) -> Result<Vec<Vehicle>, ChargebotError> {
        self.list().await.map_err(ChargebotError::from)
    }

    async fn refresh_state(&self, vehicle: &Vehicle) -> Result<VehicleSnapshot, ChargebotError> {
        self.status(vehicle).await.map_err(ChargebotError::from)
    }

    async fn lock_doors(&self, vehicle: &Vehicle) -> Result<(), ChargebotError> {
        self.lock(vehicle).await.map_err(ChargebotError::from)
    }
}

/// Ranges are reported in miles for North American accounts.
fn distance_unit(region: Region) -> DistanceUnit {
    match region {
        Region::NorthAmerica => DistanceUnit::Mi,
        Region::China | Region::RestOfWorld => DistanceUnit::Km,
    }
}

/// Append escaped path segments to `base`.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ConnectedDriveError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn check(endpoint: &'static str, response: Response) -> Result<Response, ConnectedDriveError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ConnectedDriveError::Status {
        endpoint,
        status,
        body,
    })
}
