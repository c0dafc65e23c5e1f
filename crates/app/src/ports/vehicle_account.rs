//! Vehicle account port — how the core reaches the telematics account.
//!
//! Obtaining a snapshot takes three steps, each of which is fatal to the
//! pass when it fails: resolve the API region, log in, then list and refresh
//! vehicles. The remote lock lives on the same account but is best-effort.

use std::future::Future;

use chargebot_domain::account::{Credentials, Region};
use chargebot_domain::error::ChargebotError;
use chargebot_domain::vehicle::{Vehicle, VehicleSnapshot};

/// Maps a human country name (e.g. `"Germany"`) to an API region.
pub trait RegionResolver {
    /// # Errors
    ///
    /// Returns [`ChargebotError::UnknownCountry`] for unrecognised names.
    fn resolve(&self, country: &str) -> Result<Region, ChargebotError>;
}

/// Logs into the vehicle account.
pub trait AccountConnector {
    /// The logged-in account handle.
    type Account: VehicleAccount;

    /// Authenticate against the given region.
    fn connect(
        &self,
        credentials: &Credentials,
        region: Region,
    ) -> impl Future<Output = Result<Self::Account, ChargebotError>> + Send;
}

/// A logged-in vehicle account.
pub trait VehicleAccount {
    /// Every vehicle registered on the account.
    fn vehicles(&self) -> impl Future<Output = Result<Vec<Vehicle>, ChargebotError>> + Send;

    /// Fetch a fresh snapshot of the vehicle's state.
    fn refresh_state(
        &self,
        vehicle: &Vehicle,
    ) -> impl Future<Output = Result<VehicleSnapshot, ChargebotError>> + Send;

    /// Ask the remote services to lock the doors. Returns once the request is
    /// accepted; completion on the car is not awaited.
    fn lock_doors(&self, vehicle: &Vehicle)
    -> impl Future<Output = Result<(), ChargebotError>> + Send;
}

impl<T: AccountConnector + Send + Sync> AccountConnector for std::sync::Arc<T> {
    type Account = T::Account;

    fn connect(
        &self,
        credentials: &Credentials,
        region: Region,
    ) -> impl Future<Output = Result<Self::Account, ChargebotError>> + Send {
        (**self).connect(credentials, region)
    }
}
