//! Reference-data provider seam.

use std::future::Future;

use crate::domain::Agency;
use crate::nextbus::NextbusError;

/// Source of the full agency list.
pub trait AgencyProvider: Send + Sync {
    fn list_agencies(&self) -> impl Future<Output = Result<Vec<Agency>, NextbusError>> + Send;
}
