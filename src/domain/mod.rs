//! Domain modules (vertical slices): one sub-client per KIS API family.

pub mod account;
pub mod order;
pub mod overseas;
pub mod quotations;
pub mod ranking;

use serde::Deserialize;

use crate::config::KisConfig;
use crate::error::KisError;
use crate::routing;

/// Standard KIS response envelope. Payload-bearing endpoints put their data
/// under `output`; balance-style endpoints use `output1`/`output2` instead
/// (see [`account::BalanceResponse`]).
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct KisEnvelope<T> {
    /// `"0"` on success.
    pub rt_cd: String,
    pub msg_cd: String,
    pub msg1: String,
    #[serde(default)]
    pub output: Option<T>,
}

impl<T> KisEnvelope<T> {
    /// Extract the payload, surfacing the provider message when absent.
    pub fn into_output(self) -> Result<T, KisError> {
        self.output.ok_or_else(|| {
            KisError::Validation(format!(
                "Response carried no output (rt_cd={}, msg={})",
                self.rt_cd, self.msg1
            ))
        })
    }
}

/// Reject an empty required parameter before any network call is made.
pub(crate) fn require(name: &str, value: &str, example: &str) -> Result<(), KisError> {
    if value.is_empty() {
        return Err(KisError::Validation(format!(
            "{name} is required (e.g. '{example}')"
        )));
    }
    Ok(())
}

/// Resolve host and transaction id for a registered operation.
pub(crate) fn route_for<'c>(
    config: &'c KisConfig,
    operation: &str,
) -> Result<(&'c str, &'static str), KisError> {
    let route = routing::resolve(config.account_mode, operation);
    let tr_id = route.tr_id.ok_or_else(|| {
        KisError::Validation(format!(
            "No transaction id registered for operation '{operation}'"
        ))
    })?;
    Ok((config.domain_url(route.domain), tr_id))
}
