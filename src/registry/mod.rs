//! Process-wide installation of the collection-aware `change` keyword.
//!
//! Call [`register`] once during test-suite setup. Every matcher built by
//! [`change`] afterwards renders with the registered [`MatcherConfig`].

use std::fmt::Debug;
use std::sync::OnceLock;

use tracing::debug;

use crate::change::Change;
use crate::config::MatcherConfig;
use crate::error::{ChangeCollectionError, Result};
use crate::matcher::CollectionChange;
use crate::snapshot::Snapshot;

static REGISTERED: OnceLock<MatcherConfig> = OnceLock::new();

/// Installs `config` as the process-wide matcher configuration.
///
/// Registering the same configuration again is a no-op; a different one is
/// rejected with `AlreadyRegistered`.
pub fn register(config: MatcherConfig) -> Result<()> {
    let mut installed_now = false;
    let installed = REGISTERED.get_or_init(|| {
        installed_now = true;
        config.clone()
    });

    if installed_now {
        debug!(colored = config.colored, pretty = config.pretty, "registered change matcher");
        return Ok(());
    }

    if *installed == config {
        debug!("change matcher already registered");
        Ok(())
    } else {
        Err(ChangeCollectionError::AlreadyRegistered)
    }
}

pub fn is_registered() -> bool {
    REGISTERED.get().is_some()
}

/// The registered configuration, or the default before registration.
pub fn registered_config() -> MatcherConfig {
    REGISTERED.get().cloned().unwrap_or_default()
}

/// The `change` keyword. With no `to_include` / `to_exclude` calls it is
/// identical to [`change_without_collection`].
pub fn change<'a, V: Snapshot>(accessor: impl FnMut() -> V + 'a) -> CollectionChange<'a, V> {
    change_with_collection(accessor)
}

pub fn change_with_collection<'a, V: Snapshot>(
    accessor: impl FnMut() -> V + 'a,
) -> CollectionChange<'a, V> {
    CollectionChange::new(accessor).with_config(registered_config())
}

pub fn change_without_collection<'a, V: PartialEq + Debug>(
    accessor: impl FnMut() -> V + 'a,
) -> Change<'a, V> {
    Change::new(accessor)
}
