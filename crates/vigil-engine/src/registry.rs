//! Tiered probe registry, owned by the composition root.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::models::Tier;
use vigil_core::traits::IProbe;

/// Holds named probes keyed by name, each tagged with a criticality tier.
///
/// Populated at process initialization; read per request. Registration after
/// boot is supported and safe against concurrent `select` calls. Duplicate
/// names are rejected rather than silently replaced, so a misconfigured
/// probe cannot mask an existing one.
#[derive(Default)]
pub struct ProbeRegistry {
    probes: RwLock<BTreeMap<String, Arc<dyn IProbe>>>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a probe under its name.
    ///
    /// Fails with [`VigilError::EmptyProbeName`] on an empty name and
    /// [`VigilError::DuplicateProbe`] if the name is already taken.
    pub fn register(&self, probe: Arc<dyn IProbe>) -> VigilResult<()> {
        let name = probe.name().to_string();
        if name.is_empty() {
            return Err(VigilError::EmptyProbeName);
        }

        let mut probes = self
            .probes
            .write()
            .map_err(|_| VigilError::ConcurrencyError("probe registry lock poisoned".into()))?;
        if probes.contains_key(&name) {
            return Err(VigilError::DuplicateProbe { name });
        }
        tracing::debug!(probe = %name, tier = ?probe.tier(), "registered probe");
        probes.insert(name, probe);
        Ok(())
    }

    /// All probes whose tier is in `tiers`, in name order.
    ///
    /// An empty registry yields an empty vec.
    pub fn select(&self, tiers: &[Tier]) -> VigilResult<Vec<Arc<dyn IProbe>>> {
        let probes = self
            .probes
            .read()
            .map_err(|_| VigilError::ConcurrencyError("probe registry lock poisoned".into()))?;
        Ok(probes
            .values()
            .filter(|p| tiers.contains(&p.tier()))
            .cloned()
            .collect())
    }

    pub fn len(&self) -> usize {
        self.probes.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ProbeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .probes
            .read()
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("ProbeRegistry").field("probes", &names).finish()
    }
}
