//! Warm in-memory cache for the commander catalogue.
//!
//! The catalogue is read-only at runtime and hit on every deck registration
//! and opponent lookup, so it is loaded once at start-up instead of paying a
//! Postgres round-trip per request.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::commander_repo;
use crate::db::models::Commander;
use crate::pairing::{CommanderProfile, PairingFlags};

/// Global map id → commander (read-only once warmed).
pub static COMMANDERS: Lazy<DashMap<Uuid, Commander>> = Lazy::new(DashMap::new);

/// Fetch the `commanders` table and populate [`COMMANDERS`]. Idempotent.
pub async fn warm_commanders(db: &PgPool) -> anyhow::Result<()> {
    for c in commander_repo::list_commanders(db).await? {
        COMMANDERS.insert(c.id, c);
    }
    Ok(())
}

/// Warm every start-up cache, logging failures instead of aborting boot.
pub async fn warm_all(db: &PgPool) {
    if let Err(e) = warm_commanders(db).await {
        log::error!("commander cache warm-up failed: {e:#}");
    } else {
        log::info!("commander cache warmed ({} cards)", COMMANDERS.len());
    }
}

pub fn get_commander(id: Uuid) -> Option<Commander> {
    COMMANDERS.get(&id).map(|e| e.value().clone())
}

/// View of a cached commander as the pairing validator wants it.
pub fn profile(c: &Commander) -> CommanderProfile {
    CommanderProfile {
        id: c.id,
        name: c.name.clone(),
        flags: PairingFlags {
            partner: c.partner,
            friends_forever: c.friends_forever,
            doctor_companion: c.doctor_companion,
            time_lord_doctor: c.time_lord_doctor,
            choose_a_background: c.choose_a_background,
            background: c.background,
        },
    }
}
