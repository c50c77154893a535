//! The authoritative mailbox state machine.
//!
//! Exactly one [`Mailbox`] exists per physical box and it is the only
//! mutable copy of the state in the process. Every transition runs the
//! whole read-decide-persist-mutate-indicate sequence under one lock,
//! and memory is only updated after the store transaction commits, so
//! memory and store can never be observed in disagreement.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio_rusqlite::Connection;

use super::models::MailboxSnapshot;
use super::store::{self, StoreError};
use crate::hardware::Indicator;

/// What a transition request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The request was a no-op; the state did not change.
    Unchanged,
    /// A new mail item was recorded and the box is now full.
    Delivered { mail_id: i64 },
    /// The box was full and is now empty.
    Emptied,
}

pub struct Mailbox {
    id: i64,
    threshold_cm: f64,
    db: Connection,
    indicator: Arc<dyn Indicator>,
    state: Mutex<MailboxSnapshot>,
}

impl Mailbox {
    /// Replay the persisted state from the record store. The store is
    /// the source of truth on cold start: a box that was full before a
    /// restart comes back full without any probe interaction.
    pub async fn load(
        db: Connection,
        indicator: Arc<dyn Indicator>,
        id: i64,
        threshold_cm: f64,
    ) -> Result<Self, StoreError> {
        let (has_mail, last_mail_id) = store::load_mailbox(&db, id).await?.unwrap_or((false, None));
        indicator.set(has_mail);
        tracing::debug!(
            "mailbox {} loaded from store: {}",
            id,
            if has_mail { "full" } else { "empty" }
        );

        Ok(Self {
            id,
            threshold_cm,
            db,
            indicator,
            state: Mutex::new(MailboxSnapshot {
                has_mail,
                last_mail_id,
                last_transition_at: Utc::now(),
            }),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current fully-committed state.
    pub async fn snapshot(&self) -> MailboxSnapshot {
        *self.state.lock().await
    }

    /// Feed one distance sample into the state machine.
    ///
    /// A reading below the threshold on an empty box records a delivery
    /// and fires the alert pulse. Anything else is a no-op, so a parcel
    /// sitting in the box does not produce a new mail item every tick.
    pub async fn detect(&self, distance_cm: f64) -> Result<Transition, StoreError> {
        let mut state = self.state.lock().await;
        if distance_cm >= self.threshold_cm || state.has_mail {
            return Ok(Transition::Unchanged);
        }

        let arrived_at = Utc::now();
        let mail_id = store::record_delivery(&self.db, self.id, None, arrived_at).await?;

        state.has_mail = true;
        state.last_mail_id = Some(mail_id);
        state.last_transition_at = arrived_at;
        self.indicator.set(true);
        self.indicator.pulse();
        tracing::info!("new mail detected at {:.1} cm, recorded as item {}", distance_cm, mail_id);

        Ok(Transition::Delivered { mail_id })
    }

    /// Record an explicit delivery, the facade's "new mail" pass-through.
    ///
    /// Unlike [`detect`](Self::detect) this always appends a mail item.
    /// The alert only fires when the box flips from empty to full; a
    /// delivery into an already-full box updates `last_mail_id` quietly.
    pub async fn deliver(&self, subject: Option<String>) -> Result<i64, StoreError> {
        let mut state = self.state.lock().await;

        let arrived_at = Utc::now();
        let mail_id = store::record_delivery(&self.db, self.id, subject, arrived_at).await?;

        let was_empty = !state.has_mail;
        state.has_mail = true;
        state.last_mail_id = Some(mail_id);
        state.last_transition_at = arrived_at;
        self.indicator.set(true);
        if was_empty {
            self.indicator.pulse();
        }
        tracing::info!("mail item {} recorded", mail_id);

        Ok(mail_id)
    }

    /// Empty the box, from the button loop or the facade.
    ///
    /// Clearing an already-empty box reports success without touching
    /// the store.
    pub async fn clear(&self) -> Result<Transition, StoreError> {
        let mut state = self.state.lock().await;
        if !state.has_mail {
            return Ok(Transition::Unchanged);
        }

        store::record_emptied(&self.db, self.id).await?;

        state.has_mail = false;
        state.last_mail_id = None;
        state.last_transition_at = Utc::now();
        self.indicator.set(false);
        tracing::info!("mailbox {} emptied", self.id);

        Ok(Transition::Emptied)
    }
}
