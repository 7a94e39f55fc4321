//! Session Integration Tests
//!
//! Drive a QuoteSession with an in-memory medium, sequential ids and a
//! manual timer.

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::config::SessionConfig;
    use crate::domain::{compute_totals, Item, ItemField, ProfitRate};
    use crate::repository::{MemoryMedium, StorageMedium};
    use crate::session::QuoteSession;
    use crate::testing::{ManualTimer, SequentialIds};

    const QUIET_MS: u64 = 3000;

    struct Harness {
        session: QuoteSession,
        medium: MemoryMedium,
        timer: ManualTimer,
        config: SessionConfig,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_medium(MemoryMedium::new())
        }

        fn with_medium(medium: MemoryMedium) -> Self {
            let config = SessionConfig {
                quiet_period_ms: QUIET_MS,
                ..SessionConfig::default()
            };
            let timer = ManualTimer::new();
            let session =
                QuoteSession::new(&config, medium.clone(), timer.clone(), SequentialIds::new());
            Self {
                session,
                medium,
                timer,
                config,
            }
        }

        fn wait_quiet_period(&self) {
            self.timer.advance(Duration::from_millis(QUIET_MS));
        }

        fn wait(&self, ms: u64) {
            self.timer.advance(Duration::from_millis(ms));
        }

        /// Saved quotes as found in the durable medium
        fn persisted(&self) -> Vec<Item> {
            self.medium
                .read(&self.config.storage_key)
                .map(|raw| serde_json::from_str(&raw).expect("valid payload"))
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_scenario_fresh_quote_totals() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Quantity, "3");
        h.session.edit_draft(ItemField::UnitPrice, "10.00");
        h.session.edit_draft(ItemField::ProfitRate, "0.25");

        let totals = compute_totals(&h.session.draft());
        assert_eq!(totals.subtotal, 30.0);
        assert_eq!(totals.profit, 7.5);
        assert_eq!(totals.total, 37.5);
    }

    #[test]
    fn test_scenario_malformed_payload_lists_empty() {
        let config = SessionConfig::default();
        let medium = MemoryMedium::with_entry(&config.storage_key, r#"{"not": "an array"}"#);
        let h = Harness::with_medium(medium);
        assert!(h.session.list_saved().is_empty());
        assert_eq!(h.medium.write_count(), 0);
    }

    #[test]
    fn test_scenario_delete_loaded_draft_resets_it() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Signage");
        h.wait_quiet_period();
        let id = h.session.draft().id;
        assert_eq!(h.session.list_saved().len(), 1);

        assert!(h.session.delete_item(&id));
        assert!(!h.session.is_draft_anchored());
        assert_eq!(h.session.draft(), Item::new());
        assert!(h.session.list_saved().iter().all(|item| item.id != id));
        assert!(h.persisted().is_empty());
    }

    #[test]
    fn test_scenario_reset_before_quiet_period_discards_edit() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Quantity, "5");
        h.wait(1000);
        h.session.reset_draft();
        h.wait_quiet_period();

        assert_eq!(h.medium.write_count(), 0);
        assert!(h.session.list_saved().is_empty());
    }

    #[test]
    fn test_rapid_edits_coalesce_into_one_write() {
        let h = Harness::new();
        for (i, name) in ["K", "Ki", "Kit", "Kitchen"].iter().enumerate() {
            h.session.edit_draft(ItemField::Name, name);
            h.wait(500 * (i as u64 + 1));
        }
        assert_eq!(h.medium.write_count(), 0);
        assert!(h.session.is_autosave_pending());

        h.wait_quiet_period();
        assert_eq!(h.medium.write_count(), 1);
        let saved = h.persisted();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Kitchen");
        assert!(!h.session.is_autosave_pending());
    }

    #[test]
    fn test_further_edits_update_in_place() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "First");
        h.wait_quiet_period();
        h.session.reset_draft();
        h.session.edit_draft(ItemField::Name, "Second");
        h.wait_quiet_period();

        let first_id = h.session.list_saved()[0].id.clone();
        assert!(h.session.load_draft(&first_id));
        h.session.edit_draft(ItemField::Shipping, "12");
        h.wait_quiet_period();

        let saved = h.persisted();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].name, "First");
        assert_eq!(saved[0].shipping, 12.0);
        assert_eq!(saved[1].name, "Second");
    }

    #[test]
    fn test_loading_does_not_write() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Flyers");
        h.wait_quiet_period();
        let writes = h.medium.write_count();

        let id = h.session.draft().id;
        h.session.reset_draft();
        assert!(h.session.load_draft(&id));
        h.wait_quiet_period();
        assert_eq!(h.medium.write_count(), writes);
        assert!(!h.session.load_draft("missing"));
    }

    #[test]
    fn test_loading_other_quote_cancels_pending_write() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Saved");
        h.wait_quiet_period();
        let saved_id = h.session.draft().id;

        h.session.reset_draft();
        h.session.edit_draft(ItemField::Name, "Abandoned");
        h.session.load_draft(&saved_id);
        h.wait_quiet_period();

        let names: Vec<_> = h.persisted().into_iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["Saved"]);
    }

    #[test]
    fn test_delete_during_pending_write_does_not_resurrect() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Poster");
        h.wait_quiet_period();
        let id = h.session.draft().id;

        h.session.edit_draft(ItemField::Quantity, "40");
        h.session.delete_item(&id);
        h.wait_quiet_period();

        assert!(h.persisted().is_empty());
        assert!(h.session.list_saved().is_empty());
    }

    #[test]
    fn test_deleting_other_quote_keeps_pending_write() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Other");
        h.wait_quiet_period();
        let other = h.session.draft().id;

        h.session.reset_draft();
        h.session.edit_draft(ItemField::Name, "Current");
        assert!(h.session.delete_item(&other));
        h.wait_quiet_period();

        let names: Vec<_> = h.persisted().into_iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["Current"]);
    }

    #[test]
    fn test_opened_quote_is_anchored_and_saves_in_place() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Stickers");
        h.wait_quiet_period();
        let id = h.session.draft().id;

        h.session.reset_draft();
        assert!(h.session.load_draft(&id));
        assert!(h.session.is_draft_anchored());
        assert!(h.session.save_now());
        assert!(h.session.save_now());

        let saved = h.persisted();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, id);
    }

    #[test]
    fn test_blank_draft_is_never_persisted() {
        let h = Harness::new();
        assert!(!h.session.save_now());
        assert!(!h.session.flush());
        h.wait_quiet_period();
        assert_eq!(h.medium.write_count(), 0);
        assert!(h.persisted().is_empty());
    }

    #[test]
    fn test_reverted_anchored_draft_is_still_saved() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Quantity, "2");
        h.session.edit_draft(ItemField::Quantity, "0");
        h.wait_quiet_period();
        assert_eq!(h.persisted().len(), 1);
    }

    #[test]
    fn test_flush_writes_pending_once() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::UnitPrice, "9.99");
        assert!(h.session.flush());
        assert_eq!(h.medium.write_count(), 1);
        assert!(!h.session.flush());

        h.wait_quiet_period();
        assert_eq!(h.medium.write_count(), 1);
    }

    #[test]
    fn test_save_now_persists_and_disarms() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Manual");
        assert!(h.session.save_now());
        assert!(h.session.save_now());
        h.wait_quiet_period();

        assert_eq!(h.medium.write_count(), 2);
        assert_eq!(h.persisted().len(), 1);
    }

    #[test]
    fn test_invalid_edits_are_coerced() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "");
        h.session.edit_draft(ItemField::Quantity, "lots");
        h.session.edit_draft(ItemField::ProfitRate, "0.9");
        h.wait_quiet_period();

        let saved = &h.persisted()[0];
        assert_eq!(saved.name, "Untitled");
        assert_eq!(saved.quantity, 0.0);
        assert_eq!(saved.profit_rate, ProfitRate::Twenty);
    }

    #[test]
    fn test_listener_sees_changes() {
        let h = Harness::new();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        h.session.set_listener(move |session| {
            let _ = session.draft();
            seen.set(seen.get() + 1);
        });

        h.session.edit_draft(ItemField::Name, "Listened");
        assert_eq!(calls.get(), 1);
        h.wait_quiet_period();
        assert_eq!(calls.get(), 2);
        h.session.reset_draft();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_dropping_session_cancels_pending_write() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Gone");
        let Harness { session, medium, timer, .. } = h;
        drop(session);
        timer.advance(Duration::from_millis(QUIET_MS));
        assert_eq!(medium.write_count(), 0);
    }

    #[test]
    fn test_reopened_session_lists_saved_quotes() {
        let h = Harness::new();
        h.session.edit_draft(ItemField::Name, "Persisted");
        h.session.edit_draft(ItemField::ProfitRate, "0.3");
        h.wait_quiet_period();
        let saved = h.session.list_saved();

        let reopened = Harness::with_medium(h.medium.clone());
        assert_eq!(reopened.session.list_saved(), saved);
        assert_eq!(reopened.session.draft(), Item::new());
    }
}
