//! AppStore - The swipe session's single source of truth
//!
//! Every operation runs to completion synchronously. Only `record_swipe`
//! sequences several mutations: possible match, possible like count, cursor
//! advance.

use crate::domain::{
    CurrentUser, DomainError, LikeCounters, Match, Message, NewMessage, Profile, SwipeDecision,
    SwipeKind, Vibe,
};
use crate::ports::{ProfileSource, RandomSource};
use crate::store::{BingoProgress, StoreConfig, StoreSnapshot, SwipeOutcome};

/// Mutable state for one swipe session
#[derive(Debug, Clone)]
pub struct AppStore<R: RandomSource> {
    config: StoreConfig,
    random: R,
    current_user: CurrentUser,
    current_vibe: Vibe,
    profiles: Vec<Profile>,
    cursor: usize,
    matches: Vec<Match>,
    likes: LikeCounters,
    bingo_badge_unlocked: bool,
}

impl<R: RandomSource> AppStore<R> {
    /// Create an empty store
    pub fn new(config: StoreConfig, random: R) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            config,
            random,
            current_user: CurrentUser::default(),
            current_vibe: Vibe::default(),
            profiles: Vec::new(),
            cursor: 0,
            matches: Vec::new(),
            likes: LikeCounters::new(),
            bingo_badge_unlocked: false,
        })
    }

    /// Create a store populated from a profile source
    pub fn from_source<S: ProfileSource + ?Sized>(
        source: &S,
        config: StoreConfig,
        random: R,
    ) -> Result<Self, DomainError> {
        let profiles = source.load_profiles()?;
        let seeded = source.seed_matches(&profiles)?;

        let store = Self::new(config, random)?
            .with_profiles(profiles)
            .with_seeded_matches(seeded);

        tracing::info!(
            "Loaded {} profiles and {} seeded matches",
            store.profiles.len(),
            store.matches.len()
        );

        Ok(store)
    }

    /// Replace the deck and rewind the cursor
    pub fn with_profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.profiles = profiles;
        self.cursor = 0;
        self
    }

    /// Append pre-existing matches, skipping ids already present
    pub fn with_seeded_matches(mut self, seeded: Vec<Match>) -> Self {
        for entry in seeded {
            if self.matches.iter().any(|m| m.id == entry.id) {
                tracing::warn!("Skipping seeded match with duplicate id {}", entry.id);
                continue;
            }
            self.matches.push(entry);
        }
        self
    }

    pub fn with_current_user(mut self, current_user: CurrentUser) -> Self {
        self.current_user = current_user;
        self
    }

    // ============================================
    // Deck and cursor
    // ============================================

    /// Move to the next card, wrapping around the deck
    pub fn advance_cursor(&mut self) {
        self.cursor = (self.cursor + 1) % self.profiles.len().max(1);
        tracing::debug!("Cursor moved to {}", self.cursor);
    }

    /// Rewind to the first card
    pub fn reset_swipe_stack(&mut self) {
        self.cursor = 0;
    }

    /// The card on top of the deck
    pub fn current_profile(&self) -> Option<&Profile> {
        self.profiles.get(self.cursor)
    }

    /// The card underneath the current one
    pub fn upcoming_profile(&self) -> Option<&Profile> {
        if self.profiles.is_empty() {
            return None;
        }
        self.profiles.get((self.cursor + 1) % self.profiles.len())
    }

    /// Apply a swipe on the current card
    ///
    /// The card is resolved from the cursor and must carry the id named in
    /// the decision; on mismatch nothing changes. An empty deck only runs
    /// the cursor arithmetic.
    pub fn record_swipe(&mut self, decision: &SwipeDecision) -> Result<SwipeOutcome, DomainError> {
        let Some(profile) = self.profiles.get(self.cursor).cloned() else {
            tracing::debug!("Swipe {} on an empty deck", decision.kind);
            self.advance_cursor();
            return Ok(SwipeOutcome::empty_deck(decision.kind, self.cursor));
        };

        if profile.id != decision.profile_id {
            return Err(DomainError::ProfileMismatch {
                expected: profile.id,
                actual: decision.profile_id.clone(),
            });
        }

        tracing::debug!("Swipe {} on {} ({})", decision.kind, profile.name, profile.id);

        let mut match_id = None;
        if decision.kind.is_positive() && self.roll_for_match() {
            let vibe = profile.vibe;
            match_id = Some(self.create_match(profile.clone()).id.clone());
            self.increment_received(vibe);
        }

        let like_given = decision.kind == SwipeKind::Like;
        if like_given {
            self.increment_given(profile.vibe);
        }

        self.advance_cursor();

        Ok(SwipeOutcome {
            kind: decision.kind,
            profile_id: Some(profile.id),
            vibe: Some(profile.vibe),
            match_id,
            like_given,
            cursor: self.cursor,
        })
    }

    fn roll_for_match(&mut self) -> bool {
        let policy = self.config.match_policy;
        if !policy.needs_roll() {
            return policy.accepts_roll(0.0);
        }
        let roll = self.random.next_roll();
        policy.accepts_roll(roll)
    }

    // ============================================
    // Matches and conversations
    // ============================================

    /// Append a new match for `profile`
    ///
    /// Matching the same profile twice yields two matches.
    pub fn create_match(&mut self, profile: Profile) -> &Match {
        let created = Match::new(profile);
        tracing::info!(
            "💘 Matched with {} ({}) as {}",
            created.profile.name,
            created.profile.vibe,
            created.id
        );

        let index = self.matches.len();
        self.matches.push(created);
        &self.matches[index]
    }

    /// Append a stamped message to a match's conversation
    pub fn send_message(
        &mut self,
        match_id: &str,
        message: NewMessage,
    ) -> Result<&Message, DomainError> {
        let target = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| DomainError::not_found("Match", match_id))?;

        target.conversation.push(Message::stamp(message));
        tracing::debug!(
            "Message appended to {} ({} total)",
            match_id,
            target.conversation.len()
        );

        let index = target.conversation.len() - 1;
        Ok(&target.conversation[index])
    }

    pub fn find_match(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    // ============================================
    // Like counters and bingo
    // ============================================

    pub fn increment_given(&mut self, vibe: Vibe) {
        let count = self.likes.increment_given(vibe);
        tracing::debug!("Likes given for {}: {}", vibe, count);
    }

    pub fn increment_received(&mut self, vibe: Vibe) {
        let count = self.likes.increment_received(vibe);
        tracing::debug!("Likes received for {}: {}", vibe, count);
    }

    /// Zero both counters (and relock the badge when configured)
    pub fn reset_like_counters(&mut self) {
        self.likes.reset();
        if self.config.reset_clears_badge {
            self.bingo_badge_unlocked = false;
        }
        tracing::info!("Like counters reset");
    }

    /// Whether every vibe is complete under the configured rule
    pub fn has_bingo(&self) -> bool {
        self.likes.is_bingo(self.config.bingo_rule)
    }

    /// Bingo reached but the badge not yet claimed
    pub fn bingo_reward_pending(&self) -> bool {
        self.has_bingo() && !self.bingo_badge_unlocked
    }

    /// Claim the bingo badge; returns whether it was newly unlocked
    pub fn unlock_bingo_badge(&mut self) -> bool {
        if !self.bingo_reward_pending() {
            return false;
        }
        self.bingo_badge_unlocked = true;
        tracing::info!("🏆 Bingo badge unlocked");
        true
    }

    pub fn bingo_progress(&self) -> BingoProgress {
        BingoProgress::from_counters(
            &self.likes,
            self.config.bingo_rule,
            self.bingo_badge_unlocked,
        )
    }

    // ============================================
    // Accessors
    // ============================================

    pub fn set_current_vibe(&mut self, vibe: Vibe) {
        self.current_vibe = vibe;
    }

    pub fn current_vibe(&self) -> Vibe {
        self.current_vibe
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn likes(&self) -> &LikeCounters {
        &self.likes
    }

    pub fn bingo_badge_unlocked(&self) -> bool {
        self.bingo_badge_unlocked
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Owned, serializable copy of the session state
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            current_user: self.current_user.clone(),
            current_vibe: self.current_vibe,
            cursor: self.cursor,
            profile_count: self.profiles.len(),
            current_profile_id: self.current_profile().map(|p| p.id.clone()),
            matches: self.matches.clone(),
            likes: self.likes.clone(),
            bingo: self.has_bingo(),
            bingo_badge_unlocked: self.bingo_badge_unlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedRandom, JsonProfileSource, SequenceRandom};
    use crate::domain::{BingoRule, MatchPolicy, MessageKind};

    fn mock_profile(id: &str, vibe: Vibe) -> Profile {
        Profile::new(id, format!("Queen {}", id), 25, vibe)
    }

    fn mock_deck() -> Vec<Profile> {
        Vibe::ALL
            .iter()
            .enumerate()
            .map(|(i, vibe)| mock_profile(&format!("p{}", i), *vibe))
            .collect()
    }

    fn store_with(
        profiles: Vec<Profile>,
        config: StoreConfig,
        roll: FixedRandom,
    ) -> AppStore<FixedRandom> {
        AppStore::new(config, roll).unwrap().with_profiles(profiles)
    }

    fn forced_match_store(profiles: Vec<Profile>) -> AppStore<FixedRandom> {
        store_with(profiles, StoreConfig::default(), FixedRandom::always_match())
    }

    /// Swipe whatever card is on top
    fn swipe_top<R: RandomSource>(store: &mut AppStore<R>, kind: SwipeKind) -> SwipeOutcome {
        let id = store.current_profile().map(|p| p.id.clone()).unwrap_or_default();
        store.record_swipe(&SwipeDecision::new(kind, id)).unwrap()
    }

    fn permutations(items: &[Vibe]) -> Vec<Vec<Vibe>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut result = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                result.push(tail);
            }
        }
        result
    }

    // ---- cursor ----

    #[test]
    fn test_cursor_cycles_back_after_full_deck() {
        for size in 1..=7 {
            let profiles = (0..size)
                .map(|i| mock_profile(&format!("p{}", i), Vibe::Chill))
                .collect();
            let mut store = forced_match_store(profiles);
            store.advance_cursor();
            let start = store.cursor();
            for _ in 0..size {
                store.advance_cursor();
            }
            assert_eq!(store.cursor(), start, "deck of {}", size);
        }
    }

    #[test]
    fn test_cursor_stays_zero_on_empty_deck() {
        let mut store = forced_match_store(Vec::new());
        store.advance_cursor();
        store.advance_cursor();
        assert_eq!(store.cursor(), 0);
        assert!(store.current_profile().is_none());
        assert!(store.upcoming_profile().is_none());
    }

    #[test]
    fn test_upcoming_profile_wraps() {
        let mut store = forced_match_store(mock_deck());
        for _ in 0..4 {
            store.advance_cursor();
        }
        assert_eq!(store.current_profile().unwrap().id, "p4");
        assert_eq!(store.upcoming_profile().unwrap().id, "p0");
    }

    #[test]
    fn test_reset_swipe_stack_rewinds() {
        let mut store = forced_match_store(mock_deck());
        store.advance_cursor();
        store.advance_cursor();
        store.reset_swipe_stack();
        assert_eq!(store.cursor(), 0);
    }

    // ---- record_swipe ----

    #[test]
    fn test_pass_advances_without_match() {
        let profiles = vec![
            mock_profile("1", Vibe::Spicy),
            mock_profile("2", Vibe::Chill),
        ];
        let mut store = forced_match_store(profiles);

        let outcome = store.record_swipe(&SwipeDecision::pass("1")).unwrap();

        assert_eq!(store.cursor(), 1);
        assert_eq!(outcome.cursor, 1);
        assert!(!outcome.is_match());
        assert!(store.matches().is_empty());
    }

    #[test]
    fn test_pass_never_touches_counters_or_matches() {
        for roll in [0.0, 0.5, 0.71, 0.99] {
            for policy in [MatchPolicy::Always, MatchPolicy::default()] {
                let config = StoreConfig::default().with_match_policy(policy);
                let mut store = store_with(mock_deck(), config, FixedRandom(roll));
                for _ in 0..10 {
                    swipe_top(&mut store, SwipeKind::Pass);
                }
                assert!(store.matches().is_empty());
                assert_eq!(store.likes(), &LikeCounters::new());
            }
        }
    }

    #[test]
    fn test_like_with_forced_match_counts_and_matches() {
        let mut store = forced_match_store(vec![mock_profile("1", Vibe::Urban)]);
        assert_eq!(store.likes().given(Vibe::Urban), 0);

        let outcome = store.record_swipe(&SwipeDecision::like("1")).unwrap();

        assert_eq!(store.likes().given(Vibe::Urban), 1);
        assert_eq!(store.matches().len(), 1);
        assert_eq!(store.matches()[0].profile.vibe, Vibe::Urban);
        assert_eq!(store.matches()[0].profile.id, "1");
        assert!(store.matches()[0].conversation.is_empty());
        assert_eq!(outcome.match_id.as_deref(), Some(store.matches()[0].id.as_str()));
        assert!(outcome.like_given);
    }

    #[test]
    fn test_match_counts_a_like_received() {
        let mut store = forced_match_store(vec![mock_profile("1", Vibe::Urban)]);
        store.record_swipe(&SwipeDecision::like("1")).unwrap();
        assert_eq!(store.likes().received(Vibe::Urban), 1);
    }

    #[test]
    fn test_like_without_match_still_counts_given() {
        let mut store = store_with(
            vec![mock_profile("1", Vibe::Artsy)],
            StoreConfig::default(),
            FixedRandom::never_match(),
        );
        let outcome = store.record_swipe(&SwipeDecision::like("1")).unwrap();

        assert!(!outcome.is_match());
        assert!(store.matches().is_empty());
        assert_eq!(store.likes().given(Vibe::Artsy), 1);
        assert_eq!(store.likes().received(Vibe::Artsy), 0);
    }

    #[test]
    fn test_superlikes_match_but_do_not_count_given() {
        for kind in [SwipeKind::Boots, SwipeKind::Wig] {
            let mut store = forced_match_store(vec![mock_profile("1", Vibe::Dluxe)]);
            let outcome = swipe_top(&mut store, kind);

            assert!(outcome.is_match());
            assert!(!outcome.like_given);
            assert_eq!(store.matches().len(), 1);
            assert_eq!(store.likes().given(Vibe::Dluxe), 0);
        }
    }

    #[test]
    fn test_always_policy_ignores_random_source() {
        let config = StoreConfig::default().with_match_policy(MatchPolicy::Always);
        let mut store = store_with(mock_deck(), config, FixedRandom::never_match());
        for _ in 0..3 {
            swipe_top(&mut store, SwipeKind::Like);
        }
        assert_eq!(store.matches().len(), 3);
    }

    #[test]
    fn test_chance_policy_follows_rolls() {
        let rolls = SequenceRandom::new(vec![0.9, 0.2, 0.75, 0.7]);
        let mut store = AppStore::new(StoreConfig::default(), rolls)
            .unwrap()
            .with_profiles(mock_deck());

        let matched: Vec<bool> = (0..4)
            .map(|_| swipe_top(&mut store, SwipeKind::Like).is_match())
            .collect();

        assert_eq!(matched, vec![true, false, true, false]);
        assert_eq!(store.matches().len(), 2);
    }

    #[test]
    fn test_same_profile_can_match_twice() {
        let mut store = forced_match_store(vec![mock_profile("solo", Vibe::Chill)]);
        swipe_top(&mut store, SwipeKind::Like);
        swipe_top(&mut store, SwipeKind::Like);

        assert_eq!(store.matches().len(), 2);
        assert_ne!(store.matches()[0].id, store.matches()[1].id);
        assert_eq!(store.likes().given(Vibe::Chill), 2);
    }

    #[test]
    fn test_mismatched_profile_id_changes_nothing() {
        let mut store = forced_match_store(mock_deck());
        let before = store.snapshot();

        let err = store.record_swipe(&SwipeDecision::like("p3")).unwrap_err();

        match err {
            DomainError::ProfileMismatch { expected, actual } => {
                assert_eq!(expected, "p0");
                assert_eq!(actual, "p3");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_swipe_on_empty_deck_is_noop() {
        let mut store = forced_match_store(Vec::new());
        let outcome = store.record_swipe(&SwipeDecision::like("anyone")).unwrap();

        assert!(outcome.profile_id.is_none());
        assert!(!outcome.is_match());
        assert_eq!(outcome.cursor, 0);
        assert!(store.matches().is_empty());
        assert_eq!(store.likes(), &LikeCounters::new());
    }

    // ---- messages ----

    #[test]
    fn test_send_message_appends_to_one_conversation() {
        let mut store = forced_match_store(mock_deck());
        swipe_top(&mut store, SwipeKind::Like);
        swipe_top(&mut store, SwipeKind::Like);
        let target = store.matches()[0].id.clone();
        let other_before = store.matches()[1].conversation.clone();

        let sent = store
            .send_message(&target, NewMessage::text("me", "hello"))
            .unwrap();
        assert_eq!(sent.content, "hello");
        assert_eq!(sent.kind, MessageKind::Text);

        let conversation = &store.find_match(&target).unwrap().conversation;
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation[0].content, "hello");
        assert_eq!(store.matches()[1].conversation, other_before);
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut store = forced_match_store(mock_deck());
        swipe_top(&mut store, SwipeKind::Like);
        let target = store.matches()[0].id.clone();

        for text in ["one", "two", "three"] {
            store.send_message(&target, NewMessage::text("me", text)).unwrap();
        }

        let contents: Vec<&str> = store.matches()[0]
            .conversation
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_send_message_to_unknown_match_leaves_state_untouched() {
        let mut store = forced_match_store(mock_deck());
        swipe_top(&mut store, SwipeKind::Like);
        let target = store.matches()[0].id.clone();
        store.send_message(&target, NewMessage::text("me", "hi")).unwrap();
        let before = serde_json::to_string(store.matches()).unwrap();

        let err = store
            .send_message("match_nope", NewMessage::text("me", "hello"))
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(serde_json::to_string(store.matches()).unwrap(), before);
    }

    // ---- counters and bingo ----

    #[test]
    fn test_reset_zeroes_after_any_number_of_increments() {
        for k in [0, 1, 2, 17] {
            let mut store = forced_match_store(Vec::new());
            for _ in 0..k {
                store.increment_given(Vibe::Spicy);
                store.increment_received(Vibe::Chill);
            }
            store.reset_like_counters();
            for vibe in Vibe::ALL {
                assert_eq!(store.likes().given(vibe), 0);
                assert_eq!(store.likes().received(vibe), 0);
            }
        }
    }

    #[test]
    fn test_bingo_given_only_every_order() {
        for order in permutations(&Vibe::ALL) {
            let mut store = forced_match_store(Vec::new());
            for (i, vibe) in order.iter().enumerate() {
                assert!(!store.has_bingo(), "early bingo after {} in {:?}", i, order);
                store.increment_given(*vibe);
            }
            assert!(store.has_bingo(), "no bingo for {:?}", order);
        }
    }

    #[test]
    fn test_bingo_given_and_received_every_order() {
        let config = StoreConfig::default().with_bingo_rule(BingoRule::GivenAndReceived);
        for order in permutations(&Vibe::ALL) {
            let mut store = store_with(Vec::new(), config, FixedRandom::never_match());
            for vibe in &order {
                store.increment_given(*vibe);
            }
            for (i, vibe) in order.iter().enumerate() {
                assert!(!store.has_bingo(), "early bingo after {} in {:?}", i, order);
                store.increment_received(*vibe);
            }
            assert!(store.has_bingo(), "no bingo for {:?}", order);
        }
    }

    #[test]
    fn test_bingo_false_after_reset() {
        let mut store = forced_match_store(Vec::new());
        for vibe in Vibe::ALL {
            store.increment_given(vibe);
        }
        assert!(store.has_bingo());
        store.reset_like_counters();
        assert!(!store.has_bingo());
        assert!(!store.has_bingo());
    }

    #[test]
    fn test_bingo_reached_by_swiping() {
        let mut store = store_with(mock_deck(), StoreConfig::default(), FixedRandom::never_match());
        for _ in 0..Vibe::ALL.len() {
            assert!(!store.has_bingo());
            swipe_top(&mut store, SwipeKind::Like);
        }
        assert!(store.has_bingo());
        assert_eq!(store.bingo_progress().remaining, 0);
    }

    #[test]
    fn test_badge_unlocks_once_and_reset_relocks() {
        let mut store = forced_match_store(Vec::new());
        assert!(!store.unlock_bingo_badge());

        for vibe in Vibe::ALL {
            store.increment_given(vibe);
        }
        assert!(store.bingo_reward_pending());
        assert!(store.unlock_bingo_badge());
        assert!(!store.unlock_bingo_badge());
        assert!(!store.bingo_reward_pending());

        store.reset_like_counters();
        assert!(!store.bingo_badge_unlocked());
    }

    #[test]
    fn test_badge_survives_reset_when_configured() {
        let config = StoreConfig::default().with_reset_clears_badge(false);
        let mut store = store_with(Vec::new(), config, FixedRandom::never_match());
        for vibe in Vibe::ALL {
            store.increment_given(vibe);
        }
        store.unlock_bingo_badge();
        store.reset_like_counters();
        assert!(store.bingo_badge_unlocked());
        assert_eq!(store.likes(), &LikeCounters::new());
    }

    #[test]
    fn test_bingo_progress_board() {
        let mut store = forced_match_store(Vec::new());
        store.increment_given(Vibe::Spicy);
        store.increment_given(Vibe::Spicy);
        store.increment_given(Vibe::Artsy);

        let progress = store.bingo_progress();
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.remaining, 3);
        assert!(!progress.bingo);
        assert_eq!(progress.cells[0].vibe, Vibe::Spicy);
        assert_eq!(progress.cells[0].given, 2);
        assert!(progress.cells[0].complete);
        assert!(!progress.cells[1].complete);
    }

    // ---- construction ----

    #[test]
    fn test_from_bundled_source() {
        let source = JsonProfileSource::bundled().unwrap();
        let store =
            AppStore::from_source(&source, StoreConfig::default(), FixedRandom::never_match())
                .unwrap();

        assert!(!store.profiles().is_empty());
        assert_eq!(store.cursor(), 0);
        assert!(store.find_match("match_spicy_1").is_some());
        assert!(!store.matches()[0].conversation.is_empty());
    }

    #[test]
    fn test_seeded_duplicates_skipped() {
        let profile = mock_profile("dup", Vibe::Chill);
        let seeded = vec![
            Match::seeded(profile.clone(), chrono::Utc::now(), Vec::new()),
            Match::seeded(profile, chrono::Utc::now(), Vec::new()),
        ];
        let store = forced_match_store(Vec::new()).with_seeded_matches(seeded);
        assert_eq!(store.matches().len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config =
            StoreConfig::default().with_match_policy(MatchPolicy::Chance { probability: 2.0 });
        assert!(AppStore::new(config, FixedRandom::never_match()).is_err());
    }

    #[test]
    fn test_current_vibe_defaults_to_spicy() {
        let mut store = forced_match_store(Vec::new());
        assert_eq!(store.current_vibe(), Vibe::Spicy);
        store.set_current_vibe(Vibe::Artsy);
        assert_eq!(store.current_vibe(), Vibe::Artsy);
        assert_eq!(store.snapshot().current_vibe, Vibe::Artsy);
    }

    #[test]
    fn test_certain_chance_matches_on_zero_roll() {
        let config =
            StoreConfig::default().with_match_policy(MatchPolicy::Chance { probability: 1.0 });
        let mut store = store_with(mock_deck(), config, FixedRandom(0.0));

        let outcome = swipe_top(&mut store, SwipeKind::Like);
        assert!(outcome.is_match());
        assert_eq!(store.matches().len(), 1);
    }

    #[test]
    fn test_with_current_user_replaces_default() {
        let user = CurrentUser {
            id: "dolly".to_string(),
            name: "Dolly".to_string(),
            age: 31,
            vibes: vec![Vibe::Dluxe],
            bio: String::new(),
            images: Vec::new(),
        };
        let mut store = forced_match_store(mock_deck()).with_current_user(user.clone());
        assert_eq!(store.current_user(), &user);
        assert_eq!(store.snapshot().current_user.id, "dolly");

        let match_id = swipe_top(&mut store, SwipeKind::Like).match_id.unwrap();
        let own_id = store.current_user().id.clone();
        store.send_message(&match_id, NewMessage::text(own_id, "hey")).unwrap();
        assert_eq!(store.find_match(&match_id).unwrap().conversation[0].sender_id, "dolly");
    }
}
