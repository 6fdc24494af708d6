//! Rules of the standard game.
//!
//! Turn structure: the active player gains one mana crystal (up to
//! `MAX_MANA`), refills mana, readies the board and draws a card. They may
//! then play cards, attack, move, cast abilities and finally end the turn.
//!
//! Illegal actions are ignored; `apply_action` never panics.

use im::Vector;
use smallvec::SmallVec;

use crate::cards::{
    AbilityData, AbilityId, AbilityRegistry, AbilityTarget, AbilityTrigger, Card, CardData,
    CardId, CardRegistry, CardType, CardUid, Effect, Slot,
};
use crate::core::{
    Action, GamePhase, MatchState, PendingSelection, PlayerId, SelectionKind, PLAYER_COUNT,
};
use crate::rules::{ActionCatalog, GameResult, RulesEngine};

/// Mana crystal cap.
pub const MAX_MANA: i32 = 10;

/// Maximum hand size; further draws are burned.
pub const MAX_HAND: usize = 10;

/// Definition id used for summoned tokens.
pub const TOKEN_CARD: CardId = CardId::new(0);

/// Resolved target of an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EffectTarget {
    None,
    Player(PlayerId),
    Card(CardUid),
    Slot(Slot),
}

/// Reference rules implementation.
#[derive(Clone, Debug)]
pub struct StandardRules {
    cards: CardRegistry,
    abilities: AbilityRegistry,
    turn_limit: u32,
}

impl StandardRules {
    #[must_use]
    pub fn new(cards: CardRegistry, abilities: AbilityRegistry, turn_limit: u32) -> Self {
        Self {
            cards,
            abilities,
            turn_limit,
        }
    }

    /// Get the card registry.
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    /// Get the ability registry.
    pub fn abilities(&self) -> &AbilityRegistry {
        &self.abilities
    }

    /// Turn after which the match is a draw.
    pub fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    /// Instantiate a card definition for `owner`.
    pub fn instantiate(&self, state: &mut MatchState, id: CardId, owner: PlayerId) -> Option<Card> {
        let data = self.cards.get(id)?;
        Some(Card::from_data(state.alloc_uid(), data, owner))
    }

    // === Setup phases ===

    /// Put `discarded` hand cards at the bottom of the deck and draw as many
    /// replacements, then finish the player's mulligan.
    ///
    /// Returns false if the player is not in the mulligan.
    pub fn mulligan(&self, state: &mut MatchState, player: PlayerId, discarded: &[CardUid]) -> bool {
        if !state.is_mulligan_turn(player) {
            return false;
        }

        let mut redraws = 0;
        for uid in discarded {
            let ps = state.player_mut(player);
            if let Some(pos) = ps.hand.iter().position(|c| c.uid == *uid) {
                let card = ps.hand.remove(pos);
                ps.deck.push_back(card);
                redraws += 1;
            }
        }
        for _ in 0..redraws {
            draw_card(state, player);
        }

        self.apply_action(state, player, &Action::SelectMulligan);
        true
    }

    /// Move a side-deck card into the hand.
    ///
    /// Returns false if the player can't pick or the card isn't in their side deck.
    pub fn select_side_card(&self, state: &mut MatchState, player: PlayerId, uid: CardUid) -> bool {
        if state.phase != GamePhase::SideDeckSelection || state.player(player).side_deck_selected {
            return false;
        }

        let ps = state.player_mut(player);
        let Some(pos) = ps.side_deck.iter().position(|c| c.uid == uid) else {
            return false;
        };
        let card = ps.side_deck.remove(pos);
        ps.hand.push_back(card);
        ps.side_deck_selected = true;

        if PlayerId::all().all(|p| state.player(p).side_deck_selected) {
            start_main(state);
        }
        true
    }

    /// End the match immediately.
    pub fn end_game(&self, state: &mut MatchState, result: GameResult) {
        if state.result.is_none() {
            state.result = Some(result);
            state.phase = GamePhase::Ended;
            state.selection = None;
        }
    }

    // === Action enumeration ===

    fn ready_attackers<'a>(state: &'a MatchState, player: PlayerId) -> impl Iterator<Item = &'a Card> + 'a {
        state
            .player(player)
            .board
            .iter()
            .filter(|c| c.is_character() && !c.exhausted && c.attack > 0)
    }

    fn main_actions(&self, state: &MatchState, player: PlayerId, out: &mut Vec<Action>) {
        let ps = state.player(player);
        let free: SmallVec<[Slot; 5]> = ps.free_slots().collect();

        for card in ps.hand.iter().filter(|c| c.mana <= ps.mana) {
            match card.card_type {
                CardType::Spell => out.push(Action::PlayCard {
                    card: card.uid,
                    slot: Slot::NONE,
                }),
                CardType::Character | CardType::Artifact => {
                    out.extend(free.iter().map(|&slot| Action::PlayCard { card: card.uid, slot }));
                }
            }
        }

        let enemy = player.opponent();
        for attacker in Self::ready_attackers(state, player) {
            for target in state.player(enemy).board.iter() {
                out.push(Action::Attack {
                    card: attacker.uid,
                    target: target.uid,
                });
            }
            out.push(Action::AttackPlayer {
                card: attacker.uid,
                target_player: enemy,
            });
        }

        for card in ps.board.iter().filter(|c| !c.exhausted) {
            for &id in &card.abilities {
                let castable = self
                    .abilities
                    .get(id)
                    .is_some_and(|a| a.trigger == AbilityTrigger::Activate && a.mana <= ps.mana);
                if castable {
                    out.push(Action::CastAbility {
                        card: card.uid,
                        ability: id,
                    });
                }
            }
        }

        for card in ps.board.iter().filter(|c| !c.exhausted) {
            out.extend(free.iter().map(|&slot| Action::Move { card: card.uid, slot }));
        }

        out.push(Action::EndTurn);
    }

    fn selection_actions(&self, state: &MatchState, selection: &PendingSelection, out: &mut Vec<Action>) {
        let owner = selection.player;
        match selection.kind {
            SelectionKind::Card => {
                for p in [owner.opponent(), owner] {
                    out.extend(
                        state
                            .player(p)
                            .board
                            .iter()
                            .map(|c| Action::SelectCard { target: c.uid }),
                    );
                }
            }
            SelectionKind::Player => {
                out.push(Action::SelectPlayer {
                    target_player: owner.opponent(),
                });
                out.push(Action::SelectPlayer { target_player: owner });
            }
            SelectionKind::Slot => {
                out.extend(
                    state
                        .player(owner)
                        .free_slots()
                        .map(|slot| Action::SelectSlot { slot }),
                );
            }
            SelectionKind::Choice(n) => {
                out.extend((0..n).map(|value| Action::SelectChoice { value }));
            }
            SelectionKind::Cost(max) => {
                let max = max.min(state.player(owner).mana);
                out.extend((0..=max).rev().map(|value| Action::SelectCost { value }));
            }
        }
        out.push(Action::CancelSelect);
    }

    // === Action application ===

    fn play_card(&self, state: &mut MatchState, player: PlayerId, uid: CardUid, slot: Slot) {
        let Some(card) = state.player(player).hand_card(uid) else {
            return;
        };
        if card.mana > state.player(player).mana {
            return;
        }
        let is_spell = card.card_type == CardType::Spell;
        if is_spell != slot.is_none() || (!is_spell && !state.player(player).is_slot_free(slot)) {
            return;
        }

        let ps = state.player_mut(player);
        let Some(pos) = ps.hand.iter().position(|c| c.uid == uid) else {
            return;
        };
        let mut card = ps.hand.remove(pos);
        ps.mana -= card.mana;
        let abilities = card.abilities.clone();

        if is_spell {
            ps.discard.push_back(card);
        } else {
            card.slot = slot;
            card.exhausted = true;
            ps.board.push_back(card);
        }

        for id in abilities {
            if state.selection.is_some() || state.result.is_some() {
                break;
            }
            if let Some(ability) = self.abilities.get(id) {
                if ability.trigger == AbilityTrigger::OnPlay {
                    self.trigger(state, player, uid, ability);
                }
            }
        }
    }

    fn attack(&self, state: &mut MatchState, player: PlayerId, uid: CardUid, target: CardUid) {
        let Some(attacker) = Self::ready_attackers(state, player).find(|c| c.uid == uid) else {
            return;
        };
        let Some(defender) = state.player(player.opponent()).board_card(target) else {
            return;
        };
        let (dealt, taken) = (attacker.attack, defender.attack.max(0));

        exhaust(state, player, uid);
        damage_card(state, target, dealt);
        damage_card(state, uid, taken);
    }

    fn attack_player(&self, state: &mut MatchState, player: PlayerId, uid: CardUid, target: PlayerId) {
        if target != player.opponent() {
            return;
        }
        let Some(attacker) = Self::ready_attackers(state, player).find(|c| c.uid == uid) else {
            return;
        };
        let dealt = attacker.attack;

        exhaust(state, player, uid);
        state.player_mut(target).hp -= dealt;
    }

    fn move_card(&self, state: &mut MatchState, player: PlayerId, uid: CardUid, slot: Slot) {
        let ps = state.player_mut(player);
        if !ps.is_slot_free(slot) {
            return;
        }
        if let Some(card) = ps.board.iter_mut().find(|c| c.uid == uid && !c.exhausted) {
            card.slot = slot;
            card.exhausted = true;
        }
    }

    fn cast_ability(&self, state: &mut MatchState, player: PlayerId, uid: CardUid, id: AbilityId) {
        let Some(ability) = self.abilities.get(id) else {
            return;
        };
        let ready = state
            .player(player)
            .board_card(uid)
            .is_some_and(|c| !c.exhausted && c.abilities.contains(&id));
        if !ready || ability.trigger != AbilityTrigger::Activate || ability.mana > state.player(player).mana {
            return;
        }

        state.player_mut(player).mana -= ability.mana;
        exhaust(state, player, uid);
        self.trigger(state, player, uid, ability);
    }

    /// Resolve an ability now, or open a selection for it.
    fn trigger(&self, state: &mut MatchState, player: PlayerId, caster: CardUid, ability: &AbilityData) {
        let kind = match &ability.target {
            AbilityTarget::None => {
                let target = default_target(state, player, caster, ability.effect);
                resolve(state, player, ability.effect, target);
                return;
            }
            AbilityTarget::SelfPlayer => {
                resolve(state, player, ability.effect, EffectTarget::Player(player));
                return;
            }
            AbilityTarget::Opponent => {
                resolve(state, player, ability.effect, EffectTarget::Player(player.opponent()));
                return;
            }
            AbilityTarget::SelectCard => SelectionKind::Card,
            AbilityTarget::SelectPlayer => SelectionKind::Player,
            AbilityTarget::SelectSlot => SelectionKind::Slot,
            AbilityTarget::Choice(effects) => SelectionKind::Choice(effects.len().min(u8::MAX as usize) as u8),
            AbilityTarget::Cost => SelectionKind::Cost(state.player(player).mana),
        };

        state.selection = Some(PendingSelection {
            player,
            caster,
            ability: ability.id,
            kind,
        });
    }

    fn answer(&self, state: &mut MatchState, player: PlayerId, action: &Action) {
        let Some(selection) = state.selection else {
            return;
        };
        if selection.player != player {
            return;
        }
        let Some(ability) = self.abilities.get(selection.ability) else {
            state.selection = None;
            return;
        };

        let (effect, target) = match (*action, selection.kind, &ability.target) {
            (Action::CancelSelect, _, _) => {
                state.selection = None;
                return;
            }
            (Action::SelectCard { target }, SelectionKind::Card, _) => {
                if state.board_card(target).is_none() {
                    return;
                }
                (ability.effect, EffectTarget::Card(target))
            }
            (Action::SelectPlayer { target_player }, SelectionKind::Player, _) => {
                if target_player.index() >= PLAYER_COUNT {
                    return;
                }
                (ability.effect, EffectTarget::Player(target_player))
            }
            (Action::SelectSlot { slot }, SelectionKind::Slot, _) => {
                if !state.player(player).is_slot_free(slot) {
                    return;
                }
                (ability.effect, EffectTarget::Slot(slot))
            }
            (Action::SelectChoice { value }, SelectionKind::Choice(n), AbilityTarget::Choice(effects)) => {
                let Some(effect) = effects.get(value as usize).filter(|_| value < n) else {
                    return;
                };
                (*effect, default_target(state, player, selection.caster, *effect))
            }
            (Action::SelectCost { value }, SelectionKind::Cost(max), _) => {
                if value < 0 || value > max || value > state.player(player).mana {
                    return;
                }
                state.player_mut(player).mana -= value;
                let effect = with_amount(ability.effect, value);
                (effect, default_target(state, player, selection.caster, effect))
            }
            _ => return,
        };

        state.selection = None;
        resolve(state, player, effect, target);
    }

    fn end_turn(&self, state: &mut MatchState) {
        state.selection = None;
        state.current_player = state.current_player.opponent();
        state.turn += 1;
        if state.turn > self.turn_limit {
            self.end_game(state, GameResult::Draw);
            return;
        }
        let next = state.current_player;
        start_turn(state, next);
    }

    fn finish_mulligan(&self, state: &mut MatchState, player: PlayerId) {
        state.player_mut(player).mulligan_done = true;
        if !PlayerId::all().all(|p| state.player(p).mulligan_done) {
            return;
        }

        for p in PlayerId::all() {
            let ps = state.player_mut(p);
            ps.side_deck_selected = !ps.has_side_cards();
        }
        if PlayerId::all().all(|p| state.player(p).side_deck_selected) {
            start_main(state);
        } else {
            state.phase = GamePhase::SideDeckSelection;
        }
    }

    fn check_result(&self, state: &mut MatchState) {
        if state.result.is_some() {
            return;
        }
        let dead: SmallVec<[PlayerId; 2]> = PlayerId::all().filter(|&p| state.player(p).is_dead()).collect();
        match dead.as_slice() {
            [] => {}
            [loser] => self.end_game(state, GameResult::Winner(loser.opponent())),
            _ => self.end_game(state, GameResult::Draw),
        }
    }
}

impl ActionCatalog for StandardRules {
    fn legal_actions(&self, state: &MatchState, player: PlayerId) -> Vec<Action> {
        let mut actions = Vec::new();
        match state.phase {
            GamePhase::Mulligan if state.is_mulligan_turn(player) => actions.push(Action::SelectMulligan),
            GamePhase::Main => match &state.selection {
                Some(selection) if selection.player == player => {
                    self.selection_actions(state, selection, &mut actions);
                }
                None if state.current_player == player => self.main_actions(state, player, &mut actions),
                _ => {}
            },
            _ => {}
        }
        actions
    }
}

impl RulesEngine for StandardRules {
    fn apply_action(&self, state: &mut MatchState, player: PlayerId, action: &Action) {
        if state.is_finished() {
            return;
        }

        match *action {
            Action::Resign => {
                self.end_game(state, GameResult::Winner(player.opponent()));
                return;
            }
            Action::SelectMulligan => {
                if state.is_mulligan_turn(player) {
                    self.finish_mulligan(state, player);
                }
                return;
            }
            _ => {}
        }

        if state.phase != GamePhase::Main {
            return;
        }
        if action.is_selection() {
            self.answer(state, player, action);
            self.check_result(state);
            return;
        }
        if state.selection.is_some() || state.current_player != player {
            return;
        }

        match *action {
            Action::PlayCard { card, slot } => self.play_card(state, player, card, slot),
            Action::Attack { card, target } => self.attack(state, player, card, target),
            Action::AttackPlayer { card, target_player } => self.attack_player(state, player, card, target_player),
            Action::Move { card, slot } => self.move_card(state, player, card, slot),
            Action::CastAbility { card, ability } => self.cast_ability(state, player, card, ability),
            Action::EndTurn => self.end_turn(state),
            _ => {}
        }
        self.check_result(state);
    }

    fn result(&self, state: &MatchState) -> Option<GameResult> {
        state.result
    }

    fn ability(&self, id: AbilityId) -> Option<&AbilityData> {
        self.abilities.get(id)
    }
}

// === State helpers ===

fn start_main(state: &mut MatchState) {
    state.phase = GamePhase::Main;
    state.turn = 1;
    state.current_player = PlayerId::new(0);
    start_turn(state, PlayerId::new(0));
}

fn start_turn(state: &mut MatchState, player: PlayerId) {
    let ps = state.player_mut(player);
    ps.mana_max = (ps.mana_max + 1).min(MAX_MANA);
    ps.mana = ps.mana_max;
    for card in ps.board.iter_mut() {
        card.exhausted = false;
    }
    draw_card(state, player);
}

pub(crate) fn draw_card(state: &mut MatchState, player: PlayerId) {
    let ps = state.player_mut(player);
    let Some(card) = ps.deck.pop_front() else {
        return;
    };
    if ps.hand.len() >= MAX_HAND {
        ps.discard.push_back(card);
    } else {
        ps.hand.push_back(card);
    }
}

fn exhaust(state: &mut MatchState, player: PlayerId, uid: CardUid) {
    if let Some(card) = state.player_mut(player).board.iter_mut().find(|c| c.uid == uid) {
        card.exhausted = true;
    }
}

/// Deal damage to a board card; destroyed cards go to the discard.
fn damage_card(state: &mut MatchState, uid: CardUid, amount: i32) {
    let Some(owner) = state.board_card(uid).map(|c| c.owner) else {
        return;
    };
    let ps = state.player_mut(owner);
    let Some(pos) = ps.board.iter().position(|c| c.uid == uid) else {
        return;
    };
    let destroyed = match ps.board.get_mut(pos) {
        Some(card) => {
            card.damage += amount.max(0);
            card.current_hp() <= 0
        }
        None => false,
    };
    if destroyed {
        let mut card = ps.board.remove(pos);
        card.slot = Slot::NONE;
        ps.discard.push_back(card);
    }
}

fn default_target(state: &MatchState, player: PlayerId, caster: CardUid, effect: Effect) -> EffectTarget {
    match effect {
        Effect::Damage(_) => EffectTarget::Player(player.opponent()),
        Effect::Heal(_) | Effect::Draw(_) => EffectTarget::Player(player),
        Effect::Buff { .. } => match state.board_card(caster) {
            Some(_) => EffectTarget::Card(caster),
            None => EffectTarget::None,
        },
        Effect::Summon { .. } => state
            .player(player)
            .free_slot()
            .map_or(EffectTarget::None, EffectTarget::Slot),
    }
}

fn with_amount(effect: Effect, amount: i32) -> Effect {
    match effect {
        Effect::Damage(_) => Effect::Damage(amount),
        Effect::Heal(_) => Effect::Heal(amount),
        Effect::Draw(_) => Effect::Draw(amount.max(0) as u32),
        Effect::Buff { .. } => Effect::Buff {
            attack: amount,
            hp: amount,
        },
        Effect::Summon { .. } => Effect::Summon {
            attack: amount,
            hp: amount,
        },
    }
}

fn resolve(state: &mut MatchState, player: PlayerId, effect: Effect, target: EffectTarget) {
    match (effect, target) {
        (Effect::Damage(n), EffectTarget::Player(p)) => state.player_mut(p).hp -= n.max(0),
        (Effect::Damage(n), EffectTarget::Card(uid)) => damage_card(state, uid, n),
        (Effect::Heal(n), EffectTarget::Player(p)) => {
            let ps = state.player_mut(p);
            ps.hp = (ps.hp + n.max(0)).min(ps.hp_max);
        }
        (Effect::Heal(n), EffectTarget::Card(uid)) => {
            if let Some(owner) = state.board_card(uid).map(|c| c.owner) {
                if let Some(card) = state.player_mut(owner).board.iter_mut().find(|c| c.uid == uid) {
                    card.damage = (card.damage - n.max(0)).max(0);
                }
            }
        }
        (Effect::Draw(n), EffectTarget::Player(p)) => {
            for _ in 0..n {
                draw_card(state, p);
            }
        }
        (Effect::Buff { attack, hp }, EffectTarget::Card(uid)) => {
            if let Some(owner) = state.board_card(uid).map(|c| c.owner) {
                if let Some(card) = state.player_mut(owner).board.iter_mut().find(|c| c.uid == uid) {
                    card.attack += attack;
                    card.hp += hp;
                }
            }
        }
        (Effect::Summon { attack, hp }, EffectTarget::Slot(slot)) => {
            if hp <= 0 || !state.player(player).is_slot_free(slot) {
                return;
            }
            let data = CardData::new(TOKEN_CARD, "Token", CardType::Character).with_stats(attack, hp);
            let mut token = Card::from_data(state.alloc_uid(), &data, player);
            token.slot = slot;
            token.exhausted = true;
            state.player_mut(player).board.push_back(token);
        }
        _ => {}
    }
}

/// Build a deck vector from definition ids.
pub(crate) fn build_zone(
    rules: &StandardRules,
    state: &mut MatchState,
    owner: PlayerId,
    ids: impl IntoIterator<Item = u32>,
) -> Vector<Card> {
    ids.into_iter()
        .filter_map(|id| rules.instantiate(state, CardId::new(id), owner))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::standard::cards::{starter_abilities, starter_cards, FIREBALL, SPARK};

    fn rules() -> StandardRules {
        StandardRules::new(starter_cards(), starter_abilities(), 60)
    }

    fn main_state(rules: &StandardRules) -> MatchState {
        let mut state = MatchState::new(30);
        for p in PlayerId::all() {
            state.player_mut(p).mulligan_done = true;
            state.player_mut(p).side_deck_selected = true;
        }
        let deck = build_zone(rules, &mut state, PlayerId::new(0), [1, 1, 1]);
        state.player_mut(PlayerId::new(0)).deck = deck;
        start_main(&mut state);
        state
    }

    fn put_on_board(rules: &StandardRules, state: &mut MatchState, owner: PlayerId, id: u32, slot: u8) -> CardUid {
        let mut card = rules.instantiate(state, CardId::new(id), owner).unwrap();
        card.slot = Slot::new(slot);
        let uid = card.uid;
        state.player_mut(owner).board.push_back(card);
        uid
    }

    fn put_in_hand(rules: &StandardRules, state: &mut MatchState, owner: PlayerId, id: u32) -> CardUid {
        let card = rules.instantiate(state, CardId::new(id), owner).unwrap();
        let uid = card.uid;
        state.player_mut(owner).hand.push_back(card);
        uid
    }

    #[test]
    fn test_start_main_ramps_and_draws() {
        let rules = rules();
        let state = main_state(&rules);
        let p0 = state.player(PlayerId::new(0));

        assert_eq!(state.phase, GamePhase::Main);
        assert_eq!(state.turn, 1);
        assert_eq!(p0.mana, 1);
        assert_eq!(p0.hand.len(), 1);
        assert_eq!(p0.deck.len(), 2);
    }

    #[test]
    fn test_mana_is_capped() {
        let rules = rules();
        let mut state = main_state(&rules);
        for _ in 0..30 {
            let p = state.current_player;
            rules.apply_action(&mut state, p, &Action::EndTurn);
        }
        assert_eq!(state.player(PlayerId::new(0)).mana_max, MAX_MANA);
    }

    #[test]
    fn test_play_character_to_slot() {
        let rules = rules();
        let mut state = main_state(&rules);
        let p0 = PlayerId::new(0);
        let uid = state.player(p0).hand[0].uid;

        let actions = rules.legal_actions(&state, p0);
        assert!(actions.contains(&Action::PlayCard { card: uid, slot: Slot::new(1) }));
        assert_eq!(actions.last(), Some(&Action::EndTurn));

        rules.apply_action(&mut state, p0, &Action::PlayCard { card: uid, slot: Slot::new(3) });
        let card = state.player(p0).board_card(uid).unwrap();
        assert_eq!(card.slot, Slot::new(3));
        assert!(card.exhausted);
        assert_eq!(state.player(p0).mana, 0);
    }

    #[test]
    fn test_illegal_actions_are_ignored() {
        let rules = rules();
        let mut state = main_state(&rules);
        let before = state.clone();

        rules.apply_action(&mut state, PlayerId::new(1), &Action::EndTurn);
        rules.apply_action(
            &mut state,
            PlayerId::new(0),
            &Action::PlayCard { card: CardUid::new(999), slot: Slot::new(1) },
        );
        rules.apply_action(&mut state, PlayerId::new(0), &Action::SelectSlot { slot: Slot::new(1) });
        assert_eq!(state, before);
    }

    #[test]
    fn test_attack_player_and_win() {
        let rules = rules();
        let mut state = main_state(&rules);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        let ogre = put_on_board(&rules, &mut state, p0, 5, 1);
        state.player_mut(p1).hp = 5;

        rules.apply_action(&mut state, p0, &Action::AttackPlayer { card: ogre, target_player: p1 });

        assert_eq!(state.result, Some(GameResult::Winner(p0)));
        assert!(state.is_finished());
        assert!(rules.legal_actions(&state, p0).is_empty());
    }

    #[test]
    fn test_combat_destroys_cards() {
        let rules = rules();
        let mut state = main_state(&rules);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        let knight = put_on_board(&rules, &mut state, p0, 3, 1);
        let archer = put_on_board(&rules, &mut state, p1, 2, 1);

        rules.apply_action(&mut state, p0, &Action::Attack { card: knight, target: archer });

        assert!(state.player(p1).board.is_empty());
        assert_eq!(state.player(p1).discard.len(), 1);
        let knight = state.player(p0).board_card(knight).unwrap();
        assert_eq!(knight.damage, 2);
        assert!(knight.exhausted);
    }

    #[test]
    fn test_spell_selection_flow() {
        let rules = rules();
        let mut state = main_state(&rules);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        let target = put_on_board(&rules, &mut state, p1, 1, 2);
        let spark = put_in_hand(&rules, &mut state, p0, 7);

        rules.apply_action(&mut state, p0, &Action::PlayCard { card: spark, slot: Slot::NONE });
        let selection = state.selection.unwrap();
        assert_eq!(selection.ability, SPARK);
        assert_eq!(selection.kind, SelectionKind::Card);

        let answers = rules.legal_actions(&state, p0);
        assert_eq!(answers, vec![Action::SelectCard { target }, Action::CancelSelect]);
        assert!(!answers.contains(&Action::EndTurn));

        rules.apply_action(&mut state, p0, &Action::SelectCard { target });
        assert!(state.selection.is_none());
        assert!(state.player(p1).board.is_empty());
    }

    #[test]
    fn test_cost_selection_pays_mana() {
        let rules = rules();
        let mut state = main_state(&rules);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        state.player_mut(p0).mana = 5;
        let fireball = put_in_hand(&rules, &mut state, p0, 10);

        rules.apply_action(&mut state, p0, &Action::PlayCard { card: fireball, slot: Slot::NONE });
        assert_eq!(state.selection.map(|s| (s.ability, s.kind)), Some((FIREBALL, SelectionKind::Cost(4))));

        rules.apply_action(&mut state, p0, &Action::SelectCost { value: 9 });
        assert!(state.selection.is_some());

        rules.apply_action(&mut state, p0, &Action::SelectCost { value: 3 });
        assert_eq!(state.player(p0).mana, 1);
        assert_eq!(state.player(p1).hp, 27);
    }

    #[test]
    fn test_cancel_selection() {
        let rules = rules();
        let mut state = main_state(&rules);
        let p0 = PlayerId::new(0);
        let summoner = put_on_board(&rules, &mut state, p0, 6, 1);
        state.player_mut(p0).mana = 3;

        let cast = Action::CastAbility { card: summoner, ability: crate::games::standard::cards::CALL };
        assert!(rules.is_legal(&state, p0, &cast));
        rules.apply_action(&mut state, p0, &cast);
        assert_eq!(state.selection.map(|s| s.kind), Some(SelectionKind::Slot));

        rules.apply_action(&mut state, p0, &Action::CancelSelect);
        assert!(state.selection.is_none());
        assert_eq!(state.player(p0).mana, 1);
        assert!(state.player(p0).board_card(summoner).unwrap().exhausted);
    }

    #[test]
    fn test_summon_into_selected_slot() {
        let rules = rules();
        let mut state = main_state(&rules);
        let p0 = PlayerId::new(0);
        let summoner = put_on_board(&rules, &mut state, p0, 6, 1);
        state.player_mut(p0).mana = 3;

        rules.apply_action(&mut state, p0, &Action::CastAbility { card: summoner, ability: crate::games::standard::cards::CALL });
        rules.apply_action(&mut state, p0, &Action::SelectSlot { slot: Slot::new(1) });
        assert!(state.selection.is_some());

        rules.apply_action(&mut state, p0, &Action::SelectSlot { slot: Slot::new(4) });
        let token = state.player(p0).board.iter().find(|c| c.card_id == TOKEN_CARD).unwrap();
        assert_eq!(token.slot, Slot::new(4));
    }

    #[test]
    fn test_resign() {
        let rules = rules();
        let mut state = main_state(&rules);
        rules.apply_action(&mut state, PlayerId::new(0), &Action::Resign);
        assert_eq!(rules.result(&state), Some(GameResult::Winner(PlayerId::new(1))));
    }

    #[test]
    fn test_turn_limit_draws() {
        let rules = StandardRules::new(starter_cards(), starter_abilities(), 2);
        let mut state = main_state(&rules);
        rules.apply_action(&mut state, PlayerId::new(0), &Action::EndTurn);
        assert!(state.result.is_none());
        rules.apply_action(&mut state, PlayerId::new(1), &Action::EndTurn);
        assert_eq!(state.result, Some(GameResult::Draw));
    }

    #[test]
    fn test_mulligan_then_side_deck() {
        let rules = rules();
        let mut state = MatchState::new(30);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        let hand = build_zone(&rules, &mut state, p0, [1, 3]);
        let deck = build_zone(&rules, &mut state, p0, [5]);
        let side = build_zone(&rules, &mut state, p1, [20]);
        let kept = hand[0].uid;
        let tossed = hand[1].uid;
        state.player_mut(p0).hand = hand;
        state.player_mut(p0).deck = deck;
        state.player_mut(p1).side_deck = side.clone();

        assert_eq!(rules.legal_actions(&state, p0), vec![Action::SelectMulligan]);
        assert!(rules.mulligan(&mut state, p0, &[tossed]));
        assert!(!rules.mulligan(&mut state, p0, &[]));

        let ps = state.player(p0);
        assert!(ps.hand_card(kept).is_some());
        assert!(ps.hand_card(tossed).is_none());
        assert_eq!(ps.deck.back().map(|c| c.uid), Some(tossed));
        assert_eq!(state.phase, GamePhase::Mulligan);

        rules.apply_action(&mut state, p1, &Action::SelectMulligan);
        assert_eq!(state.phase, GamePhase::SideDeckSelection);
        assert!(state.player(p0).side_deck_selected);
        assert!(!state.player(p1).side_deck_selected);

        assert!(rules.select_side_card(&mut state, p1, side[0].uid));
        assert_eq!(state.phase, GamePhase::Main);
        assert!(state.player(p1).hand_card(side[0].uid).is_some());
    }
}
