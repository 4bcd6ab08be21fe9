use crate::battle::ai::MoveSelector;
use crate::battle::calculators::resolve_move;
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, BattleOutcome, EventBus, GameState, Side};
use crate::battle::turn_orchestrator::determine_turn_order;
use crate::errors::BattleSetupError;
use crate::player::Roster;
use crate::pokemon::PokemonInst;
use schema::Move;
use std::fmt;

type EventListener<'a> = Box<dyn FnMut(&BattleEvent) + 'a>;

/// A single 1v1 battle between the player's active Pokemon and an opponent.
///
/// The battle borrows both Pokemon for its lifetime and is the only thing that
/// mutates their HP while it runs.
pub struct Battle<'a> {
    player: &'a mut PokemonInst,
    opponent: &'a mut PokemonInst,
    turn_count: u32,
    game_state: GameState,
    bus: EventBus,
    listener: Option<EventListener<'a>>,
}

impl fmt::Debug for Battle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battle")
            .field("player", &self.player)
            .field("opponent", &self.opponent)
            .field("turn_count", &self.turn_count)
            .field("game_state", &self.game_state)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

impl<'a> Battle<'a> {
    /// Set up a battle. Fails if the roster has no usable Pokemon or the
    /// opponent's data is invalid.
    pub fn new<R: Roster + ?Sized>(
        roster: &'a mut R,
        opponent: &'a mut PokemonInst,
    ) -> Result<Self, BattleSetupError> {
        opponent
            .validate()
            .map_err(BattleSetupError::InvalidOpponent)?;

        let player = roster
            .active_pokemon_mut()
            .filter(|pokemon| !pokemon.is_fainted())
            .ok_or(BattleSetupError::NoActivePokemon)?;
        player
            .validate()
            .map_err(BattleSetupError::InvalidPlayerPokemon)?;

        tracing::info!(
            player = player.name(),
            opponent = opponent.name(),
            "battle created"
        );

        Ok(Self {
            player,
            opponent,
            turn_count: 0,
            game_state: GameState::InProgress,
            bus: EventBus::new(),
            listener: None,
        })
    }

    /// Observe every event as it is recorded, e.g. to narrate the battle live.
    pub fn with_listener(mut self, listener: impl FnMut(&BattleEvent) + 'a) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn events(&self) -> &[BattleEvent] {
        self.bus.events()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn pokemon(&self, side: Side) -> &PokemonInst {
        match side {
            Side::Player => &*self.player,
            Side::Opponent => &*self.opponent,
        }
    }

    /// The winning Pokemon once the battle has ended with a winner.
    pub fn winner(&self) -> Option<&PokemonInst> {
        match self.game_state {
            GameState::Ended(BattleOutcome::Winner(side)) => Some(self.pokemon(side)),
            _ => None,
        }
    }

    /// Mutable access to the winner, e.g. to award experience.
    pub fn winner_mut(&mut self) -> Option<&mut PokemonInst> {
        match self.game_state {
            GameState::Ended(BattleOutcome::Winner(Side::Player)) => Some(&mut *self.player),
            GameState::Ended(BattleOutcome::Winner(Side::Opponent)) => Some(&mut *self.opponent),
            _ => None,
        }
    }

    /// Consume the battle, handing back the winner with the original borrow.
    pub fn into_winner(self) -> Option<&'a mut PokemonInst> {
        let Battle {
            player,
            opponent,
            game_state,
            ..
        } = self;
        match game_state {
            GameState::Ended(BattleOutcome::Winner(Side::Player)) => Some(player),
            GameState::Ended(BattleOutcome::Winner(Side::Opponent)) => Some(opponent),
            _ => None,
        }
    }

    /// Run turns until one side faints or move selection is cancelled.
    ///
    /// Each turn both sides are asked for a move, in turn order. If either
    /// returns `None` the battle ends with no winner, attributed to the first
    /// side that declined.
    ///
    /// The first mover strictly wins simultaneous knockouts: once the first
    /// attack faints its target the turn ends and the target never acts.
    /// Calling `run` again after the battle ended returns the same outcome.
    pub fn run<S, G>(&mut self, selector: &mut S, rng: &mut G) -> BattleOutcome
    where
        S: MoveSelector,
        G: BattleRng,
    {
        if let GameState::Ended(outcome) = self.game_state {
            return outcome;
        }

        self.emit(BattleEvent::BattleStarted {
            player: self.player.name().to_string(),
            opponent: self.opponent.name().to_string(),
        });

        while !self.player.is_fainted() && !self.opponent.is_fainted() {
            self.turn_count += 1;
            self.emit(BattleEvent::TurnStarted {
                turn_number: self.turn_count,
                player_hp: self.player.current_hp(),
                opponent_hp: self.opponent.current_hp(),
            });

            let [first, second] = determine_turn_order(&*self.player, &*self.opponent, rng);
            self.emit(BattleEvent::TurnOrderDecided {
                first,
                pokemon: self.pokemon(first).name().to_string(),
                speed_tie: self.player.speed() == self.opponent.speed(),
            });

            // Both sides choose before either choice is checked
            let first_choice = selector.choose_move(first, self.pokemon(first));
            let second_choice = selector.choose_move(second, self.pokemon(second));
            let (first_move, second_move) = match (first_choice, second_choice) {
                (Some(first_move), Some(second_move)) => (first_move, second_move),
                (None, _) => return self.cancel(first),
                (Some(_), None) => return self.cancel(second),
            };

            if !self.pokemon(first).is_fainted() && self.execute_move(first, &first_move, rng) {
                continue;
            }

            if !self.pokemon(second).is_fainted() {
                self.execute_move(second, &second_move, rng);
            }
        }

        let outcome = if self.player.is_fainted() {
            BattleOutcome::Winner(Side::Opponent)
        } else if self.opponent.is_fainted() {
            BattleOutcome::Winner(Side::Player)
        } else {
            BattleOutcome::NoWinner
        };
        self.finish(outcome)
    }

    /// Apply one move from `attacker` against the other side.
    /// Returns true if the defender fainted.
    fn execute_move<G: BattleRng>(
        &mut self,
        attacker_side: Side,
        move_: &Move,
        rng: &mut G,
    ) -> bool {
        let (attacker, defender) = match attacker_side {
            Side::Player => (&*self.player, &mut *self.opponent),
            Side::Opponent => (&*self.opponent, &mut *self.player),
        };
        let attacker_name = attacker.name().to_string();
        let defender_name = defender.name().to_string();

        let outcome = resolve_move(attacker, defender, move_, rng);
        let remaining_hp = defender.current_hp();
        let max_hp = defender.max_hp();

        tracing::debug!(
            attacker = %attacker_name,
            defender = %defender_name,
            move_name = %move_.name,
            hit = outcome.hit,
            damage = outcome.damage,
            remaining_hp,
            "move resolved"
        );

        self.emit(BattleEvent::MoveUsed {
            side: attacker_side,
            pokemon: attacker_name.clone(),
            move_name: move_.name.clone(),
        });

        if !outcome.hit {
            self.emit(BattleEvent::MoveMissed {
                attacker: attacker_name,
                defender: defender_name,
                move_name: move_.name.clone(),
            });
            return outcome.defender_fainted;
        }

        self.emit(BattleEvent::MoveHit {
            attacker: attacker_name,
            defender: defender_name.clone(),
            move_name: move_.name.clone(),
        });

        if outcome.damage > 0 {
            self.emit(BattleEvent::DamageDealt {
                target: defender_name.clone(),
                damage: outcome.damage,
                remaining_hp,
                max_hp,
            });
        } else {
            self.emit(BattleEvent::NoDirectEffect {
                move_name: move_.name.clone(),
            });
        }

        if outcome.defender_fainted {
            self.emit(BattleEvent::PokemonFainted {
                side: attacker_side.other(),
                pokemon: defender_name,
            });
        }

        outcome.defender_fainted
    }

    fn emit(&mut self, event: BattleEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
        self.bus.push(event);
    }

    fn cancel(&mut self, side: Side) -> BattleOutcome {
        tracing::info!(%side, turn = self.turn_count, "move selection cancelled");
        self.emit(BattleEvent::SelectionCancelled { side });
        self.finish(BattleOutcome::NoWinner)
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleOutcome {
        self.game_state = GameState::Ended(outcome);
        self.emit(BattleEvent::BattleEnded {
            outcome,
            turns: self.turn_count,
        });
        tracing::info!(?outcome, turns = self.turn_count, "battle ended");
        outcome
    }
}
