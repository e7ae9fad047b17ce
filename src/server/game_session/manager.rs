//! Session manager: matchmaking, move arbitration and session teardown.
//!
//! The manager owns the matchmaking queue and the session store and is driven one request
//! at a time by the [`GameServer`](super::server::GameServer) actor. Every method either
//! applies its whole effect or returns an error with nothing changed and nothing sent.

use log::{debug, error, info};

use crate::error::GameError;
use crate::game::board::{apply_move, Board, MoveOutcome};
use crate::game::types::{PlayerSlot, Winner};
use crate::server::broadcaster::Broadcaster;
use crate::server::game_session::store::{GameSession, Seats, SessionStatus, SessionStore};
use crate::server::matchmaking::MatchmakingQueue;
use crate::server::protocol::{GameStateSnapshot, LastMove, ServerWsMessage};
use crate::server::types::{ParticipantId, SessionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Nobody was waiting; the participant is now queued.
    Waiting,
    Matched {
        session_id: SessionId,
        opponent: ParticipantId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Continued { next_player: PlayerSlot },
    Finished { winner: Winner },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisconnectOutcome {
    LeftQueue,
    SessionClosed(SessionId),
    /// Neither queued nor playing, e.g. the session already ended.
    NotFound,
}

pub struct SessionManager {
    queue: MatchmakingQueue,
    store: SessionStore,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(MatchmakingQueue::new(), SessionStore::new())
    }
}

impl SessionManager {
    pub fn new(queue: MatchmakingQueue, store: SessionStore) -> Self {
        Self { queue, store }
    }

    pub fn queue(&self) -> &MatchmakingQueue {
        &self.queue
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Pair `participant` with the most recent waiting participant, or queue it.
    pub fn join<B>(&mut self, participant: ParticipantId, out: &B) -> Result<JoinOutcome, GameError>
    where
        B: Broadcaster + ?Sized,
    {
        if self.queue.contains(&participant) {
            return Err(GameError::AlreadyQueued(participant));
        }
        if let Some(session) = self.store.find_by_participant(&participant) {
            return Err(GameError::AlreadyInSession(participant, session.id.clone()));
        }

        let Some(opponent) = self.queue.pair() else {
            self.queue.enqueue(participant)?;
            info!("[Matchmaking] Player {} is waiting for a match", participant);
            out.send_to(participant, ServerWsMessage::waiting());
            return Ok(JoinOutcome::Waiting);
        };

        let seats = Seats {
            player1: opponent,
            player2: participant,
        };
        let session = GameSession::new(seats);
        let session_id = session.id.clone();
        let board = session.board;
        let current_player = session.current_player;

        if let Err(err) = self.store.insert(session) {
            error!("[Matchmaking] {} (players {} and {})", err, opponent, participant);
            self.queue.enqueue(opponent)?;
            return Err(err);
        }

        for seat in [PlayerSlot::Player1, PlayerSlot::Player2] {
            let recipient = seats.participant(seat);
            out.send_to(
                recipient,
                ServerWsMessage::Matched {
                    session_id: session_id.clone(),
                    seat,
                },
            );
            out.send_to(
                recipient,
                ServerWsMessage::GameState(GameStateSnapshot {
                    session_id: session_id.clone(),
                    board,
                    current_player,
                    seat: Some(seat),
                    last_move: None,
                }),
            );
        }
        info!("[Matchmaking] Match found: {} vs {} in {}", opponent, participant, session_id);

        Ok(JoinOutcome::Matched {
            session_id,
            opponent,
        })
    }

    /// Validate and apply a move, then broadcast the new state to both seats.
    ///
    /// A finished game is announced with a `gameOver` frame and removed from the store.
    pub fn make_move<B>(
        &mut self,
        sender: ParticipantId,
        session_id: &SessionId,
        player: PlayerSlot,
        pocket: usize,
        out: &B,
    ) -> Result<MoveResult, GameError>
    where
        B: Broadcaster + ?Sized,
    {
        let session = self
            .store
            .get_mut(session_id)
            .ok_or_else(|| GameError::UnknownSession(session_id.clone()))?;
        let sender_seat = session
            .seats
            .seat_of(&sender)
            .ok_or_else(|| GameError::UnknownSession(session_id.clone()))?;
        if player != session.current_player || sender_seat != player {
            return Err(GameError::NotYourTurn {
                expected: session.current_player,
            });
        }

        let outcome = apply_move(&session.board, pocket, player)?;
        session.board = outcome.board;
        session.current_player = outcome.next_player;

        let participants = session.seats.both();
        let description = describe_move(player, pocket, &outcome);
        debug!("[GameServer] {}: {}", session_id, description);
        out.send_to_all(
            &participants,
            ServerWsMessage::GameState(GameStateSnapshot {
                session_id: session_id.clone(),
                board: session.board,
                current_player: session.current_player,
                seat: None,
                last_move: Some(LastMove {
                    player,
                    pocket,
                    mover: sender,
                    description,
                }),
            }),
        );

        if !outcome.game_over {
            return Ok(MoveResult::Continued {
                next_player: outcome.next_player,
            });
        }

        session.status = SessionStatus::Finished;
        let winner = outcome.board.winner();
        let message = game_over_message(&outcome.board);
        info!("[GameServer] Game {} over: {}", session_id, message);
        out.send_to_all(
            &participants,
            ServerWsMessage::GameOver {
                session_id: session_id.clone(),
                winner,
                message,
                board: outcome.board,
            },
        );
        self.store.remove(session_id);

        Ok(MoveResult::Finished { winner })
    }

    /// Voluntary exit: the session ends at once and the opponent is not told.
    pub fn leave(&mut self, sender: ParticipantId, session_id: &SessionId) -> Result<(), GameError> {
        let is_member = self
            .store
            .get(session_id)
            .is_some_and(|session| session.seats.seat_of(&sender).is_some());
        if !is_member {
            return Err(GameError::UnknownSession(session_id.clone()));
        }
        self.store.remove(session_id);
        info!("[GameServer] Player {} left game {}", sender, session_id);
        Ok(())
    }

    /// Lost connection: drop the participant from the queue, or end its session and
    /// tell the opponent.
    pub fn disconnect<B>(&mut self, participant: ParticipantId, out: &B) -> DisconnectOutcome
    where
        B: Broadcaster + ?Sized,
    {
        if self.queue.remove(&participant) {
            info!("[Matchmaking] Player {} removed from waiting list", participant);
            return DisconnectOutcome::LeftQueue;
        }

        let Some(session) = self.store.find_by_participant(&participant) else {
            return DisconnectOutcome::NotFound;
        };
        let session_id = session.id.clone();
        let others: Vec<ParticipantId> = session
            .seats
            .both()
            .into_iter()
            .filter(|p| p != &participant)
            .collect();

        self.store.remove(&session_id);
        info!("[GameServer] Player {} disconnected from game {}", participant, session_id);
        for other in others {
            out.send_to(other, ServerWsMessage::opponent_disconnected(session_id.clone()));
        }
        DisconnectOutcome::SessionClosed(session_id)
    }
}

fn describe_move(player: PlayerSlot, pocket: usize, outcome: &MoveOutcome) -> String {
    let mut description = format!("Player {} picked pocket {}", player, pocket);
    if let Some(captured) = outcome.captured {
        description.push_str(&format!(" and captured {} stones", captured));
    }
    if outcome.extra_turn && !outcome.game_over {
        description.push_str(" and plays again");
    }
    description
}

fn game_over_message(board: &Board) -> String {
    let p1 = board.store(PlayerSlot::Player1);
    let p2 = board.store(PlayerSlot::Player2);
    match board.winner() {
        Winner::Player1 => format!("player1 wins {} to {}", p1, p2),
        Winner::Player2 => format!("player2 wins {} to {}", p2, p1),
        Winner::Tie => format!("Tie game at {} each", p1),
    }
}
