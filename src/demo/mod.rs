//! Simulated match feed for `--demo`.
//!
//! Plays back the message sequence an analytics backend produces during a
//! game: the full rule catalogue on connect, then per tick a win probability
//! point, and every few ticks the graded team performance followed by the
//! matching rules table. The chart is reset between matches.

pub mod catalogue;
pub mod status;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::analytics::{HeroRoleTable, Role};
use crate::event::{DashboardMessage, MessageSender};

use catalogue::RuleCatalogue;
use status::{team_statuses, Scoreboard, ASSISTS, DAMAGE, DEATHS, HEALING, KILLS, MITIGATION};

/// Ticks between performance and rules table pushes
const REPORT_EVERY: u32 = 3;

/// Win probability never leaves this band
const MIN_WIN: f64 = 0.02;
const MAX_WIN: f64 = 0.98;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Delay between ticks
    pub tick: Duration,
    /// Fixed seed for a reproducible feed
    pub seed: Option<u64>,
    pub ticks_per_match: u32,
    /// Number of generated rules before deduplication
    pub catalogue_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(800),
            seed: None,
            ticks_per_match: 30,
            catalogue_size: 400,
        }
    }
}

/// One simulated match in progress
#[derive(Debug, Clone)]
pub struct DemoMatch {
    /// Our five heroes: tank, two damage, two support
    pub team: Vec<String>,
    pub stats: Scoreboard,
    pub win_probability: f64,
}

impl DemoMatch {
    /// Fresh match with a random 1-2-2 team
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let table = HeroRoleTable::global();
        let mut team = Vec::with_capacity(5);
        for (role, slots) in [(Role::Tank, 1), (Role::Damage, 2), (Role::Support, 2)] {
            let pool: Vec<&str> = table.heroes(role).collect();
            team.extend(pool.choose_multiple(rng, slots).map(|h| h.to_string()));
        }

        Self {
            team,
            stats: [[0.0; 6]; 10],
            win_probability: 0.5,
        }
    }

    /// Accumulate one tick of stats and move the win probability
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for (slot, row) in self.stats.iter_mut().enumerate() {
            let position = slot % 5;
            row[KILLS] += f64::from(rng.gen_range(0..2u8));
            row[ASSISTS] += f64::from(rng.gen_range(0..3u8));
            row[DEATHS] += f64::from(rng.gen_range(0..2u8));
            row[DAMAGE] += rng.gen_range(150.0..450.0);
            match position {
                0 => row[MITIGATION] += rng.gen_range(300.0..900.0),
                3 | 4 => row[HEALING] += rng.gen_range(400.0..1200.0),
                _ => {}
            }
        }

        let step: f64 = rng.gen_range(-0.08..0.08);
        self.win_probability = (self.win_probability + step).clamp(MIN_WIN, MAX_WIN);
    }
}

/// Generate demo messages until the receiver goes away
pub async fn generate_demo_messages(tx: MessageSender, config: DemoConfig) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalogue = RuleCatalogue::synthetic(&mut rng, config.catalogue_size);
    if tx
        .send(DashboardMessage::RulesUpdate(Some(catalogue.records())))
        .await
        .is_err()
    {
        return;
    }

    loop {
        let mut game = DemoMatch::new(&mut rng);
        tracing::info!(team = ?game.team, "demo match started");

        for tick in 1..=config.ticks_per_match {
            game.advance(&mut rng);

            if tx
                .send(DashboardMessage::WinProbability(game.win_probability))
                .await
                .is_err()
            {
                return;
            }

            if tick % REPORT_EVERY == 0 {
                let statuses = team_statuses(&game.stats);
                let performance = DashboardMessage::Performance(statuses.report(&game.team));
                if tx.send(performance).await.is_err() {
                    return;
                }

                let table = catalogue.rules_table(&statuses, game.win_probability, &game.team);
                if tx.send(table).await.is_err() {
                    return;
                }
            }

            tokio::time::sleep(config.tick).await;
        }

        if tx.send(DashboardMessage::ChartReset).await.is_err() {
            return;
        }
    }
}
