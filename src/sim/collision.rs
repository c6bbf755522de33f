//! Collision resolution for one frame
//!
//! Runs in a fixed order: player bullets against zombies (then the boss),
//! zombies against the player, boss bullets against the player. Each
//! projectile hits at most one thing per frame. Scans go in id order and
//! dead entities are compacted with `retain` after each pass.
//!
//! Once the session reaches a terminal phase the later passes are skipped.
//! The rest of the frame's player bullets still land and score, but the
//! phase stays at the first outcome.

use super::boss::BossHit;
use super::state::{GameEvent, GameState, LevelOutcome};

/// Resolve every collision for the current frame
pub fn resolve(state: &mut GameState) {
    player_bullets(state);
    if state.phase.is_terminal() {
        return;
    }
    zombie_contact(state);
    if state.phase.is_terminal() {
        return;
    }
    boss_bullets(state);
}

/// Player bullets against zombies, falling through to the boss on a miss
fn player_bullets(state: &mut GameState) {
    let boss_level = state.is_boss_level();

    for bi in 0..state.bullets.len() {
        let bullet = &state.bullets[bi];
        if !bullet.alive {
            continue;
        }
        let body = bullet.body;
        let damage = bullet.damage;

        if let Some(zi) = state
            .zombies
            .iter()
            .position(|z| !z.is_dead() && z.body.overlaps(&body))
        {
            state.bullets[bi].alive = false;
            let zombie = &mut state.zombies[zi];
            zombie.health -= damage;
            let (id, health_left) = (zombie.id, zombie.health);
            state.events.push(GameEvent::ZombieHit { id, health_left });

            if health_left <= 0 {
                let award = state
                    .tuning
                    .zombie
                    .score_per_level
                    .saturating_mul(state.level as u64);
                state.score = state.score.saturating_add(award);
                state.zombies_killed += 1;
                state.events.push(GameEvent::ZombieKilled { id, score: award });
                log::debug!("Zombie {} killed (+{})", id, award);

                if !boss_level && state.zombies_killed >= state.level_target {
                    state.complete_level(LevelOutcome::KillTarget);
                }
            }
            continue;
        }

        if !boss_level {
            continue;
        }
        let hit = match state.boss.as_mut() {
            Some(boss) if boss.body.overlaps(&body) => boss.take_hit(damage),
            _ => continue,
        };
        state.bullets[bi].alive = false;
        let health_left = state.boss.as_ref().map_or(0, |b| b.health);
        state.events.push(GameEvent::BossHit { health_left });

        match hit {
            BossHit::Wounded => {}
            BossHit::StartedFleeing => {
                state.events.push(GameEvent::BossFled);
                log::info!("Boss is fleeing at {} hp", health_left);
            }
            BossHit::Defeated => {
                let bonus = state.tuning.boss.defeat_bonus;
                state.boss = None;
                state.boss_defeated = true;
                state.score = state.score.saturating_add(bonus);
                state.events.push(GameEvent::BossDefeated { bonus });
                log::info!("Boss defeated (+{})", bonus);
                state.complete_level(LevelOutcome::BossDefeated);
            }
        }
    }

    state.bullets.retain(|b| b.alive);
    state.zombies.retain(|z| !z.is_dead());
}

/// Every zombie touching the player deals its contact damage
fn zombie_contact(state: &mut GameState) {
    let player = state.player.body;
    let damage = state.tuning.zombie.contact_damage;
    let touching = state
        .zombies
        .iter()
        .filter(|z| z.body.overlaps(&player))
        .count();

    for _ in 0..touching {
        let health_left = state.player.take_damage(damage);
        state.events.push(GameEvent::PlayerHurt {
            damage,
            health_left,
        });
        if health_left <= 0 {
            state.end_game();
            break;
        }
    }
}

/// Boss bullets touching the player are consumed and deal their damage
fn boss_bullets(state: &mut GameState) {
    let player = state.player.body;

    for bullet in state.enemy_bullets.iter_mut() {
        if !bullet.alive || !bullet.body.overlaps(&player) {
            continue;
        }
        bullet.alive = false;
        let health_left = state.player.take_damage(bullet.damage);
        state.events.push(GameEvent::PlayerHurt {
            damage: bullet.damage,
            health_left,
        });
        if health_left <= 0 {
            break;
        }
    }

    state.enemy_bullets.retain(|b| b.alive);
    if state.player.is_dead() {
        state.end_game();
    }
}
