//! Workout plan generator.
//!
//! A plan is a fixed formula over the four form inputs. The level sets an
//! intensity multiplier; intensity scales both the number of weekly sessions
//! and the base session length. The first session of each week ramps up
//! linearly over the plan and is capped at 1.5x the base length.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    models::{Plan, Session, Week},
    params::{cap_weeks, GeneratePlan},
};

/// Minimum and maximum sessions per week.
pub const SESSIONS_PER_WEEK_RANGE: (u32, u32) = (2, 6);

/// Length of the fixed recovery session in minutes.
pub const RECOVERY_MINUTES: u32 = 20;

const BASE_SESSIONS: f64 = 3.0;
const BASE_MINUTES: f64 = 45.0;
const MAX_RAMP: f64 = 0.5;
const SPEED_FACTOR: f64 = 0.6;
const TECHNICAL_FACTOR: f64 = 0.8;

/// Generate a plan stamped with the current time.
pub fn generate_plan(params: &GeneratePlan) -> Plan {
    generate_plan_at(params, Timestamp::now())
}

/// Generate a plan stamped with `now`.
///
/// # Examples
///
/// ```rust
/// use kinetic_core::{generator::generate_plan_at, models::Level, params::GeneratePlan};
/// use jiff::Timestamp;
///
/// let params = GeneratePlan {
///     sport: "Soccer".to_string(),
///     level: Level::Intermediate,
///     duration_weeks: 8,
///     focus: "Endurance".to_string(),
///     notes: String::new(),
/// };
/// let plan = generate_plan_at(&params, Timestamp::UNIX_EPOCH);
///
/// assert_eq!(plan.sessions_per_week, 3);
/// assert_eq!(plan.weekly_structure[0].sessions[0].duration_minutes, 51);
/// assert_eq!(plan.name, "Soccer • Endurance (8w)");
/// ```
pub fn generate_plan_at(params: &GeneratePlan, now: Timestamp) -> Plan {
    let intensity = params.level.intensity();
    let sessions_per_week = sessions_per_week(intensity);
    let base = base_minutes(intensity);
    let weeks = cap_weeks(params.duration_weeks);

    let weekly_structure = (1..=weeks)
        .map(|week_number| Week {
            week_number,
            sessions: week_sessions(&params.focus, base, week_number, weeks, sessions_per_week),
        })
        .collect();

    Plan {
        id: new_plan_id(),
        name: format!("{} • {} ({}w)", params.sport, params.focus, weeks),
        sport: params.sport.clone(),
        level: params.level,
        duration_weeks: weeks,
        focus: params.focus.clone(),
        notes: params.notes.clone(),
        sessions_per_week,
        weekly_structure,
        created_at: now,
    }
}

/// Sessions per week for an intensity: `clamp(round(3 * intensity), 2, 6)`.
pub fn sessions_per_week(intensity: f64) -> u32 {
    let (min, max) = SESSIONS_PER_WEEK_RANGE;
    (round_minutes(BASE_SESSIONS * intensity)).clamp(min, max)
}

/// Base session length for an intensity: `round(45 * intensity)`.
pub fn base_minutes(intensity: f64) -> u32 {
    round_minutes(BASE_MINUTES * intensity)
}

/// Fresh collision-resistant plan identifier.
pub fn new_plan_id() -> String {
    format!("plan_{}", Uuid::new_v4().simple())
}

fn week_sessions(
    focus: &str,
    base: u32,
    week_number: u32,
    weeks: u32,
    sessions_per_week: u32,
) -> Vec<Session> {
    let base = f64::from(base);
    let ramp = (f64::from(week_number) / f64::from(weeks)).min(MAX_RAMP);

    let mut sessions = vec![
        Session {
            kind: if focus == "Endurance" {
                "Long Endurance"
            } else {
                "Skill/Practice"
            }
            .to_string(),
            duration_minutes: round_minutes(base * (1.0 + ramp)),
        },
        Session {
            kind: "Speed/Intensity".to_string(),
            duration_minutes: round_minutes(base * SPEED_FACTOR),
        },
    ];

    sessions.extend((3..=sessions_per_week).map(|index| {
        if index % 2 == 0 {
            Session {
                kind: "Recovery & Mobility".to_string(),
                duration_minutes: RECOVERY_MINUTES,
            }
        } else {
            Session {
                kind: "Technical Work".to_string(),
                duration_minutes: round_minutes(base * TECHNICAL_FACTOR),
            }
        }
    }));

    sessions
}

fn round_minutes(value: f64) -> u32 {
    // Inputs are small and non-negative, the cast cannot truncate.
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn params(level: Level, weeks: u32, focus: &str) -> GeneratePlan {
        GeneratePlan {
            sport: "Soccer".to_string(),
            level,
            duration_weeks: weeks,
            focus: focus.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_intermediate_endurance_first_week() {
        let plan = generate_plan_at(&params(Level::Intermediate, 8, "Endurance"), Timestamp::UNIX_EPOCH);

        assert_eq!(plan.sessions_per_week, 3);
        let week = &plan.weekly_structure[0];
        assert_eq!(week.week_number, 1);
        assert_eq!(week.sessions[0].kind, "Long Endurance");
        assert_eq!(week.sessions[0].duration_minutes, 51);
        assert_eq!(week.sessions[1].kind, "Speed/Intensity");
        assert_eq!(week.sessions[1].duration_minutes, 27);
        assert_eq!(week.sessions[2].kind, "Technical Work");
        assert_eq!(week.sessions[2].duration_minutes, 36);
    }

    #[test]
    fn test_long_session_ramp_is_capped() {
        let plan = generate_plan_at(&params(Level::Intermediate, 8, "Endurance"), Timestamp::UNIX_EPOCH);
        let long: Vec<u32> = plan
            .weekly_structure
            .iter()
            .map(|w| w.sessions[0].duration_minutes)
            .collect();

        // 45 * (1 + w/8) until the 1.5x cap at week 4
        assert_eq!(long, vec![51, 56, 62, 68, 68, 68, 68, 68]);
    }

    #[test]
    fn test_structure_invariants_for_every_level() {
        for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
            for weeks in [1, 3, 12] {
                let plan = generate_plan_at(&params(level, weeks, "Skill"), Timestamp::UNIX_EPOCH);
                assert_eq!(plan.weekly_structure.len(), weeks as usize);
                for (i, week) in plan.weekly_structure.iter().enumerate() {
                    assert_eq!(week.week_number, i as u32 + 1);
                    assert_eq!(week.sessions.len(), plan.sessions_per_week as usize);
                    assert_eq!(week.sessions[0].kind, "Skill/Practice");
                }
            }
        }
    }

    #[test]
    fn test_beginner_and_advanced_shapes() {
        let beginner = generate_plan_at(&params(Level::Beginner, 4, "Skill"), Timestamp::UNIX_EPOCH);
        assert_eq!(beginner.sessions_per_week, 2);
        assert_eq!(base_minutes(Level::Beginner.intensity()), 31);

        let advanced = generate_plan_at(&params(Level::Advanced, 4, "Skill"), Timestamp::UNIX_EPOCH);
        assert_eq!(advanced.sessions_per_week, 4);
        let sessions = &advanced.weekly_structure[0].sessions;
        assert_eq!(sessions[2].kind, "Technical Work");
        assert_eq!(sessions[3].kind, "Recovery & Mobility");
        assert_eq!(sessions[3].duration_minutes, RECOVERY_MINUTES);
    }

    #[test]
    fn test_unrecognised_level_uses_baseline_intensity() {
        let request = GeneratePlan::from_form("Soccer", "Pro", "8", "Endurance", "");
        let plan = generate_plan_at(&request, Timestamp::UNIX_EPOCH);

        assert_eq!(plan.sessions_per_week, 3);
        assert_eq!(base_minutes(request.level.intensity()), 45);
    }

    #[test]
    fn test_sessions_per_week_is_clamped() {
        assert_eq!(sessions_per_week(0.1), 2);
        assert_eq!(sessions_per_week(5.0), 6);
    }

    #[test]
    fn test_ids_are_unique() {
        let request = params(Level::Beginner, 1, "Skill");
        let a = generate_plan_at(&request, Timestamp::UNIX_EPOCH);
        let b = generate_plan_at(&request, Timestamp::UNIX_EPOCH);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("plan_"));
    }

    #[test]
    fn test_oversized_request_is_capped() {
        let plan = generate_plan_at(
            &params(Level::Beginner, 4_000_000_000, "Skill"),
            Timestamp::UNIX_EPOCH,
        );

        assert_eq!(plan.duration_weeks, crate::params::MAX_DURATION_WEEKS);
        assert_eq!(plan.weekly_structure.len(), 104);
        assert_eq!(plan.name, "Soccer • Skill (104w)");
    }
}
