//! Achievement badges derived from the profile counters.

use serde::Serialize;

use crate::models::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    /// Gates on `total_check_ins`.
    CheckIns,
    /// Gates on `longest_streak`.
    Streak,
}

pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub requirement: u32,
    pub description: &'static str,
    pub kind: BadgeKind,
}

pub const BADGES: [Badge; 5] = [
    Badge {
        id: "first_step",
        name: "First Step",
        icon: "🌱",
        requirement: 1,
        description: "Complete your first check-in",
        kind: BadgeKind::CheckIns,
    },
    Badge {
        id: "week_warrior",
        name: "Week Warrior",
        icon: "🔥",
        requirement: 7,
        description: "7-day streak",
        kind: BadgeKind::Streak,
    },
    Badge {
        id: "month_master",
        name: "Month Master",
        icon: "🏆",
        requirement: 30,
        description: "30-day streak",
        kind: BadgeKind::Streak,
    },
    Badge {
        id: "centurion",
        name: "Centurion",
        icon: "💯",
        requirement: 100,
        description: "100 total check-ins",
        kind: BadgeKind::CheckIns,
    },
    Badge {
        id: "consistent",
        name: "Consistent",
        icon: "⭐",
        requirement: 14,
        description: "14-day streak",
        kind: BadgeKind::Streak,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct BadgeStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub requirement: u32,
    pub description: &'static str,
    pub earned: bool,
}

pub fn earned(badge: &Badge, profile: &Profile) -> bool {
    match badge.kind {
        BadgeKind::CheckIns => profile.total_check_ins >= badge.requirement,
        BadgeKind::Streak => profile.longest_streak >= badge.requirement,
    }
}

/// Evaluate every badge against a profile, in display order.
pub fn evaluate(profile: &Profile) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            id: badge.id,
            name: badge.name,
            icon: badge.icon,
            requirement: badge.requirement,
            description: badge.description,
            earned: earned(badge, profile),
        })
        .collect()
}
