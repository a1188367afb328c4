//! Fixture tables: staff roster and today's work sites.

pub mod generator;
pub mod model;

pub use generator::{DURATION_CHOICES, SITE_NAMES, generate, generate_with_rng, staff_roster};
pub use model::{Difficulty, SiteRecord, SiteTable, SkillLevel, StaffRecord, StaffTable, StressLevel};
