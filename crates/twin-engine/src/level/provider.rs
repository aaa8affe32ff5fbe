use serde::Deserialize;

use crate::core::tuning::Tuning;
use crate::level::def::LevelDef;
use crate::level::error::LevelError;

/// The nine shipped levels.
const BUILTIN_LEVELS: &str = include_str!("../../assets/levels.json");

/// Source of level definitions. Level numbers are 1-based.
///
/// The session only asks for levels by number, so levels can come from the
/// embedded set, a fetched file, or a test fixture.
pub trait LevelProvider {
    fn level(&self, number: u32) -> Option<&LevelDef>;

    /// Number of levels; valid numbers are `1..=level_count()`.
    fn level_count(&self) -> u32;

    fn has_level(&self, number: u32) -> bool {
        self.level(number).is_some()
    }
}

/// On-disk wrapper: `{ "levels": [ ... ] }`.
#[derive(Deserialize)]
struct LevelFile {
    levels: Vec<LevelDef>,
}

/// An ordered, validated list of levels.
#[derive(Debug, Clone, Default)]
pub struct LevelSet {
    levels: Vec<LevelDef>,
}

impl LevelSet {
    /// Parse and validate a level file.
    pub fn from_json(json: &str, tuning: &Tuning) -> Result<Self, LevelError> {
        let file: LevelFile = serde_json::from_str(json)?;
        Self::from_levels(file.levels, tuning)
    }

    pub fn from_levels(levels: Vec<LevelDef>, tuning: &Tuning) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        for (i, level) in levels.iter().enumerate() {
            level.validate(i as u32 + 1, tuning)?;
        }
        Ok(Self { levels })
    }

    /// The levels embedded in the crate.
    pub fn builtin(tuning: &Tuning) -> Result<Self, LevelError> {
        Self::from_json(BUILTIN_LEVELS, tuning)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDef> {
        self.levels.iter()
    }
}

impl LevelProvider for LevelSet {
    fn level(&self, number: u32) -> Option<&LevelDef> {
        let index = number.checked_sub(1)?;
        self.levels.get(index as usize)
    }

    fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::BodyKind;
    use crate::core::platform::PlatformKind;
    use glam::Vec2;

    #[test]
    fn builtin_levels_load() {
        let set = LevelSet::builtin(&Tuning::default()).unwrap();
        assert_eq!(set.level_count(), 9);
        assert!(set.has_level(1));
        assert!(set.has_level(9));
        assert!(!set.has_level(0));
        assert!(!set.has_level(10));
    }

    #[test]
    fn builtin_platform_counts_match_layouts() {
        let set = LevelSet::builtin(&Tuning::default()).unwrap();
        let counts: Vec<usize> = set.iter().map(|l| l.platforms.len() + 1).collect();
        assert_eq!(counts, vec![17, 21, 13, 30, 19, 28, 18, 23, 32]);
    }

    #[test]
    fn builtin_timed_levels() {
        let set = LevelSet::builtin(&Tuning::default()).unwrap();
        let timed: Vec<(u32, u32)> = (1..=set.level_count())
            .filter_map(|n| set.level(n).unwrap().countdown.map(|c| (n, c)))
            .collect();
        assert_eq!(timed, vec![(8, 4500), (9, 8500)]);
    }

    #[test]
    fn builtin_spawns() {
        let set = LevelSet::builtin(&Tuning::default()).unwrap();
        let first = set.level(1).unwrap();
        assert_eq!(first.spawn.get(BodyKind::Red), Vec2::new(250.0, 470.0));
        assert_eq!(first.spawn.get(BodyKind::Blue), Vec2::new(230.0, 470.0));
        let seventh = set.level(7).unwrap();
        assert_eq!(seventh.spawn.get(BodyKind::Red), Vec2::new(50.0, 80.0));
        assert_eq!(seventh.spawn.get(BodyKind::Blue), Vec2::new(70.0, 80.0));
    }

    #[test]
    fn every_builtin_spawn_rests_on_neutral_ground() {
        let tuning = Tuning::default();
        let set = LevelSet::builtin(&tuning).unwrap();
        for (i, level) in set.iter().enumerate() {
            let platforms = level.build_platforms(&tuning);
            for kind in BodyKind::ALL {
                let pos = level.spawn.get(kind);
                let bottom = pos.y + tuning.body_size;
                let support = platforms.iter().find(|p| {
                    p.top() == bottom
                        && p.kind == PlatformKind::Neutral
                        && pos.x + tuning.body_size > p.pos.x
                        && p.pos.x + p.length > pos.x
                });
                assert!(support.is_some(), "level {} {:?} spawns in mid-air", i + 1, kind);
            }
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = LevelSet::from_json(r#"{ "levels": [] }"#, &Tuning::default()).unwrap_err();
        assert!(matches!(err, LevelError::Empty));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = LevelSet::from_json("{ levels: ", &Tuning::default()).unwrap_err();
        assert!(matches!(err, LevelError::Parse(_)));
        assert!(err.to_string().starts_with("level data parse error"));
    }

    #[test]
    fn validation_reports_level_number() {
        let json = r#"{ "levels": [
            { "platforms": [], "goal": { "x": 0, "y": 100, "length": 50 } },
            { "countdown": 0, "platforms": [], "goal": { "x": 0, "y": 100, "length": 50 } }
        ] }"#;
        let err = LevelSet::from_json(json, &Tuning::default()).unwrap_err();
        assert!(matches!(err, LevelError::ZeroCountdown { level: 2 }));
    }
}
