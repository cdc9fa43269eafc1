use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Entries per rule table, one for every possible live-neighbor count
/// (0 through 8).
pub const RULE_TABLE_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Indexed by live-neighbor count; `true` keeps a live cell alive.
    #[serde(rename = "survivesAt")]
    survives: [bool; RULE_TABLE_LEN],

    /// Indexed by live-neighbor count; `true` brings a dead cell to life.
    #[serde(rename = "bornAt")]
    born: [bool; RULE_TABLE_LEN],
}

impl Default for Rules {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rules {
    pub fn new(survives: &[bool], born: &[bool]) -> GameResult<Self> {
        Ok(Self {
            survives: table(survives)?,
            born: table(born)?,
        })
    }

    /// The classical B3/S23 rule.
    pub fn conway() -> Self {
        Self {
            survives: [false, false, true, true, false, false, false, false, false],
            born: [false, false, false, true, false, false, false, false, false],
        }
    }

    /// B36/S23, classical life plus births at six neighbors.
    pub fn highlife() -> Self {
        Self {
            survives: [false, false, true, true, false, false, false, false, false],
            born: [false, false, false, true, false, false, true, false, false],
        }
    }

    /// B3678/S34678, symmetric under live/dead inversion.
    pub fn day_and_night() -> Self {
        Self {
            survives: [false, false, false, true, true, false, true, true, true],
            born: [false, false, false, true, false, false, true, true, true],
        }
    }

    pub fn survives_at(&self, live_neighbors: usize) -> bool {
        self.survives[live_neighbors]
    }

    pub fn born_at(&self, live_neighbors: usize) -> bool {
        self.born[live_neighbors]
    }

    pub fn survival_table(&self) -> &[bool; RULE_TABLE_LEN] {
        &self.survives
    }

    pub fn birth_table(&self) -> &[bool; RULE_TABLE_LEN] {
        &self.born
    }

    /// Flips every entry of both tables.
    pub fn invert(&mut self) {
        for flag in self.survives.iter_mut().chain(self.born.iter_mut()) {
            *flag = !*flag;
        }
    }
}

fn table(flags: &[bool]) -> GameResult<[bool; RULE_TABLE_LEN]> {
    flags
        .try_into()
        .map_err(|_| GameError::InvalidRuleLength(flags.len()))
}

/// Golly-style rule strings: `B3/S23`. Case-insensitive, the slash is
/// optional, digits apply to the most recent `B` or `S` marker.
impl FromStr for Rules {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum Section {
            Survival,
            Birth,
        }

        if s.is_empty() {
            return Err(GameError::InvalidRuleString(s.to_owned()));
        }

        let mut survives = [false; RULE_TABLE_LEN];
        let mut born = [false; RULE_TABLE_LEN];
        let mut section = None;

        for ch in s.chars() {
            match ch {
                'b' | 'B' => section = Some(Section::Birth),
                's' | 'S' => section = Some(Section::Survival),
                '/' => (),
                ch => {
                    let count = ch
                        .to_digit(10)
                        .map(|digit| digit as usize)
                        .filter(|&count| count < RULE_TABLE_LEN)
                        .ok_or_else(|| GameError::InvalidRuleString(s.to_owned()))?;

                    match section {
                        Some(Section::Birth) => born[count] = true,
                        Some(Section::Survival) => survives[count] = true,
                        None => return Err(GameError::InvalidRuleString(s.to_owned())),
                    }
                }
            }
        }

        Ok(Self { survives, born })
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits =
            |table: &[bool; RULE_TABLE_LEN]| table.iter().positions(|&flag| flag).join("");

        write!(f, "B{}/S{}", digits(&self.born), digits(&self.survives))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default_is_the_classical_rule() {
        let rules = Rules::default();

        for count in 0..RULE_TABLE_LEN {
            assert_eq!(rules.survives_at(count), count == 2 || count == 3);
            assert_eq!(rules.born_at(count), count == 3);
        }
    }

    #[test]
    fn test_new_rejects_short_and_long_tables() {
        let err = Rules::new(&[true; 8], &[false; 9]).unwrap_err();
        assert!(matches!(err, GameError::InvalidRuleLength(8)));

        let err = Rules::new(&[true; 9], &[false; 10]).unwrap_err();
        assert!(matches!(err, GameError::InvalidRuleLength(10)));
    }

    #[test]
    fn test_new_accepts_nine_entry_tables() {
        let survives = [false, false, true, true, false, false, false, false, false];
        let born = [false, false, false, true, false, false, false, false, false];

        let rules = Rules::new(&survives, &born).unwrap();
        assert_eq!(rules, Rules::conway());
    }

    #[test]
    fn test_invert_flips_every_entry() {
        let mut rules = Rules::conway();
        rules.invert();

        for count in 0..RULE_TABLE_LEN {
            assert_eq!(rules.survives_at(count), !(count == 2 || count == 3));
            assert_eq!(rules.born_at(count), count != 3);
        }
    }

    #[test]
    fn test_parse_classical_rule_strings() {
        let rules: Rules = "B3/S23".parse().unwrap();
        assert_eq!(rules, Rules::conway());

        let rules: Rules = "b36s23".parse().unwrap();
        assert_eq!(rules, Rules::highlife());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "3/23", "B9/S23", "Bx/S23", "life"] {
            assert!(
                matches!(input.parse::<Rules>(), Err(GameError::InvalidRuleString(_))),
                "{input:?} should not parse",
            );
        }
    }

    #[test]
    fn test_display_round_trips_the_presets() {
        for rules in [Rules::conway(), Rules::highlife(), Rules::day_and_night()] {
            let reparsed: Rules = rules.to_string().parse().unwrap();
            assert_eq!(reparsed, rules);
        }

        assert_eq!(Rules::conway().to_string(), "B3/S23");
        assert_eq!(Rules::day_and_night().to_string(), "B3678/S34678");
    }

    #[test]
    fn test_serde_uses_the_persisted_field_names() {
        let json = serde_json::to_string(&Rules::conway()).unwrap();
        assert_eq!(
            json,
            "{\"survivesAt\":[false,false,true,true,false,false,false,false,false],\
             \"bornAt\":[false,false,false,true,false,false,false,false,false]}"
        );
    }

    proptest! {
        #[test]
        fn test_invert_is_an_involution(
            survives in any::<[bool; RULE_TABLE_LEN]>(),
            born in any::<[bool; RULE_TABLE_LEN]>(),
        ) {
            let original = Rules::new(&survives, &born).unwrap();

            let mut rules = original;
            rules.invert();
            rules.invert();

            prop_assert_eq!(rules, original);
        }

        #[test]
        fn test_display_round_trips_arbitrary_tables(
            survives in any::<[bool; RULE_TABLE_LEN]>(),
            born in any::<[bool; RULE_TABLE_LEN]>(),
        ) {
            let rules = Rules::new(&survives, &born).unwrap();

            let reparsed: Rules = rules.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, rules);
        }
    }
}
