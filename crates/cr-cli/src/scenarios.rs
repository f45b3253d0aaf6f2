//! Scenarios shipped with the binary.

use cr_core::{
    AchievementTable, Condition, CoreResult, Effect, Move, Player, PlayerSchema, Scenario, Way,
};
use cr_engine::GameDefinition;

/// A scenario that can be played by name.
#[derive(Debug)]
pub struct Bundled {
    pub name: &'static str,
    pub description: &'static str,
    make: fn() -> CoreResult<(GameDefinition, Player)>,
}

impl Bundled {
    /// Build the definition and a fresh player.
    pub fn build(&self) -> Result<(GameDefinition, Player), String> {
        (self.make)().map_err(|e| format!("scenario '{}' is broken: {e}", self.name))
    }
}

pub const ALL: &[Bundled] = &[
    Bundled {
        name: "simple",
        description: "Three ways out of the entry move, two of them meeting again",
        make: simple,
    },
    Bundled {
        name: "extended",
        description: "Achievements and a way unlocked by an earlier choice",
        make: extended,
    },
];

pub fn find(name: &str) -> Result<&'static Bundled, String> {
    ALL.iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let known: Vec<&str> = ALL.iter().map(|s| s.name).collect();
            format!("unknown scenario '{name}' (available: {})", known.join(", "))
        })
}

/// Text keys double as the texts themselves.
fn simple() -> CoreResult<(GameDefinition, Player)> {
    let scenario = Scenario::new(
        Move::new("0", "Entry move")
            .with_way(Way::new("1", "Go to first move", "1"))
            .with_way(Way::new("2", "Go to second move", "2"))
            .with_way(Way::new("3", "Go to third move", "3")),
        [
            Move::ending("1", "First move"),
            Move::new("2", "Second move").with_way(Way::new("4", "Go to fourth move", "4")),
            Move::new("3", "Third move").with_way(Way::new("4", "Go to fourth move", "4")),
            Move::ending("4", "Fourth move"),
        ],
    )?;

    Ok((GameDefinition::new(scenario), Player::new()))
}

fn extended() -> CoreResult<(GameDefinition, Player)> {
    let scenario = Scenario::new(
        Move::new("1", "move_1")
            .with_way(Way::new("1", "way_1", "2"))
            .with_way(Way::new("2", "way_2", "2").with_effect(Effect::set_flag("secret_ways"))),
        [
            Move::new("2", "move_2")
                .with_way(Way::new("3", "way_3", "3").with_achievement("first_achievement"))
                .with_way(
                    Way::new("4", "way_4", "4")
                        .with_condition(Condition::flag("secret_ways"))
                        .with_achievement("second_achievement"),
                ),
            Move::ending("3", "move_3"),
            Move::ending("4", "move_4"),
        ],
    )?;

    let achievements = AchievementTable::new()
        .with("first_achievement", "achievement_first")
        .with("second_achievement", "achievement_second");

    let definition = GameDefinition::new(scenario)
        .with_achievements(achievements)
        .with_texts([
            ("move_1", "You stand at a fork in an old forest road."),
            ("way_1", "Take the wide road"),
            ("way_2", "Push through the undergrowth"),
            ("move_2", "Both paths end at the same ruined gate."),
            ("way_3", "Walk through the gate"),
            ("way_4", "Follow the hidden trail you noticed in the bushes"),
            ("move_3", "Beyond the gate lies the village. You are home."),
            ("move_4", "The trail leads to a forgotten shrine. Few ever find it."),
            ("achievement_first", "Homecoming"),
            ("achievement_second", "Pathfinder"),
            ("credits", "Thanks for playing."),
        ]);

    let player = Player::with_schema(PlayerSchema::new().persisted("secret_ways", false));
    Ok((definition, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bundled_scenarios_build() {
        for bundled in ALL {
            let (definition, _) = bundled.build().unwrap();
            assert!(definition.unregistered_achievements().is_empty());
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("Simple").unwrap().name, "simple");
        assert!(find("missing").unwrap_err().contains("simple, extended"));
    }

    #[test]
    fn unknown_name_lists_available_scenarios() {
        let err = find("nope").unwrap_err();
        assert!(err.starts_with("unknown scenario 'nope'"));
        let bundled = find("extended").unwrap();
        assert!(format!("{bundled:?}").contains("Achievements and a way unlocked"));
    }

    #[test]
    fn simple_shares_the_fourth_move() {
        let (definition, _) = simple().unwrap();
        assert_eq!(definition.scenario.len(), 5);
    }
}
