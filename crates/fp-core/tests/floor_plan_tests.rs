use std::path::PathBuf;

use fp_core::{ChairKind, FloorPlanParser, Grid, PlanConfig, Report, RoomRegistry, load_plan};
use proptest::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn report_for(path: PathBuf) -> Report {
    let config = PlanConfig::default();
    let grid = load_plan(path).unwrap();
    let registry = FloorPlanParser::new(&grid, &config).parse();
    Report::from_registry(&registry, &config.chair_kinds)
}

fn parse(grid: &Grid) -> RoomRegistry {
    FloorPlanParser::new(grid, &PlanConfig::default()).parse()
}

#[test]
fn test_full_plan_report() {
    let expected = "\
total:
W: 14, P: 7, S: 3, C: 1
balcony:
W: 0, P: 2, S: 0, C: 0
bathroom:
W: 0, P: 1, S: 0, C: 0
closet:
W: 0, P: 3, S: 0, C: 0
kitchen:
W: 4, P: 0, S: 0, C: 0
living room:
W: 7, P: 0, S: 2, C: 0
office:
W: 2, P: 1, S: 0, C: 0
sleeping room:
W: 1, P: 0, S: 1, C: 0
toilet:
W: 0, P: 0, S: 0, C: 1
";
    assert_eq!(report_for(fixture("rooms.txt")).to_string(), expected);
}

#[test]
fn test_full_plan_drops_unnamed_closets() {
    let grid = load_plan(fixture("rooms.txt")).unwrap();
    let registry = parse(&grid);

    // two boarded-up cupboards hold one wooden chair and one sofa
    assert_eq!(registry.unclaimed().get('W'), 1);
    assert_eq!(registry.unclaimed().get('S'), 1);
    assert_eq!(grid.count('W'), 15);
    assert_eq!(grid.count('S'), 4);
}

#[test]
fn test_four_room_plan() {
    let report = report_for(fixture("four_rooms.txt"));

    assert_eq!(report.total.to_string(), "W: 11, P: 3, S: 2, C: 0");
    let names: Vec<_> = report.rooms.iter().map(|room| room.name.as_str()).collect();
    assert_eq!(names, vec!["balcony", "bathroom", "kitchen", "living room"]);
    assert_eq!(report.room("balcony").unwrap().to_string(), "W: 0, P: 2, S: 0, C: 0");
    assert_eq!(report.room("bathroom").unwrap().to_string(), "W: 0, P: 1, S: 0, C: 0");
    assert_eq!(report.room("kitchen").unwrap().to_string(), "W: 4, P: 0, S: 0, C: 0");
    assert_eq!(report.room("living room").unwrap().to_string(), "W: 7, P: 0, S: 2, C: 0");
}

#[test]
fn test_disconnected_kitchens_merge() {
    let plan = "\
+-----------+-----+-----------+
| (kitchen) |     | (kitchen) |
|   W   P   |  S  |   W  W    |
+-----------+-----+-----------+";
    let registry = parse(&Grid::parse(plan));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("kitchen").unwrap().to_string(), "W: 3, P: 1, S: 0, C: 0");
    assert_eq!(registry.unclaimed().get('S'), 1);
}

#[test]
fn test_zero_row_and_zero_column_plans() {
    assert!(parse(&Grid::from_rows(Vec::new())).is_empty());
    assert!(parse(&Grid::from_rows(vec![Vec::new(), Vec::new()])).is_empty());
}

const NOISE: [char; 11] = [' ', ' ', ' ', '|', '-', '+', '/', 'W', 'P', 'S', 'C'];
const ANY: [char; 14] = [' ', ' ', '|', '-', '+', '/', 'W', 'P', 'S', 'C', '(', ')', 'a', 'b'];

fn rows_from(alphabet: &'static [char]) -> impl Strategy<Value = Vec<Vec<char>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(alphabet), 3..14),
        1..10,
    )
}

/// A noisy plan with exactly one `(x)` label somewhere
fn one_label_rows() -> impl Strategy<Value = Vec<Vec<char>>> {
    (rows_from(&NOISE), any::<prop::sample::Index>(), any::<prop::sample::Index>()).prop_map(
        |(mut rows, row, col)| {
            let r = row.index(rows.len());
            let c = col.index(rows[r].len() - 2);
            rows[r][c..c + 3].copy_from_slice(&['(', 'x', ')']);
            rows
        },
    )
}

proptest! {
    /// Named chairs plus dropped chairs account for every chair on the plan.
    #[test]
    fn chairs_are_conserved(rows in rows_from(&ANY)) {
        let grid = Grid::from_rows(rows);
        let registry = parse(&grid);
        for kind in ChairKind::symbols() {
            let named: u32 = registry.iter().map(|(_, chairs)| chairs.get(kind)).sum();
            let dropped = registry.unclaimed().get(kind);
            prop_assert_eq!((named + dropped) as usize, grid.count(kind));
        }
    }

    /// Scanning the plan upside down finds the same rooms and counts.
    #[test]
    fn scan_order_does_not_change_counts(rows in one_label_rows()) {
        let forward = parse(&Grid::from_rows(rows.clone()));
        let mut flipped = rows;
        flipped.reverse();
        let backward = parse(&Grid::from_rows(flipped));
        prop_assert_eq!(forward, backward);
    }
}
