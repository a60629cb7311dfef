//! Control flow: a three-way conditional, the loop forms, and exact-match
//! dispatch over a single character.

use std::collections::HashMap;
use std::ops::RangeInclusive;

// ── Conditional ───────────────────────────────────────────────────────────────

/// Temperature shown in the "If Statements" section.
pub const TEMPERATURE: i64 = 30;

/// Above this the day is warm.
const WARM_ABOVE: i64 = 25;
/// Below this the day is cold.
const COLD_BELOW: i64 = 15;

/// How a temperature feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Warm,
    Cold,
    Pleasant,
}

impl Weather {
    /// Warm is checked first, then cold; everything in between is pleasant.
    pub fn classify(temperature: i64) -> Self {
        if temperature > WARM_ABOVE {
            Weather::Warm
        } else if temperature < COLD_BELOW {
            Weather::Cold
        } else {
            Weather::Pleasant
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Weather::Warm     => "It's a warm day!",
            Weather::Cold     => "It's a cold day!",
            Weather::Pleasant => "It's a pleasant day!",
        }
    }
}

// ── Loops ─────────────────────────────────────────────────────────────────────

/// Fruits walked by the sequence loop, in order.
pub const FRUITS: [&str; 3] = ["Apple", "Banana", "Cherry"];

/// Stock levels walked by the mapping loop.
pub fn stock() -> HashMap<&'static str, i64> {
    HashMap::from([("Apple", 10), ("Banana", 20), ("Cherry", 15)])
}

/// `Count: n` for each `n` in the inclusive range.
pub fn range_lines(range: RangeInclusive<i64>) -> Vec<String> {
    range.map(|i| format!("Count: {i}")).collect()
}

/// `Fruit: name` for each element, in order.
pub fn sequence_lines(fruits: &[&str]) -> Vec<String> {
    fruits.iter().map(|fruit| format!("Fruit: {fruit}")).collect()
}

/// `key: value` for each entry.  Iteration order is whatever the map yields.
pub fn mapping_lines(stock: &HashMap<&str, i64>) -> Vec<String> {
    stock
        .iter()
        .map(|(fruit, quantity)| format!("{fruit}: {quantity}"))
        .collect()
}

/// Pre-test loop: the condition is checked before every pass, so a limit
/// below 1 produces no lines.
pub fn while_lines(limit: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut count = 1;
    while count <= limit {
        lines.push(format!("While Count: {count}"));
        count += 1;
    }
    lines
}

/// Post-test loop: the body runs once before the condition is first checked.
pub fn repeat_lines(limit: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut index = 1;
    loop {
        lines.push(format!("Repeat Count: {index}"));
        index += 1;
        if index > limit {
            break;
        }
    }
    lines
}

/// Body of the "Loops" section.
pub fn loop_lines() -> Vec<String> {
    let mut lines = range_lines(1..=5);
    lines.extend(sequence_lines(&FRUITS));
    lines.extend(mapping_lines(&stock()));
    lines.extend(while_lines(3));
    lines.extend(repeat_lines(3));
    lines
}

// ── Discrete-value dispatch ───────────────────────────────────────────────────

/// Grade shown in the "Switch Statements" section.
pub const GRADE: char = 'B';

pub fn grade_remark(grade: char) -> &'static str {
    match grade {
        'A' => "Excellent!",
        'B' => "Well done!",
        'C' => "Good job!",
        _   => "Keep trying!",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_is_warm() {
        assert_eq!(Weather::classify(TEMPERATURE), Weather::Warm);
        assert_eq!(Weather::classify(TEMPERATURE).message(), "It's a warm day!");
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(Weather::classify(25), Weather::Pleasant);
        assert_eq!(Weather::classify(26), Weather::Warm);
        assert_eq!(Weather::classify(15), Weather::Pleasant);
        assert_eq!(Weather::classify(14), Weather::Cold);
    }

    #[test]
    fn range_counts_up_inclusive() {
        assert_eq!(
            range_lines(1..=5),
            vec!["Count: 1", "Count: 2", "Count: 3", "Count: 4", "Count: 5"]
        );
    }

    #[test]
    fn sequence_keeps_order() {
        assert_eq!(
            sequence_lines(&FRUITS),
            vec!["Fruit: Apple", "Fruit: Banana", "Fruit: Cherry"]
        );
    }

    #[test]
    fn mapping_covers_every_entry() {
        let mut got = mapping_lines(&stock());
        got.sort();
        assert_eq!(got, vec!["Apple: 10", "Banana: 20", "Cherry: 15"]);
    }

    #[test]
    fn while_and_repeat_count_to_three() {
        assert_eq!(while_lines(3), vec!["While Count: 1", "While Count: 2", "While Count: 3"]);
        assert_eq!(
            repeat_lines(3),
            vec!["Repeat Count: 1", "Repeat Count: 2", "Repeat Count: 3"]
        );
    }

    #[test]
    fn repeat_runs_at_least_once() {
        assert!(while_lines(0).is_empty());
        assert_eq!(repeat_lines(0), vec!["Repeat Count: 1"]);
    }

    #[test]
    fn loop_section_has_seventeen_lines() {
        // 5 range + 3 fruits + 3 stock + 3 while + 3 repeat
        assert_eq!(loop_lines().len(), 17);
    }

    #[test]
    fn grade_dispatch() {
        assert_eq!(grade_remark(GRADE), "Well done!");
        assert_eq!(grade_remark('A'), "Excellent!");
        assert_eq!(grade_remark('C'), "Good job!");
        assert_eq!(grade_remark('F'), "Keep trying!");
        assert_eq!(grade_remark('b'), "Keep trying!"); // exact match only
    }
}
