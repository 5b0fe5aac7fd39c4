//! Day 1: a dial numbered 0-99, starting at 50, turned left or right

use anyhow::{anyhow, bail};
use aoc_registry::SolveError;

const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;

#[derive(Debug, Default, PartialEq, Eq)]
struct DialCounts {
    /// Rotations that end exactly on zero
    zero_counts: u32,
    /// Times the dial points at zero at any click, including mid-rotation
    pass_zero_counts: u32,
}

pub fn part1(input: &str) -> Result<String, SolveError> {
    Ok(count(&parse(input)?).zero_counts.to_string())
}

pub fn part2(input: &str) -> Result<String, SolveError> {
    Ok(count(&parse(input)?).pass_zero_counts.to_string())
}

fn parse(input: &str) -> Result<Vec<i32>, SolveError> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            parse_rotation(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SolveError::InvalidInput(e.to_string()))
}

fn parse_rotation(line: &str) -> anyhow::Result<i32> {
    let negative = match line.as_bytes().first() {
        Some(b'L') => true,
        Some(b'R') => false,
        _ => bail!("first character need to be 'L' or 'R'"),
    };
    let val: i32 = line[1..].parse()?;
    if val < 0 {
        bail!("rotate value must be non negative");
    }
    Ok(if negative { -val } else { val })
}

fn count(rotations: &[i32]) -> DialCounts {
    let mut dial = DIAL_START;
    let mut counts = DialCounts::default();

    for &rotate in rotations {
        let old = dial;
        dial += rotate;
        if dial <= 0 && old != 0 {
            counts.pass_zero_counts += 1;
        }
        counts.pass_zero_counts += (dial / DIAL_SIZE).unsigned_abs();
        dial = dial.rem_euclid(DIAL_SIZE);
        if dial == 0 {
            counts.zero_counts += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), "3");
    }

    #[test]
    fn test_example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), "6");
    }

    #[test]
    fn test_full_turns_pass_zero() {
        // 50 -> 1050 crosses zero ten times and lands on 50
        assert_eq!(part2("R1000").unwrap(), "10");
        assert_eq!(part1("R1000").unwrap(), "0");
    }

    #[test]
    fn test_invalid_direction() {
        let err = part1("L10\nX5\n").unwrap_err();
        match err {
            SolveError::InvalidInput(msg) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(part2("Rabc"), Err(SolveError::InvalidInput(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Landing on zero always counts as pointing at zero
        #[test]
        fn prop_pass_count_bounds_zero_count(
            rotations in prop::collection::vec((any::<bool>(), 1i32..500), 0..50)
        ) {
            let input: String = rotations
                .iter()
                .map(|(left, n)| format!("{}{}\n", if *left { 'L' } else { 'R' }, n))
                .collect();
            let zero: u32 = part1(&input).unwrap().parse().unwrap();
            let pass: u32 = part2(&input).unwrap().parse().unwrap();
            prop_assert!(pass >= zero);
        }

        /// Same input, same answer
        #[test]
        fn prop_solutions_are_pure(rotations in prop::collection::vec(-300i32..300, 0..30)) {
            let input: String = rotations
                .iter()
                .map(|n| if *n < 0 { format!("L{}\n", -n) } else { format!("R{}\n", n) })
                .collect();
            prop_assert_eq!(part1(&input).unwrap(), part1(&input).unwrap());
            prop_assert_eq!(part2(&input).unwrap(), part2(&input).unwrap());
        }
    }
}
