//! Output formatting for solver results

use crate::runner::ExecutionResult;
use itertools::Itertools;
use std::time::Duration;

/// Printed instead of a table when nothing ran
pub const NOTHING_RAN: &str = "No solutions were run. Check your input files or filters.";

const HEADERS: [&str; 5] = ["Year", "Day", "Part", "Answer", "Time (ms)"];
const MIN_WIDTHS: [usize; 5] = [5, 4, 4, 16, 13];
const ANSWER_COLUMN: usize = 3;

/// Render results as a bordered table with a total-time footer
///
/// Times are shown in milliseconds at microsecond resolution, and the footer
/// is the exact sum of the row values as displayed.
pub fn render_table(results: &[ExecutionResult]) -> String {
    if results.is_empty() {
        return format!("{}\n", NOTHING_RAN);
    }

    let mut widths = MIN_WIDTHS;
    widths[ANSWER_COLUMN] = results
        .iter()
        .map(|r| r.answer.chars().count())
        .fold(widths[ANSWER_COLUMN], usize::max);

    let border = format!(
        "+{}+",
        widths.iter().map(|w| "=".repeat(w + 2)).join("+")
    );
    let row = |cells: [String; 5], align_center: bool| {
        let cells = cells.iter().zip(widths).map(|(cell, w)| {
            if align_center {
                format!(" {:^w$} ", cell)
            } else {
                format!(" {:>w$} ", cell)
            }
        });
        format!("|{}|", cells.format("|"))
    };

    let mut lines = vec![
        border.clone(),
        row(HEADERS.map(String::from), true),
        border.clone(),
    ];
    lines.extend(results.iter().map(|r| {
        row(
            [
                r.year.to_string(),
                r.day.to_string(),
                r.part.to_string(),
                r.answer.clone(),
                format_ms(r.elapsed.as_micros()),
            ],
            false,
        )
    }));
    lines.push(border.clone());

    let total_micros: u128 = results.iter().map(|r| r.elapsed.as_micros()).sum();
    let inner = border.chars().count() - 2;
    let footer = format!(" Total time: {:>13} ms", format_ms(total_micros));
    lines.push(format!("|{:<inner$}|", footer));
    lines.push(border);

    lines.iter().map(|l| format!("{l}\n")).collect()
}

/// Render answers only, one per line
pub fn render_answers(results: &[ExecutionResult]) -> String {
    results.iter().map(|r| format!("{}\n", r.answer)).collect()
}

/// Milliseconds with exactly three decimals, from whole microseconds
fn format_ms(micros: u128) -> String {
    format!("{}.{:03}", micros / 1000, micros % 1000)
}

/// Sum of elapsed times, truncated to the microseconds the table displays
pub fn total_elapsed(results: &[ExecutionResult]) -> Duration {
    results
        .iter()
        .map(|r| Duration::from_micros(r.elapsed.as_micros() as u64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(day: u8, part: u8, answer: &str, micros: u64) -> ExecutionResult {
        ExecutionResult {
            year: 2025,
            day,
            part,
            answer: answer.to_string(),
            elapsed: Duration::from_micros(micros),
        }
    }

    #[test]
    fn test_empty_results_notice() {
        assert_eq!(render_table(&[]), format!("{}\n", NOTHING_RAN));
    }

    #[test]
    fn test_table_layout() {
        let results = [
            result(1, 1, "1023", 1_234),
            result(1, 2, "5899", 56),
        ];
        let expected = "\
+=======+======+======+==================+===============+
| Year  | Day  | Part |      Answer      |   Time (ms)   |
+=======+======+======+==================+===============+
|  2025 |    1 |    1 |             1023 |         1.234 |
|  2025 |    1 |    2 |             5899 |         0.056 |
+=======+======+======+==================+===============+
| Total time:         1.290 ms                           |
+=======+======+======+==================+===============+
";
        assert_eq!(render_table(&results), expected);
    }

    #[test]
    fn test_long_answer_widens_column() {
        let answer = "x".repeat(30);
        let table = render_table(&[result(2, 1, &answer, 10)]);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();

        assert!(widths.iter().all(|&w| w == widths[0]), "{table}");
        assert!(table.contains(&answer));
    }

    #[test]
    fn test_sub_microsecond_times_show_zero() {
        let mut r = result(1, 1, "0", 0);
        r.elapsed = Duration::from_nanos(999);
        let table = render_table(&[r]);
        assert!(table.contains("|         0.000 |"), "{table}");
        assert!(table.contains("Total time:         0.000 ms"), "{table}");
    }

    #[test]
    fn test_render_answers() {
        let results = [result(1, 1, "12", 1), result(1, 2, "34", 1)];
        assert_eq!(render_answers(&results), "12\n34\n");
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0), "0.000");
        assert_eq!(format_ms(7), "0.007");
        assert_eq!(format_ms(12_345_678), "12345.678");
    }

    /// Pull the time column and the footer total back out of a rendered table
    fn parse_times(table: &str) -> (Vec<u128>, u128) {
        let to_micros = |s: &str| -> u128 {
            let (ms, frac) = s.trim().split_once('.').unwrap();
            ms.parse::<u128>().unwrap() * 1000 + frac.parse::<u128>().unwrap()
        };
        let lines: Vec<&str> = table.lines().collect();
        let rows = lines[3..lines.len() - 3]
            .iter()
            .map(|l| to_micros(l.trim_end_matches('|').rsplit('|').next().unwrap()))
            .collect();
        let total = lines[lines.len() - 2]
            .trim_start_matches("| Total time:")
            .split(" ms")
            .next()
            .unwrap();
        (rows, to_micros(total))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// The printed total equals the sum of the printed row times
        #[test]
        fn prop_total_is_sum_of_rows(
            rows in prop::collection::vec(("[0-9]{1,20}", 0u64..10_000_000_000, 0u32..1000), 1..20)
        ) {
            let results: Vec<ExecutionResult> = rows
                .iter()
                .enumerate()
                .map(|(i, (answer, micros, nanos))| ExecutionResult {
                    year: 2025,
                    day: (i % 25) as u8 + 1,
                    part: (i % 2) as u8 + 1,
                    answer: answer.clone(),
                    elapsed: Duration::from_micros(*micros) + Duration::from_nanos(*nanos as u64),
                })
                .collect();

            let (row_times, total) = parse_times(&render_table(&results));
            prop_assert_eq!(row_times.len(), results.len());
            prop_assert_eq!(row_times.iter().sum::<u128>(), total);
            prop_assert_eq!(total, total_elapsed(&results).as_micros());
        }
    }
}
