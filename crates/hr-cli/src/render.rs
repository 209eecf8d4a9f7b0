//! Text presentation of test results.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hr_mechanics::{CheckResult, OpposedResult, RollResult, TestContext};

/// Result of a simple test.
pub fn check(result: &CheckResult, verbose: bool) -> String {
    let mut lines = Vec::new();
    if verbose {
        lines.extend(context_lines(&result.context));
        lines.push(dice_line("DICE ROLLS", &result.roll));
    }
    lines.extend(verdict(result.hits() as i32, &result.roll));
    lines.join("\n")
}

/// Result of an opposed test. Hits are reported net of the opposition.
pub fn opposed(result: &OpposedResult, verbose: bool) -> String {
    let mut lines = Vec::new();
    if verbose {
        lines.extend(context_lines(&result.attacker.context));
        lines.push(dice_line("DICE ROLLS", &result.attacker.roll));
        lines.push(dice_line("OPPOSED ROLLS", &result.defender));
        lines.push(format!("OPPOSED NET HITS: {}", result.defender.hits()));
    }
    lines.extend(verdict(result.net_hits(), &result.attacker.roll));
    lines.join("\n")
}

/// Header for one round of an extended test.
pub fn extended_header(round: u32, result: &CheckResult) -> String {
    format!("{round}# EXTENDED ROLL ({})", result.pool_size())
}

/// A raw notation roll.
pub fn roll(result: &RollResult, verbose: bool) -> String {
    let mut lines = vec![format!("SPEC: {}", result.spec())];
    if verbose {
        lines.push(dice_line("DICE ROLLS", result));
    }
    lines.extend(verdict(result.hits() as i32, result));
    lines.join("\n")
}

fn context_lines(context: &TestContext) -> Vec<String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Value"]);
    for (name, value) in &context.attribute_contributions {
        table.add_row(vec![name.clone(), value.to_string()]);
    }

    let mut lines = vec![format!("Character: {}", context.subject_id), table.to_string()];
    if context.modifier_total != 0 {
        lines.push(format!("Total modifiers: {}", context.modifier_total));
    }
    lines
}

/// `LABEL (pool): 5, 3, +6` with explosion dice marked `+`.
fn dice_line(label: &str, roll: &RollResult) -> String {
    let values: Vec<String> = roll
        .dice()
        .iter()
        .map(|d| {
            if d.exploded {
                format!("+{}", d.value)
            } else {
                d.value.to_string()
            }
        })
        .collect();
    format!("{label} ({}): {}", roll.spec().pool_size(), values.join(", "))
}

fn verdict(net_hits: i32, roll: &RollResult) -> Vec<String> {
    let mut lines = vec![if net_hits > 0 {
        format!("NET HITS: {net_hits}")
    } else {
        "FAIL!".to_string()
    }];
    if roll.critical_glitch() {
        lines.push("*** CRITICAL GLITCH! ***".white().on_red().to_string());
    } else if roll.glitch() {
        lines.push("*** GLITCH ***".red().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_mechanics::RollSpec;

    fn plain_colors() {
        colored::control::set_override(false);
    }

    fn check_result(notation: &str, values: &[u32], modifier_total: i32) -> CheckResult {
        CheckResult {
            context: TestContext {
                subject_id: "cha1".to_string(),
                attribute_contributions: vec![("strength".to_string(), 4)],
                modifier_total,
                edge_active: false,
            },
            roll: RollResult::from_values(RollSpec::parse(notation).unwrap(), values).unwrap(),
        }
    }

    #[test]
    fn hits() {
        plain_colors();
        let result = check_result("4d6>=5", &[5, 6, 2, 3], 0);
        insta::assert_snapshot!(check(&result, false), @"NET HITS: 2");
    }

    #[test]
    fn fail() {
        plain_colors();
        let result = check_result("3d6>=5", &[2, 3, 4], 0);
        insta::assert_snapshot!(check(&result, false), @"FAIL!");
    }

    #[test]
    fn glitch() {
        plain_colors();
        let result = check_result("4d6>=5", &[1, 1, 6, 2], 0);
        insta::assert_snapshot!(check(&result, false), @r"
        NET HITS: 1
        *** GLITCH ***
        ");
    }

    #[test]
    fn critical_glitch() {
        plain_colors();
        let result = check_result("3d6>=5", &[1, 1, 4], 0);
        insta::assert_snapshot!(check(&result, false), @r"
        FAIL!
        *** CRITICAL GLITCH! ***
        ");
    }

    #[test]
    fn verbose_shows_context_and_dice() {
        plain_colors();
        let result = check_result("3d6!>=5", &[6, 2, 3, 5], -1);
        let text = check(&result, true);
        assert!(text.starts_with("Character: cha1"));
        assert!(text.contains("strength"));
        assert!(text.contains("Total modifiers: -1"));
        assert!(text.contains("DICE ROLLS (3): 6, 2, 3, +5"));
        assert!(text.ends_with("NET HITS: 2"));
    }

    #[test]
    fn verbose_hides_zero_modifier() {
        plain_colors();
        let result = check_result("4d6>=5", &[5, 6, 2, 3], 0);
        assert!(!check(&result, true).contains("Total modifiers"));
    }

    #[test]
    fn opposed_reports_net_hits() {
        plain_colors();
        let defender =
            RollResult::from_values(RollSpec::parse("5d6>=5").unwrap(), &[5, 5, 5, 2, 2]).unwrap();
        let won = OpposedResult::new(check_result("4d6>=5", &[5, 6, 6, 6], 0), defender.clone());
        insta::assert_snapshot!(opposed(&won, false), @"NET HITS: 1");

        let lost = OpposedResult::new(check_result("2d6>=5", &[5, 5], -2), defender);
        insta::assert_snapshot!(opposed(&lost, false), @"FAIL!");
        let text = opposed(&lost, true);
        assert!(text.contains("OPPOSED ROLLS (5): 5, 5, 5, 2, 2"));
        assert!(text.contains("OPPOSED NET HITS: 3"));
    }

    #[test]
    fn extended_header_shows_pool() {
        let result = check_result("3d6>=5", &[1, 2, 3], 0);
        assert_eq!(extended_header(2, &result), "2# EXTENDED ROLL (3)");
    }

    #[test]
    fn raw_roll() {
        plain_colors();
        let result = RollResult::from_values(RollSpec::parse("2d6>4").unwrap(), &[5, 6]).unwrap();
        insta::assert_snapshot!(roll(&result, true), @r"
        SPEC: 2d6>4
        DICE ROLLS (2): 5, 6
        NET HITS: 2
        ");
    }
}
