//! Fixed-width table rendering for diagnostics.

use pn_core::Value;

/// Total width of the separator rules.
pub const TABLE_WIDTH: usize = 78;
/// Width of the name column (values start one column after it).
pub const NAME_WIDTH: usize = 35;

const RULE_CHAR: char = '―';

/// Render `(name, value)` rows as a two-column table.
pub fn render_table<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let rule: String = std::iter::repeat_n(RULE_CHAR, TABLE_WIDTH).collect();
    let mut lines = vec![
        rule.clone(),
        format!("{:<width$} {}", "key", "value", width = NAME_WIDTH),
        rule.clone(),
    ];
    for (name, value) in rows {
        lines.push(format!("{:<width$} {}", name, value, width = NAME_WIDTH));
    }
    lines.push(rule);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        let prefix = Value::from("alg");
        let maxiter = Value::from(5000);
        let out = render_table([("prefix", &prefix), ("newton_maxiter", &maxiter)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].chars().count(), TABLE_WIDTH);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[5]);
        assert!(lines[1].starts_with("key "));
        assert_eq!(&lines[3][..NAME_WIDTH], format!("{:<35}", "prefix"));
        assert!(lines[3].ends_with(" alg"));
        assert!(lines[4].ends_with(" 5000"));
    }

    #[test]
    fn empty_table_has_header_only() {
        let out = render_table(std::iter::empty());
        assert_eq!(out.lines().count(), 4);
    }
}
