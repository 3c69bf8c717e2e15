//! Cell-level defense against spreadsheet formula injection.
//!
//! The store is meant to be opened in spreadsheet software, where a cell
//! starting with `=`, `+`, `-` or `@` is evaluated as a formula. Those cells
//! get a leading apostrophe before they ever reach disk.
//!
//! This is a line-by-line, cell-by-cell text transform, not a CSV parser:
//! quoted cells containing embedded commas are split like any other text.
//! That limitation is part of the store format contract, not something to
//! fix here.

/// Characters that make spreadsheet software treat a cell as a formula.
const FORMULA_TRIGGERS: [char; 4] = ['=', '+', '-', '@'];

/// Neutralize formula-injection triggers in a whole store payload.
///
/// A cell whose *trimmed* content starts with a trigger character is
/// replaced by the *original, untrimmed* cell prefixed with a literal
/// apostrophe. Blank lines pass through unchanged.
///
/// The transform is total and idempotent: an apostrophe is not itself a
/// trigger, so sanitizing an already-sanitized payload is a no-op.
pub fn sanitize_blob(blob: &str) -> String {
    blob.split('\n')
        .map(sanitize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn sanitize_line(line: &str) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }
    line.split(',')
        .map(sanitize_cell)
        .collect::<Vec<_>>()
        .join(",")
}

fn sanitize_cell(cell: &str) -> String {
    let triggered = cell
        .trim()
        .chars()
        .next()
        .map_or(false, |c| FORMULA_TRIGGERS.contains(&c));
    if triggered {
        format!("'{}", cell)
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutralizes_formula_cell() {
        let blob = "id,date,content,category,tags\n1,d,=SUM(A1),c,t\n";
        let sanitized = sanitize_blob(blob);
        assert_eq!(sanitized, "id,date,content,category,tags\n1,d,'=SUM(A1),c,t\n");
    }

    #[test]
    fn covers_all_trigger_characters() {
        let blob = "=a,+b,-c,@d";
        assert_eq!(sanitize_blob(blob), "'=a,'+b,'-c,'@d");
    }

    #[test]
    fn preserves_leading_whitespace_in_triggered_cell() {
        // The trigger check trims, the rewrite does not.
        assert_eq!(sanitize_blob("1,  =cmd,x"), "1,'  =cmd,x");
    }

    #[test]
    fn leaves_benign_payload_alone() {
        let blob = "id,date,content,category,tags\n1,2024-01-01,hello,misc,\n";
        assert_eq!(sanitize_blob(blob), blob);
    }

    #[test]
    fn blank_lines_pass_through() {
        let blob = "a,b\n\n  \nc,d";
        assert_eq!(sanitize_blob(blob), blob);
    }

    #[test]
    fn is_idempotent() {
        let blobs = [
            "id,date,content,category,tags\n1,d,=SUM(A1),c,t\n",
            "=x,+y\n-z,@w\n\n",
            "plain,text,only\n",
        ];
        for blob in blobs {
            let once = sanitize_blob(blob);
            assert_eq!(sanitize_blob(&once), once);
        }
    }

    #[test]
    fn negative_numbers_are_escaped_too() {
        // A minus sign is a trigger; the transform does not try to tell
        // numbers from formulas.
        assert_eq!(sanitize_blob("1,d,-5,c,t"), "1,d,'-5,c,t");
    }
}
