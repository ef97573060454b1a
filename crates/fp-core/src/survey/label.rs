//! Room labels: `(name)` written inside a row of the plan

/// A parenthesised label found on a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Column of the opening parenthesis
    pub start: usize,
    /// Column one past the closing parenthesis
    pub end: usize,
    /// Text between the parentheses
    pub name: String,
}

impl Label {
    pub fn spans(&self, col: usize) -> bool {
        self.start <= col && col < self.end
    }
}

/// All labels on a row, left to right, without overlap.
///
/// A label opens at `(` and closes at the next `)`; the text between must
/// not be empty. An unmatched `(` or an empty `()` is skipped one column
/// at a time, so `((a)` yields the single label `(a`.
pub fn labels_in_row(row: &[char]) -> Vec<Label> {
    let mut labels = Vec::new();
    let mut pos = 0;

    while pos < row.len() {
        if row[pos] != '(' {
            pos += 1;
            continue;
        }
        let Some(offset) = row[pos + 1..].iter().position(|&c| c == ')') else {
            // nothing closes after this point
            break;
        };
        let close = pos + 1 + offset;
        if close == pos + 1 {
            pos += 1;
            continue;
        }
        labels.push(Label {
            start: pos,
            end: close + 1,
            name: row[pos + 1..close].iter().collect(),
        });
        pos = close + 1;
    }

    labels
}

/// Name of the first label on `row` whose span covers `col`
pub fn room_name_at(row: &[char], col: usize) -> Option<String> {
    labels_in_row(row)
        .into_iter()
        .find(|label| label.spans(col))
        .map(|label| label.name)
}
