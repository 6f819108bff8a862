//! Sheet of the QA report.

use super::workbook::{Cell, Sheet};
use crate::issues::{QaIssue, Report};

pub const QA_SHEET: &str = "QA Report";

/// One row per issue, in the order given.
pub fn qa_sheet(issues: &[QaIssue]) -> Sheet {
    let mut sheet = Sheet::new(QA_SHEET, &["Key", "Issue", "Severity", "Source", "Target"]);
    for issue in issues {
        let context = issue.context();
        sheet.push_row(vec![
            Cell::text(&context.key),
            Cell::text(issue.rule().title()),
            Cell::text(issue.severity().label()),
            Cell::text(&context.source_text),
            Cell::text(&context.target_text),
        ]);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        core::KeyedStrings,
        export::qa::*,
        rules::diff,
    };

    #[test]
    fn test_qa_sheet_rows() {
        let source: KeyedStrings = [("greeting", "Hello {name}"), ("bold", "<b>Hi</b>")]
            .into_iter()
            .collect();
        let target: KeyedStrings = [("greeting", "안녕"), ("bold", "<i>안녕</i>")]
            .into_iter()
            .collect();
        let sheet = qa_sheet(&diff(&source, &target));

        assert_eq!(sheet.name, "QA Report");
        assert_eq!(
            sheet.rows,
            vec![
                vec![
                    Cell::text("greeting"),
                    Cell::text("Placeholder Missing"),
                    Cell::text("High"),
                    Cell::text("Hello {name}"),
                    Cell::text("안녕"),
                ],
                vec![
                    Cell::text("bold"),
                    Cell::text("HTML Tag Corruption"),
                    Cell::text("Critical"),
                    Cell::text("<b>Hi</b>"),
                    Cell::text("<i>안녕</i>"),
                ],
            ]
        );
    }
}
