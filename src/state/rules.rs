use crate::dispatch::RulesTableSink;

/// One displayable line of the rules table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLine {
    pub text: String,
    /// Header cell (`<th>`)
    pub header: bool,
    /// Row flagged `table-primary` by the backend
    pub highlighted: bool,
}

/// Latest rules table, kept verbatim and as terminal lines
#[derive(Debug, Clone, Default)]
pub struct RulesPanel {
    html: String,
    lines: Vec<TableLine>,
}

impl RulesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The markup exactly as received
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn lines(&self) -> &[TableLine] {
        &self.lines
    }
}

impl RulesTableSink for RulesPanel {
    fn set_table_html(&mut self, html: &str) {
        self.html = html.to_string();
        self.lines = table_lines(html);
    }
}

/// Turn table markup into one line per row.
///
/// Markup without rows (e.g. a `<p>` notice) becomes a single plain line.
pub fn table_lines(html: &str) -> Vec<TableLine> {
    let mut chunks = html.split("<tr");
    let before_rows = chunks.next().unwrap_or_default();

    let mut lines: Vec<TableLine> = chunks
        .filter_map(|chunk| {
            let tag_end = chunk.find('>')?;
            let opening = &chunk[..tag_end];
            let body = &chunk[tag_end + 1..];
            let body = body.find("</tr>").map_or(body, |end| &body[..end]);

            let text = strip_tags(body);
            if text.is_empty() {
                return None;
            }
            Some(TableLine {
                text,
                header: body.contains("<th"),
                highlighted: opening.contains("table-primary"),
            })
        })
        .collect();

    if lines.is_empty() {
        let text = strip_tags(before_rows);
        if !text.is_empty() {
            lines.push(TableLine {
                text,
                header: false,
                highlighted: false,
            });
        }
    }

    lines
}

/// Drop tags, decode the common entities and collapse whitespace
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        <table class="table table-hover theme-table">
            <thead>
                <tr>
                    <th class="theme-table-header text-center">Winning Comps (2 player match)</th>
                </tr>
            </thead>
            <tbody>
                <tr class="table-primary">
                    <td class="text-start">Ana, Genji, Winston</td>
                </tr>
                <tr class="">
                    <td class="text-start">Mercy &amp; Ashe</td>
                </tr>
            </tbody>
        </table>
    "#;

    #[test]
    fn test_table_rows() {
        let lines = table_lines(TABLE);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "Winning Comps (2 player match)");
        assert!(lines[0].header);
        assert_eq!(lines[1].text, "Ana, Genji, Winston");
        assert!(lines[1].highlighted);
        assert_eq!(lines[2].text, "Mercy & Ashe");
        assert!(!lines[2].highlighted);
    }

    #[test]
    fn test_plain_notice() {
        let lines = table_lines("<p>No rules found for these statuses</p>");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "No rules found for these statuses");
    }

    #[test]
    fn test_empty_markup() {
        assert!(table_lines("").is_empty());
    }

    #[test]
    fn test_panel_keeps_html_verbatim() {
        let mut panel = RulesPanel::new();
        panel.set_table_html(TABLE);
        assert_eq!(panel.html(), TABLE);
        assert_eq!(panel.lines().len(), 3);
    }
}
