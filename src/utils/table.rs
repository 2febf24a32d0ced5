use super::page::escape_html;

/// A simple HTML table generator for result pages
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    class: Option<String>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            class: None,
        }
    }

    /// Set the CSS class of the `<table>` element
    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Add a row to the table; missing cells render empty, extra cells are dropped
    pub fn add_row(&mut self, row: Vec<String>) {
        let mut row = row;
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as escaped HTML
    pub fn render(&self) -> String {
        let mut output = match &self.class {
            Some(class) => format!("<table class=\"{}\">\n", escape_html(class)),
            None => String::from("<table>\n"),
        };

        output.push_str("<thead>");
        output.push_str(&Self::render_row("th", &self.headers));
        output.push_str("</thead>\n<tbody>\n");

        for row in &self.rows {
            output.push_str(&Self::render_row("td", row));
            output.push('\n');
        }

        output.push_str("</tbody>\n</table>");
        output
    }

    fn render_row(cell: &str, row: &[String]) -> String {
        let mut line = String::from("<tr>");
        for col in row {
            line.push_str(&format!("<{cell}>{}</{cell}>", escape_html(col), cell = cell));
        }
        line.push_str("</tr>");
        line
    }
}
