/// HTML page shell shared by every route
pub struct Page {
    pub title: String,
    pub body: String,
}

const STYLE: &str = r#"
    body { font-family: sans-serif; margin: 0; background: #f7f7f7; color: #222; }
    header { background: #155e63; color: #fff; padding: 12px 24px; }
    header a { color: #fff; margin-right: 16px; text-decoration: none; }
    main { max-width: 960px; margin: 24px auto; background: #fff; padding: 24px; }
    .error { color: #e60000; font-weight: bold; }
    table.summary { border-collapse: collapse; margin-top: 16px; }
    table.summary th, table.summary td { border: 1px solid #ccc; padding: 4px 10px; text-align: right; }
    #graph-box svg { max-width: 100%; height: auto; }
    label { display: block; margin-top: 12px; }
    footer { text-align: center; font-size: 12px; color: #777; margin: 24px; }
"#;

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Page {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Render the full document. The body is inserted as-is; callers escape their own input.
    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - FX Charts</title>
<style>{style}</style>
</head>
<body>
<header><a href="/">FX Charts</a><a href="/disclaimer">Disclaimer</a></header>
<main>
<h1>{title}</h1>
{body}
</main>
<footer>Rates are provided by a third-party service. <a href="/disclaimer">Disclaimer</a></footer>
</body>
</html>"#,
            title = escape_html(&self.title),
            style = STYLE,
            body = self.body,
        )
    }
}

/// Escape text for use inside HTML elements and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
