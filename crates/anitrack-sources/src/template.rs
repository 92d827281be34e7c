//! URL template rendering.

use url::form_urlencoded;

/// Values substituted into a URL template.
#[derive(Debug, Clone, Default)]
pub struct TemplateParams<'a> {
    pub query: Option<&'a str>,
    pub page: Option<u32>,
    pub id: Option<&'a str>,
    pub kind: Option<u32>,
}

impl<'a> TemplateParams<'a> {
    pub fn search(query: &'a str, page: u32) -> Self {
        Self {
            query: Some(query),
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn recent(page: u32, kind: u32) -> Self {
        Self {
            page: Some(page),
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn id(id: &'a str) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    fn value_of(&self, name: &str) -> Option<String> {
        match name {
            "query" => self.query.map(encode),
            "id" => self.id.map(encode),
            "page" => self.page.map(|p| p.to_string()),
            "kind" => self.kind.map(|k| k.to_string()),
            _ => None,
        }
    }
}

/// Percent-encode a value for use anywhere in a URL.
fn encode(value: &str) -> String {
    // form encoding turns spaces into '+', which is wrong inside a path;
    // a literal '+' has already become "%2B" at this point.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Substitute `{base}` and the params into `template`.
///
/// `{base}` is inserted verbatim, other values are percent-encoded.
/// Placeholders without a value are left as they are.
pub fn render(template: &str, base: &str, params: &TemplateParams<'_>) -> String {
    let mut out = String::with_capacity(template.len() + base.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        let value = if name == "base" {
            Some(base.trim_end_matches('/').to_string())
        } else {
            params.value_of(name)
        };

        match value {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
