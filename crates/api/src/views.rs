//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary and registered with Tera once at
//! startup.

use axum::response::Html;
use tera::{Context, Tera};

use crate::error::AppResult;

pub const INDEX: &str = "index.html";
pub const ITEMS: &str = "items.html";
pub const VIEWER: &str = "viewer.html";

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("macros.html", include_str!("../templates/macros.html")),
    (INDEX, include_str!("../templates/index.html")),
    (ITEMS, include_str!("../templates/items.html")),
    (VIEWER, include_str!("../templates/viewer.html")),
];

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> AppResult<Html<String>> {
        Ok(Html(self.tera.render(name, context)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        let views = Views::new().unwrap();
        let html = views.render(VIEWER, &Context::new()).unwrap();
        assert!(html.0.contains("viewerContainer"));
    }

    #[test]
    fn item_names_are_escaped() {
        let views = Views::new().unwrap();
        let mut context = Context::new();
        context.insert(
            "items",
            &serde_json::json!([{
                "id": 1,
                "name": "<b>bold</b>",
                "image_url": "/static/images/question.png",
                "property": "{}"
            }]),
        );
        let html = views.render(ITEMS, &context).unwrap().0;
        assert!(html.contains("&lt;b&gt;bold&lt;&#x2F;b&gt;"));
    }
}
