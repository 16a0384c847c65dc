use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::json;

/// Loading placeholder shapes shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkeletonKind {
    #[default]
    Card,
    List,
    Detail,
}

impl SkeletonKind {
    /// Lenient: anything unrecognized renders as a card.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "list" => SkeletonKind::List,
            "detail" => SkeletonKind::Detail,
            _ => SkeletonKind::Card,
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            SkeletonKind::Card => "partials/skeleton_card",
            SkeletonKind::List => "partials/skeleton_list",
            SkeletonKind::Detail => "partials/skeleton_detail",
        }
    }
}

pub fn render(hbs: &Handlebars<'_>, kind: SkeletonKind) -> String {
    hbs.render(kind.template(), &json!({ "rows": [1, 2, 3, 4, 5] }))
        .unwrap_or_else(|e| format!("template error: {e}"))
}

/// `{{skeleton "list"}}`: inline a loading placeholder from a template.
pub fn skeleton_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let kind = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .map(SkeletonKind::parse)
        .unwrap_or_default();
    out.write(&render(r, kind))?;
    Ok(())
}
