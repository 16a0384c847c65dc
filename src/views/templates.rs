use handlebars::Handlebars;
use std::sync::Arc;

use crate::views::skeleton;

pub type Hbs = Arc<Handlebars<'static>>;

// Compiled into the binary so the server does not depend on its working directory.
const TEMPLATES: &[(&str, &str)] = &[
    // Layout + pages
    ("layouts/base", include_str!("../../templates/layouts/base.hbs")),
    ("pages/dashboard", include_str!("../../templates/pages/dashboard.hbs")),
    ("pages/products", include_str!("../../templates/pages/products.hbs")),
    ("pages/product_detail", include_str!("../../templates/pages/product_detail.hbs")),
    ("pages/trending", include_str!("../../templates/pages/trending.hbs")),
    ("pages/analytics", include_str!("../../templates/pages/analytics.hbs")),
    ("pages/alerts", include_str!("../../templates/pages/alerts.hbs")),
    ("pages/not_found", include_str!("../../templates/pages/not_found.hbs")),
    // Partial endpoints
    ("partials/navbar", include_str!("../../templates/partials/navbar.hbs")),
    ("partials/dashboard_summary", include_str!("../../templates/partials/dashboard_summary.hbs")),
    ("partials/products_list", include_str!("../../templates/partials/products_list.hbs")),
    ("partials/trending_list", include_str!("../../templates/partials/trending_list.hbs")),
    ("partials/analytics_stats", include_str!("../../templates/partials/analytics_stats.hbs")),
    ("partials/alerts_list", include_str!("../../templates/partials/alerts_list.hbs")),
    ("partials/detail_product", include_str!("../../templates/partials/detail_product.hbs")),
    ("partials/detail_history", include_str!("../../templates/partials/detail_history.hbs")),
    ("partials/detail_trend", include_str!("../../templates/partials/detail_trend.hbs")),
    ("partials/view_error", include_str!("../../templates/partials/view_error.hbs")),
    ("partials/api_health", include_str!("../../templates/partials/api_health.hbs")),
    // Loading placeholders
    ("partials/skeleton_card", include_str!("../../templates/partials/skeleton_card.hbs")),
    ("partials/skeleton_list", include_str!("../../templates/partials/skeleton_list.hbs")),
    ("partials/skeleton_detail", include_str!("../../templates/partials/skeleton_detail.hbs")),
];

pub const APP_CSS: &str = include_str!("../../static/app.css");

pub fn build_handlebars() -> Result<Hbs, handlebars::TemplateError> {
    let mut hb = Handlebars::new();

    for (name, src) in TEMPLATES {
        hb.register_template_string(name, src)?;
    }

    hb.register_partial("navbar", include_str!("../../templates/partials/navbar.hbs"))?;
    hb.register_partial("view_error", include_str!("../../templates/partials/view_error.hbs"))?;
    hb.register_partial("footer", include_str!("../../templates/partials/footer.hbs"))?;

    hb.register_helper("skeleton", Box::new(skeleton::skeleton_helper));

    Ok(Arc::new(hb))
}
